use std::iter::Peekable;

use crate::{
    ast::{Expr, FunctionDef, Program, Statement},
    error::SyntaxError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect_token, parse_comma_separated, parse_identifier, skip_newlines},
        },
    },
};

/// Tokenizes and parses a complete source text.
///
/// # Errors
/// Returns the first lexing or parsing error encountered.
///
/// # Example
/// ```
/// use recur::interpreter::parser::program::parse_source;
///
/// let program = parse_source("def twice(x)\n    return x * 2\n").unwrap();
///
/// assert_eq!(program.functions.len(), 1);
/// assert_eq!(program.functions[0].params, vec!["x".to_string()]);
/// ```
pub fn parse_source(source: &str) -> ParseResult<Program> {
    let tokens = tokenize(source)?;
    parse_program(&mut tokens.iter().peekable())
}

/// Parses a whole program: a sequence of top-level function definitions.
///
/// Blank lines between definitions are skipped. Anything else at the top
/// level is an error.
///
/// Grammar: `program := (newline | function_definition)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of the source.
///
/// # Returns
/// The parsed [`Program`].
///
/// # Errors
/// Returns a `SyntaxError` for the first construct that does not conform to
/// the grammar.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Program>
    where I: Iterator<Item = &'a Token>
{
    let mut functions = Vec::new();

    loop {
        skip_newlines(tokens);

        match tokens.peek() {
            None => break,
            Some(Token::Def) => functions.push(parse_function_definition(tokens)?),
            Some(tok) => {
                return Err(SyntaxError::UnexpectedToken { expected:
                                                              "function definition or newline",
                                                          found:    tok.to_string(), });
            },
        }
    }

    Ok(Program { functions })
}

/// Parses a function definition.
///
/// Syntax:
/// ```text
///     def <name>(<param>, ...)
///         <name> = <expression>
///         def <nested>(...) ...
///         return <expression>
/// ```
/// The header must end with a newline. The body holds any number of
/// assignments and nested definitions, with blank lines allowed between
/// them, and must finish with exactly one `return`.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `def` keyword.
///
/// # Returns
/// The parsed [`FunctionDef`].
///
/// # Errors
/// - `UnexpectedToken` / `UnexpectedEndOfInput` for a malformed header or
///   statement.
/// - `MissingReturn` if the input ends before a `return` is found.
pub fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<FunctionDef>
    where I: Iterator<Item = &'a Token>
{
    expect_token(tokens, &Token::Def, "'def'")?;
    let name = parse_identifier(tokens, "function name after 'def'")?;
    expect_token(tokens, &Token::LParen, "'(' after function name")?;
    let params = parse_comma_separated(tokens,
                                       |tokens| parse_identifier(tokens, "parameter name"),
                                       &Token::RParen,
                                       "')' after parameters")?;
    expect_token(tokens, &Token::NewLine, "newline after function declaration")?;

    let mut body = Vec::new();
    loop {
        skip_newlines(tokens);

        match tokens.peek() {
            None => return Err(SyntaxError::MissingReturn { function: name }),
            Some(Token::Def) => {
                body.push(Statement::Function(parse_function_definition(tokens)?));
            },
            Some(Token::Return) => {
                let return_expr = parse_return(tokens)?;
                return Ok(FunctionDef { name,
                                        params,
                                        body,
                                        return_expr });
            },
            Some(_) => body.push(parse_assignment(tokens)?),
        }
    }
}

/// Parses an assignment statement of the form `<name> = <expression>`.
///
/// The statement must be terminated by a newline; end of input is not enough
/// because a `return` still has to follow.
///
/// # Errors
/// Returns a `SyntaxError` if the statement does not start with a name, the
/// `=` is missing, the expression is malformed or the newline is missing.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let name = parse_identifier(tokens, "statement")?;
    expect_token(tokens, &Token::Equals, "'=' after variable name")?;
    let value = parse_expression(tokens)?;
    expect_token(tokens, &Token::NewLine, "newline after statement")?;

    Ok(Statement::Assignment { name, value })
}

/// Parses the closing `return <expression>` of a function body.
///
/// The expression must be followed by a newline, which is consumed, or by
/// the end of input.
fn parse_return<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    expect_token(tokens, &Token::Return, "'return'")?;
    let expr = parse_expression(tokens)?;

    match tokens.next() {
        None | Some(Token::NewLine) => Ok(expr),
        Some(tok) => Err(SyntaxError::UnexpectedToken { expected: "newline after return statement",
                                                        found:    tok.to_string(), }),
    }
}
