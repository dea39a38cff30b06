use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::SyntaxError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect_token, parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - integer literals
/// - identifiers
/// - function calls
/// - parenthesized expressions
///
/// It dispatches to specialized parsing functions depending on the leading
/// token.
///
/// Grammar:
/// ```text
///     primary := CONSTANT
///              | identifier_or_call
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `SyntaxError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let peeked = tokens.peek()
                       .ok_or(SyntaxError::UnexpectedEndOfInput { expected: "expression" })?;

    match peeked {
        Token::Constant(value) => {
            let value = *value;
            tokens.next();
            Ok(Expr::Number { value })
        },
        Token::Symbol(_) => parse_identifier_or_call(tokens),
        Token::LParen => parse_grouping(tokens),
        tok => Err(SyntaxError::UnexpectedToken { expected: "expression",
                                                  found:    tok.to_string(), }),
    }
}

/// Parses either a plain identifier or a function call.
///
/// A name immediately followed by `(` starts a call whose arguments are full
/// expressions separated by commas. Any other following token leaves the name
/// as an `Expr::Identifier`.
///
/// Grammar: `identifier_or_call := name ("(" (expression ("," expression)*)? ")")?`
///
/// # Errors
/// Returns a `SyntaxError` if an argument fails to parse or the closing `)`
/// is missing.
fn parse_identifier_or_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let name = parse_identifier(tokens, "identifier")?;

    if let Some(Token::LParen) = tokens.peek() {
        tokens.next();
        let arguments = parse_comma_separated(tokens,
                                              parse_expression,
                                              &Token::RParen,
                                              "')' after function arguments")?;
        return Ok(Expr::Call { callee: name,
                               arguments });
    }

    Ok(Expr::Identifier { name })
}

/// Parses a parenthesized expression.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// Grouping produces no node of its own; it only overrides precedence.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    expect_token(tokens, &Token::LParen, "'('")?;
    let expr = parse_expression(tokens)?;
    expect_token(tokens, &Token::RParen, "')' after expression")?;

    Ok(expr)
}
