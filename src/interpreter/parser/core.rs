use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::SyntaxError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_comparison, utils::expect_token},
    },
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, the ternary conditional, and
/// recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := ternary`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// The parsed expression node.
///
/// # Example
/// ```
/// use recur::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{lexer::tokenize, parser::core::parse_expression},
/// };
///
/// let tokens = tokenize("1 + 2 * 3").unwrap();
/// let expr = parse_expression(&mut tokens.iter().peekable()).unwrap();
///
/// assert_eq!(expr,
///            Expr::binary(Expr::Number { value: 1 },
///                         BinaryOperator::Add,
///                         Expr::binary(Expr::Number { value: 2 },
///                                      BinaryOperator::Mul,
///                                      Expr::Number { value: 3 })));
/// ```
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_ternary(tokens)
}

/// Parses an `if ... then ... else ...` expression, or falls through to a
/// comparison.
///
/// Syntax:
/// ```text
///     if <comparison> then <comparison> else <comparison>
/// ```
/// All three parts are parsed at comparison precedence, so a ternary nested
/// inside another needs explicit parentheses.
///
/// # Parameters
/// - `tokens`: Token stream positioned at a possible `if` keyword.
///
/// # Returns
/// An `Expr::Ternary` node, or whatever the comparison level produced.
///
/// # Errors
/// - `UnexpectedToken` if `then` or `else` is missing.
/// - Propagates any errors from sub-expression parsing.
pub fn parse_ternary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    if let Some(Token::If) = tokens.peek() {
        tokens.next();

        let condition = parse_comparison(tokens)?;
        expect_token(tokens, &Token::Then, "'then' after condition")?;
        let then_branch = parse_comparison(tokens)?;
        expect_token(tokens, &Token::Else, "'else' after then expression")?;
        let else_branch = parse_comparison(tokens)?;

        return Ok(Expr::Ternary { condition:   Box::new(condition),
                                  then_branch: Box::new(then_branch),
                                  else_branch: Box::new(else_branch), });
    }

    parse_comparison(tokens)
}
