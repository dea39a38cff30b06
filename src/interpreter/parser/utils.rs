use std::iter::Peekable;

use crate::{
    error::SyntaxError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Consumes the next token, requiring it to equal `expected_token`.
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `expected_token`: The token the grammar requires here.
/// - `expected`: Description used in the error message.
///
/// # Errors
/// `UnexpectedToken` when a different token is found, or
/// `UnexpectedEndOfInput` when the stream is exhausted.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                                                          expected_token: &Token,
                                                          expected: &'static str)
                                                          -> ParseResult<()>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(tok) if tok == expected_token => Ok(()),
        Some(tok) => Err(SyntaxError::UnexpectedToken { expected,
                                                        found: tok.to_string() }),
        None => Err(SyntaxError::UnexpectedEndOfInput { expected }),
    }
}

/// Skips any number of blank lines.
pub(in crate::interpreter::parser) fn skip_newlines<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a Token>
{
    while let Some(Token::NewLine) = tokens.peek() {
        tokens.next();
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by parameter lists and call argument lists. It
/// repeatedly calls `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list. A comma
/// directly before the closing token is not accepted.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list.
/// - `expected`: Description of the closing token for error messages.
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `SyntaxError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token,
    expected: &'static str)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a Token>
{
    let mut items = Vec::new();
    if let Some(tok) = tokens.peek()
       && *tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some(Token::Comma) => {},
            Some(tok) if tok == closing => break,
            Some(tok) => {
                return Err(SyntaxError::UnexpectedToken { expected,
                                                          found: tok.to_string() });
            },
            None => return Err(SyntaxError::UnexpectedEndOfInput { expected }),
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// The next token must be `Token::Symbol`. Keywords are separate tokens, so
/// they can never be returned here.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
/// - `expected`: Description used in the error message.
///
/// # Errors
/// Returns a `SyntaxError` if the next token is not an identifier or the
/// input ends.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>,
                                                              expected: &'static str)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(Token::Symbol(name)) => Ok(name.clone()),
        Some(tok) => Err(SyntaxError::UnexpectedToken { expected,
                                                        found: tok.to_string() }),
        None => Err(SyntaxError::UnexpectedEndOfInput { expected }),
    }
}
