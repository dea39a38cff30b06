use std::fmt;

use logos::Logos;

use crate::error::SyntaxError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Integer literal tokens, such as `42`. Literals are never signed.
    #[regex(r"[0-9]+", parse_constant)]
    Constant(i64),
    /// `def`
    #[token("def")]
    Def,
    /// `return`
    #[token("return")]
    Return,
    /// `if`
    #[token("if")]
    If,
    /// `then`
    #[token("then")]
    Then,
    /// `else`
    #[token("else")]
    Else,
    /// Identifier tokens; variable or function names such as `n` or `fact`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Symbol(String),
    /// `# Comments.`
    #[regex(r"#[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `=`
    #[token("=")]
    Equals,
    /// Line breaks terminate statements.
    #[token("\n")]
    NewLine,
    /// Every other kind of whitespace.
    #[regex(r"[ \t\r\f\x0B]+", logos::skip)]
    Ignored,
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the digits do not fit into an `i64`.
fn parse_constant(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Converts source text into the complete sequence of tokens.
///
/// The end of input is not represented by a token: the parser treats the
/// exhausted sequence as the terminator.
///
/// # Errors
/// - `ExpectedEqualsAfterBang` for a `!` not followed by `=`.
/// - `InvalidNumber` for a literal that overflows `i64`.
/// - `UnknownCharacter` for any character that starts no token.
///
/// # Example
/// ```
/// use recur::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("return n < 1 # base case\n").unwrap();
///
/// assert_eq!(tokens,
///            vec![Token::Return,
///                 Token::Symbol("n".to_string()),
///                 Token::Less,
///                 Token::Constant(1),
///                 Token::NewLine]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, SyntaxError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push(tok),
            Err(()) => return Err(classify_error(lexer.slice())),
        }
    }

    Ok(tokens)
}

/// Maps the slice logos rejected to the syntax error describing it.
fn classify_error(slice: &str) -> SyntaxError {
    match slice.chars().next() {
        Some('!') => SyntaxError::ExpectedEqualsAfterBang,
        Some(c) if c.is_ascii_digit() => SyntaxError::InvalidNumber { literal: slice.to_string() },
        Some(character) => SyntaxError::UnknownCharacter { character },
        None => SyntaxError::UnknownCharacter { character: '\0' },
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(value) => write!(f, "number {value}"),
            Self::Symbol(name) => write!(f, "identifier '{name}'"),
            Self::Def => write!(f, "'def'"),
            Self::Return => write!(f, "'return'"),
            Self::If => write!(f, "'if'"),
            Self::Then => write!(f, "'then'"),
            Self::Else => write!(f, "'else'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::Comma => write!(f, "','"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::EqualEqual => write!(f, "'=='"),
            Self::BangEqual => write!(f, "'!='"),
            Self::Less => write!(f, "'<'"),
            Self::Equals => write!(f, "'='"),
            Self::NewLine => write!(f, "newline"),
            Self::Comment => write!(f, "comment"),
            Self::Ignored => write!(f, "whitespace"),
        }
    }
}
