#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum SyntaxError {
    /// A character that starts no token.
    UnknownCharacter {
        /// The offending character.
        character: char,
    },
    /// A `!` that was not immediately followed by `=`.
    ExpectedEqualsAfterBang,
    /// A numeric literal that does not fit the integer type.
    InvalidNumber {
        /// The digits as written in the source.
        literal: String,
    },
    /// Found a token other than the one the grammar requires here.
    UnexpectedToken {
        /// Description of what the parser was looking for.
        expected: &'static str,
        /// The token encountered instead.
        found:    String,
    },
    /// Reached the end of input while the grammar still required a token.
    UnexpectedEndOfInput {
        /// Description of what the parser was looking for.
        expected: &'static str,
    },
    /// A function body ended without a `return` statement.
    MissingReturn {
        /// The name of the function being defined.
        function: String,
    },
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCharacter { character } => write!(f, "Unknown character: {character}"),
            Self::ExpectedEqualsAfterBang => write!(f, "Expected '=' after '!'"),
            Self::InvalidNumber { literal } => write!(f, "Invalid number: {literal}"),
            Self::UnexpectedToken { expected, found } => {
                write!(f, "Expected {expected}, found {found}")
            },
            Self::UnexpectedEndOfInput { expected } => {
                write!(f, "Expected {expected}, found end of input")
            },
            Self::MissingReturn { function } => write!(f,
                                                       "Function '{function}' must end with a return statement"),
        }
    }
}

impl std::error::Error for SyntaxError {}
