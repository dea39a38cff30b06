/// Lexing and parsing errors.
///
/// Defines all error types that can occur while tokenizing or parsing source
/// code. A syntax error aborts loading entirely; a program is never partially
/// loaded.
pub mod syntax_error;
/// Name resolution errors.
///
/// Raised by the evaluator when a variable or function name cannot be found
/// anywhere in the active scope chain.
pub mod name_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// division by zero, integer overflow, or calling a function with the wrong
/// number of arguments.
pub mod runtime_error;

pub use name_error::NameError;
pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;

/// The three kinds of failure the interpreter can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input did not conform to the token or grammar rules.
    Syntax,
    /// A name could not be resolved in the scope chain.
    Name,
    /// Evaluation failed for any other reason.
    Runtime,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Syntax => "Syntax Error",
            Self::Name => "Name Error",
            Self::Runtime => "Runtime Error",
        };
        write!(f, "{label}")
    }
}

/// Any error produced while loading or running a program.
///
/// Each layer returns its own error type; this enum joins them so that `?`
/// can carry a failure from the lexer, parser or evaluator up to the single
/// place that reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A lexing or parsing failure.
    Syntax(SyntaxError),
    /// An unresolved variable or function name.
    Name(NameError),
    /// Any other evaluation failure.
    Runtime(RuntimeError),
}

impl Error {
    /// Returns which of the three error kinds this is.
    ///
    /// # Example
    /// ```
    /// use recur::error::{Error, ErrorKind, RuntimeError};
    ///
    /// let err: Error = RuntimeError::DivisionByZero.into();
    /// assert_eq!(err.kind(), ErrorKind::Runtime);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Syntax(_) => ErrorKind::Syntax,
            Self::Name(_) => ErrorKind::Name,
            Self::Runtime(_) => ErrorKind::Runtime,
        }
    }
}

impl From<SyntaxError> for Error {
    fn from(value: SyntaxError) -> Self {
        Self::Syntax(value)
    }
}

impl From<NameError> for Error {
    fn from(value: NameError) -> Self {
        Self::Name(value)
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Name(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(e) => Some(e),
            Self::Name(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
