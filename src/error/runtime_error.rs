#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The name of the function.
        function: String,
        /// The number of parameters the function declares.
        expected: usize,
        /// The number of arguments actually supplied.
        found:    usize,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// An arithmetic result did not fit the integer type.
    Overflow,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ArgumentCountMismatch { function,
                                          expected,
                                          found, } => write!(f,
                                                             "Function {function} called with incorrect number of arguments: expected {expected}, found {found}"),
            Self::DivisionByZero => write!(f, "Division by zero"),
            Self::Overflow => write!(f, "Integer overflow while trying to compute result"),
        }
    }
}

impl std::error::Error for RuntimeError {}
