#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents a name that could not be resolved in the scope chain.
pub enum NameError {
    /// Tried to read a variable that is bound in no enclosing scope.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Called a function that is registered in no enclosing scope.
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
}

impl std::fmt::Display for NameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name } => write!(f, "Undefined variable: {name}"),
            Self::UnknownFunction { name } => write!(f, "Undefined function: {name}"),
        }
    }
}

impl std::error::Error for NameError {}
