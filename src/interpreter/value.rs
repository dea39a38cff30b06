use std::fmt;

/// Represents a runtime value in the interpreter.
///
/// The language has a single type: every expression, argument and function
/// result is a 64-bit signed integer. Comparisons produce `1` or `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value {
    /// A 64-bit integer.
    Integer(i64),
}

impl Value {
    /// Returns the integer held by the value.
    #[must_use]
    pub const fn as_integer(self) -> i64 {
        match self {
            Self::Integer(n) => n,
        }
    }

    /// Interprets the value as a condition: any nonzero integer is true.
    ///
    /// ## Example
    /// ```
    /// use recur::interpreter::value::Value;
    ///
    /// assert!(Value::Integer(-3).is_truthy());
    /// assert!(!Value::Integer(0).is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(self) -> bool {
        self.as_integer() != 0
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
        }
    }
}
