use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::Evaluator, value::Value},
};

impl Evaluator<'_, '_> {
    /// Evaluates a binary operation between two already evaluated values.
    ///
    /// Arithmetic is checked: a result outside the `i64` range is an error
    /// rather than a wrapped value. Division truncates toward zero.
    /// Comparisons produce `1` for true and `0` for false.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// The computed value.
    ///
    /// # Errors
    /// - `DivisionByZero` if `op` is `/` and `right` is zero.
    /// - `Overflow` if the result does not fit into an `i64`.
    ///
    /// # Example
    /// ```
    /// use recur::{
    ///     ast::BinaryOperator,
    ///     error::RuntimeError,
    ///     interpreter::{evaluator::core::Evaluator, value::Value},
    /// };
    ///
    /// let seven = Value::Integer(-7);
    /// let two = Value::Integer(2);
    ///
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::Div, seven, two),
    ///            Ok(Value::Integer(-3)));
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::Less, seven, two),
    ///            Ok(Value::Integer(1)));
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::Div, seven, Value::Integer(0)),
    ///            Err(RuntimeError::DivisionByZero));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: Value, right: Value) -> Result<Value, RuntimeError> {
        use BinaryOperator::{Add, Div, Equal, Less, Mul, NotEqual, Sub};

        let left = left.as_integer();
        let right = right.as_integer();

        let value = match op {
            Add => left.checked_add(right).ok_or(RuntimeError::Overflow)?,
            Sub => left.checked_sub(right).ok_or(RuntimeError::Overflow)?,
            Mul => left.checked_mul(right).ok_or(RuntimeError::Overflow)?,
            Div => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                left.checked_div(right).ok_or(RuntimeError::Overflow)?
            },
            Equal => return Ok(Value::from(left == right)),
            NotEqual => return Ok(Value::from(left != right)),
            Less => return Ok(Value::from(left < right)),
        };

        Ok(Value::Integer(value))
    }
}
