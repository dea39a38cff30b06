use log::trace;

use crate::{
    ast::{Expr, Statement},
    error::{Error, NameError},
    interpreter::{environment::Environment, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or the
/// [`Error`] describing the failure.
pub type EvalResult<T> = Result<T, Error>;

/// Walks AST nodes against one scope of the environment chain.
///
/// An evaluator is bound to a single scope: expressions are resolved through
/// that scope and its ancestors, while assignments and nested function
/// definitions are written into that scope alone. Every function call creates
/// a new scope and a new evaluator over it.
///
/// ## Example
/// ```
/// use recur::{
///     ast::{Expr, Statement},
///     interpreter::{environment::Environment, evaluator::core::Evaluator, value::Value},
/// };
///
/// let mut env = Environment::new();
/// let mut evaluator = Evaluator::new(&mut env);
///
/// let assignment = Statement::Assignment { name:  "x".to_string(),
///                                          value: Expr::Number { value: 41 }, };
/// assert_eq!(evaluator.execute(&assignment).unwrap(), None);
///
/// let read = Expr::Identifier { name: "x".to_string() };
/// assert_eq!(evaluator.eval(&read).unwrap(), Value::Integer(41));
/// ```
pub struct Evaluator<'e, 'p> {
    pub(super) env: &'e mut Environment<'p>,
}

impl<'e, 'p> Evaluator<'e, 'p> {
    /// Creates an evaluator whose current scope is `env`.
    pub const fn new(env: &'e mut Environment<'p>) -> Self {
        Self { env }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Expressions
    /// never modify the current scope; a call builds its own.
    ///
    /// # Errors
    /// - `NameError` for an unresolved variable or function.
    /// - `RuntimeError` for division by zero, overflow or an arity mismatch.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Number { value } => Ok(Value::Integer(*value)),
            Expr::Identifier { name } => self.eval_identifier(name),
            Expr::BinaryOp { left, op, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Ok(Self::eval_binary(*op, left, right)?)
            },
            Expr::Ternary { condition,
                            then_branch,
                            else_branch, } => {
                self.eval_ternary(condition, then_branch, else_branch)
            },
            Expr::Call { callee, arguments } => self.eval_call(callee, arguments),
        }
    }

    /// Evaluates a single statement.
    ///
    /// Assignments and function definitions modify the current scope and
    /// yield `None`; a `return` yields the value of its expression.
    ///
    /// # Errors
    /// Propagates any error raised while evaluating the statement's
    /// expression.
    pub fn execute(&mut self, statement: &Statement) -> EvalResult<Option<Value>> {
        match statement {
            Statement::Assignment { name, value } => {
                let value = self.eval(value)?;
                trace!("{name} = {value}");
                self.env.define_variable(name, value);
                Ok(None)
            },
            Statement::Return(expr) => Ok(Some(self.eval(expr)?)),
            Statement::Function(def) => {
                trace!("registering nested function '{}'", def.name);
                self.env.define_function(&def.name, def.clone());
                Ok(None)
            },
        }
    }

    /// Resolves a variable through the scope chain.
    fn eval_identifier(&self, name: &str) -> EvalResult<Value> {
        self.env
            .get_variable(name)
            .copied()
            .ok_or_else(|| NameError::UnknownVariable { name: name.to_string() }.into())
    }

    /// Evaluates a ternary expression.
    ///
    /// The condition is evaluated first; a nonzero result selects
    /// `then_branch`. Only the selected branch is evaluated.
    fn eval_ternary(&self,
                    condition: &Expr,
                    then_branch: &Expr,
                    else_branch: &Expr)
                    -> EvalResult<Value> {
        if self.eval(condition)?.is_truthy() {
            self.eval(then_branch)
        } else {
            self.eval(else_branch)
        }
    }
}
