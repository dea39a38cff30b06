use log::trace;

use crate::{
    ast::{Expr, FunctionDef},
    error::{NameError, RuntimeError},
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::Value,
    },
};

impl Evaluator<'_, '_> {
    /// Evaluates a function call.
    ///
    /// The callee is resolved through the current scope chain and its arity is
    /// checked before any argument is evaluated. Arguments are then evaluated
    /// left to right in the caller's scope.
    ///
    /// The new scope is a child of the *caller's* scope, not of the scope the
    /// function was defined in. Names that are neither parameters nor locals
    /// therefore resolve through the chain of active calls.
    ///
    /// # Parameters
    /// - `callee`: Function name.
    /// - `arguments`: Unevaluated argument expressions.
    ///
    /// # Returns
    /// The value of the callee's return expression.
    ///
    /// # Errors
    /// - `NameError::UnknownFunction` if no scope defines `callee`.
    /// - `RuntimeError::ArgumentCountMismatch` if the arity differs.
    /// - Any error raised by an argument or by the callee's body.
    pub(super) fn eval_call(&self, callee: &str, arguments: &[Expr]) -> EvalResult<Value> {
        let function =
            self.env
                .get_function(callee)
                .ok_or_else(|| NameError::UnknownFunction { name: callee.to_string() })?;

        check_arity(function, arguments.len())?;

        let mut args = Vec::with_capacity(arguments.len());
        for expr in arguments {
            args.push(self.eval(expr)?);
        }

        let mut scope = self.env.create_child();
        trace!("call {callee}({}) at depth {}",
               args.iter().map(ToString::to_string).collect::<Vec<_>>().join(", "),
               scope.depth());

        Evaluator::new(&mut scope).invoke(function, args)
    }

    /// Runs a function body in the current scope.
    ///
    /// The current scope is expected to be freshly created for this call.
    /// Parameters are bound in order, so with duplicate parameter names the
    /// rightmost argument wins. The body statements are executed in order and
    /// the return expression is evaluated last.
    ///
    /// The caller is responsible for checking the arity first; surplus
    /// arguments or parameters are ignored here.
    ///
    /// # Errors
    /// Propagates any error raised by the body or the return expression.
    pub(crate) fn invoke(&mut self, function: &FunctionDef, args: Vec<Value>) -> EvalResult<Value> {
        for (param, value) in function.params.iter().zip(args) {
            self.env.define_variable(param, value);
        }

        for statement in &function.body {
            self.execute(statement)?;
        }

        self.eval(&function.return_expr)
    }
}

/// Ensures that `found` arguments match the parameters `function` declares.
///
/// # Errors
/// `RuntimeError::ArgumentCountMismatch` when the counts differ.
pub fn check_arity(function: &FunctionDef, found: usize) -> Result<(), RuntimeError> {
    if function.arity() != found {
        return Err(RuntimeError::ArgumentCountMismatch { function: function.name.clone(),
                                                         expected: function.arity(),
                                                         found });
    }
    Ok(())
}
