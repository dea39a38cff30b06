use log::debug;

use crate::{
    ast::Program,
    error::{Error, NameError},
    interpreter::{
        environment::Environment,
        evaluator::{
            core::{EvalResult, Evaluator},
            function::check_arity,
        },
        parser::program::parse_source,
        value::Value,
    },
};

/// A loaded program, ready to run any of its top-level functions.
///
/// Loading parses the whole source and registers a copy of every top-level
/// definition in the global scope, so all top-level functions can see each
/// other (and themselves) before anything runs. The parsed [`Program`] is
/// kept separately and is never touched by evaluation.
///
/// Running a function never modifies the global scope: each run gets its own
/// child scope, which is discarded afterwards.
///
/// ## Example
/// ```
/// use recur::Interpreter;
///
/// let source = "def fact(n)\n    return if n < 1 then 1 else n * fact(n - 1)\n";
/// let interpreter = Interpreter::new(source).unwrap();
///
/// assert_eq!(interpreter.run("fact", &[5]).unwrap(), 120);
/// assert_eq!(interpreter.run("fact", &[0]).unwrap(), 1);
/// ```
#[derive(Debug)]
pub struct Interpreter {
    program: Program,
    globals: Environment<'static>,
}

impl Interpreter {
    /// Parses `source` and loads every top-level function.
    ///
    /// # Errors
    /// Returns `Error::Syntax` if the source does not tokenize or parse; in
    /// that case nothing is loaded.
    pub fn new(source: &str) -> Result<Self, Error> {
        Ok(Self::from_program(parse_source(source)?))
    }

    /// Loads an already parsed program.
    ///
    /// When several top-level definitions share a name, the last one wins.
    #[must_use]
    pub fn from_program(program: Program) -> Self {
        let mut globals = Environment::new();

        for function in &program.functions {
            debug!("loading function '{}' with {} parameter(s)",
                   function.name,
                   function.arity());
            globals.define_function(&function.name, function.clone());
        }

        Self { program, globals }
    }

    /// The program as it was parsed.
    #[must_use]
    pub const fn program(&self) -> &Program {
        &self.program
    }

    /// Runs the top-level function `name` with the given arguments.
    ///
    /// # Errors
    /// - `Error::Name` if no top-level function is called `name`, or if the
    ///   function reads an unknown variable or calls an unknown function.
    /// - `Error::Runtime` if `args` does not match the function's parameter
    ///   count, or evaluation fails (division by zero, overflow, arity).
    pub fn run(&self, name: &str, args: &[i64]) -> Result<i64, Error> {
        debug!("running '{name}' with arguments {args:?}");

        let result = self.call(name, args)?;

        debug!("'{name}' returned {result}");
        Ok(result.as_integer())
    }

    fn call(&self, name: &str, args: &[i64]) -> EvalResult<Value> {
        let function =
            self.globals
                .get_function(name)
                .ok_or_else(|| NameError::UnknownFunction { name: name.to_string() })?;

        check_arity(function, args.len())?;

        let mut scope = self.globals.create_child();
        let args = args.iter().copied().map(Value::from).collect();

        Evaluator::new(&mut scope).invoke(function, args)
    }
}
