use std::collections::HashMap;

use crate::{ast::FunctionDef, interpreter::value::Value};

/// One scope in the chain used to resolve names during evaluation.
///
/// A scope owns its own variables and functions and holds a borrowed,
/// read-only link to its parent. Lookups walk from the innermost scope
/// outwards and return the first match; definitions always land in the scope
/// they are made on, so a child can shadow a parent's binding but never
/// change it.
///
/// The global scope is the only one without a parent. Every call gets a fresh
/// child of the caller's scope, which is dropped when the call returns.
///
/// ## Example
/// ```
/// use recur::interpreter::{environment::Environment, value::Value};
///
/// let mut globals = Environment::new();
/// globals.define_variable("x", Value::Integer(1));
///
/// let mut local = globals.create_child();
/// local.define_variable("x", Value::Integer(2));
///
/// assert_eq!(local.get_variable("x"), Some(&Value::Integer(2)));
/// assert_eq!(globals.get_variable("x"), Some(&Value::Integer(1)));
/// ```
#[derive(Debug, Default)]
pub struct Environment<'p> {
    variables: HashMap<String, Value>,
    functions: HashMap<String, FunctionDef>,
    parent:    Option<&'p Environment<'p>>,
}

impl Environment<'_> {
    /// Creates an empty root scope.
    #[must_use]
    pub fn new() -> Self {
        Self { variables: HashMap::new(),
               functions: HashMap::new(),
               parent:    None, }
    }

    /// Creates an empty scope whose parent is `self`.
    #[must_use]
    pub fn create_child(&self) -> Environment<'_> {
        Environment { variables: HashMap::new(),
                      functions: HashMap::new(),
                      parent:    Some(self), }
    }

    /// Binds `name` in this scope, replacing any earlier binding in this
    /// scope. Parent scopes are never touched.
    pub fn define_variable(&mut self, name: &str, value: Value) {
        self.variables.insert(name.to_string(), value);
    }

    /// Looks up a variable, searching from this scope outwards.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        self.scopes().find_map(|scope| scope.variables.get(name))
    }

    /// Registers a function in this scope under `name`.
    pub fn define_function(&mut self, name: &str, function: FunctionDef) {
        self.functions.insert(name.to_string(), function);
    }

    /// Looks up a function, searching from this scope outwards.
    #[must_use]
    pub fn get_function(&self, name: &str) -> Option<&FunctionDef> {
        self.scopes().find_map(|scope| scope.functions.get(name))
    }

    /// The number of scopes in the chain, counting this one.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scopes().count()
    }

    /// Iterates over this scope followed by each of its ancestors.
    fn scopes(&self) -> impl Iterator<Item = &Self> {
        std::iter::successors(Some(self), |scope| scope.parent)
    }
}
