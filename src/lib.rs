//! # recur
//!
//! recur is a tree-walking interpreter for a tiny integer language written in
//! Rust. Programs are lists of function definitions; the only values are
//! integers and the only way to repeat work is recursion.
//!
//! ```text
//! def fact(n)
//!     return if n < 1 then 1 else n * fact(n - 1)
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed code.
///
/// This module declares the `Expr`, `Statement`, `FunctionDef` and `Program`
/// types that represent source code as a tree. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Provides deep, independent copies of function definitions via `Clone`.
/// - Renders nodes back to source form via `Display`.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines the three kinds of failure: syntax errors from the
/// lexer and parser, name errors for unresolved identifiers, and runtime
/// errors for everything else that can go wrong during evaluation.
///
/// # Responsibilities
/// - Defines an error enum per kind, plus the umbrella [`error::Error`].
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, scopes, evaluation and values
/// to provide a complete runtime for source programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, environment and
///   evaluator.
/// - Provides the [`Interpreter`] used to load programs and run functions.
pub mod interpreter;

pub use error::{Error, ErrorKind};
pub use interpreter::runtime::Interpreter;

/// Loads `source` and runs the function `name` with the given arguments.
///
/// This is a one-shot convenience over [`Interpreter::new`] followed by
/// [`Interpreter::run`].
///
/// # Errors
/// Returns a syntax error if the source does not parse, or a name or runtime
/// error if the call fails.
///
/// # Examples
/// ```
/// use recur::{ErrorKind, get_result};
///
/// let source = "def add(a, b)\n    return a + b\n";
/// assert_eq!(get_result(source, "add", &[2, 3]).unwrap(), 5);
///
/// // Calling a two-parameter function with one argument fails at runtime.
/// let err = get_result(source, "add", &[2]).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Runtime);
/// ```
pub fn get_result(source: &str, name: &str, args: &[i64]) -> Result<i64, Error> {
    Interpreter::new(source)?.run(name, args)
}
