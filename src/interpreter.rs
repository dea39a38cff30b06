/// The environment module holds the chain of scopes used during evaluation.
///
/// Each scope maps names to values and to function definitions and links to
/// the scope it was created from. Lookups walk the chain outwards; writes
/// always land in the innermost scope.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic and comparisons, binds variables and functions in the
/// current scope, and builds a new scope for every call.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Resolves names through the scope chain.
/// - Reports runtime errors such as division by zero or arity mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a sequence of tokens:
/// integer literals, identifiers, keywords, operators, punctuation and
/// significant newlines. Whitespace and `#` comments are skipped.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// a [`Program`](crate::ast::Program) of function definitions.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Applies operator precedence and associativity.
/// - Reports the first syntax error and aborts.
pub mod parser;
/// Loads programs and runs their functions.
///
/// Owns the global scope and the parsed program, and exposes the single
/// entry point used to call a named function with integer arguments.
pub mod runtime;
/// The value module defines the runtime data type.
pub mod value;
