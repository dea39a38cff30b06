/// Entry points and shared result type.
///
/// Contains the expression entry point and the ternary level, which sits at
/// the bottom of the precedence hierarchy.
pub mod core;

/// Binary operator parsing.
///
/// Implements the left-associative comparison, additive and multiplicative
/// levels of the grammar.
pub mod binary;

/// Primary expression parsing.
///
/// Handles literals, identifiers, function calls and parenthesized groups.
pub mod primary;

/// Program and function-definition parsing.
///
/// Implements the line-oriented part of the grammar: top-level definitions,
/// function bodies, assignments and the mandatory final `return`.
pub mod program;

/// Utility functions for the parser.
///
/// Provides token expectations, identifier parsing and comma-separated lists
/// shared by parameter lists and argument lists.
pub mod utils;
