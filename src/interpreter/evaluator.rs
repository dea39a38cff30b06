/// Core evaluation logic.
///
/// Contains the `Evaluator`, the result type and the dispatch over
/// expression and statement variants.
pub mod core;

/// Binary operator evaluation.
///
/// Implements checked integer arithmetic and the comparison operators.
pub mod binary;

/// Function evaluation.
///
/// Handles function lookup, argument checking, call-scope construction and
/// return value computation.
pub mod function;
