/// Core evaluation logic and context management.
///
/// Contains the runtime context, program execution, statement and block
/// evaluation, and the expression dispatcher.
pub mod core;

/// Utility functions for evaluation.
///
/// Matrix literal assembly, argument aggregation and range construction.
pub mod utils;

/// Function evaluation.
///
/// Handles the function registry, call dispatch and the built-in functions.
pub mod function;
