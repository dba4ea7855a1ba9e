//! # numora
//!
//! numora is an interpreter for a compact numeric scripting language written
//! in Rust. It parses and evaluates programs over complex scalars, matrices,
//! strings and ranges, with nested scoped blocks, function calls and a binary
//! codec for values.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
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

use crate::{
    error::Error,
    interpreter::{evaluator::core::Context, value::core::Value},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr`, `Statement` and `Program` types that
/// represent the syntactic structure of source code as a tree. The tree is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source offsets and owning scopes to nodes.
/// - Records the scopes a parsed program owns.
pub mod ast;
/// Provides unified error types for parsing, evaluation and decoding.
///
/// This module defines all errors that can be raised while matching,
/// parsing, evaluating or deserializing. Parse errors carry absolute source
/// offsets; runtime errors are located by the failing statement.
///
/// # Responsibilities
/// - Defines error enums for every failure mode.
/// - Wraps them in one crate-level `Error` for callers.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, matching, parsing, scopes, evaluation
/// and value representations to provide a complete runtime for source code.
///
/// # Responsibilities
/// - Coordinates all core components.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion and helpers.
///
/// This module provides reusable helpers that are used throughout the value
/// layer and the codec, chiefly checked conversions between `f64`, `u64` and
/// `usize`.
pub mod util;

/// Evaluates `source` in a fresh context and returns the last result.
///
/// The whole program is parsed before anything runs, so a syntax error
/// anywhere means no statement is executed.
///
/// # Errors
/// Returns an error if parsing fails or a statement fails to evaluate.
///
/// # Examples
/// ```
/// use numora::{evaluate, interpreter::value::core::Value};
///
/// let result = evaluate("x = 3; { x = 10; y = x }; x + 1").unwrap();
/// assert_eq!(result, Some(Value::from(4.0)));
///
/// // 'z' is not defined.
/// assert!(evaluate("z + 1").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<Option<Value>, Error> {
    Context::new().run(source)
}
