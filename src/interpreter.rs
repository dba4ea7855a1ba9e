/// Named constants.
///
/// The fixed table of constants (`pi`, `e`, `i`, `phi`, `omega`) bound into
/// the outermost scope of every context.
pub mod constants;
/// The evaluator module executes parsed programs and computes results.
///
/// The evaluator walks the expression tree, resolves names through the scope
/// arena, delegates all arithmetic and indexing to the value layer, and
/// dispatches function calls.
///
/// # Responsibilities
/// - Owns the session context: scopes, constants and function registry.
/// - Executes statements in order and tracks the last result.
/// - Locates runtime errors at the failing top-level statement.
pub mod evaluator;
/// The lexer module defines the atomic tokens of the language.
///
/// Tokens are produced by `logos` on demand; the matcher uses them to
/// recognize numbers, strings, names, operators and separators at a cursor.
pub mod lexer;
/// The matcher module finds the next lexical unit in program text.
///
/// An ordered table of recognizers is tried at the cursor and the first match
/// wins. Bracketed forms are matched as balanced spans whose interior is
/// parsed later.
///
/// # Responsibilities
/// - Skips whitespace and reports unmatched input with its offset.
/// - Scans `{}`, `()` and `[]` spans, honoring nesting and string literals.
/// - Exposes the priority table so that alternative tables can be tested.
pub mod matcher;
/// The parser module builds expression trees from matched units.
///
/// Statements are split at `;`, operator precedence is applied by recursive
/// descent, and bracketed units are reparsed from their interior. Scoped
/// blocks allocate their child scope while parsing.
///
/// # Responsibilities
/// - Converts units into `Expr` and `Statement` nodes with source offsets.
/// - Allocates one scope per scoped block and records it in the program.
/// - Bounds nesting depth and reports grammar errors before evaluation.
pub mod parser;
/// Scope storage and symbol resolution.
///
/// Scopes live in an arena and refer to their parent by handle. Lookups walk
/// the parent chain outward; assignments bind in one scope only.
pub mod scope;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the closed set of runtime values: scalars, matrices,
/// strings, ranges and void. It implements their operator table, indexing,
/// rendering and binary codec.
///
/// # Responsibilities
/// - Defines the `Value` enum and its read-only capabilities.
/// - Implements arithmetic, comparison and indexing with strict shape rules.
/// - Serializes and deserializes every variant.
pub mod value;
