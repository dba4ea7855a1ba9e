/// Parser entry points and shared parser state.
///
/// Holds the nesting limit, the state threaded through every parse function
/// and the program-level entry point.
pub mod core;

/// Unary, power, postfix and primary expressions.
///
/// Handles negation, right-associative `^`, invocation suffixes and every
/// unit that can start an operand.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the left-associative precedence levels from logical OR down to
/// multiplication, including ranges.
pub mod binary;

/// Scoped block parsing.
///
/// Allocates the child scope of a `{ ... }` block and reparses its interior
/// as a statement sequence.
pub mod block;

/// Utility functions for the parser.
///
/// Provides unit splitting, operator mapping and literal conversion.
pub mod utils;

/// Statement parsing.
///
/// Splits unit streams at `;` and builds assignments and expression
/// statements.
pub mod statement;
