/// Numeric conversion helpers.
///
/// This module provides checked conversions between `f64` values coming out
/// of the language and the `usize` positions and counts used for indexing,
/// range materialization and codec length counters.
pub mod num;
