/// Complex number support.
///
/// Defines the `ComplexNumber` type that backs every Scalar value, together
/// with the elementary functions the built-ins are written in terms of.
pub mod complex;
/// Dense matrices.
///
/// Defines the immutable `Matrix` type: construction, shape queries, element
/// access, element-wise combination, matrix product and concatenation.
pub mod matrix;
/// Lazy ranges.
///
/// Defines `RangeValue`, the descriptor behind `a:b`, `a:step:b` and the `:`
/// selector, and its materialization into a sequence of numbers.
pub mod range;

/// Operator dispatch.
///
/// Implements the closed operator table over every pair of variants. The left
/// operand selects the rule, which then inspects the right operand; anything
/// without a rule is rejected with `OperationNotSupported`.
pub mod arithmetic;
/// Binary codec.
///
/// Symmetric byte-level encoding and decoding of every variant. Nested values
/// go through the same codec, and decoding either yields a complete value or
/// an error.
pub mod codec;
/// Indexing-as-invocation for strings and matrices.
pub mod index;

pub mod core;
