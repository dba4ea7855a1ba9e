/// Built-in function implementations.
///
/// Element-wise functions, sums and lengths, together with the two dispatch
/// helpers every built-in is written with.
pub mod builtin;
/// `min` and `max` function implementations.
///
/// Reduce vectors to the element of smallest or greatest magnitude, and
/// general matrices column by column.
pub mod min_max;

pub mod core;
