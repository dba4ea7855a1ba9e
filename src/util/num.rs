use crate::{
    error::{RuntimeError, SerializationError},
    interpreter::evaluator::core::EvalResult,
};

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Converts a numeric index into a zero-based `usize` position.
///
/// The value must be finite, integral and inside `[0, length)`. Anything else
/// is reported as [`RuntimeError::IndexOutOfRange`].
///
/// ## Example
/// ```
/// use numora::util::num::f64_to_index_checked;
///
/// assert_eq!(f64_to_index_checked(2.0, 5).unwrap(), 2);
/// assert!(f64_to_index_checked(5.0, 5).is_err());
/// assert!(f64_to_index_checked(1.5, 5).is_err());
/// assert!(f64_to_index_checked(-1.0, 5).is_err());
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn f64_to_index_checked(value: f64, length: usize) -> EvalResult<usize> {
    let out_of_range = || RuntimeError::IndexOutOfRange { index: value,
                                                          length };

    if !value.is_finite() || value.fract() != 0.0 || value < 0.0 {
        return Err(out_of_range());
    }

    if value > usize_to_f64_lossy(length) {
        return Err(out_of_range());
    }

    let index = value as usize;
    if index >= length {
        return Err(out_of_range());
    }

    Ok(index)
}

/// Converts a `usize` count to `f64`.
///
/// Counts above `2^53 - 1` lose precision; they are saturated to
/// `MAX_SAFE_U64_INT` so comparisons stay monotonic.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn usize_to_f64_lossy(value: usize) -> f64 {
    let value = value as u64;
    if value > MAX_SAFE_U64_INT {
        MAX_SAFE_U64_INT as f64
    } else {
        value as f64
    }
}

/// Converts a decoded `u64` length counter into a `usize`.
///
/// ## Errors
/// Returns [`SerializationError::LengthOverflow`] when the counter does not
/// fit the platform's address space.
pub fn u64_to_usize_checked(value: u64, position: usize) -> Result<usize, SerializationError> {
    usize::try_from(value).map_err(|_| SerializationError::LengthOverflow { position })
}

/// Number of elements in an inclusive arithmetic sequence.
///
/// Returns `Some(0)` when `step` points away from `end`, and `None` when the
/// count does not fit a `usize`. The step must be finite and nonzero;
/// callers validate that first.
///
/// ## Example
/// ```
/// use numora::util::num::sequence_len;
///
/// assert_eq!(sequence_len(0.0, 1.0, 4.0), Some(5));
/// assert_eq!(sequence_len(0.0, 0.5, 1.0), Some(3));
/// assert_eq!(sequence_len(3.0, -1.0, 1.0), Some(3));
/// assert_eq!(sequence_len(3.0, 1.0, 1.0), Some(0));
/// assert_eq!(sequence_len(0.0, 1.0, 1e20), None);
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn sequence_len(start: f64, step: f64, end: f64) -> Option<usize> {
    let span = (end - start) / step;
    if span.is_nan() || span < 0.0 {
        return Some(0);
    }

    // Tolerates accumulated error such as `0:0.1:0.3`.
    let span = (span + 1e-10).floor();
    if span >= usize_to_f64_lossy(usize::MAX) {
        return None;
    }
    (span as usize).checked_add(1)
}
