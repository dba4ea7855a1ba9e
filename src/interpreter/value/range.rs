use std::fmt::Display;

use ordered_float::OrderedFloat;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::complex::ComplexNumber},
    util::num::sequence_len,
};

/// Upper bound on how many elements a range may materialize into.
pub const MAX_RANGE_ELEMENTS: usize = 1 << 24;

/// A lazy arithmetic sequence `start, start + step, ...` up to and including
/// `end`.
///
/// When `all` is set the range carries no bounds and stands for "every
/// element, in order"; this is the value of the `:` selector.
#[derive(Debug, Clone, Copy)]
pub struct RangeValue {
    /// First element.
    pub start: f64,
    /// Inclusive upper (or lower, for negative steps) bound.
    pub end:   f64,
    /// Distance between neighbours.
    pub step:  f64,
    /// Unbounded full-range form.
    pub all:   bool,
}

impl RangeValue {
    /// A bounded range.
    #[must_use]
    pub const fn new(start: f64, step: f64, end: f64) -> Self {
        Self { start,
               end,
               step,
               all: false }
    }

    /// The unbounded `:` range.
    #[must_use]
    pub const fn full() -> Self {
        Self { start: 0.0,
               end:   0.0,
               step:  1.0,
               all:   true, }
    }

    /// Number of elements the range materializes into.
    ///
    /// # Errors
    /// [`RuntimeError::InvalidRange`] if the range is unbounded, has a zero or
    /// non-finite step or would exceed [`MAX_RANGE_ELEMENTS`].
    pub fn count(&self) -> EvalResult<usize> {
        if self.all {
            return Err(RuntimeError::InvalidRange { details: "an unbounded range has no length".to_string() });
        }
        if self.step == 0.0 || !self.step.is_finite() {
            return Err(RuntimeError::InvalidRange { details: format!("step {} cannot be used", self.step) });
        }
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(RuntimeError::InvalidRange { details: format!("bounds {} and {} must be finite",
                                                                     self.start, self.end) });
        }

        match sequence_len(self.start, self.step, self.end) {
            Some(count) if count <= MAX_RANGE_ELEMENTS => Ok(count),
            _ => Err(RuntimeError::InvalidRange { details: format!("{}:{}:{} exceeds the limit of {MAX_RANGE_ELEMENTS} elements",
                                                                   self.start, self.step, self.end) }),
        }
    }

    /// Materializes the range into its elements.
    ///
    /// # Errors
    /// See [`RangeValue::count`].
    ///
    /// # Example
    /// ```
    /// use numora::interpreter::value::range::RangeValue;
    ///
    /// let values = RangeValue::new(1.0, 0.5, 2.0).materialize().unwrap();
    /// assert_eq!(values, vec![1.0, 1.5, 2.0]);
    ///
    /// assert!(RangeValue::new(1.0, 0.0, 2.0).materialize().is_err());
    /// assert!(RangeValue::full().materialize().is_err());
    /// ```
    #[allow(clippy::cast_precision_loss)]
    pub fn materialize(&self) -> EvalResult<Vec<f64>> {
        let count = self.count()?;
        Ok((0..count).map(|k| self.step.mul_add(k as f64, self.start)).collect())
    }

    /// Materializes the range as complex scalars.
    ///
    /// # Errors
    /// See [`RangeValue::count`].
    pub fn to_scalars(&self) -> EvalResult<Vec<ComplexNumber>> {
        Ok(self.materialize()?.into_iter().map(ComplexNumber::from).collect())
    }
}

impl PartialEq for RangeValue {
    fn eq(&self, other: &Self) -> bool {
        if self.all || other.all {
            return self.all == other.all;
        }
        OrderedFloat(self.start) == OrderedFloat(other.start)
        && OrderedFloat(self.end) == OrderedFloat(other.end)
        && OrderedFloat(self.step) == OrderedFloat(other.step)
    }
}

impl Display for RangeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.all {
            write!(f, ":")
        } else {
            write!(f, "{}:{}:{}", self.start, self.step, self.end)
        }
    }
}
