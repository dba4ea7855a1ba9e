use crate::interpreter::{
    evaluator::{core::EvalResult, function::builtin::reduce_vectors},
    value::{complex::ComplexNumber, core::Value},
};

/// Element with the greatest magnitude; the first one wins a tie.
fn largest(values: &[ComplexNumber]) -> ComplexNumber {
    pick_by_magnitude(values, |candidate, best| candidate > best)
}

/// Element with the smallest magnitude; the first one wins a tie.
fn smallest(values: &[ComplexNumber]) -> ComplexNumber {
    pick_by_magnitude(values, |candidate, best| candidate < best)
}

fn pick_by_magnitude(values: &[ComplexNumber], better: fn(f64, f64) -> bool) -> ComplexNumber {
    let Some((&first, rest)) = values.split_first() else {
        return ComplexNumber::new(f64::NAN, 0.0);
    };

    let mut best = first;
    let mut best_magnitude = first.abs();
    for &z in rest {
        let magnitude = z.abs();
        if better(magnitude, best_magnitude) {
            best = z;
            best_magnitude = magnitude;
        }
    }
    best
}

/// Computes the maximum by magnitude.
///
/// A vector yields its element of greatest magnitude. A general matrix
/// yields one maximum per column, as a single-row matrix.
///
/// # Example
/// ```
/// use numora::interpreter::{
///     evaluator::function::min_max::max,
///     value::{core::Value, matrix::Matrix},
/// };
///
/// let v = Matrix::row_vector(vec![1.0.into(), (-9.0).into(), 3.0.into()]);
/// assert_eq!(max(&Value::from(v)).unwrap(), Value::from(-9.0));
///
/// let m = Matrix::new(4, 2, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, -1.0].map(Into::into).to_vec()).unwrap();
/// assert_eq!(max(&Value::from(m)).unwrap().to_string(), "[7, 6]");
/// ```
pub fn max(argument: &Value) -> EvalResult<Value> {
    reduce_vectors("max", argument, largest)
}

/// Computes the minimum by magnitude.
///
/// Mirrors [`max`].
pub fn min(argument: &Value) -> EvalResult<Value> {
    reduce_vectors("min", argument, smallest)
}
