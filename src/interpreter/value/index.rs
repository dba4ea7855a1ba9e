use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{core::Value, matrix::Matrix},
    },
    util::num::f64_to_index_checked,
};

/// Operator name used when a value cannot take part in indexing.
const INDEX: &str = "index";

impl Value {
    /// Indexes a String or Matrix with a numeric or Range argument.
    ///
    /// Every index is zero-based and must be an integer in `[0, len)`. A
    /// Matrix argument supplies one index per element, in column-major order. The
    /// full-range selector returns the operand unchanged.
    ///
    /// A String yields the selected characters in argument order. A vector
    /// Matrix keeps its orientation; any other matrix is addressed by
    /// column-major linear index and yields a row vector.
    ///
    /// # Errors
    /// - [`RuntimeError::IndexOutOfRange`] for a bad index.
    /// - [`RuntimeError::InvalidRange`] if a range argument cannot be
    ///   materialized.
    /// - [`RuntimeError::OperationNotSupported`] if `self` is not indexable or
    ///   the argument is not a numeric value.
    ///
    /// # Example
    /// ```
    /// use numora::interpreter::value::{core::Value, range::RangeValue};
    ///
    /// let word = Value::from("hello");
    /// assert_eq!(word.invoke(&Value::from(1.0)).unwrap(), Value::from("e"));
    /// assert_eq!(word.invoke(&Value::from(RangeValue::new(1.0, 1.0, 3.0))).unwrap(),
    ///            Value::from("ell"));
    /// assert_eq!(word.invoke(&Value::from(RangeValue::full())).unwrap(), word);
    /// assert!(word.invoke(&Value::from(5.0)).is_err());
    /// ```
    pub fn invoke(&self, argument: &Self) -> EvalResult<Self> {
        match self {
            Self::String(s) => {
                let characters: Vec<char> = s.chars().collect();
                let Some(indices) = resolve_indices(argument, characters.len())? else {
                    return Ok(self.clone());
                };
                Ok(Self::from(indices.into_iter().map(|i| characters[i]).collect::<String>()))
            },
            Self::Matrix(m) => {
                let Some(indices) = resolve_indices(argument, m.len())? else {
                    return Ok(self.clone());
                };
                let picked = indices.into_iter()
                                    .filter_map(|i| m.get_linear(i))
                                    .collect();
                if m.is_vector() && m.columns() == 1 {
                    Ok(Self::Matrix(Matrix::column_vector(picked)))
                } else {
                    Ok(Self::Matrix(Matrix::row_vector(picked)))
                }
            },
            other => Err(RuntimeError::not_supported(INDEX, other.variant_name())),
        }
    }
}

/// Converts an index argument into positions. `None` means "everything".
fn resolve_indices(argument: &Value, length: usize) -> EvalResult<Option<Vec<usize>>> {
    match argument {
        Value::Range(range) if range.all => Ok(None),
        Value::Range(range) => range.materialize()?
                                    .into_iter()
                                    .map(|index| f64_to_index_checked(index, length))
                                    .collect::<EvalResult<Vec<_>>>()
                                    .map(Some),
        Value::Scalar(_) | Value::Matrix(_) => {
            let mut indices = Vec::with_capacity(argument.len());
            for position in 0..argument.len() {
                let Some(z) = argument.get_linear(position) else {
                    continue;
                };
                if !z.is_real() {
                    return Err(RuntimeError::IndexOutOfRange { index: z.real,
                                                               length });
                }
                indices.push(f64_to_index_checked(z.real, length)?);
            }
            Ok(Some(indices))
        },
        other => Err(RuntimeError::not_supported(INDEX, other.variant_name())),
    }
}
