use std::{fmt::Display, rc::Rc};

use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{complex::ComplexNumber, matrix::Matrix, range::RangeValue},
    },
};

/// Represents a runtime value in the interpreter.
///
/// The set of variants is closed. Every operation produces a new value; no
/// operand is ever changed in place, so cloning a value is cheap and shares
/// the underlying storage.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A real or complex number. Real when the imaginary part is zero.
    Scalar(ComplexNumber),
    /// A dense matrix of scalars.
    Matrix(Matrix),
    /// An immutable character sequence.
    String(Rc<str>),
    /// A lazy arithmetic sequence, or the unbounded `:` selector.
    Range(RangeValue),
    /// The result of a statement sequence that produced nothing, such as an
    /// empty scoped block.
    Void,
}

impl From<ComplexNumber> for Value {
    fn from(c: ComplexNumber) -> Self {
        Self::Scalar(c)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Scalar(ComplexNumber::from(v))
    }
}

impl From<Matrix> for Value {
    fn from(m: Matrix) -> Self {
        Self::Matrix(m)
    }
}

impl From<RangeValue> for Value {
    fn from(r: RangeValue) -> Self {
        Self::Range(r)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(Rc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(Rc::from(s))
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Number(z) => Self::Scalar(*z),
            LiteralValue::Text(s) => Self::from(s.as_str()),
        }
    }
}

impl Value {
    /// Name of the variant, as used in error messages.
    ///
    /// # Example
    /// ```
    /// use numora::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from(1.0).variant_name(), "Scalar");
    /// assert_eq!(Value::from("abc").variant_name(), "String");
    /// ```
    #[must_use]
    pub const fn variant_name(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "Scalar",
            Self::Matrix(_) => "Matrix",
            Self::String(_) => "String",
            Self::Range(_) => "Range",
            Self::Void => "Void",
        }
    }

    /// Number of rows: 1 for scalars and strings, 0 for void.
    #[must_use]
    pub fn rows(&self) -> usize {
        match self {
            Self::Scalar(_) | Self::String(_) => 1,
            Self::Matrix(m) => m.rows(),
            Self::Range(r) => usize::from(!r.all),
            Self::Void => 0,
        }
    }

    /// Number of columns: 1 for scalars, the character count for strings, the
    /// element count for bounded ranges.
    #[must_use]
    pub fn columns(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Matrix(m) => m.columns(),
            Self::String(s) => s.chars().count(),
            Self::Range(r) => r.count().unwrap_or(0),
            Self::Void => 0,
        }
    }

    /// `true` for matrices where exactly one dimension equals 1.
    #[must_use]
    pub const fn is_vector(&self) -> bool {
        match self {
            Self::Matrix(m) => m.is_vector(),
            _ => false,
        }
    }

    /// Number of addressable elements.
    ///
    /// # Example
    /// ```
    /// use numora::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from("héllo").len(), 5);
    /// assert_eq!(Value::from(3.0).len(), 1);
    /// assert_eq!(Value::Void.len(), 0);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Matrix(m) => m.len(),
            Self::String(s) => s.chars().count(),
            Self::Range(r) => r.count().unwrap_or(0),
            Self::Void => 0,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Scalar element at zero-based `(row, column)`.
    ///
    /// A scalar answers only `(0, 0)`. Strings, ranges and void have no
    /// scalar elements.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<ComplexNumber> {
        match self {
            Self::Scalar(z) if row == 0 && column == 0 => Some(*z),
            Self::Matrix(m) => m.get(row, column),
            _ => None,
        }
    }

    /// Scalar element at a zero-based column-major linear index.
    #[must_use]
    pub fn get_linear(&self, index: usize) -> Option<ComplexNumber> {
        match self {
            Self::Scalar(z) if index == 0 => Some(*z),
            Self::Matrix(m) => m.get_linear(index),
            _ => None,
        }
    }

    /// Returns the scalar payload, or `OperationNotSupported` naming
    /// `operator`.
    ///
    /// A `1 x 1` matrix counts as a scalar.
    pub fn as_scalar(&self, operator: &str) -> EvalResult<ComplexNumber> {
        match self {
            Self::Scalar(z) => Ok(*z),
            Self::Matrix(m) if m.shape() == (1, 1) => m.get(0, 0)
                                                      .ok_or_else(|| RuntimeError::not_supported(operator, "Matrix")),
            other => Err(RuntimeError::not_supported(operator, other.variant_name())),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scalar(z) => write!(f, "{z}"),
            Self::Matrix(m) => write!(f, "{m}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Range(r) => write!(f, "{r}"),
            Self::Void => Ok(()),
        }
    }
}
