use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{complex::ComplexNumber, core::Value, matrix::Matrix},
    },
};

impl Value {
    /// Applies a binary operator to two values.
    ///
    /// The variant of `self` selects the rule:
    /// - Scalar with Scalar uses real arithmetic while both operands are real
    ///   and complex arithmetic otherwise.
    /// - Scalar with Matrix, and Matrix with Scalar, broadcast the scalar over
    ///   every element.
    /// - Matrix with Matrix works element-wise on identical shapes, except
    ///   `*` which is the matrix product. `/` and `^` have no rule here.
    /// - String with anything supports only `+`, which appends the rendered
    ///   right operand.
    ///
    /// Comparisons yield `1` or `0`; ordering looks at real parts, equality at
    /// both parts. Division follows IEEE semantics, so `1 / 0` is infinity.
    ///
    /// # Errors
    /// - [`RuntimeError::OperationNotSupported`] for every combination without
    ///   a rule.
    /// - [`RuntimeError::DimensionMismatch`] when matrix shapes disagree.
    ///
    /// # Example
    /// ```
    /// use numora::{
    ///     ast::BinaryOperator,
    ///     interpreter::value::{core::Value, matrix::Matrix},
    /// };
    ///
    /// let two = Value::from(2.0);
    /// let three = Value::from(3.0);
    /// assert_eq!(two.binary(BinaryOperator::Pow, &three).unwrap(), Value::from(8.0));
    ///
    /// let text = Value::from("x = ");
    /// assert_eq!(text.binary(BinaryOperator::Add, &three).unwrap(), Value::from("x = 3"));
    /// assert!(text.binary(BinaryOperator::Mul, &three).is_err());
    ///
    /// let row = Value::from(Matrix::row_vector(vec![1.0.into(), 2.0.into()]));
    /// let doubled = row.binary(BinaryOperator::Mul, &two).unwrap();
    /// assert_eq!(doubled.to_string(), "[2, 4]");
    /// ```
    pub fn binary(&self, op: BinaryOperator, right: &Self) -> EvalResult<Self> {
        match self {
            Self::Scalar(a) => match right {
                Self::Scalar(b) => Ok(Self::Scalar(apply_scalar(op, *a, *b))),
                Self::Matrix(m) => Ok(Self::Matrix(m.map(|b| apply_scalar(op, *a, b)))),
                other => Err(RuntimeError::not_supported(op.to_string(), other.variant_name())),
            },
            Self::Matrix(m) => match right {
                Self::Scalar(b) => Ok(Self::Matrix(m.map(|a| apply_scalar(op, a, *b)))),
                Self::Matrix(n) => matrix_matrix(op, m, n).map(Self::Matrix),
                other => Err(RuntimeError::not_supported(op.to_string(), other.variant_name())),
            },
            Self::String(s) => match op {
                BinaryOperator::Add => Ok(Self::from(format!("{s}{right}"))),
                _ => Err(RuntimeError::not_supported(op.to_string(), "String")),
            },
            Self::Range(_) | Self::Void => {
                Err(RuntimeError::not_supported(op.to_string(), self.variant_name()))
            },
        }
    }

    /// Unary minus on scalars and, element-wise, on matrices.
    pub fn negate(&self) -> EvalResult<Self> {
        match self {
            Self::Scalar(z) => Ok(Self::Scalar(-*z)),
            Self::Matrix(m) => Ok(Self::Matrix(m.map(|z| -z))),
            other => Err(RuntimeError::not_supported("-", other.variant_name())),
        }
    }
}

fn matrix_matrix(op: BinaryOperator, left: &Matrix, right: &Matrix) -> EvalResult<Matrix> {
    use BinaryOperator::{Div, Mul, Pow};

    match op {
        Mul => left.matmul(right),
        Div | Pow => Err(RuntimeError::not_supported(op.to_string(), "Matrix")),
        _ => left.zip_with(right, |a, b| apply_scalar(op, a, b)),
    }
}

fn truth(value: bool) -> ComplexNumber {
    ComplexNumber::from(if value { 1.0 } else { 0.0 })
}

const fn is_nonzero(z: ComplexNumber) -> bool {
    z.real != 0.0 || z.imaginary != 0.0
}

/// Scalar kernel shared by every broadcast rule.
fn apply_scalar(op: BinaryOperator, a: ComplexNumber, b: ComplexNumber) -> ComplexNumber {
    use BinaryOperator::{
        Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Pow, Sub,
    };

    match op {
        Add => a + b,
        Sub => a - b,
        Mul => a * b,
        Div => a / b,
        Pow => power(a, b),
        Less => truth(a.real < b.real),
        Greater => truth(a.real > b.real),
        LessEqual => truth(a.real <= b.real),
        GreaterEqual => truth(a.real >= b.real),
        Equal => truth(a.real == b.real && a.imaginary == b.imaginary),
        NotEqual => truth(a.real != b.real || a.imaginary != b.imaginary),
        And => truth(is_nonzero(a) && is_nonzero(b)),
        Or => truth(is_nonzero(a) || is_nonzero(b)),
    }
}

fn power(base: ComplexNumber, exponent: ComplexNumber) -> ComplexNumber {
    if base.is_real()
       && exponent.is_real()
       && (base.real >= 0.0 || exponent.real.fract() == 0.0)
    {
        return ComplexNumber::from(base.real.powf(exponent.real));
    }
    base.powc(exponent)
}
