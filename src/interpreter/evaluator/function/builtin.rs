use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{
            complex::{ComplexNumber, ZERO},
            core::Value,
            matrix::Matrix,
        },
    },
    util::num::usize_to_f64_lossy,
};

/// Applies a scalar rule to a Scalar, or to every element of a Matrix.
///
/// # Errors
/// `OperationNotSupported` naming `name` for any other variant.
pub fn map_elements(name: &str,
                    argument: &Value,
                    rule: fn(ComplexNumber) -> ComplexNumber)
                    -> EvalResult<Value> {
    match argument {
        Value::Scalar(z) => Ok(Value::Scalar(rule(*z))),
        Value::Matrix(m) => Ok(Value::Matrix(m.map(rule))),
        other => Err(RuntimeError::not_supported(name, other.variant_name())),
    }
}

/// Applies a vector rule.
///
/// - A Scalar is a one-element vector.
/// - A vector (or `1 x 1`) Matrix reduces to one Scalar.
/// - A general Matrix reduces each column on its own, giving a single-row
///   Matrix with one entry per column.
/// - An empty Matrix stays empty.
///
/// The rule is never called with an empty slice.
///
/// # Errors
/// `OperationNotSupported` naming `name` for any other variant.
///
/// # Example
/// ```
/// use numora::interpreter::{
///     evaluator::function::builtin::reduce_vectors,
///     value::{complex::ComplexNumber, core::Value, matrix::Matrix},
/// };
///
/// let first = |values: &[ComplexNumber]| values[0];
/// let m = Matrix::new(2, 2, vec![1.0.into(), 2.0.into(), 3.0.into(), 4.0.into()]).unwrap();
///
/// let firsts = reduce_vectors("first", &Value::from(m), first).unwrap();
/// assert_eq!(firsts.to_string(), "[1, 2]");
/// ```
pub fn reduce_vectors(name: &str,
                      argument: &Value,
                      rule: fn(&[ComplexNumber]) -> ComplexNumber)
                      -> EvalResult<Value> {
    match argument {
        Value::Scalar(z) => Ok(Value::Scalar(rule(&[*z]))),
        Value::Matrix(m) if m.is_empty() => Ok(Value::Matrix(Matrix::empty())),
        Value::Matrix(m) if m.is_vector() || m.shape() == (1, 1) => {
            Ok(Value::Scalar(rule(m.elements())))
        },
        Value::Matrix(m) => {
            let reduced = (0..m.columns()).map(|column| rule(&m.column(column)))
                                          .collect();
            Ok(Value::Matrix(Matrix::row_vector(reduced)))
        },
        other => Err(RuntimeError::not_supported(name, other.variant_name())),
    }
}

/// Generates an element-wise builtin from a scalar rule.
///
/// # Example
/// ```
/// use numora::interpreter::{evaluator::function::builtin::sin, value::core::Value};
///
/// let r = sin(&Value::from(std::f64::consts::PI / 2.0)).unwrap();
/// assert_eq!(r, Value::from(1.0));
/// ```
macro_rules! elementwise_builtin {
    ($fname:ident, $rule:expr) => {
        pub fn $fname(argument: &Value) -> EvalResult<Value> {
            map_elements(stringify!($fname), argument, $rule)
        }
    };
}

elementwise_builtin!(sqrt, ComplexNumber::sqrt);
elementwise_builtin!(exp, ComplexNumber::exp);
elementwise_builtin!(ln, ComplexNumber::ln);
elementwise_builtin!(sin, ComplexNumber::sin);
elementwise_builtin!(cos, ComplexNumber::cos);
elementwise_builtin!(tan, ComplexNumber::tan);
elementwise_builtin!(sinh, ComplexNumber::sinh);
elementwise_builtin!(cosh, ComplexNumber::cosh);
elementwise_builtin!(tanh, ComplexNumber::tanh);
elementwise_builtin!(arsinh, ComplexNumber::arsinh);
elementwise_builtin!(abs, |z: ComplexNumber| ComplexNumber::from(z.abs()));
elementwise_builtin!(conj, |z: ComplexNumber| z.conj());

/// Sums a vector, or each column of a matrix.
///
/// # Example
/// ```
/// use numora::interpreter::{
///     evaluator::function::builtin::sum,
///     value::{core::Value, matrix::Matrix},
/// };
///
/// let v = Matrix::row_vector(vec![1.0.into(), 2.0.into(), 3.5.into()]);
/// assert_eq!(sum(&Value::from(v)).unwrap(), Value::from(6.5));
/// ```
pub fn sum(argument: &Value) -> EvalResult<Value> {
    reduce_vectors("sum", argument, |values| {
        values.iter().fold(ZERO, |acc, &z| acc + z)
    })
}

/// Number of elements of a scalar, matrix, string or bounded range.
pub fn length(argument: &Value) -> EvalResult<Value> {
    match argument {
        Value::Range(r) if r.all => Err(RuntimeError::not_supported("length", "Range")),
        Value::Range(r) => Ok(Value::from(usize_to_f64_lossy(r.count()?))),
        Value::Void => Err(RuntimeError::not_supported("length", "Void")),
        other => Ok(Value::from(usize_to_f64_lossy(other.len()))),
    }
}
