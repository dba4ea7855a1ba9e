use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{core::Value, matrix::Matrix, range::RangeValue},
    },
};

impl Context {
    /// Evaluates a matrix literal.
    ///
    /// Cells may be scalars, matrices or bounded ranges; see
    /// [`assemble_matrix`].
    pub(crate) fn eval_matrix(&mut self, rows: &[Vec<Expr>]) -> EvalResult<Value> {
        let rows = self.eval_rows(rows)?;
        assemble_matrix(&rows).map(Value::Matrix)
    }

    /// Evaluates call arguments and aggregates them into one value.
    pub(crate) fn eval_arguments(&mut self, rows: &[Vec<Expr>]) -> EvalResult<Value> {
        let rows = self.eval_rows(rows)?;
        aggregate_arguments(rows)
    }

    /// Evaluates `start:end` or `start:step:end` into a lazy range.
    ///
    /// Every bound must be a real scalar.
    pub(crate) fn eval_range(&mut self,
                             start: &Expr,
                             step: Option<&Expr>,
                             end: &Expr)
                             -> EvalResult<Value> {
        let start = self.eval_bound(start)?;
        let step = match step {
            Some(step) => self.eval_bound(step)?,
            None => 1.0,
        };
        let end = self.eval_bound(end)?;
        Ok(Value::Range(RangeValue::new(start, step, end)))
    }

    fn eval_bound(&mut self, expr: &Expr) -> EvalResult<f64> {
        let z = self.eval(expr)?.as_scalar(":")?;
        if !z.is_real() {
            return Err(RuntimeError::InvalidRange { details: format!("bound {z} is not real") });
        }
        Ok(z.real)
    }

    fn eval_rows(&mut self, rows: &[Vec<Expr>]) -> EvalResult<Vec<Vec<Value>>> {
        rows.iter()
            .map(|row| {
                row.iter()
                   .map(|cell| self.eval(cell))
                   .collect::<EvalResult<Vec<_>>>()
            })
            .collect()
    }
}

/// Combines evaluated call arguments into the single function argument.
///
/// One argument is passed through unchanged, no arguments give the empty
/// matrix, and several are assembled like a matrix literal.
///
/// # Example
/// ```
/// use numora::interpreter::{evaluator::utils::aggregate_arguments, value::core::Value};
///
/// let single = aggregate_arguments(vec![vec![Value::from("text")]]).unwrap();
/// assert_eq!(single, Value::from("text"));
///
/// let pair = aggregate_arguments(vec![vec![Value::from(1.0), Value::from(2.0)]]).unwrap();
/// assert_eq!(pair.to_string(), "[1, 2]");
///
/// let none = aggregate_arguments(vec![]).unwrap();
/// assert_eq!(none.len(), 0);
/// ```
pub fn aggregate_arguments(rows: Vec<Vec<Value>>) -> EvalResult<Value> {
    if let [row] = rows.as_slice()
       && let [single] = row.as_slice()
    {
        return Ok(single.clone());
    }
    assemble_matrix(&rows).map(Value::Matrix)
}

/// Assembles rows of cells into one matrix.
///
/// Scalars are `1 x 1` blocks, matrices are used as they are and bounded
/// ranges become row vectors. Cells of one row are placed side by side and
/// must agree in height; rows are stacked and must agree in width. Empty
/// cells contribute nothing.
///
/// # Errors
/// - [`RuntimeError::DimensionMismatch`] for ragged blocks.
/// - [`RuntimeError::OperationNotSupported`] for strings, void and the
///   unbounded range.
pub fn assemble_matrix(rows: &[Vec<Value>]) -> EvalResult<Matrix> {
    let mut stacked = Vec::with_capacity(rows.len());
    for row in rows {
        let blocks = row.iter()
                        .map(matrix_block)
                        .collect::<EvalResult<Vec<_>>>()?;
        stacked.push(Matrix::hstack(&blocks)?);
    }
    Matrix::vstack(&stacked)
}

fn matrix_block(value: &Value) -> EvalResult<Matrix> {
    match value {
        Value::Scalar(z) => Ok(Matrix::from_scalar(*z)),
        Value::Matrix(m) => Ok(m.clone()),
        Value::Range(r) if !r.all => Ok(Matrix::row_vector(r.to_scalars()?)),
        other => Err(RuntimeError::not_supported("[]", other.variant_name())),
    }
}
