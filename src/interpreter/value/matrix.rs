use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::complex::ComplexNumber},
};

/// Largest element count a computed matrix may have.
///
/// Decoded matrices may carry any shape with no elements, such as
/// `2^40 x 0`; products of those must not allocate by shape alone.
pub const MAX_ELEMENTS: usize = 1 << 28;

/// A dense rectangular array of complex scalars.
///
/// Elements are stored row-major. The row and column counts are fixed at
/// construction; every operation returns a new matrix. Either count may be
/// zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows:    usize,
    columns: usize,
    data:    Rc<[ComplexNumber]>,
}

impl Matrix {
    /// Builds a matrix from row-major data.
    ///
    /// # Errors
    /// [`RuntimeError::DimensionMismatch`] if `data.len() != rows * columns`.
    ///
    /// # Example
    /// ```
    /// use numora::interpreter::value::{complex::ComplexNumber, matrix::Matrix};
    ///
    /// let m = Matrix::new(2, 1, vec![ComplexNumber::from(1.0), ComplexNumber::from(2.0)]).unwrap();
    /// assert_eq!(m.rows(), 2);
    /// assert!(m.is_vector());
    /// assert!(Matrix::new(2, 2, vec![]).is_err());
    /// ```
    pub fn new(rows: usize, columns: usize, data: Vec<ComplexNumber>) -> EvalResult<Self> {
        if rows.checked_mul(columns) != Some(data.len()) {
            return Err(RuntimeError::DimensionMismatch { left:  (rows, columns),
                                                         right: (data.len(), 1), });
        }
        Ok(Self { rows,
                  columns,
                  data: data.into() })
    }

    /// The `0 x 0` matrix.
    #[must_use]
    pub fn empty() -> Self {
        Self { rows:    0,
               columns: 0,
               data:    Rc::from(Vec::new()), }
    }

    /// A `1 x n` matrix.
    #[must_use]
    pub fn row_vector(data: Vec<ComplexNumber>) -> Self {
        Self { rows:    1,
               columns: data.len(),
               data:    data.into(), }
    }

    /// An `n x 1` matrix.
    #[must_use]
    pub fn column_vector(data: Vec<ComplexNumber>) -> Self {
        Self { rows:    data.len(),
               columns: 1,
               data:    data.into(), }
    }

    /// A `1 x 1` matrix.
    #[must_use]
    pub fn from_scalar(value: ComplexNumber) -> Self {
        Self::row_vector(vec![value])
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// `(rows, columns)`.
    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Total number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Exactly one of the two counts equals 1.
    #[must_use]
    pub const fn is_vector(&self) -> bool {
        (self.rows == 1) != (self.columns == 1)
    }

    /// Element at zero-based `(row, column)`.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<ComplexNumber> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.data.get(row * self.columns + column).copied()
    }

    /// Element at a zero-based column-major linear index.
    ///
    /// For vectors this is simply the n-th element.
    #[must_use]
    pub fn get_linear(&self, index: usize) -> Option<ComplexNumber> {
        if self.rows == 0 {
            return None;
        }
        self.get(index % self.rows, index / self.rows)
    }

    /// Row-major view of every element.
    #[must_use]
    pub fn elements(&self) -> &[ComplexNumber] {
        &self.data
    }

    /// Elements of one column, top to bottom.
    #[must_use]
    pub fn column(&self, column: usize) -> Vec<ComplexNumber> {
        (0..self.rows).filter_map(|row| self.get(row, column)).collect()
    }

    /// Applies `f` to every element, keeping the shape.
    #[must_use]
    pub fn map<F>(&self, f: F) -> Self
        where F: Fn(ComplexNumber) -> ComplexNumber
    {
        Self { rows:    self.rows,
               columns: self.columns,
               data:    self.data.iter().map(|&z| f(z)).collect(), }
    }

    /// Combines two equally shaped matrices element by element.
    ///
    /// # Errors
    /// [`RuntimeError::DimensionMismatch`] if the shapes differ.
    pub fn zip_with<F>(&self, other: &Self, f: F) -> EvalResult<Self>
        where F: Fn(ComplexNumber, ComplexNumber) -> ComplexNumber
    {
        if self.shape() != other.shape() {
            return Err(RuntimeError::DimensionMismatch { left:  self.shape(),
                                                         right: other.shape(), });
        }

        Ok(Self { rows:    self.rows,
                  columns: self.columns,
                  data:    self.data
                               .iter()
                               .zip(other.data.iter())
                               .map(|(&a, &b)| f(a, b))
                               .collect(), })
    }

    /// Standard matrix product.
    ///
    /// # Errors
    /// [`RuntimeError::DimensionMismatch`] unless `self.columns() ==
    /// other.rows()`, or if the product would hold more than
    /// [`MAX_ELEMENTS`] elements.
    ///
    /// # Example
    /// ```
    /// use numora::interpreter::value::{complex::ComplexNumber, matrix::Matrix};
    ///
    /// let a = Matrix::row_vector(vec![1.0.into(), 2.0.into()]);
    /// let b = Matrix::column_vector(vec![3.0.into(), 4.0.into()]);
    ///
    /// let product = a.matmul(&b).unwrap();
    /// assert_eq!(product.shape(), (1, 1));
    /// assert_eq!(product.get(0, 0), Some(ComplexNumber::from(11.0)));
    /// ```
    pub fn matmul(&self, other: &Self) -> EvalResult<Self> {
        if self.columns != other.rows {
            return Err(RuntimeError::DimensionMismatch { left:  self.shape(),
                                                         right: other.shape(), });
        }

        let Some(size) = self.rows
                             .checked_mul(other.columns)
                             .filter(|&size| size <= MAX_ELEMENTS)
        else {
            return Err(RuntimeError::DimensionMismatch { left:  self.shape(),
                                                         right: other.shape(), });
        };
        if size == 0 {
            return Ok(Self { rows:    self.rows,
                             columns: other.columns,
                             data:    Rc::from(Vec::new()), });
        }

        let mut data = Vec::with_capacity(size);
        for row in 0..self.rows {
            for column in 0..other.columns {
                let mut acc = ComplexNumber::new(0.0, 0.0);
                for k in 0..self.columns {
                    let a = self.data[row * self.columns + k];
                    let b = other.data[k * other.columns + column];
                    acc += a * b;
                }
                data.push(acc);
            }
        }

        Ok(Self { rows:    self.rows,
                  columns: other.columns,
                  data:    data.into(), })
    }

    /// Places matrices side by side. Empty pieces are skipped.
    ///
    /// # Errors
    /// [`RuntimeError::DimensionMismatch`] if the row counts differ.
    pub fn hstack(pieces: &[Self]) -> EvalResult<Self> {
        let pieces: Vec<&Self> = pieces.iter().filter(|m| !m.is_empty()).collect();
        let Some(first) = pieces.first() else {
            return Ok(Self::empty());
        };

        let rows = first.rows;
        let mut columns = 0;
        for piece in &pieces {
            if piece.rows != rows {
                return Err(RuntimeError::DimensionMismatch { left:  first.shape(),
                                                             right: piece.shape(), });
            }
            columns += piece.columns;
        }

        let mut data = Vec::with_capacity(rows * columns);
        for row in 0..rows {
            for piece in &pieces {
                let start = row * piece.columns;
                data.extend_from_slice(&piece.data[start..start + piece.columns]);
            }
        }

        Ok(Self { rows,
                  columns,
                  data: data.into() })
    }

    /// Stacks matrices on top of each other. Empty pieces are skipped.
    ///
    /// # Errors
    /// [`RuntimeError::DimensionMismatch`] if the column counts differ.
    pub fn vstack(pieces: &[Self]) -> EvalResult<Self> {
        let pieces: Vec<&Self> = pieces.iter().filter(|m| !m.is_empty()).collect();
        let Some(first) = pieces.first() else {
            return Ok(Self::empty());
        };

        let columns = first.columns;
        let mut data = Vec::new();
        let mut rows = 0;
        for piece in &pieces {
            if piece.columns != columns {
                return Err(RuntimeError::DimensionMismatch { left:  first.shape(),
                                                             right: piece.shape(), });
            }
            rows += piece.rows;
            data.extend_from_slice(&piece.data);
        }

        Ok(Self { rows,
                  columns,
                  data: data.into() })
    }
}

impl std::fmt::Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "[]");
        }

        write!(f, "[")?;
        for row in 0..self.rows {
            if row > 0 {
                write!(f, "; ")?;
            }
            for column in 0..self.columns {
                if column > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.data[row * self.columns + column])?;
            }
        }
        write!(f, "]")
    }
}
