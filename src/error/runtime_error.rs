/// Represents all errors that can occur during evaluation.
///
/// Runtime errors are position-free; the top-level loop attaches the offset
/// of the statement that failed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuntimeError {
    /// A name was not bound anywhere in the scope chain.
    #[error("Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// A selector token that resolves through the scope chain was unbound.
    #[error("Special variable '{name}' has no value yet.")]
    UnboundSpecialVariable {
        /// The selector text.
        name: String,
    },
    /// Called a name that is neither a variable nor a registered function.
    #[error("Unknown function '{name}'.")]
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// The operator (or function) has no rule for this operand variant.
    #[error("Operation '{operator}' is not supported on {variant}.")]
    OperationNotSupported {
        /// The operator symbol or function name.
        operator: String,
        /// The variant that has no rule for it.
        variant:  &'static str,
    },
    /// Matrix shapes do not agree for the requested operation.
    #[error("Dimension mismatch: {left:?} and {right:?} (rows, columns).")]
    DimensionMismatch {
        /// `(rows, columns)` of the left operand.
        left:  (usize, usize),
        /// `(rows, columns)` of the right operand.
        right: (usize, usize),
    },
    /// An index was fractional, negative or past the end.
    #[error("Index {index} is out of range for length {length}.")]
    IndexOutOfRange {
        /// The requested index.
        index:  f64,
        /// The length of the indexed value.
        length: usize,
    },
    /// A range could not be materialized into a sequence.
    #[error("Invalid range: {details}.")]
    InvalidRange {
        /// Details about why the range is invalid.
        details: String,
    },
}

impl RuntimeError {
    /// Shorthand for [`RuntimeError::OperationNotSupported`].
    pub fn not_supported(operator: impl Into<String>, variant: &'static str) -> Self {
        Self::OperationNotSupported { operator: operator.into(),
                                      variant }
    }
}
