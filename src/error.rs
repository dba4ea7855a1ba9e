/// Parsing errors.
///
/// Defines all error types that can occur while matching lexical units and
/// building expression trees. Parse errors are always raised before any
/// statement of the program evaluates.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, including
/// unsupported operator combinations, shape mismatches and bad indices.
pub mod runtime_error;
/// Binary codec errors.
///
/// Raised when a byte stream cannot be decoded into a complete value.
pub mod serialization_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use serialization_error::SerializationError;

/// Any failure surfaced to the top-level evaluation loop.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The program text could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A statement failed while evaluating.
    #[error("Error at offset {offset}: {source}")]
    Runtime {
        /// The underlying evaluation failure.
        source: RuntimeError,
        /// Byte offset of the top-level statement that failed.
        offset: usize,
    },
    /// A value could not be decoded.
    #[error(transparent)]
    Serialization(#[from] SerializationError),
}

impl Error {
    /// Returns the runtime error, if this is one.
    #[must_use]
    pub const fn as_runtime(&self) -> Option<&RuntimeError> {
        match self {
            Self::Runtime { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Returns the parse error, if this is one.
    #[must_use]
    pub const fn as_parse(&self) -> Option<&ParseError> {
        match self {
            Self::Parse(error) => Some(error),
            _ => None,
        }
    }
}
