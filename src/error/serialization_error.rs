/// Represents all errors that can occur while decoding a serialized value.
///
/// Decoding is all-or-nothing: whenever one of these is returned, no value
/// was constructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SerializationError {
    /// The stream ended before a field could be read.
    #[error("Serialization error: needed {needed} more byte(s) at position {position}, found {available}.")]
    Truncated {
        /// Read position in the stream.
        position:  usize,
        /// Bytes the field requires.
        needed:    usize,
        /// Bytes that were left.
        available: usize,
    },
    /// The variant tag is not one this codec knows.
    #[error("Serialization error: unknown variant tag {tag} at position {position}.")]
    UnknownTag {
        /// The tag byte.
        tag:      u8,
        /// Read position of the tag.
        position: usize,
    },
    /// A nested value has a variant its container cannot hold.
    #[error("Serialization error: expected a {expected} element at position {position}.")]
    UnexpectedElement {
        /// The variant the container requires.
        expected: &'static str,
        /// Read position of the element.
        position: usize,
    },
    /// String payload is not valid UTF-8.
    #[error("Serialization error: string payload at position {position} is not valid UTF-8.")]
    InvalidUtf8 {
        /// Read position of the payload.
        position: usize,
    },
    /// A boolean flag byte held something other than `0` or `1`.
    #[error("Serialization error: invalid flag byte {flag} at position {position}.")]
    InvalidFlag {
        /// The flag byte.
        flag:     u8,
        /// Read position of the flag.
        position: usize,
    },
    /// A length counter does not fit this platform or overflows.
    #[error("Serialization error: length counter at position {position} is too large.")]
    LengthOverflow {
        /// Read position of the counter.
        position: usize,
    },
    /// Bytes remained after a complete value was read.
    #[error("Serialization error: {remaining} trailing byte(s) after the value.")]
    TrailingBytes {
        /// Number of unread bytes.
        remaining: usize,
    },
}
