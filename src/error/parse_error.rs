/// Represents all errors that can occur while matching or parsing.
///
/// Every variant carries the absolute byte offset into the original program
/// text, including errors found while reparsing the interior of a bracket.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// No recognizer matched at a non-whitespace position.
    #[error("Error at offset {offset}: Unmatched input starting with '{found}'.")]
    UnmatchedInput {
        /// The first character that could not be matched.
        found:  char,
        /// Offset of the unmatched character.
        offset: usize,
    },
    /// A bracketed form reached the end of input with open delimiters left.
    #[error("Error at offset {offset}: Unbalanced brackets, '{open}' is never closed.")]
    UnbalancedBrackets {
        /// The opening delimiter that was left open.
        open:   char,
        /// Offset of the opening delimiter.
        offset: usize,
    },
    /// Brackets, blocks or operator chains nest deeper than the parser allows.
    #[error("Error at offset {offset}: Expression nests deeper than {limit} levels.")]
    TooDeeplyNested {
        /// The configured nesting limit.
        limit:  usize,
        /// Offset of the unit that crossed the limit.
        offset: usize,
    },
    /// A lexical unit appeared where it cannot be used.
    #[error("Error at offset {offset}: Unexpected '{found}'.")]
    UnexpectedUnit {
        /// Source text of the offending unit.
        found:  String,
        /// Offset of the offending unit.
        offset: usize,
    },
    /// An operand was expected but the statement ended.
    #[error("Error at offset {offset}: Unexpected end of expression.")]
    UnexpectedEnd {
        /// Offset where the operand was expected.
        offset: usize,
    },
}

impl ParseError {
    /// Offset of the source position the error refers to.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::UnmatchedInput { offset, .. }
            | Self::UnbalancedBrackets { offset, .. }
            | Self::TooDeeplyNested { offset, .. }
            | Self::UnexpectedUnit { offset, .. }
            | Self::UnexpectedEnd { offset } => *offset,
        }
    }
}
