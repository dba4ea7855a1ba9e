use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, first_token},
        parser::core::ParseResult,
    },
};

/// The kinds of lexical units the matcher can recognize.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnitKind {
    /// `{ ... }`
    ScopedBlock,
    /// An identifier immediately followed by a balanced `( ... )`.
    FunctionCall,
    /// `( ... )`
    Bracket,
    /// `[ ... ]`
    MatrixBracket,
    /// `"..."`
    StringLiteral,
    /// Real or imaginary number.
    Number,
    /// `:` or `$`.
    Selector,
    /// A bare name.
    Identifier,
    /// Arithmetic, comparison, logical or assignment operator.
    Operator,
    /// `;` or `,`.
    Separator,
}

/// One recognized span of program text.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Unit<'a> {
    /// What was recognized.
    pub kind:   UnitKind,
    /// The matched text, delimiters included.
    pub text:   &'a str,
    /// Absolute byte offset of `text` in the program.
    pub offset: usize,
}

impl<'a> Unit<'a> {
    /// Re-lexes the unit as a single token.
    ///
    /// Only meaningful for atomic kinds; bracketed kinds return their opening
    /// delimiter or, for function calls, the name.
    #[must_use]
    pub fn token(&self) -> Option<Token> {
        first_token(self.text).map(|(token, _)| token)
    }

    /// Text between the outer delimiters, with its absolute offset.
    ///
    /// For a function call this is the argument list without the name and
    /// the parentheses. Atomic units have no interior.
    #[must_use]
    pub fn interior(&self) -> Option<(&'a str, usize)> {
        let start = match self.kind {
            UnitKind::ScopedBlock | UnitKind::Bracket | UnitKind::MatrixBracket => 0,
            UnitKind::FunctionCall => self.text.find('(')?,
            _ => return None,
        };
        let inner = self.text.get(start + 1..self.text.len() - 1)?;
        Some((inner, self.offset + start + 1))
    }

    /// Name part of a function call.
    #[must_use]
    pub fn call_name(&self) -> Option<&'a str> {
        match self.kind {
            UnitKind::FunctionCall => self.text.find('(').map(|paren| &self.text[..paren]),
            _ => None,
        }
    }

    /// Returns `true` if this unit is the separator `symbol`.
    #[must_use]
    pub fn is_separator(&self, symbol: &str) -> bool {
        self.kind == UnitKind::Separator && self.text == symbol
    }

    /// Returns `true` if this unit is the operator `symbol`.
    #[must_use]
    pub fn is_operator(&self, symbol: &str) -> bool {
        self.kind == UnitKind::Operator && self.text == symbol
    }
}

/// Signature of a recognizer.
///
/// Receives the text starting at the cursor and the absolute offset of that
/// cursor. Returns the length of the match, `None` when the recognizer does
/// not apply, or an error for a form that starts here but is malformed.
pub type RecognizeFn = fn(&str, usize) -> ParseResult<Option<usize>>;

/// A recognizer for one unit kind.
#[derive(Debug, Copy, Clone)]
pub struct Recognizer {
    /// The kind produced on a match.
    pub kind:      UnitKind,
    /// The matching function.
    pub recognize: RecognizeFn,
}

/// The recognizer table, in priority order. The first recognizer that
/// matches wins.
pub const RECOGNIZERS: &[Recognizer] =
    &[Recognizer { kind:      UnitKind::ScopedBlock,
                   recognize: recognize_scoped_block, },
      Recognizer { kind:      UnitKind::FunctionCall,
                   recognize: recognize_function_call, },
      Recognizer { kind:      UnitKind::Bracket,
                   recognize: recognize_bracket, },
      Recognizer { kind:      UnitKind::MatrixBracket,
                   recognize: recognize_matrix_bracket, },
      Recognizer { kind:      UnitKind::StringLiteral,
                   recognize: recognize_string, },
      Recognizer { kind:      UnitKind::Number,
                   recognize: recognize_number, },
      Recognizer { kind:      UnitKind::Selector,
                   recognize: recognize_selector, },
      Recognizer { kind:      UnitKind::Identifier,
                   recognize: recognize_identifier, },
      Recognizer { kind:      UnitKind::Operator,
                   recognize: recognize_operator, },
      Recognizer { kind:      UnitKind::Separator,
                   recognize: recognize_separator, }];

/// Matches the next unit of `text` at or after `cursor` using
/// [`RECOGNIZERS`].
///
/// See [`match_next_with`].
pub fn match_next(text: &str,
                  cursor: usize,
                  base_offset: usize)
                  -> ParseResult<Option<(Unit<'_>, usize)>> {
    match_next_with(RECOGNIZERS, text, cursor, base_offset)
}

/// Matches the next unit of `text` at or after `cursor`.
///
/// Leading whitespace is skipped. The recognizers are tried in table order
/// and the first non-empty match wins.
///
/// # Parameters
/// - `table`: The recognizers, in priority order.
/// - `text`: The text being scanned.
/// - `cursor`: Byte position in `text` to start at.
/// - `base_offset`: Absolute offset of `text` within the whole program.
///
/// # Returns
/// - `Ok(Some((unit, next_cursor)))`: The matched unit and the position
///   right after it.
/// - `Ok(None)`: Only whitespace remains.
/// - `Err(ParseError::UnmatchedInput)`: Nothing matched at a non-whitespace
///   position.
///
/// # Example
/// ```
/// use numora::interpreter::matcher::{match_next, UnitKind};
///
/// let (unit, next) = match_next("  sin(x) + 1", 0, 0).unwrap().unwrap();
/// assert_eq!(unit.kind, UnitKind::FunctionCall);
/// assert_eq!(unit.text, "sin(x)");
/// assert_eq!(unit.offset, 2);
/// assert_eq!(next, 8);
///
/// assert!(match_next("   ", 0, 0).unwrap().is_none());
/// assert!(match_next("#", 0, 0).is_err());
/// ```
pub fn match_next_with<'a>(table: &[Recognizer],
                           text: &'a str,
                           cursor: usize,
                           base_offset: usize)
                           -> ParseResult<Option<(Unit<'a>, usize)>> {
    let rest = text.get(cursor..).unwrap_or("");
    let trimmed = rest.trim_start();
    let start = cursor + (rest.len() - trimmed.len());

    let Some(found) = trimmed.chars().next() else {
        return Ok(None);
    };

    for recognizer in table {
        if let Some(len) = (recognizer.recognize)(trimmed, base_offset + start)?
           && len > 0
        {
            let unit = Unit { kind:   recognizer.kind,
                              text:   &text[start..start + len],
                              offset: base_offset + start, };
            return Ok(Some((unit, start + len)));
        }
    }

    Err(ParseError::UnmatchedInput { found,
                                     offset: base_offset + start })
}

/// Splits `text` into units with [`RECOGNIZERS`].
pub fn match_all(text: &str, base_offset: usize) -> ParseResult<Vec<Unit<'_>>> {
    let mut units = Vec::new();
    let mut cursor = 0;
    while let Some((unit, next)) = match_next(text, cursor, base_offset)? {
        units.push(unit);
        cursor = next;
    }
    Ok(units)
}

/// Length of the balanced `open ... close` span at the start of `text`.
///
/// Only the given delimiter pair is counted. String literals are skipped so
/// that delimiters inside quotes do not count.
///
/// # Errors
/// [`ParseError::UnbalancedBrackets`] if the input ends with the span still
/// open.
///
/// # Example
/// ```
/// use numora::interpreter::matcher::balanced_span;
///
/// assert_eq!(balanced_span("(a(b)c) + 1", '(', ')', 0).unwrap(), Some(7));
/// assert_eq!(balanced_span("x", '(', ')', 0).unwrap(), None);
/// assert!(balanced_span("{ a = 1;", '{', '}', 0).is_err());
/// ```
pub fn balanced_span(text: &str,
                     open: char,
                     close: char,
                     offset: usize)
                     -> ParseResult<Option<usize>> {
    if !text.starts_with(open) {
        return Ok(None);
    }

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (index, c) in text.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {},
            }
            continue;
        }

        if c == '"' {
            in_string = true;
        } else if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                return Ok(Some(index + c.len_utf8()));
            }
        }
    }

    Err(ParseError::UnbalancedBrackets { open, offset })
}

fn recognize_scoped_block(text: &str, offset: usize) -> ParseResult<Option<usize>> {
    balanced_span(text, '{', '}', offset)
}

fn recognize_bracket(text: &str, offset: usize) -> ParseResult<Option<usize>> {
    balanced_span(text, '(', ')', offset)
}

fn recognize_matrix_bracket(text: &str, offset: usize) -> ParseResult<Option<usize>> {
    balanced_span(text, '[', ']', offset)
}

fn recognize_function_call(text: &str, offset: usize) -> ParseResult<Option<usize>> {
    let Some((Token::Identifier(_), name_len)) = first_token(text) else {
        return Ok(None);
    };
    let arguments = &text[name_len..];
    Ok(balanced_span(arguments, '(', ')', offset + name_len)?.map(|len| name_len + len))
}

/// Wraps a token predicate as a recognizer body.
fn recognize_token<F>(text: &str, accepts: F) -> Option<usize>
    where F: Fn(&Token) -> bool
{
    first_token(text).and_then(|(token, len)| accepts(&token).then_some(len))
}

fn recognize_string(text: &str, _offset: usize) -> ParseResult<Option<usize>> {
    Ok(recognize_token(text, |token| matches!(token, Token::Text(_))))
}

fn recognize_number(text: &str, _offset: usize) -> ParseResult<Option<usize>> {
    Ok(recognize_token(text, |token| matches!(token, Token::Real(_) | Token::Imaginary(_))))
}

fn recognize_selector(text: &str, _offset: usize) -> ParseResult<Option<usize>> {
    Ok(recognize_token(text, |token| matches!(token, Token::Colon | Token::Dollar)))
}

fn recognize_identifier(text: &str, _offset: usize) -> ParseResult<Option<usize>> {
    Ok(recognize_token(text, |token| matches!(token, Token::Identifier(_))))
}

fn recognize_operator(text: &str, _offset: usize) -> ParseResult<Option<usize>> {
    Ok(recognize_token(text, Token::is_operator))
}

fn recognize_separator(text: &str, _offset: usize) -> ParseResult<Option<usize>> {
    Ok(recognize_token(text, |token| matches!(token, Token::Semicolon | Token::Comma)))
}
