use logos::Logos;

/// Represents a lexical token in the source input.
///
/// The matcher uses these tokens to recognize atomic units at a given
/// position; bracketed forms are recognized structurally and never become a
/// single token.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `3`, `3.14`, `.5` or `2.1e-10`.
    #[regex(r"[0-9]+", parse_float)]
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", parse_float)]
    Real(f64),
    /// Imaginary literal tokens, such as `2i`, `.5j` or `1e3i`.
    #[regex(r"([0-9]+(\.[0-9]+)?|\.[0-9]+)([eE][+-]?[0-9]+)?[ij]", parse_imaginary)]
    Imaginary(f64),
    /// String literal tokens, such as `"hello"`. Escapes are resolved.
    #[regex(r#""([^"\\]|\\.)*""#, parse_text)]
    Text(String),
    /// Identifier tokens; variable or function names such as `x` or `sin`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `$`
    #[token("$")]
    Dollar,
    /// `:`
    #[token(":")]
    Colon,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `&&`
    #[token("&&")]
    AndAnd,
    /// `||`
    #[token("||")]
    PipePipe,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,
}

impl Token {
    /// Returns `true` for the operator tokens, including `=`.
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self,
                 Self::Plus
                 | Self::Minus
                 | Self::Star
                 | Self::Slash
                 | Self::Caret
                 | Self::Equals
                 | Self::EqualEqual
                 | Self::BangEqual
                 | Self::LessEqual
                 | Self::GreaterEqual
                 | Self::Less
                 | Self::Greater
                 | Self::AndAnd
                 | Self::PipePipe)
    }
}

/// Lexes the token that starts exactly at the beginning of `text`.
///
/// # Returns
/// - `Some((token, len))`: The token and its length in bytes.
/// - `None`: If `text` is empty, starts with whitespace or starts with
///   something that is not a token.
///
/// # Example
/// ```
/// use numora::interpreter::lexer::{first_token, Token};
///
/// assert_eq!(first_token("2.5i + x"), Some((Token::Imaginary(2.5), 4)));
/// assert_eq!(first_token("<= 3"), Some((Token::LessEqual, 2)));
/// assert_eq!(first_token(" x"), None);
/// assert_eq!(first_token("#"), None);
/// ```
#[must_use]
pub fn first_token(text: &str) -> Option<(Token, usize)> {
    let mut lexer = Token::lexer(text);
    match lexer.next() {
        Some(Ok(token)) if lexer.span().start == 0 => Some((token, lexer.span().end)),
        _ => None,
    }
}

/// Parses a floating-point literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an imaginary literal, dropping the trailing `i` or `j`.
fn parse_imaginary(lex: &logos::Lexer<Token>) -> Option<f64> {
    let slice = lex.slice();
    slice[..slice.len() - 1].parse().ok()
}

/// Strips the quotes of a string literal and resolves `\"`, `\\`, `\n` and
/// `\t`. Any other escaped character stands for itself.
fn parse_text(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    let inner = &slice[1..slice.len() - 1];

    let mut text = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            text.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => text.push('\n'),
            Some('t') => text.push('\t'),
            Some(other) => text.push(other),
            None => {},
        }
    }
    text
}
