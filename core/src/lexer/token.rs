use std::fmt;

use serde::Serialize;

/// Byte offset span in the source string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

/// Classification of a scanned token.
///
/// Punctuation and unquoted words are both `String`; `None` only appears on a
/// fresh or reset token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    #[default]
    None,
    String,
    Number,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::None => "none",
            TokenKind::String => "string",
            TokenKind::Number => "number",
        };
        f.pad(name)
    }
}

/// Read access to the token a tokenizer fills in.
///
/// A tokenizer overwrites the same token on every call to `get_next_token`,
/// so anything that must outlive the next call has to be copied out first,
/// for example with [`Token::snapshot`].
pub trait Token: sealed::TokenSink + fmt::Debug {
    fn kind(&self) -> TokenKind;

    /// Where the token was found. Quoted strings include their quotes.
    fn span(&self) -> Span;

    /// Clear the text and return to `TokenKind::None` with a zero value.
    fn reset(&mut self);

    /// Exact, case-sensitive comparison against the scanned text.
    fn is_string(&self, s: &str) -> bool;

    /// The scanned text. For numbers this is the literal as written, not a
    /// reformatted value.
    fn as_str(&self) -> &str;

    /// The numeric value; 0 unless the token is a `Number`.
    fn to_float(&self) -> f64;

    /// Integer view of the numeric value, obtained by formatting the float and
    /// parsing the leading integer of that text. Values that format with an
    /// exponent keep only the mantissa's integer part (`1e21` gives 1).
    fn to_int(&self) -> i64;

    fn snapshot(&self) -> OwnedToken {
        let kind = self.kind();
        OwnedToken {
            kind,
            text: self.as_str().to_owned(),
            value: (kind == TokenKind::Number).then(|| self.to_float()),
            span: self.span(),
        }
    }
}

pub(crate) mod sealed {
    use super::{Span, TokenKind};

    /// Mutation hooks reserved for the scanner.
    pub trait TokenSink {
        fn push_char(&mut self, c: char);
        /// Store a parsed value and mark the token as a number.
        fn set_number(&mut self, value: f64);
        fn set_kind(&mut self, kind: TokenKind);
        fn set_span(&mut self, span: Span);
    }
}

/// An owned copy of a token, detached from the tokenizer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OwnedToken {
    pub kind: TokenKind,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    pub span: Span,
}

/// Reusable token storage; the buffer keeps its capacity across resets.
#[derive(Debug, Clone, Default)]
pub(crate) struct TokenBuffer {
    kind: TokenKind,
    text: String,
    value: f64,
    span: Span,
}

impl TokenBuffer {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

impl Token for TokenBuffer {
    fn kind(&self) -> TokenKind {
        self.kind
    }

    fn span(&self) -> Span {
        self.span
    }

    fn reset(&mut self) {
        self.text.clear();
        self.kind = TokenKind::None;
        self.value = 0.0;
        self.span = Span::default();
    }

    fn is_string(&self, s: &str) -> bool {
        self.text == s
    }

    fn as_str(&self) -> &str {
        &self.text
    }

    fn to_float(&self) -> f64 {
        self.value
    }

    fn to_int(&self) -> i64 {
        parse_int_prefix(&format!("{:?}", self.value))
    }
}

impl sealed::TokenSink for TokenBuffer {
    fn push_char(&mut self, c: char) {
        self.text.push(c);
    }

    fn set_number(&mut self, value: f64) {
        self.value = value;
        self.kind = TokenKind::Number;
    }

    fn set_kind(&mut self, kind: TokenKind) {
        self.kind = kind;
    }

    fn set_span(&mut self, span: Span) {
        self.span = span;
    }
}

/// Parse the leading `[sign]digits` run of `text` and ignore the rest.
/// Text without such a run parses as 0.
pub(crate) fn parse_int_prefix(text: &str) -> i64 {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    let magnitude = rest[..digits].parse::<i64>().unwrap_or(0);
    if negative { -magnitude } else { magnitude }
}
