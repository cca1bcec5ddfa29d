use serde::Deserialize;

/// Knobs for the scanner. The defaults reproduce the classic Doom3 lexer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LexerOptions {
    /// Emit `( ) [ ] { } ,` as standalone tokens even when they touch other
    /// characters. When off, punctuation is only separated by whitespace and
    /// `foo(` scans as one bareword.
    pub split_special_chars: bool,
}

impl LexerOptions {
    pub fn with_split_special_chars(mut self, split: bool) -> Self {
        self.split_special_chars = split;
        self
    }
}
