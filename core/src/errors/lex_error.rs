use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Failures raised while scanning a source.
///
/// Running out of input between tokens is not an error; it is reported by
/// `get_next_token` returning `Ok(false)`.
#[derive(Debug, Error, Diagnostic)]
pub enum LexError {
    #[error("unterminated block comment")]
    #[diagnostic(
        code(doomtok::unterminated_comment),
        help("close the comment with `*/`")
    )]
    UnterminatedComment {
        #[label("comment starts here")]
        span: SourceSpan,
    },

    #[error("unterminated string literal (missing closing {quote})")]
    #[diagnostic(
        code(doomtok::unterminated_string),
        help("quoted strings end at the next matching quote; escapes are not supported")
    )]
    UnterminatedString {
        quote: char,
        #[label("string starts here")]
        span: SourceSpan,
    },

    #[error("invalid number literal '{text}'")]
    #[diagnostic(code(doomtok::invalid_number))]
    InvalidNumber {
        text: String,
        #[label("here")]
        span: SourceSpan,
    },
}

impl LexError {
    pub fn span(&self) -> SourceSpan {
        match self {
            LexError::UnterminatedComment { span }
            | LexError::UnterminatedString { span, .. }
            | LexError::InvalidNumber { span, .. } => *span,
        }
    }

    /// Byte offset where the offending construct starts.
    pub fn offset(&self) -> usize {
        self.span().offset()
    }
}
