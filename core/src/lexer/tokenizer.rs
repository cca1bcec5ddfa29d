use std::fmt;

use super::token::Token;
use crate::errors::LexError;

/// Pull-based scanner over a source held in memory.
///
/// One tokenizer owns one cursor; it is not meant to be shared between
/// concurrent scans.
pub trait Tokenizer: fmt::Debug {
    /// Create a token this tokenizer can fill in.
    fn create_token(&self) -> Box<dyn Token>;

    /// Replace the source and rewind to its start.
    fn set_source(&mut self, source: &str);

    /// Rewind to the start of the current source.
    fn reset(&mut self);

    fn source(&self) -> &str;

    /// Current byte offset of the scan.
    fn position(&self) -> usize;

    /// Reset `token` and fill it with the next token in the source.
    ///
    /// Returns `Ok(false)` once only whitespace and comments remain. An
    /// unterminated block comment or quoted string fails with the cursor left
    /// at the end of the source, so the following call returns `Ok(false)`.
    fn get_next_token(&mut self, token: &mut dyn Token) -> Result<bool, LexError>;
}
