use tracing::warn;

use super::chars::{is_special_char, is_whitespace};
use super::scanner::Scanner;
use super::token::sealed::TokenSink;
use super::token::{Span, Token, TokenKind};
use crate::errors::LexError;

impl Scanner {
    /// Scan a literal opened by `quote` at `start`. The contents are taken
    /// verbatim up to the next matching quote; there are no escapes.
    pub(super) fn scan_quoted(
        &mut self,
        token: &mut dyn Token,
        quote: char,
        start: usize,
    ) -> Result<(), LexError> {
        token.set_kind(TokenKind::String);
        loop {
            match self.cursor.next_char() {
                Some(c) if c == quote => break,
                Some(c) => token.push_char(c),
                None => {
                    warn!(start, %quote, "unterminated string literal");
                    token.reset();
                    return Err(LexError::UnterminatedString {
                        quote,
                        span: Span::new(start, self.cursor.pos()).into(),
                    });
                }
            }
        }
        token.set_span(Span::new(start, self.cursor.pos()));
        Ok(())
    }

    /// Scan an unquoted run up to whitespace or the end of the source. The
    /// terminating whitespace is consumed.
    pub(super) fn scan_bareword(&mut self, token: &mut dyn Token) {
        let start = self.cursor.pos();
        let mut end = start;
        token.set_kind(TokenKind::String);

        while let Some(c) = self.cursor.next_char() {
            if is_whitespace(c) {
                break;
            }
            if self.options.split_special_chars && is_special_char(c) {
                self.cursor.push_back();
                break;
            }
            token.push_char(c);
            end = self.cursor.pos();
        }

        token.set_span(Span::new(start, end));
    }

    /// A lone punctuation character, only used when special characters split.
    pub(super) fn scan_special(&mut self, token: &mut dyn Token, c: char, start: usize) {
        token.set_kind(TokenKind::String);
        token.push_char(c);
        token.set_span(Span::new(start, self.cursor.pos()));
    }
}
