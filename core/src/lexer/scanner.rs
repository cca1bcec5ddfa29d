use tracing::{debug, trace, warn};

use super::chars::{is_digit, is_special_char, is_whitespace};
use super::cursor::Cursor;
use super::options::LexerOptions;
use super::token::{Span, Token, TokenBuffer};
use super::tokenizer::Tokenizer;
use crate::errors::LexError;

/// Scans Doom3-style declaration text one token at a time.
#[derive(Debug, Default)]
pub(crate) struct Scanner {
    pub(super) cursor: Cursor,
    pub(super) options: LexerOptions,
}

impl Scanner {
    pub(crate) fn new(options: LexerOptions) -> Self {
        Self {
            cursor: Cursor::default(),
            options,
        }
    }

    /// Consume whitespace and return the first other character.
    fn skip_whitespace(&mut self) -> Option<char> {
        loop {
            let c = self.cursor.next_char()?;
            if !is_whitespace(c) {
                return Some(c);
            }
        }
    }

    /// Skip through the next newline. Running out of input is fine here.
    fn skip_line_comment(&mut self, start: usize) {
        while let Some(c) = self.cursor.next_char() {
            if c == '\n' {
                break;
            }
        }
        trace!(start, end = self.cursor.pos(), "skipped line comment");
    }

    /// Skip through the closing `*/`. Entered with the opening `/` consumed.
    fn skip_block_comment(&mut self, start: usize) -> Result<(), LexError> {
        self.cursor.next_char(); // '*'
        loop {
            match self.cursor.next_char() {
                Some('*') if self.cursor.peek_char() == Some('/') => {
                    self.cursor.next_char();
                    break;
                }
                Some(_) => {}
                None => {
                    warn!(start, "unterminated block comment");
                    return Err(LexError::UnterminatedComment {
                        span: Span::new(start, self.cursor.pos()).into(),
                    });
                }
            }
        }
        trace!(start, end = self.cursor.pos(), "skipped block comment");
        Ok(())
    }

    /// Whether `c`, already consumed, opens a number literal.
    fn starts_number(&self, c: char) -> bool {
        match c {
            c if is_digit(c) => true,
            '.' => self.cursor.peek_char().is_some_and(is_digit),
            '+' | '-' => match self.cursor.peek_char() {
                Some('.') => self.cursor.peek_nth(1).is_some_and(is_digit),
                next => next.is_some_and(is_digit),
            },
            _ => false,
        }
    }

}

impl Tokenizer for Scanner {
    fn create_token(&self) -> Box<dyn Token> {
        Box::new(TokenBuffer::new())
    }

    fn set_source(&mut self, source: &str) {
        self.cursor.set_source(source);
        debug!(len = source.len(), "source set");
    }

    fn reset(&mut self) {
        self.cursor.reset();
    }

    fn source(&self) -> &str {
        self.cursor.source()
    }

    fn position(&self) -> usize {
        self.cursor.pos()
    }

    fn get_next_token(&mut self, token: &mut dyn Token) -> Result<bool, LexError> {
        token.reset();

        loop {
            let Some(c) = self.skip_whitespace() else {
                return Ok(false);
            };
            let start = self.cursor.pos() - c.len_utf8();

            match c {
                '/' if self.cursor.peek_char() == Some('/') => self.skip_line_comment(start),
                '/' if self.cursor.peek_char() == Some('*') => self.skip_block_comment(start)?,
                c if self.starts_number(c) => {
                    self.cursor.push_back();
                    self.scan_number(token)?;
                    break;
                }
                '"' | '\'' => {
                    self.scan_quoted(token, c, start)?;
                    break;
                }
                c if self.options.split_special_chars && is_special_char(c) => {
                    self.scan_special(token, c, start);
                    break;
                }
                _ => {
                    self.cursor.push_back();
                    self.scan_bareword(token);
                    break;
                }
            }
        }

        let span = token.span();
        trace!(
            kind = %token.kind(),
            text = token.as_str(),
            start = span.start,
            end = span.end,
            "token"
        );
        Ok(true)
    }
}
