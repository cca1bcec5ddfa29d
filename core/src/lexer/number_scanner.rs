use super::chars::is_digit;
use super::scanner::Scanner;
use super::token::sealed::TokenSink;
use super::token::{Span, Token};
use crate::errors::LexError;

impl Scanner {
    /// Scan a literal such as `5`, `-1`, `+0.5`, `3.` or `.14`.
    ///
    /// The first character (sign, digit or point) is taken as is; after that
    /// digits and a single decimal point are accepted. The first character
    /// that does not fit is left for the next token, which is how
    /// `-0.5-0.5` splits into two numbers.
    pub(super) fn scan_number(&mut self, token: &mut dyn Token) -> Result<(), LexError> {
        let start = self.cursor.pos();
        let mut seen_point = false;

        if let Some(first) = self.cursor.next_char() {
            seen_point = first == '.';
            token.push_char(first);
        }

        while let Some(c) = self.cursor.next_char() {
            if is_digit(c) || (c == '.' && !seen_point) {
                seen_point |= c == '.';
                token.push_char(c);
            } else {
                self.cursor.push_back();
                break;
            }
        }

        let span = Span::new(start, self.cursor.pos());
        token.set_span(span);
        let value = token
            .as_str()
            .parse::<f64>()
            .map_err(|_| LexError::InvalidNumber {
                text: token.as_str().to_owned(),
                span: span.into(),
            })?;
        token.set_number(value);
        Ok(())
    }
}
