//! Construction entry points. Callers only ever see the [`Tokenizer`] and
//! [`Token`] traits; the concrete scanner and token buffer stay private.

use crate::lexer::options::LexerOptions;
use crate::lexer::scanner::Scanner;
use crate::lexer::token::{Token, TokenBuffer};
use crate::lexer::tokenizer::Tokenizer;

pub fn create_tokenizer() -> Box<dyn Tokenizer> {
    create_tokenizer_with(LexerOptions::default())
}

pub fn create_tokenizer_with(options: LexerOptions) -> Box<dyn Tokenizer> {
    Box::new(Scanner::new(options))
}

pub fn create_token() -> Box<dyn Token> {
    Box::new(TokenBuffer::new())
}
