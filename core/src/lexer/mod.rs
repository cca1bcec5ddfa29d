pub mod chars;
pub mod cursor;
mod number_scanner;
pub mod options;
pub(crate) mod scanner;
mod string_scanner;
pub mod token;
pub mod tokenizer;

use crate::errors::LexError;
use crate::factory;
use options::LexerOptions;
use token::OwnedToken;

/// Tokenize a whole source into owned tokens.
pub fn lex(source: &str) -> Result<Vec<OwnedToken>, LexError> {
    lex_with(source, LexerOptions::default())
}

/// Tokenize a whole source with explicit scanner options.
pub fn lex_with(source: &str, options: LexerOptions) -> Result<Vec<OwnedToken>, LexError> {
    let mut tokenizer = factory::create_tokenizer_with(options);
    let mut token = tokenizer.create_token();
    tokenizer.set_source(source);

    let mut tokens = Vec::new();
    while tokenizer.get_next_token(&mut *token)? {
        tokens.push(token.snapshot());
    }
    Ok(tokens)
}
