//! Tokenizer for Doom3-engine style declaration files such as `.md5mesh`,
//! `.md5anim` and material decls.
//!
//! ```
//! use doomtok::{Token, Tokenizer, TokenKind};
//!
//! let mut tokenizer = doomtok::create_tokenizer();
//! let mut token = doomtok::create_token();
//! tokenizer.set_source("numMeshes 5 // trailing comment");
//!
//! assert!(tokenizer.get_next_token(&mut *token).unwrap());
//! assert!(token.is_string("numMeshes"));
//! assert!(tokenizer.get_next_token(&mut *token).unwrap());
//! assert_eq!(token.kind(), TokenKind::Number);
//! assert_eq!(token.to_int(), 5);
//! assert!(!tokenizer.get_next_token(&mut *token).unwrap());
//! ```

pub mod diagnostics;
pub mod errors;
pub mod factory;
pub mod lexer;

pub use errors::LexError;
pub use factory::{create_token, create_tokenizer, create_tokenizer_with};
pub use lexer::options::LexerOptions;
pub use lexer::token::{OwnedToken, Span, Token, TokenKind};
pub use lexer::tokenizer::Tokenizer;
pub use lexer::{lex, lex_with};
