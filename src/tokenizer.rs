//! # Tokenizer/ Lexer
//!
//! Scans a JSON document into a stream of positioned tokens.
pub mod lexer;
pub mod token;

// Re-exports
pub use lexer::{LexError, LexErrorKind, Lexer, tokenize, tokenize_strict};
pub use token::{KEYWORDS, Token, TokenKind, lookup_keyword};
