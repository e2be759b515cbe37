/*!
# `jsonlex` Library

Splits JSON text into typed, positioned tokens for downstream parsers.

```rust
use jsonlex::{TokenKind, tokenize};

let kinds: Vec<TokenKind> =
    tokenize("[true, null]").iter().map(|t| t.kind).collect();
assert_eq!(
    kinds,
    [
        TokenKind::LeftBracket,
        TokenKind::True,
        TokenKind::Comma,
        TokenKind::Null,
        TokenKind::RightBracket,
        TokenKind::Eof,
    ]
);
```
*/

pub mod commands;
pub mod tokenizer;
pub mod utils;

pub use tokenizer::{
    LexError, LexErrorKind, Lexer, Token, TokenKind, tokenize, tokenize_strict,
};
