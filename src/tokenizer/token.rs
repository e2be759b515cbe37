//! # JSON Token
//!
//! Defines the token kinds produced while scanning a JSON document, the
//! positioned [`Token`] value handed to callers, and the keyword table used
//! to classify bare words.
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The closed set of token kinds.
///
/// Each kind has a stable label (see [`TokenKind::label`]) which is used for
/// both [`Display`] and serialization.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /* Reserved */
    /// Input that could not be classified
    #[serde(rename = "ILLEGAL")]
    Illegal,

    /// End of input
    #[serde(rename = "EOF")]
    Eof,

    /* Values */
    /// Double-quoted string
    #[serde(rename = "STRING")]
    String,

    /// Run of digits, `.` and `-`
    #[serde(rename = "NUMBER")]
    Number,

    /* Delimiters */
    /// Opening curly brace
    #[serde(rename = "{")]
    LeftBrace,

    /// Closing curly brace
    #[serde(rename = "}")]
    RightBrace,

    /// Opening square bracket
    #[serde(rename = "[")]
    LeftBracket,

    /// Closing square bracket
    #[serde(rename = "]")]
    RightBracket,

    /// Comma character
    #[serde(rename = ",")]
    Comma,

    /// Colon character
    #[serde(rename = ":")]
    Colon,

    /* Keywords */
    /// `true`
    #[serde(rename = "TRUE")]
    True,

    /// `false`
    #[serde(rename = "FALSE")]
    False,

    /// `null`
    #[serde(rename = "NULL")]
    Null,
}

impl TokenKind {
    /// Returns the label of this kind, e.g. `"STRING"` or `"{"`.
    pub const fn label(self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::LeftBracket => "[",
            TokenKind::RightBracket => "]",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Null => "NULL",
        }
    }

    /// Whether this kind is one of the three keywords.
    pub const fn is_keyword(self) -> bool {
        matches!(self, TokenKind::True | TokenKind::False | TokenKind::Null)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Bare words recognized as keywords.
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("null", TokenKind::Null),
];

/// Looks up a bare word in the keyword table.
///
/// Returns `None` when `word` is not one of `true`, `false` or `null`; the
/// lexer turns that into an [`TokenKind::Illegal`] token.
pub fn lookup_keyword(word: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|(keyword, _)| *keyword == word)
        .map(|(_, kind)| *kind)
}

/// A classified fragment of the input along with where it was found.
///
/// `start` and `end` are character offsets (not byte offsets) into the
/// input, with `end` exclusive. `line` is the number of newlines seen before
/// the token started.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Token {
    /// Kind of the token
    pub kind: TokenKind,
    /// Text covered by the token. For strings this is the raw body without
    /// the quotes; for EOF it is empty.
    pub literal: String,
    /// Zero-based line the token starts on
    pub line: usize,
    /// Offset of the first character of the token
    pub start: usize,
    /// Offset one past the last character of the token
    pub end: usize,
}

impl Token {
    /// Creates a new token.
    pub fn new(
        kind: TokenKind,
        literal: impl Into<String>,
        line: usize,
        start: usize,
        end: usize,
    ) -> Self {
        Self {
            kind,
            literal: literal.into(),
            line,
            start,
            end,
        }
    }

    /// Whether this token marks the end of input.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Whether this token is unclassifiable input.
    pub fn is_illegal(&self) -> bool {
        self.kind == TokenKind::Illegal
    }

    /// Number of characters covered by the token's span.
    pub fn width(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({}) {}:{}..{}",
            self.kind, self.literal, self.line, self.start, self.end
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_keyword() {
        assert_eq!(lookup_keyword("true"), Some(TokenKind::True));
        assert_eq!(lookup_keyword("false"), Some(TokenKind::False));
        assert_eq!(lookup_keyword("null"), Some(TokenKind::Null));
        assert_eq!(lookup_keyword("nul"), None);
        assert_eq!(lookup_keyword("True"), None);
        assert_eq!(lookup_keyword(""), None);
    }

    #[test]
    fn test_labels() {
        let cases = [
            (TokenKind::Illegal, "ILLEGAL"),
            (TokenKind::Eof, "EOF"),
            (TokenKind::String, "STRING"),
            (TokenKind::Number, "NUMBER"),
            (TokenKind::LeftBrace, "{"),
            (TokenKind::RightBrace, "}"),
            (TokenKind::LeftBracket, "["),
            (TokenKind::RightBracket, "]"),
            (TokenKind::Comma, ","),
            (TokenKind::Colon, ":"),
            (TokenKind::True, "TRUE"),
            (TokenKind::False, "FALSE"),
            (TokenKind::Null, "NULL"),
        ];
        for (kind, label) in cases {
            assert_eq!(kind.to_string(), label);
            // serde label matches Display
            let json = serde_json::to_string(&kind).expect("serialize kind");
            assert_eq!(json, format!("\"{label}\""));
        }
    }

    #[test]
    fn test_kind_deserialize() {
        let kind: TokenKind =
            serde_json::from_str("\"NULL\"").expect("deserialize kind");
        assert_eq!(kind, TokenKind::Null);
        assert!(serde_json::from_str::<TokenKind>("\"Null\"").is_err());
    }

    #[test]
    fn test_token_display() {
        let token = Token::new(TokenKind::String, "a", 2, 5, 8);
        assert_eq!(token.to_string(), "STRING(a) 2:5..8");
        assert_eq!(token.width(), 3);
    }

    #[test]
    fn test_token_serialize() {
        let token = Token::new(TokenKind::Number, "1.5", 0, 0, 3);
        let json = serde_json::to_value(&token).expect("serialize token");
        assert_eq!(
            json,
            serde_json::json!({
                "kind": "NUMBER",
                "literal": "1.5",
                "line": 0,
                "start": 0,
                "end": 3
            })
        );
    }
}
