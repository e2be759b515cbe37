//! # JSON Lexer
//!
//! Scans a JSON document into a sequence of positioned tokens. The lexer
//! never fails: anything it cannot classify comes out as a
//! [`TokenKind::Illegal`] token, and the stream always ends with
//! [`TokenKind::Eof`].
//!
//! Offsets are counted in characters, not bytes.
//!
//! ```rust
//! use jsonlex::tokenizer::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new(r#"{"a":1}"#);
//! assert_eq!(lexer.next_token().kind, TokenKind::LeftBrace);
//! let key = lexer.next_token();
//! assert_eq!((key.kind, key.literal.as_str()), (TokenKind::String, "a"));
//! ```
use log::{debug, trace};
use std::error::Error;
use std::fmt;
use std::iter::FusedIterator;

use crate::tokenizer::{Token, TokenKind, lookup_keyword};

/// Sentinel held in `ch` once the input is exhausted.
const EOF_CHAR: char = '\0';

/// A lexer over a fully decoded JSON document.
///
/// Call [`Lexer::next_token`] until it returns an EOF token, or iterate over
/// the lexer, which yields the EOF token once and then stops.
#[derive(Debug, Clone)]
pub struct Lexer {
    /// The input sequence of characters to tokenize
    input: Vec<char>,
    /// Current position (current char)
    position: usize,
    /// Current reading position (after current char)
    read_position: usize,
    /// Current char under examination
    ch: char,
    /// Newlines consumed so far
    line: usize,
    /// Set once the iterator has handed out the EOF token
    finished: bool,
}

impl Lexer {
    /// Creates a lexer positioned at the start of `input`.
    pub fn new(input: &str) -> Self {
        let mut lexer = Self {
            input: input.chars().collect(),
            position: 0,
            read_position: 0,
            ch: EOF_CHAR,
            line: 0,
            finished: false,
        };
        // put the lexer in an initial working state
        lexer.read_char();
        lexer
    }

    /// Whether the cursor has run off the end of the input.
    ///
    /// A NUL inside the input is an ordinary (illegal) character; only the
    /// cursor position decides end of input.
    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Reads and consumes the next char in the input sequence.
    fn read_char(&mut self) {
        if self.ch == '\n' && !self.is_at_end() {
            self.line += 1;
        }

        if self.read_position >= self.input.len() {
            // park the cursor at the end so repeated calls stay put
            self.ch = EOF_CHAR;
            self.position = self.input.len();
            self.read_position = self.input.len();
        } else {
            self.ch = self.input[self.read_position];
            self.position = self.read_position;
            self.read_position += 1;
        }
    }

    /// Consume whitespace char(s) starting from the current position.
    fn skip_whitespace(&mut self) {
        while !self.is_at_end() && matches!(self.ch, ' ' | '\t' | '\n' | '\r')
        {
            self.read_char();
        }
    }

    /// Returns the next token in the input sequence from the current
    /// position.
    ///
    /// Once the input is exhausted every call returns an EOF token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.ch {
            _ if self.is_at_end() => Token::new(
                TokenKind::Eof,
                "",
                self.line,
                self.position,
                self.position,
            ),
            '{' => self.read_punctuation(TokenKind::LeftBrace),
            '}' => self.read_punctuation(TokenKind::RightBrace),
            '[' => self.read_punctuation(TokenKind::LeftBracket),
            ']' => self.read_punctuation(TokenKind::RightBracket),
            ':' => self.read_punctuation(TokenKind::Colon),
            ',' => self.read_punctuation(TokenKind::Comma),
            '"' => self.read_string(),
            c if is_letter(c) => self.read_word(),
            c if is_number(c) => self.read_number(),
            // Same one-char shape as punctuation, just unclassified.
            _ => self.read_punctuation(TokenKind::Illegal),
        };

        trace!("scanned {token}");
        token
    }

    /// Emits a one-character token for the current char and steps past it.
    fn read_punctuation(&mut self, kind: TokenKind) -> Token {
        let token = Token::new(
            kind,
            self.ch.to_string(),
            self.line,
            self.position,
            self.position + 1,
        );
        self.read_char();
        token
    }

    /// Reads a string and returns the corresponding token.
    ///
    /// The literal is the raw body between the quotes; escapes are only used
    /// to find the closing quote and are not resolved. The span runs from the
    /// opening quote to just past the closing quote, or to the end of input
    /// when the string is unterminated.
    fn read_string(&mut self) -> Token {
        let line = self.line;
        let open = self.position;

        loop {
            let prev = self.ch;
            self.read_char();
            if self.is_at_end() || (self.ch == '"' && prev != '\\') {
                break;
            }
        }

        let literal: String =
            self.input[open + 1..self.position].iter().collect();

        if self.is_at_end() {
            debug!("unterminated string starting at offset {open}");
            return Token::new(
                TokenKind::String,
                literal,
                line,
                open,
                self.position,
            );
        }

        // step past the closing quote
        let end = self.position + 1;
        self.read_char();
        Token::new(TokenKind::String, literal, line, open, end)
    }

    /// Reads a run of lowercase letters and classifies it against the
    /// keyword table.
    fn read_word(&mut self) -> Token {
        let start = self.position;
        while is_letter(self.ch) {
            self.read_char();
        }
        let word: String = self.input[start..self.position].iter().collect();

        let kind = lookup_keyword(&word).unwrap_or_else(|| {
            debug!("unknown keyword {word:?} at offset {start}");
            TokenKind::Illegal
        });

        Token::new(kind, word, self.line, start, self.position)
    }

    /// Reads a run of number characters. No validation is performed, so
    /// `1.2.3` and `--5` come out as numbers too.
    fn read_number(&mut self) -> Token {
        let start = self.position;
        while is_number(self.ch) {
            self.read_char();
        }
        let literal: String =
            self.input[start..self.position].iter().collect();

        Token::new(TokenKind::Number, literal, self.line, start, self.position)
    }

    /// Returns the amount of chars of the input sequence that have been read.
    pub fn chars_read(&self) -> usize {
        self.position
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        self.finished = token.is_eof();
        Some(token)
    }
}

impl FusedIterator for Lexer {}

/// Start of a keyword. The `EOF_CHAR` sentinel never matches.
fn is_letter(ch: char) -> bool {
    ch.is_ascii_lowercase()
}

fn is_number(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '.' || ch == '-'
}

/// Tokenize a JSON document into tokens, including the trailing EOF token.
pub fn tokenize(text: &str) -> Vec<Token> {
    let tokens: Vec<Token> = Lexer::new(text).collect();
    debug!(
        "tokenized {} chars into {} tokens",
        text.chars().count(),
        tokens.len()
    );
    tokens
}

/// Tokenize a JSON document, stopping at the first illegal token.
///
/// # Errors
///
/// Returns a [`LexError`] describing the first [`TokenKind::Illegal`] token
/// in the stream.
pub fn tokenize_strict(text: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    for token in Lexer::new(text) {
        if let Some(err) = LexError::from_token(&token) {
            debug!("strict tokenize stopped: {err}");
            return Err(err);
        }
        tokens.push(token);
    }
    Ok(tokens)
}

/// Classifies an illegal token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A run of lowercase letters that is not `true`, `false` or `null`.
    UnknownKeyword(String),
    /// A character that cannot start any token.
    UnexpectedCharacter(char),
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKeyword(word) => {
                write!(f, "unknown keyword '{word}'")
            }
            Self::UnexpectedCharacter(ch) => {
                write!(f, "unexpected character {:?}", ch)
            }
        }
    }
}

/// An illegal token reported as an error, with its location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    /// What kind of input was rejected
    pub kind: LexErrorKind,
    /// Line of the offending token
    pub line: usize,
    /// Offset of the first offending char
    pub start: usize,
    /// Offset one past the last offending char
    pub end: usize,
}

impl LexError {
    /// Builds an error from an illegal token, or `None` for any other kind.
    pub fn from_token(token: &Token) -> Option<Self> {
        if !token.is_illegal() {
            return None;
        }

        let mut chars = token.literal.chars();
        let kind = match (chars.next(), chars.next()) {
            (Some(ch), None) if !is_letter(ch) => {
                LexErrorKind::UnexpectedCharacter(ch)
            }
            _ => LexErrorKind::UnknownKeyword(token.literal.clone()),
        };

        Some(Self {
            kind,
            line: token.line,
            start: token.start,
            end: token.end,
        })
    }
}

impl Error for LexError {}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at line {}, offset {}..{}",
            self.kind, self.line, self.start, self.end
        )
    }
}
