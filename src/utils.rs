//! Miscellaneous utility functions.

use anyhow::Context as _;
use colored::{ColoredString, Colorize};
use std::io::Write;
use std::io::{self, ErrorKind};

use crate::tokenizer::{Token, TokenKind};

// ==============================================================================
// Colorized Token Output
// ==============================================================================

/// Write one line per token to `writer`, as `line:start..end KIND literal`.
/// Silently returns `Ok(())` on broken pipe so that piping to tools like
/// `less` or `head` exits cleanly.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_colored_tokens<W: Write>(
    writer: &mut W,
    tokens: &[Token],
) -> anyhow::Result<()> {
    let result = (|| -> io::Result<()> {
        for token in tokens {
            write_colored_token(writer, token)?;
        }
        writer.flush()
    })();

    match result {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::BrokenPipe => Ok(()),
        Err(err) => Err(err).context("write token table to stdout"),
    }
}

/// Write a single token line.
fn write_colored_token<W: Write>(
    writer: &mut W,
    token: &Token,
) -> io::Result<()> {
    let location = format!("{}:{}..{}", token.line, token.start, token.end);
    let location = format!("{location:<14}");
    let kind = if token.is_eof() {
        token.kind.label().to_string()
    } else {
        format!("{:<7}", token.kind.label())
    };

    write!(writer, "{} {}", location.dimmed(), paint(token.kind, kind))?;
    if !token.is_eof() {
        // NOTE: Re-serialize to get a quoted, single-line literal.
        let quoted = serde_json::to_string(&token.literal)
            .expect("string serialization cannot fail");
        write!(writer, " {}", paint(token.kind, quoted))?;
    }
    writeln!(writer)
}

/// Pick a color for text belonging to a token of `kind`.
fn paint(kind: TokenKind, text: String) -> ColoredString {
    match kind {
        TokenKind::Illegal => text.red().bold(),
        TokenKind::Eof => text.dimmed(),
        TokenKind::String => text.green(),
        TokenKind::Number => text.yellow(),
        kind if kind.is_keyword() => text.yellow().bold(),
        _ => text.cyan(),
    }
}
