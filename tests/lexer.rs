//! Token stream contract of the library, checked through the public API.
use jsonlex::{Lexer, Token, TokenKind, tokenize};

/// Collect `(kind, literal)` pairs for a whole input, EOF included.
fn pairs(input: &str) -> Vec<(TokenKind, String)> {
    tokenize(input)
        .into_iter()
        .map(|t| (t.kind, t.literal))
        .collect()
}

fn punctuation_kind(ch: char) -> TokenKind {
    match ch {
        '{' => TokenKind::LeftBrace,
        '}' => TokenKind::RightBrace,
        '[' => TokenKind::LeftBracket,
        ']' => TokenKind::RightBracket,
        ':' => TokenKind::Colon,
        ',' => TokenKind::Comma,
        other => panic!("not punctuation: {other:?}"),
    }
}

#[test]
fn punctuation_only_inputs() {
    let inputs = [
        "{}",
        "[ ] , :",
        "{\n\t[\r\n]}",
        ",,::[[]]{{}}",
        "  }{ \n\n ][ ",
        "",
    ];

    for input in inputs {
        let expected: Vec<TokenKind> = input
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(punctuation_kind)
            .chain(std::iter::once(TokenKind::Eof))
            .collect();
        let kinds: Vec<TokenKind> =
            tokenize(input).iter().map(|t| t.kind).collect();
        assert_eq!(kinds, expected, "input {input:?}");
    }
}

#[test]
fn line_counts_preceding_newlines() {
    let inputs = [
        "{\n\"a\"\n:\n1\n}\n",
        "[\r\n  true,\r\n  \"x\ny\",\n\n  null\n]",
        "\n\n\n7",
        "\"unterminated\n\nstring",
        "A\nB\nc",
    ];

    for input in inputs {
        let chars: Vec<char> = input.chars().collect();
        let tokens = tokenize(input);
        let mut last_line = 0;
        for token in &tokens {
            let newlines =
                chars[..token.start].iter().filter(|&&c| c == '\n').count();
            assert_eq!(token.line, newlines, "{token} in {input:?}");
            assert!(token.line >= last_line, "line went backwards");
            last_line = token.line;
        }
    }
}

#[test]
fn object_with_one_member() {
    assert_eq!(
        pairs("{\"a\":1}"),
        vec![
            (TokenKind::LeftBrace, "{".to_string()),
            (TokenKind::String, "a".to_string()),
            (TokenKind::Colon, ":".to_string()),
            (TokenKind::Number, "1".to_string()),
            (TokenKind::RightBrace, "}".to_string()),
            (TokenKind::Eof, String::new()),
        ]
    );
}

#[test]
fn keywords() {
    assert_eq!(
        pairs("true false null"),
        vec![
            (TokenKind::True, "true".to_string()),
            (TokenKind::False, "false".to_string()),
            (TokenKind::Null, "null".to_string()),
            (TokenKind::Eof, String::new()),
        ]
    );
}

#[test]
fn single_number() {
    assert_eq!(
        tokenize("1.5"),
        vec![
            Token::new(TokenKind::Number, "1.5", 0, 0, 3),
            Token::new(TokenKind::Eof, "", 0, 3, 3),
        ]
    );
}

#[test]
fn unterminated_string_reaches_eof() {
    let mut lexer = Lexer::new("\"abc");
    let string = lexer.next_token();
    assert_eq!(string.kind, TokenKind::String);
    assert_eq!(string.literal, "abc");
    assert!(lexer.next_token().is_eof());
}

#[test]
fn uppercase_takes_catch_all_branch() {
    // Uppercase letters fail the keyword-start predicate, so each one is a
    // separate one-char illegal token at its real offset (the old fixed
    // 1..2 span is not reproduced).
    assert_eq!(
        tokenize("XYZ"),
        vec![
            Token::new(TokenKind::Illegal, "X", 0, 0, 1),
            Token::new(TokenKind::Illegal, "Y", 0, 1, 2),
            Token::new(TokenKind::Illegal, "Z", 0, 2, 3),
            Token::new(TokenKind::Eof, "", 0, 3, 3),
        ]
    );
}

#[test]
fn illegal_tokens_do_not_stop_the_stream() {
    let kinds: Vec<TokenKind> =
        tokenize("[1, nope, @, 2]").iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::LeftBracket,
            TokenKind::Number,
            TokenKind::Comma,
            TokenKind::Illegal,
            TokenKind::Comma,
            TokenKind::Illegal,
            TokenKind::Comma,
            TokenKind::Number,
            TokenKind::RightBracket,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn eof_repeats_forever() {
    let mut lexer = Lexer::new("[]");
    lexer.next_token();
    lexer.next_token();
    let first_eof = lexer.next_token();
    assert!(first_eof.is_eof());
    for _ in 0..100 {
        assert_eq!(lexer.next_token(), first_eof);
    }
}

#[test]
fn spans_stay_ordered() {
    let input = r#"{"list": [1, -2.5, "x\"y", false], "n": null} bad ~"#;
    let tokens = tokenize(input);
    let mut prev_end = 0;
    for token in &tokens {
        assert!(token.start <= token.end, "{token}");
        assert!(token.start >= prev_end, "{token} overlaps previous");
        prev_end = token.end;
    }
    assert_eq!(prev_end, input.chars().count());
}

#[test]
fn string_span_covers_lexeme() {
    let input = "[\"key\"]";
    let tokens = tokenize(input);
    let string = &tokens[1];
    let covered: String = input
        .chars()
        .skip(string.start)
        .take(string.width())
        .collect();
    assert_eq!(covered, "\"key\"");
}

#[test]
fn iterator_matches_next_token() {
    let input = "{\"a\": [true, 1e3, null]}";
    let mut lexer = Lexer::new(input);
    let mut pulled = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.is_eof();
        pulled.push(token);
        if done {
            break;
        }
    }
    let iterated: Vec<Token> = Lexer::new(input).collect();
    assert_eq!(pulled, iterated);
}
