#![allow(dead_code)]

use monkey_lexer::{Lexer, Token, TokenKind};

/// Collect every token up to and including end of input.
pub fn tokens(input: &str) -> Vec<Token> {
    Lexer::new(input).collect()
}

/// Kinds of every token up to and including end of input.
pub fn kinds(input: &str) -> Vec<TokenKind> {
    Lexer::new(input).map(|t| t.kind).collect()
}

/// Assert the stream matches `expected` pairs, followed by end of input.
pub fn assert_tokens(input: &str, expected: &[(TokenKind, &str)]) {
    let tokens = tokens(input);
    let got: Vec<_> = tokens.iter().map(|t| (t.kind, t.text.as_str())).collect();
    let mut want = expected.to_vec();
    want.push((TokenKind::Eof, ""));
    assert_eq!(got, want, "token mismatch for input {input:?}");
}
