//! Property-based tests with proptest.
//!
//! Generate random source text and check the invariants every token
//! stream must hold: bounded termination, a sticky end of input,
//! whitespace transparency, lexemes that are exact slices of the
//! source in order, and one keyword lookup per identifier.

use std::cell::Cell;

use monkey_lexer::{Lexer, Token, TokenKind};
use proptest::prelude::*;

/// Characters the lexer knows, plus whitespace and a few it rejects.
fn monkey_source() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_ \t\r\n=!+*/<>(){},;@#$.\"-]{0,64}".prop_map(|s| s)
}

/// A single non-whitespace token lexeme.
fn lexeme() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z_]{1,8}",
        "[0-9]{1,6}",
        Just("==".to_string()),
        Just("!=".to_string()),
        "[{}(),;/+*<>-]".prop_map(|s| s),
    ]
}

/// Whitespace run, possibly empty.
fn blank() -> impl Strategy<Value = String> {
    "[ \t\r\n]{0,3}".prop_map(|s| s)
}

/// Drive the pull interface until end of input, counting calls.
fn pull_all(input: &str) -> (Vec<Token>, usize) {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    let mut calls = 0;
    loop {
        calls += 1;
        let token = lexer.next_token();
        let eof = token.is_eof();
        tokens.push(token);
        if eof || calls > input.len() + 1 {
            break;
        }
    }
    (tokens, calls)
}

proptest! {
    #[test]
    fn terminates_within_len_plus_one(input in any::<String>()) {
        let (tokens, calls) = pull_all(&input);
        prop_assert!(calls <= input.len() + 1);
        prop_assert!(tokens.last().is_some_and(Token::is_eof));
    }

    #[test]
    fn eof_is_idempotent(input in monkey_source(), extra in 1usize..8) {
        let mut lexer = Lexer::new(&input);
        while !lexer.next_token().is_eof() {}
        for _ in 0..extra {
            prop_assert_eq!(lexer.next_token(), Token::eof());
        }
    }

    #[test]
    fn lexemes_are_ordered_slices(input in monkey_source()) {
        // Non-whitespace text is exactly the concatenation of lexemes.
        let joined: String = Lexer::new(&input).map(|t| t.text).collect();
        let stripped: String = input
            .chars()
            .filter(|c| !matches!(c, ' ' | '\t' | '\r' | '\n'))
            .collect();
        prop_assert_eq!(joined, stripped);
    }

    #[test]
    fn only_eof_has_empty_text(input in any::<String>()) {
        for token in Lexer::new(&input) {
            prop_assert_eq!(token.text.is_empty(), token.kind == TokenKind::Eof);
        }
    }

    #[test]
    fn whitespace_is_transparent(
        parts in prop::collection::vec((lexeme(), blank()), 0..12),
    ) {
        // Separate with a single space so tokens cannot merge, then
        // compare against arbitrary whitespace runs of at least one char.
        let tight: String = parts
            .iter()
            .map(|(lex, _)| lex.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let loose: String = parts
            .iter()
            .map(|(lex, ws)| format!("{lex} {ws}"))
            .collect();

        let a: Vec<_> = Lexer::new(&tight).collect();
        let b: Vec<_> = Lexer::new(&loose).collect();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn integers_roundtrip(n in any::<u64>()) {
        let text = n.to_string();
        let tokens: Vec<_> = Lexer::new(&text).collect();
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Int);
        prop_assert_eq!(tokens[0].text.parse::<u64>().ok(), Some(n));
    }

    #[test]
    fn identifiers_use_keyword_lookup(ident in "[a-z_]{1,10}") {
        let tokens: Vec<_> = Lexer::new(&ident).collect();
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, monkey_lexer::lookup_ident(&ident));
        prop_assert_eq!(&tokens[0].text, &ident);
    }

    #[test]
    fn keyword_lookup_called_once_per_identifier(input in monkey_source()) {
        let calls = Cell::new(0usize);
        let lookup = |ident: &str| {
            calls.set(calls.get() + 1);
            monkey_lexer::lookup_ident(ident)
        };
        let words = Lexer::with_keywords(&input, lookup)
            .filter(|t| t.kind == TokenKind::Ident || t.kind.is_keyword())
            .count();
        prop_assert_eq!(calls.get(), words);
    }
}
