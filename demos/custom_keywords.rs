//! Plug in a keyword table built at runtime and spot illegal characters.

use std::collections::HashMap;

use monkey_lexer::{Lexer, TokenKind, lookup_ident};

fn main() {
    // Accept a few aliases on top of the built-in words.
    let aliases: HashMap<&str, TokenKind> = [
        ("func", TokenKind::Function),
        ("var", TokenKind::Let),
        ("yes", TokenKind::True),
        ("no", TokenKind::False),
    ]
    .into_iter()
    .collect();

    let input = "var square = func(x) { x * x } @";
    let lookup = |ident: &str| {
        aliases
            .get(ident)
            .copied()
            .unwrap_or_else(|| lookup_ident(ident))
    };

    for token in Lexer::with_keywords(input, lookup) {
        match token.kind {
            TokenKind::Illegal => println!("illegal character: {:?}", token.text),
            kind if kind.is_keyword() => println!("keyword    {}", token.text),
            kind => println!("{kind:<10} {}", token.text),
        }
    }
}
