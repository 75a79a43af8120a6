//! Single-pass lexical scanner for the Monkey scripting language.
//!
//! The lexer turns source text into a pull-based stream of typed
//! tokens for a downstream parser. It scans forward over raw bytes
//! with one character of lookahead and never fails: characters it
//! does not recognize become [`TokenKind::Illegal`] tokens.
//!
//! # Quick start
//!
//! ## Pull tokens one at a time
//!
//! ```
//! use monkey_lexer::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("let five = 5;");
//! assert_eq!(lexer.next_token().kind, TokenKind::Let);
//! assert_eq!(lexer.next_token().text, "five");
//! ```
//!
//! ## Iterate up to end of input
//!
//! ```
//! use monkey_lexer::{Lexer, TokenKind};
//!
//! let kinds: Vec<_> = Lexer::new("x != 10").map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::Ident, TokenKind::NotEq, TokenKind::Int, TokenKind::Eof]
//! );
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod lexer;
pub mod token;

pub use lexer::Lexer;
pub use token::{KeywordLookup, Token, TokenKind, lookup_ident};

/// Errors surfaced by the tooling around the lexer.
///
/// The lexer itself is infallible.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Source could not be read.
    #[error("{path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    /// Source contains characters that start no token.
    #[error("{path}: {count} illegal character(s), first: {first:?}")]
    IllegalCharacters {
        path: String,
        count: usize,
        first: String,
    },
}

/// Scan `input` to the end and reject it if any token is illegal.
///
/// Returns the number of tokens, end of input included.
pub fn check(path: &str, input: &str) -> Result<usize, Error> {
    let mut total = 0;
    let mut illegal = Vec::new();
    for token in Lexer::new(input) {
        total += 1;
        if token.kind == TokenKind::Illegal {
            illegal.push(token.text);
        }
    }

    let Some(first) = illegal.first() else {
        return Ok(total);
    };
    Err(Error::IllegalCharacters {
        path: path.to_string(),
        count: illegal.len(),
        first: first.clone(),
    })
}
