use std::fmt;
use std::iter::FusedIterator;

use crate::token::{KeywordLookup, Token, TokenKind, lookup_ident};

/// Forward-only scanner over a complete source string.
///
/// Each call to [`Lexer::next_token`] returns one token. Once the input is
/// exhausted it keeps returning [`TokenKind::Eof`].
///
/// `F` classifies identifiers; it defaults to the built-in keyword table.
pub struct Lexer<'a, F = KeywordLookup> {
    input: &'a str,
    /// Index of `ch`.
    position: usize,
    /// Index of the byte after `ch`.
    read_position: usize,
    /// Byte under examination, `None` once past the end.
    ch: Option<u8>,
    lookup: F,
    done: bool,
}

impl<'a> Lexer<'a> {
    /// Create a lexer using the default keyword table.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::with_keywords(input, lookup_ident)
    }
}

impl<'a, F> Lexer<'a, F>
where
    F: Fn(&str) -> TokenKind,
{
    /// Create a lexer that classifies identifiers with `lookup`.
    ///
    /// `lookup` is called exactly once per identifier-shaped lexeme.
    #[must_use]
    pub fn with_keywords(input: &'a str, lookup: F) -> Self {
        let mut lexer = Self {
            input,
            position: 0,
            read_position: 0,
            ch: None,
            lookup,
            done: false,
        };
        lexer.read_char();
        lexer
    }

    /// The full source text.
    #[must_use]
    pub const fn source(&self) -> &'a str {
        self.input
    }

    /// Produce the next token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.ch {
            None => Token::eof(),
            Some(b'!') => self.one_or_two(TokenKind::Bang, TokenKind::NotEq),
            Some(b'=') => self.one_or_two(TokenKind::Assign, TokenKind::Eq),
            Some(c) if is_letter(c) => {
                // The loop already stopped on the next character.
                let ident = self.read_identifier();
                return Token::new((self.lookup)(ident), ident);
            }
            Some(c) if c.is_ascii_digit() => {
                return Token::new(TokenKind::Int, self.read_number());
            }
            Some(c) => match TokenKind::from_punct(c) {
                Some(kind) => Token::new(kind, self.lexeme(self.position)),
                None => self.read_illegal(),
            },
        };

        self.read_char();
        token
    }

    fn read_char(&mut self) {
        if self.read_position > self.input.len() {
            // Already past the end; the cursor stays put.
            return;
        }
        self.ch = self.input.as_bytes().get(self.read_position).copied();
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn peek_char(&self) -> Option<u8> {
        self.input.as_bytes().get(self.read_position).copied()
    }

    /// Text from `start` through the current character.
    fn lexeme(&self, start: usize) -> &'a str {
        let input = self.input;
        &input[start..self.read_position]
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.read_char();
        }
    }

    /// `single` on its own, or `double` when followed by `=`.
    fn one_or_two(&mut self, single: TokenKind, double: TokenKind) -> Token {
        let start = self.position;
        if self.peek_char() == Some(b'=') {
            self.read_char();
            Token::new(double, self.lexeme(start))
        } else {
            Token::new(single, self.lexeme(start))
        }
    }

    fn read_identifier(&mut self) -> &'a str {
        let start = self.position;
        while self.ch.is_some_and(is_letter) {
            self.read_char();
        }
        let input = self.input;
        &input[start..self.position]
    }

    fn read_number(&mut self) -> &'a str {
        let start = self.position;
        while self.ch.is_some_and(|c| c.is_ascii_digit()) {
            self.read_char();
        }
        let input = self.input;
        &input[start..self.position]
    }

    /// Consume one whole character as an illegal token, leaving the cursor
    /// on its last byte.
    fn read_illegal(&mut self) -> Token {
        let start = self.position;
        let width = self.input[start..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);
        for _ in 1..width {
            self.read_char();
        }
        let text = self.lexeme(start);
        tracing::trace!(position = start, text, "illegal character");
        Token::new(TokenKind::Illegal, text)
    }
}

impl<F> fmt::Debug for Lexer<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexer")
            .field("position", &self.position)
            .field("read_position", &self.read_position)
            .field("ch", &self.ch)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

/// Yields every token up to and including the first `Eof`.
impl<F> Iterator for Lexer<'_, F>
where
    F: Fn(&str) -> TokenKind,
{
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }
        let token = self.next_token();
        self.done = token.is_eof();
        Some(token)
    }
}

impl<F: Fn(&str) -> TokenKind> FusedIterator for Lexer<'_, F> {}

const fn is_letter(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}
