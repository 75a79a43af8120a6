//! Pull tokens one at a time until end of input.

use monkey_lexer::{Lexer, TokenKind};

fn main() {
    let input = "let add = fn(x, y) { x + y; };\nlet ok = add(1, 2) != 4;";

    let mut lexer = Lexer::new(input);
    loop {
        let token = lexer.next_token();
        println!("{:<10} {:?}", token.kind, token.text);
        if token.kind == TokenKind::Eof {
            break;
        }
    }
}
