//! CLI tool to list and check the tokens of Monkey source files.

use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use monkey_lexer::{Error, Lexer};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        eprintln!("Usage: monkey-lex <command> [files...]");
        eprintln!();
        eprintln!("Commands:");
        eprintln!("  tokens  Print the token stream of each file");
        eprintln!("  check   Fail if a file contains illegal characters");
        eprintln!();
        eprintln!("Use - to read standard input.");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  monkey-lex tokens program.mk");
        eprintln!("  echo 'let x = 1;' | monkey-lex check -");
        return ExitCode::from(2);
    }

    let command = args[1].as_str();
    let files = &args[2..];

    if !matches!(command, "tokens" | "check") {
        eprintln!("Unknown command: {command}");
        return ExitCode::from(2);
    }

    if files.is_empty() {
        eprintln!("Error: no files specified");
        return ExitCode::from(2);
    }

    let mut had_error = false;

    for path in files {
        let content = match read_source(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{e}");
                had_error = true;
                continue;
            }
        };
        tracing::debug!(path = path.as_str(), bytes = content.len(), command, "scanning");

        if command == "tokens" {
            for token in Lexer::new(&content) {
                println!("{token}");
            }
        } else {
            match monkey_lexer::check(path, &content) {
                Ok(count) => eprintln!("{path}: ok ({count} token(s))"),
                Err(e) => {
                    eprintln!("{e}");
                    had_error = true;
                }
            }
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn read_source(path: &str) -> Result<String, Error> {
    let result = if path == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map(|_| buf)
    } else {
        fs::read_to_string(path)
    };
    result.map_err(|source| Error::Io {
        path: path.to_string(),
        source,
    })
}

/// Install a log subscriber when `RUST_LOG` is set,
/// e.g. `RUST_LOG=monkey_lexer=trace`.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}
