use std::io::{Read, Write};

use clap::Parser;
use verso::{reverse, ReversePayload, ReverseResult};

mod cli;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if cli.json {
        run_json();
        return;
    }

    let input = match cli.text {
        Some(text) => text,
        None => read_stdin(),
    };

    if cli.lines {
        // Each line reversed on its own; line order is preserved
        let mut out = String::new();
        for line in input.lines() {
            out.push_str(&reverse(line));
            out.push('\n');
        }
        print!("{}", out);
    } else {
        // One trailing newline belongs to the terminal, not the text
        let text = input.strip_suffix('\n').unwrap_or(&input);
        let text = text.strip_suffix('\r').unwrap_or(text);
        println!("{}", reverse(text));
    }
}

/// Payload mode: reads a ReversePayload JSON document from stdin, writes a
/// ReverseResult JSON document to stdout. An absent (`null`) text value
/// comes back out as `null`.
fn run_json() {
    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .expect("failed to read stdin");
    let payload: ReversePayload = serde_json::from_str(&raw).expect("invalid payload");

    let result = ReverseResult::from_payload(&payload);

    let serialized = serde_json::to_string(&result).expect("serialize result");
    std::io::stdout()
        .write_all(serialized.as_bytes())
        .expect("write stdout");
}

fn read_stdin() -> String {
    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .expect("failed to read stdin");
    raw
}
