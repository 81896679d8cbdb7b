//! Line-based interactive prompts.
//!
//! Reads from stdin one line at a time so the prompts work the same under
//! a pipe (tests, scripts) as on a terminal.

use std::io::{self, BufRead, Write};

/// Ask for a value for `key`, reading a single line from stdin.
///
/// Only the trailing newline is stripped; interior whitespace is part of
/// the value.
pub fn read_value(key: &str) -> io::Result<String> {
    print!("Enter value for '{}': ", key);
    io::stdout().flush()?;
    read_line()
}

/// Ask a yes/no question. Anything other than `y`/`yes` (case-insensitive)
/// declines, so an empty answer is a "no".
pub fn confirm(question: &str) -> io::Result<bool> {
    print!("{} [y/N]: ", question);
    io::stdout().flush()?;

    let answer = read_line()?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

fn read_line() -> io::Result<String> {
    let stdin = io::stdin();
    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
