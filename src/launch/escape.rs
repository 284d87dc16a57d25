//! Command-line argument quoting.
//!
//! The agent receives its arguments as a single string which the runtime
//! host splits using the MSVC rules (the same rules .NET applies on every
//! platform):
//!
//! - spaces and tabs separate arguments outside double quotes
//! - `"` toggles quoting and is dropped
//! - `2n` backslashes before a `"` produce `n` backslashes, and the quote
//!   toggles quoting
//! - `2n + 1` backslashes before a `"` produce `n` backslashes and a
//!   literal `"`
//! - backslashes not followed by `"` are literal
//!
//! [`escape_argument`] produces text that [`split_arguments`] turns back
//! into exactly the original value.

/// Quote `value` so it survives command-line splitting unchanged.
///
/// Values that are non-empty and free of whitespace and double quotes are
/// returned as-is.
pub fn escape_argument(value: &str) -> String {
    if !needs_quoting(value) {
        return value.to_string();
    }

    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    let mut backslashes = 0usize;
    for c in value.chars() {
        match c {
            '\\' => backslashes += 1,
            '"' => {
                push_backslashes(&mut out, backslashes * 2 + 1);
                out.push('"');
                backslashes = 0;
            }
            _ => {
                push_backslashes(&mut out, backslashes);
                backslashes = 0;
                out.push(c);
            }
        }
    }
    // Trailing backslashes sit in front of the closing quote.
    push_backslashes(&mut out, backslashes * 2);
    out.push('"');
    out
}

fn needs_quoting(value: &str) -> bool {
    value.is_empty() || value.chars().any(|c| c.is_whitespace() || c == '"')
}

fn push_backslashes(out: &mut String, count: usize) {
    out.extend(std::iter::repeat_n('\\', count));
}

/// Split a command-line string into arguments.
pub fn split_arguments(command_line: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut chars = command_line.chars().peekable();

    loop {
        while matches!(chars.peek(), Some(&(' ' | '\t'))) {
            chars.next();
        }
        if chars.peek().is_none() {
            break;
        }

        let mut arg = String::new();
        let mut in_quotes = false;
        while let Some(&c) = chars.peek() {
            if !in_quotes && (c == ' ' || c == '\t') {
                break;
            }
            chars.next();
            match c {
                '\\' => {
                    let mut count = 1usize;
                    while chars.peek() == Some(&'\\') {
                        chars.next();
                        count += 1;
                    }
                    if chars.peek() == Some(&'"') {
                        push_backslashes(&mut arg, count / 2);
                        if count % 2 == 1 {
                            arg.push('"');
                            chars.next();
                        }
                    } else {
                        push_backslashes(&mut arg, count);
                    }
                }
                '"' => {
                    if in_quotes && chars.peek() == Some(&'"') {
                        arg.push('"');
                        chars.next();
                    } else {
                        in_quotes = !in_quotes;
                    }
                }
                _ => arg.push(c),
            }
        }
        args.push(arg);
    }

    args
}
