//! Tokenizer for command lines.
//!
//! Lines are split on `|` into commands and commands on `,` into tokens.
//! Both splitters trim each segment and drop empty ones, so the final
//! segment is always yielded whether or not a delimiter follows it.

/// Command separator within a line.
pub const COMMAND_DELIMITER: char = '|';

/// Token separator within a command.
pub const TOKEN_DELIMITER: char = ',';

/// Trimmed, non-empty commands of a line, in order.
pub fn split_commands(line: &str) -> impl Iterator<Item = &str> {
    split_trimmed(line, COMMAND_DELIMITER)
}

/// Trimmed, non-empty tokens of a command, in order.
pub fn split_tokens(command: &str) -> impl Iterator<Item = &str> {
    split_trimmed(command, TOKEN_DELIMITER)
}

fn split_trimmed(text: &str, delimiter: char) -> impl Iterator<Item = &str> {
    text.split(delimiter).map(str::trim).filter(|s| !s.is_empty())
}

/// Length of the numeric prefix `[+-]?digits[.digits]` of `s`, if any
/// digit is present.
fn numeric_prefix_len(s: &str, allow_fraction: bool) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut digits = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if allow_fraction && end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            digits += 1;
        }
    }

    (digits > 0).then_some(end)
}

/// Parse the leading decimal number of `s` (`"12.5mm"` → 12.5).
///
/// Returns `None` when `s` does not start with a number.
pub fn leading_number(s: &str) -> Option<f32> {
    let s = s.trim_start();
    let len = numeric_prefix_len(s, true)?;
    s[..len].parse().ok()
}

/// Parse the leading integer of `s` (`"3x"` → 3), saturating at the `i32`
/// range.
pub fn leading_integer(s: &str) -> Option<i32> {
    let s = s.trim_start();
    let len = numeric_prefix_len(s, false)?;
    match s[..len].parse::<i64>() {
        Ok(v) => Some(v.clamp(i32::MIN as i64, i32::MAX as i64) as i32),
        // More digits than i64 holds
        Err(_) => Some(if s.starts_with('-') { i32::MIN } else { i32::MAX }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commands(line: &str) -> std::vec::Vec<&str> {
        split_commands(line).collect()
    }

    #[test]
    fn test_split_commands_flushes_last() {
        assert_eq!(commands("H10|X5"), ["H10", "X5"]);
        assert_eq!(commands("HEALTH"), ["HEALTH"]);
    }

    #[test]
    fn test_split_commands_skips_empty() {
        assert_eq!(commands("H10|"), ["H10"]);
        assert_eq!(commands("|| H10 | |X5|"), ["H10", "X5"]);
        assert!(commands("").is_empty());
        assert!(commands("|").is_empty());
    }

    #[test]
    fn test_split_tokens() {
        let tokens: std::vec::Vec<&str> = split_tokens("H30,X0,P0, ").collect();
        assert_eq!(tokens, ["H30", "X0", "P0"]);
    }

    #[test]
    fn test_leading_number() {
        assert_eq!(leading_number("12.5"), Some(12.5));
        assert_eq!(leading_number("-40"), Some(-40.0));
        assert_eq!(leading_number("+2"), Some(2.0));
        assert_eq!(leading_number(".5"), Some(0.5));
        assert_eq!(leading_number("7."), Some(7.0));
        assert_eq!(leading_number("12abc"), Some(12.0));
        assert_eq!(leading_number(" 3"), Some(3.0));
        assert_eq!(leading_number("abc"), None);
        assert_eq!(leading_number("-"), None);
        assert_eq!(leading_number(""), None);
    }

    #[test]
    fn test_leading_integer() {
        assert_eq!(leading_integer("3"), Some(3));
        assert_eq!(leading_integer("3.9"), Some(3));
        assert_eq!(leading_integer("-1"), Some(-1));
        assert_eq!(leading_integer("x"), None);
        assert_eq!(leading_integer("99999999999999999999"), Some(i32::MAX));
    }
}
