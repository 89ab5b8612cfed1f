//! Tokenizing typed text into key presses.
//!
//! Accepts both the keypad captions (`×`, `÷`, `±`, `AC`) and the ASCII
//! spellings people type on a keyboard (`*`, `x`, `/`, `+/-`, `c`).
//! Whitespace between keys is optional.

use super::error::KeyError;
use super::key::{Digit, Key};
use crate::calculator::Operation;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches one key token at the start of the input.
    /// Longer spellings come first so `+/-` wins over `+` and `ac` over `c`.
    static ref KEY_TOKEN: Regex = Regex::new(
        r"^(?i:\+/-|±|neg|ac|c|[0-9]|[.%=+\-−*x×/÷])"
    ).unwrap();
}

/// Parse a sequence of keys such as `"3 + 4 × 2 ="` or `"12.5*4="`.
pub fn parse_keys(input: &str) -> Result<Vec<Key>, KeyError> {
    let mut keys = Vec::new();
    let mut offset = 0;

    loop {
        let rest = &input[offset..];
        let trimmed = rest.trim_start();
        offset += rest.len() - trimmed.len();

        if trimmed.is_empty() {
            break;
        }

        let key = KEY_TOKEN
            .find(trimmed)
            .and_then(|m| key_for_token(m.as_str()).map(|key| (key, m.end())));

        match key {
            Some((key, len)) => {
                keys.push(key);
                offset += len;
            }
            None => {
                return Err(KeyError::Unrecognized {
                    position: input[..offset].chars().count(),
                    found: trimmed
                        .split_whitespace()
                        .next()
                        .unwrap_or(trimmed)
                        .to_string(),
                });
            }
        }
    }

    Ok(keys)
}

/// Map one matched token to its key.
fn key_for_token(token: &str) -> Option<Key> {
    let key = match token.to_lowercase().as_str() {
        "." => Key::Decimal,
        "=" => Key::Equals,
        "%" => Key::Percent,
        "+/-" | "±" | "neg" => Key::ToggleSign,
        "ac" | "c" => Key::Clear,
        "+" => Key::Operation(Operation::Add),
        "-" | "−" => Key::Operation(Operation::Subtract),
        "*" | "x" | "×" => Key::Operation(Operation::Multiply),
        "/" | "÷" => Key::Operation(Operation::Divide),
        other => {
            let mut chars = other.chars();
            let digit = chars.next().and_then(|c| Digit::try_from(c).ok())?;
            if chars.next().is_some() {
                return None;
            }
            Key::Digit(digit)
        }
    };
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(input: &str) -> Vec<&'static str> {
        parse_keys(input).unwrap().into_iter().map(Key::label).collect()
    }

    #[test]
    fn test_spaced_and_compact_input() {
        assert_eq!(labels("3 + 4 × 2 ="), ["3", "+", "4", "×", "2", "="]);
        assert_eq!(labels("3+4*2="), ["3", "+", "4", "×", "2", "="]);
        assert_eq!(labels("  12.5 / 5 "), ["1", "2", ".", "5", "÷", "5"]);
    }

    #[test]
    fn test_keyboard_spellings() {
        assert_eq!(labels("7 x 2"), ["7", "×", "2"]);
        assert_eq!(labels("7X2"), ["7", "×", "2"]);
        assert_eq!(labels("9 − 1"), ["9", "-", "1"]);
        assert_eq!(labels("8 ÷ 2"), ["8", "÷", "2"]);
    }

    #[test]
    fn test_function_keys() {
        assert_eq!(labels("5 +/- %"), ["5", "±", "%"]);
        assert_eq!(labels("5 ± neg"), ["5", "±", "±"]);
        assert_eq!(labels("AC c Ac"), ["AC", "AC", "AC"]);
    }

    #[test]
    fn test_sign_toggle_wins_over_plus() {
        assert_eq!(labels("2+/-"), ["2", "±"]);
        assert_eq!(labels("2+ /"), ["2", "+", "÷"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_keys("").unwrap().is_empty());
        assert!(parse_keys("   ").unwrap().is_empty());
    }

    #[test]
    fn test_unrecognized_key() {
        let err = parse_keys("1 + sqrt 4").unwrap_err();
        assert_eq!(
            err,
            KeyError::Unrecognized {
                position: 4,
                found: "sqrt".to_string(),
            }
        );
    }

    #[test]
    fn test_unrecognized_position_counts_chars() {
        let err = parse_keys("×÷?").unwrap_err();
        assert_eq!(
            err,
            KeyError::Unrecognized {
                position: 2,
                found: "?".to_string(),
            }
        );
    }
}
