//! Keys of the calculator keypad.

use super::error::KeyError;
use crate::calculator::Operation;
use std::fmt;

/// A decimal digit, `0` through `9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<char> for Digit {
    type Error = KeyError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .map(Digit)
            .ok_or(KeyError::NotADigit(c))
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The visual group a key belongs to on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyKind {
    /// Digits and the decimal point.
    Number,
    /// The four arithmetic operators.
    Operator,
    /// Clear, sign toggle and percent.
    Function,
    Equals,
}

impl KeyKind {
    pub const ALL: [KeyKind; 4] = [Self::Number, Self::Operator, Self::Function, Self::Equals];

    pub fn name(self) -> &'static str {
        match self {
            Self::Number => "Number",
            Self::Operator => "Operator",
            Self::Function => "Function",
            Self::Equals => "Equals",
        }
    }
}

/// One press of a keypad button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Digit(Digit),
    Decimal,
    Operation(Operation),
    Equals,
    Clear,
    ToggleSign,
    Percent,
}

impl Key {
    /// Every key in keypad reading order, row by row:
    /// `AC ± % ÷`, `7 8 9 ×`, `4 5 6 -`, `1 2 3 +`, `0 . =`.
    pub const ALL: [Key; 19] = [
        Key::Clear,
        Key::ToggleSign,
        Key::Percent,
        Key::Operation(Operation::Divide),
        Key::Digit(Digit(7)),
        Key::Digit(Digit(8)),
        Key::Digit(Digit(9)),
        Key::Operation(Operation::Multiply),
        Key::Digit(Digit(4)),
        Key::Digit(Digit(5)),
        Key::Digit(Digit(6)),
        Key::Operation(Operation::Subtract),
        Key::Digit(Digit(1)),
        Key::Digit(Digit(2)),
        Key::Digit(Digit(3)),
        Key::Operation(Operation::Add),
        Key::Digit(Digit(0)),
        Key::Decimal,
        Key::Equals,
    ];

    /// The caption printed on the key.
    pub fn label(self) -> &'static str {
        const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

        match self {
            Self::Digit(d) => DIGITS[usize::from(d.value())],
            Self::Decimal => ".",
            Self::Operation(op) => op.symbol(),
            Self::Equals => "=",
            Self::Clear => "AC",
            Self::ToggleSign => "±",
            Self::Percent => "%",
        }
    }

    pub fn kind(self) -> KeyKind {
        match self {
            Self::Digit(_) | Self::Decimal => KeyKind::Number,
            Self::Operation(_) => KeyKind::Operator,
            Self::Clear | Self::ToggleSign | Self::Percent => KeyKind::Function,
            Self::Equals => KeyKind::Equals,
        }
    }
}

impl From<Digit> for Key {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

impl From<Operation> for Key {
    fn from(op: Operation) -> Self {
        Self::Operation(op)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_from_char() {
        assert_eq!(Digit::try_from('0').unwrap().value(), 0);
        assert_eq!(Digit::try_from('9').unwrap().as_char(), '9');
        assert!(matches!(Digit::try_from('a'), Err(KeyError::NotADigit('a'))));
        assert!(Digit::try_from('٣').is_err());
    }

    #[test]
    fn test_keypad_layout() {
        let labels: Vec<_> = Key::ALL.iter().map(|k| k.label()).collect();
        assert_eq!(
            labels,
            [
                "AC", "±", "%", "÷", "7", "8", "9", "×", "4", "5", "6", "-", "1", "2", "3", "+",
                "0", ".", "="
            ]
        );
    }

    #[test]
    fn test_key_kinds() {
        let count = |kind| Key::ALL.iter().filter(|k| k.kind() == kind).count();
        assert_eq!(count(KeyKind::Number), 11);
        assert_eq!(count(KeyKind::Operator), 4);
        assert_eq!(count(KeyKind::Function), 3);
        assert_eq!(count(KeyKind::Equals), 1);
    }
}
