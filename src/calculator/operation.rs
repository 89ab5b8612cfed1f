//! The four arithmetic operations of the keypad.

use std::fmt;

/// A binary operation waiting for (or applied to) two operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All operations, in keypad order (top to bottom).
    pub const ALL: [Operation; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Apply the operation to `a` (left) and `b` (right).
    ///
    /// Division by zero yields `0` rather than an infinity or NaN.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b != 0.0 {
                    a / b
                } else {
                    0.0
                }
            }
        }
    }

    /// The symbol printed on the key.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
