//! Calculator state and the transitions driven by key presses.
//!
//! Every transition consumes the current state and returns the next one.
//! None of them can fail: malformed input is absorbed as a no-op.

use super::number::{number_to_display, parse_display};
use super::operation::Operation;
use crate::keypad::{Digit, Key};

/// A left operand together with the operation waiting for its right operand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pending {
    pub value: f64,
    pub operation: Operation,
}

/// The complete state of the calculator.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculatorState {
    /// Current on-screen value. Always a decimal literal, never empty.
    display: String,
    /// Left operand and operator awaiting the next operand.
    pending: Option<Pending>,
    /// Set right after an operator or equals: the next digit starts a new
    /// number instead of extending the display.
    waiting_for_new_value: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// The rest state: display `"0"`, nothing pending.
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            pending: None,
            waiting_for_new_value: false,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn pending(&self) -> Option<Pending> {
        self.pending
    }

    pub fn previous_value(&self) -> Option<f64> {
        self.pending.map(|p| p.value)
    }

    pub fn operation(&self) -> Option<Operation> {
        self.pending.map(|p| p.operation)
    }

    pub fn is_waiting_for_new_value(&self) -> bool {
        self.waiting_for_new_value
    }

    /// Dispatch a single key press to its transition.
    #[must_use]
    pub fn press(self, key: Key) -> Self {
        let next = match key {
            Key::Digit(digit) => self.enter_digit(digit),
            Key::Decimal => self.enter_decimal(),
            Key::Operation(op) => self.select_operation(op),
            Key::Equals => self.equals(),
            Key::Clear => self.clear(),
            Key::ToggleSign => self.toggle_sign(),
            Key::Percent => self.percent(),
        };

        tracing::debug!(
            key = key.label(),
            display = %next.display,
            pending = ?next.pending,
            waiting = next.waiting_for_new_value,
            "key pressed"
        );

        next
    }

    /// Press every key in order, starting from `self`.
    #[must_use]
    pub fn press_all<I>(self, keys: I) -> Self
    where
        I: IntoIterator<Item = Key>,
    {
        keys.into_iter().fold(self, Self::press)
    }

    #[must_use]
    pub fn enter_digit(mut self, digit: Digit) -> Self {
        if self.waiting_for_new_value {
            self.display = digit.to_string();
            self.waiting_for_new_value = false;
        } else if self.display == "0" {
            // No leading zeros.
            self.display = digit.to_string();
        } else {
            self.display.push(digit.as_char());
        }
        self
    }

    #[must_use]
    pub fn enter_decimal(mut self) -> Self {
        if self.waiting_for_new_value {
            self.display = "0.".to_string();
            self.waiting_for_new_value = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
        self
    }

    /// Select the next operation, first folding in any pending one.
    ///
    /// Operations chain strictly left to right: `3 + 4 × 2` is `(3 + 4) × 2`.
    #[must_use]
    pub fn select_operation(mut self, operation: Operation) -> Self {
        let input = parse_display(&self.display);

        let value = match self.pending {
            None => input,
            Some(pending) => {
                let value = pending.operation.apply(pending.value, input);
                self.display = number_to_display(value);
                // Keep the operand identical to what is shown, clamping included.
                parse_display(&self.display)
            }
        };

        self.pending = Some(Pending { value, operation });
        self.waiting_for_new_value = true;
        self
    }

    /// Apply the pending operation, if any. Without one this is a no-op.
    #[must_use]
    pub fn equals(self) -> Self {
        let Some(pending) = self.pending else {
            return self;
        };

        let input = parse_display(&self.display);
        let value = pending.operation.apply(pending.value, input);

        Self {
            display: number_to_display(value),
            pending: None,
            waiting_for_new_value: true,
        }
    }

    #[must_use]
    pub fn clear(self) -> Self {
        Self::new()
    }

    /// Flip the sign of the display text. `"0"` becomes `"-0"`.
    #[must_use]
    pub fn toggle_sign(mut self) -> Self {
        self.display = match self.display.strip_prefix('-') {
            Some(rest) => rest.to_string(),
            None => format!("-{}", self.display),
        };
        self
    }

    #[must_use]
    pub fn percent(mut self) -> Self {
        self.display = number_to_display(parse_display(&self.display) / 100.0);
        self
    }
}
