//! A four-function keypad calculator.
//!
//! [`CalculatorState`] holds the state of the calculator and moves from one
//! state to the next on every key press. [`format_display`] fits the current
//! display value onto a fixed-width screen.
//!
//! ```
//! use zcalc::{CalculatorState, format_display, parse_keys};
//!
//! let keys = parse_keys("3 + 4 × 2 =").unwrap();
//! let state = CalculatorState::new().press_all(keys);
//! assert_eq!(format_display(state.display()), "14");
//! ```

pub mod calculator;
pub mod clipboard;
pub mod config;
pub mod keypad;

pub use calculator::{CalculatorState, DisplayFormat, Operation, format_display};
pub use config::Config;
pub use keypad::{Digit, Key, KeyKind, parse_keys};
