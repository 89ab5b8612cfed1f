//! Keypad model for the calculator.
//!
//! This module provides:
//! - The keys of the keypad and the group each belongs to
//! - Parsing typed text into a sequence of key presses

mod error;
mod key;
mod parse;

pub use error::KeyError;
pub use key::{Digit, Key, KeyKind};
pub use parse::parse_keys;
