//! Calculator engine and display formatting.
//!
//! This module provides:
//! - The calculator state and one transition per key press
//! - The four arithmetic operations
//! - Formatting the display value for a fixed-width screen

mod format;
mod number;
mod operation;
mod state;

pub use format::{DisplayFormat, format_display};
pub use number::{number_to_display, parse_display};
pub use operation::Operation;
pub use state::{CalculatorState, Pending};
