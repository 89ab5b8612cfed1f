use thiserror::Error;

/// Errors raised while turning text into key presses.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum KeyError {
    #[error("'{0}' is not a decimal digit")]
    NotADigit(char),
    #[error("unrecognized key {found:?} at position {position}")]
    Unrecognized { position: usize, found: String },
}
