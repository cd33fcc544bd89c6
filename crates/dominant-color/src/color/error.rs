//! Error type for output format names

use std::fmt;

/// Returned when a format name is neither `rgb` nor `hex`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// The rejected format name, as given
    UnknownFormat(String),
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::UnknownFormat(name) => {
                write!(f, "unknown color format '{}' (expected rgb or hex)", name)
            }
        }
    }
}

impl std::error::Error for ParseColorError {}
