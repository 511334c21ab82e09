//! Error types for the monopng library.

use std::fmt;

/// Result type alias for monopng operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while producing a swatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input was not a parseable hex color code.
    InvalidHexColor {
        /// The rejected input, verbatim.
        input: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidHexColor { input } => {
                write!(f, "Invalid hex color code: {:?}", input)
            }
        }
    }
}

impl std::error::Error for Error {}
