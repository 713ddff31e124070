//! Error types for civil time parsing and validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors raised while validating caller-supplied date/time input.
///
/// Calculation functions never produce these; only the parsers in
/// [`crate::parse`] do.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Input did not match the expected textual layout.
    InvalidFormat(String),
    /// Well-formed but not a real calendar date (e.g. 2023-02-29).
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Well-formed but out-of-range time of day.
    InvalidTime { hour: u32, minute: u32 },
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat(msg) => write!(f, "invalid format: {msg}"),
            Self::InvalidDate { year, month, day } => {
                write!(f, "not a calendar date: {year:04}-{month:02}-{day:02}")
            }
            Self::InvalidTime { hour, minute } => {
                write!(f, "not a time of day: {hour:02}:{minute:02}")
            }
        }
    }
}

impl Error for TimeError {}
