//! Error types for request validation and configuration parsing.
//!
//! Computation itself never fails for validated input; these errors come
//! only from turning caller strings into a request.

use std::error::Error;
use std::fmt::{Display, Formatter};

use vaas_time::TimeError;
use vaas_vedic_base::VedicError;

/// Errors from building a panchang request.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PanchangError {
    /// Date or time string failed validation.
    Time(TimeError),
    /// Coordinates or UTC offset out of range.
    Location(VedicError),
    /// Unrecognized value for a named option.
    UnknownOption {
        option: &'static str,
        value: String,
    },
}

impl Display for PanchangError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "{e}"),
            Self::Location(e) => write!(f, "{e}"),
            Self::UnknownOption { option, value } => {
                write!(f, "unknown {option}: '{value}'")
            }
        }
    }
}

impl Error for PanchangError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            Self::Location(e) => Some(e),
            Self::UnknownOption { .. } => None,
        }
    }
}

impl From<TimeError> for PanchangError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<VedicError> for PanchangError {
    fn from(e: VedicError) -> Self {
        Self::Location(e)
    }
}
