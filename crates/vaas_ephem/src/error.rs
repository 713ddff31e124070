//! Error types for position sources.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from a [`crate::PositionSource`].
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemError {
    /// The Julian Day was NaN or infinite.
    NonFiniteEpoch,
    /// The source has no data for this body.
    UnsupportedBody(&'static str),
    /// The Julian Day lies outside the source's coverage.
    OutOfRange { jd: f64 },
    /// Any other failure reported by an external source.
    Source(String),
}

impl Display for EphemError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonFiniteEpoch => write!(f, "epoch is not a finite Julian Day"),
            Self::UnsupportedBody(body) => write!(f, "body not supported: {body}"),
            Self::OutOfRange { jd } => write!(f, "JD {jd} outside source coverage"),
            Self::Source(msg) => write!(f, "position source failed: {msg}"),
        }
    }
}

impl Error for EphemError {}
