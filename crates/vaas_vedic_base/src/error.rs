//! Error types for Vedic calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use vaas_ephem::EphemError;

/// Errors from Vedic base calculations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum VedicError {
    /// Invalid geographic location parameter.
    InvalidLocation(&'static str),
}

impl Display for VedicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
        }
    }
}

impl Error for VedicError {}

/// Why a sunrise/sunset could not be computed.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum RiseSetError {
    /// The Sun stays below the horizon all day (polar night).
    NeverRises,
    /// The Sun stays above the horizon all day (midnight sun).
    NeverSets,
    /// The position source failed.
    Ephem(EphemError),
    /// The provider is not available in this build or configuration.
    Unavailable(&'static str),
}

impl Display for RiseSetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NeverRises => write!(f, "sun never rises on this date"),
            Self::NeverSets => write!(f, "sun never sets on this date"),
            Self::Ephem(e) => write!(f, "ephemeris error: {e}"),
            Self::Unavailable(msg) => write!(f, "rise/set provider unavailable: {msg}"),
        }
    }
}

impl Error for RiseSetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Ephem(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EphemError> for RiseSetError {
    fn from(e: EphemError) -> Self {
        Self::Ephem(e)
    }
}
