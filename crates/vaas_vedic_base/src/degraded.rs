//! Non-fatal fallbacks: a value plus the reason it is less precise than asked.

use std::error::Error;
use std::fmt::{Display, Formatter};

use vaas_ephem::EphemError;

use crate::error::RiseSetError;

/// Why a result was produced by a fallback path.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum DegradedReason {
    /// Sunrise/sunset could not be computed; fixed civil times were used.
    RiseSetUnavailable(RiseSetError),
    /// Solar/lunar positions could not be computed; the day-count tithi
    /// approximation was used.
    PositionUnavailable(EphemError),
    /// Delegated precision was requested but no position source was given.
    DelegateMissing,
}

impl Display for DegradedReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RiseSetUnavailable(e) => {
                write!(f, "sunrise/sunset unavailable ({e}); using 06:00/18:00")
            }
            Self::PositionUnavailable(e) => {
                write!(f, "positions unavailable ({e}); using day-count approximation")
            }
            Self::DelegateMissing => {
                write!(f, "no delegate position source; using day-count approximation")
            }
        }
    }
}

impl Error for DegradedReason {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::RiseSetUnavailable(e) => Some(e),
            Self::PositionUnavailable(e) => Some(e),
            Self::DelegateMissing => None,
        }
    }
}

impl From<RiseSetError> for DegradedReason {
    fn from(e: RiseSetError) -> Self {
        Self::RiseSetUnavailable(e)
    }
}

impl From<EphemError> for DegradedReason {
    fn from(e: EphemError) -> Self {
        Self::PositionUnavailable(e)
    }
}

/// A computed value, flagged when it came from a fallback path.
#[derive(Debug, Clone, PartialEq)]
pub struct Computed<T> {
    pub value: T,
    pub degraded: Option<DegradedReason>,
}

impl<T> Computed<T> {
    /// A value from the precise path.
    pub fn exact(value: T) -> Self {
        Self {
            value,
            degraded: None,
        }
    }

    /// A value from a fallback path.
    pub fn degraded(value: T, reason: DegradedReason) -> Self {
        Self {
            value,
            degraded: Some(reason),
        }
    }

    /// Take the precise result, or compute the fallback from the reason.
    pub fn or_fallback<F>(result: Result<T, DegradedReason>, fallback: F) -> Self
    where
        F: FnOnce(&DegradedReason) -> T,
    {
        match result {
            Ok(value) => Self::exact(value),
            Err(reason) => {
                tracing::warn!(%reason, "falling back");
                let value = fallback(&reason);
                Self::degraded(value, reason)
            }
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.degraded.is_some()
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Computed<U> {
        Computed {
            value: f(self.value),
            degraded: self.degraded,
        }
    }

    pub fn into_value(self) -> T {
        self.value
    }
}
