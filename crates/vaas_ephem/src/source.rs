//! The seam between the panchang engine and whatever produces positions.
//!
//! [`SeriesEphemeris`] is the built-in implementation. Callers with a more
//! precise ephemeris (a JPL kernel reader, a remote service) implement
//! [`PositionSource`] and hand it to the engine.

use crate::error::EphemError;
use crate::{Body, CelestialPosition, position_of};

/// Anything that can report a body's geocentric ecliptic position.
pub trait PositionSource: Send + Sync {
    /// Tropical ecliptic position of `body` at Julian Day `jd` (UT).
    ///
    /// Implementations must return a longitude in [0, 360).
    fn position(&self, body: Body, jd: f64) -> Result<CelestialPosition, EphemError>;

    /// Short label used in diagnostics.
    fn name(&self) -> &'static str {
        "external"
    }
}

/// The low-order trigonometric series in [`crate::sun`] and [`crate::moon`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeriesEphemeris;

impl PositionSource for SeriesEphemeris {
    fn position(&self, body: Body, jd: f64) -> Result<CelestialPosition, EphemError> {
        if !jd.is_finite() {
            return Err(EphemError::NonFiniteEpoch);
        }
        Ok(position_of(body, jd))
    }

    fn name(&self) -> &'static str {
        "series"
    }
}

impl<T: PositionSource + ?Sized> PositionSource for &T {
    fn position(&self, body: Body, jd: f64) -> Result<CelestialPosition, EphemError> {
        (**self).position(body, jd)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<T: PositionSource + ?Sized> PositionSource for Box<T> {
    fn position(&self, body: Body, jd: f64) -> Result<CelestialPosition, EphemError> {
        (**self).position(body, jd)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
