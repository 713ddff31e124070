//! Solar and lunar ecliptic positions from low-order series.
//!
//! This crate provides:
//! - `position_of(Body, jd)`: Sun and Moon geocentric ecliptic longitude,
//!   latitude, distance and mean angular speed
//! - Ecliptic → equatorial conversion for hour-angle computations
//! - The `PositionSource` trait, so a higher-precision ephemeris can be
//!   plugged into the panchang engine
//! - Lahiri ayanamsha for sidereal longitudes
//!
//! Everything here is pure arithmetic on finite inputs; nothing is cached.

pub mod ayanamsha;
pub mod equatorial;
pub mod error;
pub mod moon;
pub mod source;
pub mod sun;

pub use ayanamsha::{LAHIRI_J2000_DEG, lahiri_ayanamsha_deg};
pub use equatorial::{
    Equatorial, ecliptic_to_equatorial, mean_obliquity_deg, moon_equatorial, sun_equatorial,
};
pub use error::EphemError;
pub use moon::{MOON_MEAN_SPEED_DEG_PER_DAY, moon_position};
pub use source::{PositionSource, SeriesEphemeris};
pub use sun::{SUN_MEAN_SPEED_DEG_PER_DAY, sun_position};

/// Bodies the series model covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
}

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
        }
    }
}

/// Geocentric ecliptic position of a body at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CelestialPosition {
    /// Tropical ecliptic longitude in degrees, [0, 360).
    pub longitude_deg: f64,
    /// Ecliptic latitude in degrees.
    pub latitude_deg: f64,
    /// Geocentric distance: AU for the Sun, km for the Moon.
    pub distance: f64,
    /// Mean angular speed in longitude, degrees per day.
    pub speed_deg_per_day: f64,
}

/// Normalize an angle to [0, 360) degrees.
///
/// Values that round up to exactly 360.0 map to 0.0.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Position of `body` at Julian Day `jd` from the built-in series.
pub fn position_of(body: Body, jd: f64) -> CelestialPosition {
    match body {
        Body::Sun => sun_position(jd),
        Body::Moon => moon_position(jd),
    }
}
