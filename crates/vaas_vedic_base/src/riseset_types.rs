//! Types for sunrise/sunset and twilight calculations.
//!
//! Provides geographic location, event types, configuration, and result types
//! used by the rise/set computation module.

use std::f64::consts::PI;

use vaas_time::{CivilTime, civil_to_jd, jd_to_civil};

use crate::error::VedicError;
use crate::validate::{validate_coordinates, validate_utc_offset};

/// Mean Earth radius in meters (IAU nominal, for geometric dip).
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Geographic location on Earth's surface, with the civil time frame used
/// to interpret calendar dates at that location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Altitude above mean sea level in meters.
    pub altitude_m: f64,
    /// Offset of local civil time from UTC, in hours (IST = 5.5).
    pub utc_offset_hours: f64,
}

impl GeoLocation {
    /// Create a location whose civil time is local mean time (`longitude / 15`).
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
            utc_offset_hours: longitude_deg / 15.0,
        }
    }

    /// Replace the civil-time offset (e.g. a zone offset such as 5.5).
    pub fn with_utc_offset(mut self, hours: f64) -> Self {
        self.utc_offset_hours = hours;
        self
    }

    /// Validate coordinate ranges and the UTC offset.
    pub fn validated(self) -> Result<Self, VedicError> {
        validate_coordinates(self.latitude_deg, self.longitude_deg)?;
        validate_utc_offset(self.utc_offset_hours)?;
        Ok(self)
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }

    /// Convert a local civil instant at this location to UTC fields.
    pub fn to_utc(&self, local: &CivilTime) -> CivilTime {
        local.shift_hours(-self.utc_offset_hours)
    }

    /// Convert a UTC instant to local civil fields at this location.
    pub fn to_local(&self, utc: &CivilTime) -> CivilTime {
        utc.shift_hours(self.utc_offset_hours)
    }

    /// Julian Day (UT) of a local civil instant.
    pub fn local_to_jd(&self, local: &CivilTime) -> f64 {
        civil_to_jd(local) - self.utc_offset_hours / 24.0
    }

    /// Local civil instant of a Julian Day (UT).
    pub fn jd_to_local(&self, jd: f64) -> CivilTime {
        jd_to_civil(jd + self.utc_offset_hours / 24.0)
    }
}

/// Rise/set event types, including twilight variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiseSetEvent {
    /// Sunrise: upper limb of the Sun at the horizon, accounting for
    /// atmospheric refraction and solar semidiameter.
    Sunrise,
    /// Sunset: upper limb disappears below the horizon.
    Sunset,
    /// Civil dawn: Sun center at -6 deg.
    CivilDawn,
    /// Civil dusk: Sun center at -6 deg.
    CivilDusk,
    /// Nautical dawn: Sun center at -12 deg.
    NauticalDawn,
    /// Nautical dusk: Sun center at -12 deg.
    NauticalDusk,
    /// Astronomical dawn: Sun center at -18 deg.
    AstronomicalDawn,
    /// Astronomical dusk: Sun center at -18 deg.
    AstronomicalDusk,
}

/// All eight events in chronological order for a normal day.
pub const ALL_EVENTS: [RiseSetEvent; 8] = [
    RiseSetEvent::AstronomicalDawn,
    RiseSetEvent::NauticalDawn,
    RiseSetEvent::CivilDawn,
    RiseSetEvent::Sunrise,
    RiseSetEvent::Sunset,
    RiseSetEvent::CivilDusk,
    RiseSetEvent::NauticalDusk,
    RiseSetEvent::AstronomicalDusk,
];

impl RiseSetEvent {
    /// Depression angle in degrees below the geometric horizon.
    ///
    /// For sunrise/sunset this is 0.8333 deg (34' refraction + 16' semidiameter).
    pub fn depression_deg(self) -> f64 {
        match self {
            Self::Sunrise | Self::Sunset => 50.0 / 60.0,
            Self::CivilDawn | Self::CivilDusk => 6.0,
            Self::NauticalDawn | Self::NauticalDusk => 12.0,
            Self::AstronomicalDawn | Self::AstronomicalDusk => 18.0,
        }
    }

    /// Whether this is a rising (morning) event.
    pub fn is_rising(self) -> bool {
        matches!(
            self,
            Self::Sunrise | Self::CivilDawn | Self::NauticalDawn | Self::AstronomicalDawn
        )
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunrise => "Sunrise",
            Self::Sunset => "Sunset",
            Self::CivilDawn => "Civil dawn",
            Self::CivilDusk => "Civil dusk",
            Self::NauticalDawn => "Nautical dawn",
            Self::NauticalDusk => "Nautical dusk",
            Self::AstronomicalDawn => "Astronomical dawn",
            Self::AstronomicalDusk => "Astronomical dusk",
        }
    }
}

/// Configurable parameters for rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiseSetConfig {
    /// Atmospheric refraction at the horizon in arcminutes. Default: 34.0.
    pub refraction_arcmin: f64,
    /// Solar angular semi-diameter in arcminutes. Default: 16.0.
    ///
    /// Used when the Sun's distance is unknown; otherwise the semidiameter
    /// is derived from the distance.
    pub semidiameter_arcmin: f64,
    /// Whether to apply geometric dip correction for observer altitude.
    /// Approximation: dip = sqrt(2h/R) radians. Default: true.
    pub altitude_correction: bool,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            refraction_arcmin: 34.0,
            semidiameter_arcmin: 16.0,
            altitude_correction: true,
        }
    }
}

impl RiseSetConfig {
    /// Geometric dip of the horizon for an observer `altitude_m` above sea level.
    pub fn dip_deg(&self, altitude_m: f64) -> f64 {
        if self.altitude_correction && altitude_m > 0.0 {
            (2.0 * altitude_m / EARTH_RADIUS_M).sqrt() * (180.0 / PI)
        } else {
            0.0
        }
    }

    /// Total horizon depression for sunrise/sunset in degrees.
    ///
    /// `h0 = (refraction + semidiameter) / 60 + dip_deg`
    pub fn horizon_depression_deg(&self, altitude_m: f64) -> f64 {
        (self.refraction_arcmin + self.semidiameter_arcmin) / 60.0 + self.dip_deg(altitude_m)
    }

    /// Target altitude of the Sun's center for `event`, in degrees (negative
    /// below the horizon).
    ///
    /// `semidiameter_arcmin` overrides the configured value for sunrise/sunset.
    pub fn target_altitude_deg(
        &self,
        event: RiseSetEvent,
        semidiameter_arcmin: f64,
        altitude_m: f64,
    ) -> f64 {
        match event {
            RiseSetEvent::Sunrise | RiseSetEvent::Sunset => {
                -((self.refraction_arcmin + semidiameter_arcmin) / 60.0 + self.dip_deg(altitude_m))
            }
            _ => -event.depression_deg(),
        }
    }
}

/// Result of a rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseSetResult {
    /// Event occurs at the given Julian Day (UT).
    Event { jd_ut: f64, event: RiseSetEvent },
    /// Sun never rises during this solar day (polar night).
    NeverRises,
    /// Sun never sets during this solar day (midnight sun).
    NeverSets,
}

impl RiseSetResult {
    pub fn jd(&self) -> Option<f64> {
        match self {
            Self::Event { jd_ut, .. } => Some(*jd_ut),
            _ => None,
        }
    }
}

/// Sunrise, sunset and solar noon for one civil day, in local time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiseSetTimes {
    pub sunrise: CivilTime,
    pub sunset: CivilTime,
    pub solar_noon: CivilTime,
    /// Sunrise as a Julian Day (UT).
    pub sunrise_jd: f64,
    /// Sunset as a Julian Day (UT).
    pub sunset_jd: f64,
    /// Solar noon as a Julian Day (UT).
    pub solar_noon_jd: f64,
}

impl RiseSetTimes {
    /// Daylight duration in hours.
    pub fn day_length_hours(&self) -> f64 {
        (self.sunset_jd - self.sunrise_jd) * 24.0
    }
}
