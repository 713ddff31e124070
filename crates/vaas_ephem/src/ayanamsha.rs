//! Lahiri (Chitrapaksha) ayanamsha.
//!
//! The reference value at J2000.0 (23.853°) plus the general precession in
//! longitude. Used only for the opt-in sidereal nakshatra/yoga method.

use vaas_time::julian_centuries;

/// Lahiri ayanamsha at J2000.0 in degrees.
pub const LAHIRI_J2000_DEG: f64 = 23.853;

/// General precession in longitude, arcseconds per Julian century (IAU 2006).
const PRECESSION_ARCSEC_PER_CENTURY: f64 = 5028.796195;

/// Quadratic precession term, arcseconds per century².
const PRECESSION_ARCSEC_T2: f64 = 1.105_434_8;

/// Mean Lahiri ayanamsha at a Julian Day, in degrees.
pub fn lahiri_ayanamsha_deg(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    LAHIRI_J2000_DEG + (PRECESSION_ARCSEC_PER_CENTURY * t + PRECESSION_ARCSEC_T2 * t * t) / 3600.0
}
