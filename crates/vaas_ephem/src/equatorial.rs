//! Ecliptic → equatorial rotation for rise/set work.
//!
//! Uses the mean obliquity of the ecliptic (IAU 1980 linear term); nutation
//! is ignored at this precision.

use std::f64::consts::TAU;

use vaas_time::julian_centuries;

use crate::moon::moon_position;
use crate::sun::sun_position;

/// Equatorial coordinates in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equatorial {
    /// Right ascension in [0, 2π).
    pub ra_rad: f64,
    /// Declination in [-π/2, π/2].
    pub dec_rad: f64,
}

/// Mean obliquity of the ecliptic in degrees at `t` Julian centuries.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    23.439_291 - 0.013_004_2 * t
}

/// Rotate ecliptic (λ, β) in degrees into equatorial (α, δ).
pub fn ecliptic_to_equatorial(lon_deg: f64, lat_deg: f64, obliquity_deg: f64) -> Equatorial {
    let (sl, cl) = lon_deg.to_radians().sin_cos();
    let (sb, cb) = lat_deg.to_radians().sin_cos();
    let (se, ce) = obliquity_deg.to_radians().sin_cos();
    let ra = (sl * ce - (sb / cb) * se).atan2(cl);
    let dec = (sb * ce + cb * se * sl).clamp(-1.0, 1.0).asin();
    Equatorial {
        ra_rad: ra.rem_euclid(TAU),
        dec_rad: dec,
    }
}

/// Sun's right ascension and declination at a Julian Day.
pub fn sun_equatorial(jd: f64) -> Equatorial {
    let pos = sun_position(jd);
    ecliptic_to_equatorial(
        pos.longitude_deg,
        pos.latitude_deg,
        mean_obliquity_deg(julian_centuries(jd)),
    )
}

/// Moon's right ascension and declination at a Julian Day.
pub fn moon_equatorial(jd: f64) -> Equatorial {
    let pos = moon_position(jd);
    ecliptic_to_equatorial(
        pos.longitude_deg,
        pos.latitude_deg,
        mean_obliquity_deg(julian_centuries(jd)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equinox_point_maps_to_origin() {
        let eq = ecliptic_to_equatorial(0.0, 0.0, 23.44);
        assert!(eq.ra_rad.abs() < 1e-12 || (eq.ra_rad - TAU).abs() < 1e-12);
        assert!(eq.dec_rad.abs() < 1e-12);
    }

    #[test]
    fn summer_solstice_declination() {
        let eq = ecliptic_to_equatorial(90.0, 0.0, 23.44);
        assert!((eq.dec_rad.to_degrees() - 23.44).abs() < 1e-9);
        assert!((eq.ra_rad.to_degrees() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn sun_declination_june() {
        // Mid-June: Sun near +23.4°
        let eq = sun_equatorial(2_460_478.5);
        assert!(eq.dec_rad.to_degrees() > 23.0, "dec = {}", eq.dec_rad.to_degrees());
    }

    #[test]
    fn obliquity_j2000() {
        assert!((mean_obliquity_deg(0.0) - 23.439_291).abs() < 1e-12);
    }
}
