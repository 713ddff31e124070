//! Greenwich Mean Sidereal Time and Earth Rotation Angle.
//!
//! Provides the ERA and GMST needed for converting between celestial
//! (RA/Dec) and terrestrial (hour angle) coordinates in the rise/set
//! calculator. Inputs are UT Julian Dates; UTC is used as a stand-in for
//! UT1 (the difference is under a second).
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15. Public domain.
//! - GMST polynomial: Capitaine et al. 2003, Table 2. Public domain.

use std::f64::consts::{PI, TAU};

use crate::julian::J2000_JD;

/// Arcseconds to radians: 1″ = π / (180 × 3600).
const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Ratio of a solar day to a sidereal day.
pub const SIDEREAL_RATE: f64 = 1.002_737_811_911_354_6;

/// Earth Rotation Angle at a given UT Julian Date.
///
/// θ = 2π × (0.7790572732640 + 1.00273781191135448 × Du),
/// Du = JD_UT − 2451545.0. Returns radians in [0, 2π).
pub fn earth_rotation_angle_rad(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    let theta = TAU * (0.779_057_273_264_0 + SIDEREAL_RATE * du);
    theta.rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time at a given UT Julian Date.
///
/// GMST = ERA + polynomial(T) (arcseconds):
///   0.014506 + 4612.156534·T + 1.3915817·T² − 0.00000044·T³
///   − 0.000029956·T⁴ − 0.0000000368·T⁵
///
/// Returns radians in [0, 2π).
pub fn gmst_rad(jd_ut: f64) -> f64 {
    let era = earth_rotation_angle_rad(jd_ut);
    let t = (jd_ut - J2000_JD) / 36525.0;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;

    let poly_arcsec = 0.014506 + 4612.156534 * t + 1.3915817 * t2
        - 0.00000044 * t3
        - 0.000029956 * t4
        - 0.0000000368 * t5;

    (era + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Local Sidereal Time from GMST and observer east longitude, radians in [0, 2π).
pub fn local_sidereal_time_rad(gmst: f64, longitude_east_rad: f64) -> f64 {
    (gmst + longitude_east_rad).rem_euclid(TAU)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn era_at_j2000_noon() {
        let theta_deg = earth_rotation_angle_rad(J2000_JD).to_degrees();
        assert!(
            (theta_deg - 280.46).abs() < 0.1,
            "ERA at J2000 = {theta_deg}°, expected ~280.46°"
        );
    }

    #[test]
    fn gmst_j2000_midnight() {
        // 2000-Jan-01 0h UT: GMST ≈ 6h 39m 51s ≈ 99.97°
        let gmst_deg = gmst_rad(2_451_544.5).to_degrees();
        assert!(
            (gmst_deg - 99.97).abs() < 0.1,
            "GMST at J2000 midnight = {gmst_deg}°, expected ~99.97°"
        );
    }

    #[test]
    fn gmst_advances_per_solar_day() {
        let g1 = gmst_rad(2_451_545.0);
        let g2 = gmst_rad(2_451_546.0);
        let advance = (g2 - g1).rem_euclid(TAU).to_degrees();
        assert!((advance - 0.9856).abs() < 0.01, "advance = {advance}");
    }

    #[test]
    fn lst_east_offset() {
        let lst = local_sidereal_time_rad(1.0, PI / 2.0);
        assert!((lst - (1.0 + PI / 2.0)).abs() < 1e-15);
    }

    #[test]
    fn gmst_range() {
        for &jd in &[2_451_545.0, 2_451_544.5, 2_460_000.5, 2_440_000.5] {
            let g = gmst_rad(jd);
            assert!((0.0..TAU).contains(&g), "GMST out of range: {g}");
        }
    }
}
