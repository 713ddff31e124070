//! Geometric solar longitude from a three-term equation of center.
//!
//! Low-precision model (~0.01°) from Meeus, "Astronomical Algorithms",
//! ch. 25. Angles are carried in degrees; trigonometric functions take
//! radians.

use vaas_time::julian_centuries;

use crate::{CelestialPosition, normalize_360};

/// Mean daily motion of the Sun in ecliptic longitude, degrees per day.
pub const SUN_MEAN_SPEED_DEG_PER_DAY: f64 = 0.9856;

/// Geometric mean longitude L0 in degrees (not normalized).
pub fn sun_mean_longitude_deg(t: f64) -> f64 {
    280.46646 + 36000.76983 * t + 0.0003032 * t * t
}

/// Solar mean anomaly M in degrees (not normalized).
pub fn sun_mean_anomaly_deg(t: f64) -> f64 {
    357.52911 + 35999.05029 * t - 0.0001537 * t * t
}

/// Equation of center C in degrees for mean anomaly `m_deg`.
pub fn equation_of_center_deg(t: f64, m_deg: f64) -> f64 {
    let m = m_deg.to_radians();
    (1.914602 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin()
}

/// Sun's geocentric position at a Julian Day.
///
/// Latitude is taken as zero. Distance is in AU.
pub fn sun_position(jd: f64) -> CelestialPosition {
    let t = julian_centuries(jd);
    let l0 = sun_mean_longitude_deg(t);
    let m = sun_mean_anomaly_deg(t);
    let c = equation_of_center_deg(t, m);
    let true_anomaly = (m + c).to_radians();

    CelestialPosition {
        longitude_deg: normalize_360(l0 + c),
        latitude_deg: 0.0,
        distance: 1.000_001_018 * (1.0 - 0.016_711_23 * true_anomaly.cos()),
        speed_deg_per_day: SUN_MEAN_SPEED_DEG_PER_DAY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_25a() {
        // 1992 Oct 13.0 TD (JD 2448908.5): true longitude 199.90988°
        let pos = sun_position(2_448_908.5);
        assert!(
            (pos.longitude_deg - 199.909).abs() < 0.01,
            "sun lon = {}",
            pos.longitude_deg
        );
    }

    #[test]
    fn near_vernal_equinox() {
        // 2024-03-20 03:06 UTC equinox → longitude ≈ 0°
        let pos = sun_position(2_460_389.629);
        let off = if pos.longitude_deg > 180.0 {
            pos.longitude_deg - 360.0
        } else {
            pos.longitude_deg
        };
        assert!(off.abs() < 0.05, "equinox longitude = {}", pos.longitude_deg);
    }

    #[test]
    fn distance_between_perihelion_and_aphelion() {
        for k in 0..365 {
            let d = sun_position(2_460_000.5 + k as f64).distance;
            assert!((0.982..=1.018).contains(&d), "distance = {d}");
        }
    }

    #[test]
    fn latitude_zero() {
        assert_eq!(sun_position(2_451_545.0).latitude_deg, 0.0);
    }
}
