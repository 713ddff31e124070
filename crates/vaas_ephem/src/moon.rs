//! Truncated lunar theory: ELP-2000/82 mean arguments with the five largest
//! periodic longitude terms.
//!
//! Accuracy is of the order of 0.3° in longitude, sufficient to place the
//! Moon-Sun elongation within a 12° tithi segment except near boundaries.
//!
//! Source: Meeus, "Astronomical Algorithms", ch. 47 (mean arguments,
//! leading terms of tables 47.A/47.B).

use vaas_time::julian_centuries;

use crate::{CelestialPosition, normalize_360};

/// Mean daily motion of the Moon in ecliptic longitude, degrees per day.
pub const MOON_MEAN_SPEED_DEG_PER_DAY: f64 = 13.176;

/// Mean Earth-Moon distance in km for the one-term distance series.
pub const MOON_MEAN_DISTANCE_KM: f64 = 385_000.56;

/// Mean arguments of the lunar theory, degrees (not normalized).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarArguments {
    /// Moon's mean longitude L'.
    pub mean_longitude: f64,
    /// Mean elongation of the Moon D.
    pub elongation: f64,
    /// Sun's mean anomaly M.
    pub sun_anomaly: f64,
    /// Moon's mean anomaly M'.
    pub moon_anomaly: f64,
}

/// Evaluate the polynomial mean arguments at `t` Julian centuries from J2000.
pub fn lunar_arguments(t: f64) -> LunarArguments {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    LunarArguments {
        mean_longitude: 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2
            + t3 / 538_841.0
            - t4 / 65_194_000.0,
        elongation: 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
            - t4 / 113_065_000.0,
        sun_anomaly: 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2
            + t3 / 24_490_000.0,
        moon_anomaly: 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2
            + t3 / 69_699.0
            - t4 / 14_712_000.0,
    }
}

fn sin_deg(deg: f64) -> f64 {
    deg.to_radians().sin()
}

/// Moon's geocentric position at a Julian Day.
///
/// Distance is in km.
pub fn moon_position(jd: f64) -> CelestialPosition {
    let args = lunar_arguments(julian_centuries(jd));
    let d = args.elongation;
    let m = args.sun_anomaly;
    let mp = args.moon_anomaly;

    let longitude = args.mean_longitude
        + 6.289 * sin_deg(mp)
        + 1.274 * sin_deg(2.0 * d - mp)
        + 0.658 * sin_deg(2.0 * d)
        + 0.214 * sin_deg(2.0 * mp)
        - 0.185 * sin_deg(m);

    let latitude = 5.128 * sin_deg(mp + 93.27) + 0.281 * sin_deg(mp - 2.0 * d + 119.75);

    // Perigee (M' = 0) is the near point, hence the minus sign.
    let distance = MOON_MEAN_DISTANCE_KM - 20_905.355 * mp.to_radians().cos();

    CelestialPosition {
        longitude_deg: normalize_360(longitude),
        latitude_deg: latitude,
        distance,
        speed_deg_per_day: MOON_MEAN_SPEED_DEG_PER_DAY,
    }
}
