//! Moonrise and moonset for a local civil day.
//!
//! The Moon moves too fast for the solar hour-angle iteration, so the day is
//! sampled at a fixed step and each horizon crossing is bisected. A day may
//! have no moonrise or no moonset; that is reported as `None`, not an error.

use vaas_ephem::{Body, EphemError, PositionSource, ecliptic_to_equatorial, mean_obliquity_deg};
use vaas_time::{CivilTime, gmst_rad, julian_centuries, local_sidereal_time_rad};

use crate::riseset_types::{GeoLocation, RiseSetConfig};

/// Earth equatorial radius in km, for lunar horizontal parallax.
const EARTH_EQUATORIAL_RADIUS_KM: f64 = 6_378.14;

/// Sampling step in days (10 minutes).
const SCAN_STEP_DAYS: f64 = 10.0 / 1440.0;

/// Bisection steps; 600 s / 2^20 is well under a millisecond.
const BISECTION_STEPS: usize = 20;

/// Moonrise and moonset on one local civil date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonRiseSet {
    pub moonrise: Option<CivilTime>,
    pub moonset: Option<CivilTime>,
    pub moonrise_jd: Option<f64>,
    pub moonset_jd: Option<f64>,
}

/// Moon altitude above its standard rise/set altitude, in degrees.
///
/// `h0 = 0.7275 π − refraction − dip` (Meeus ch. 15), π the horizontal parallax.
fn altitude_above_horizon<S: PositionSource + ?Sized>(
    source: &S,
    location: &GeoLocation,
    config: &RiseSetConfig,
    jd: f64,
) -> Result<f64, EphemError> {
    let pos = source.position(Body::Moon, jd)?;
    let eq = ecliptic_to_equatorial(
        pos.longitude_deg,
        pos.latitude_deg,
        mean_obliquity_deg(julian_centuries(jd)),
    );
    let phi = location.latitude_rad();
    let lst = local_sidereal_time_rad(gmst_rad(jd), location.longitude_rad());
    let ha = lst - eq.ra_rad;
    let sin_alt = phi.sin() * eq.dec_rad.sin() + phi.cos() * eq.dec_rad.cos() * ha.cos();
    let alt = sin_alt.clamp(-1.0, 1.0).asin().to_degrees();

    let parallax = (EARTH_EQUATORIAL_RADIUS_KM / pos.distance).asin().to_degrees();
    let h0 = 0.7275 * parallax - config.refraction_arcmin / 60.0 - config.dip_deg(location.altitude_m);
    Ok(alt - h0)
}

fn bisect<S: PositionSource + ?Sized>(
    source: &S,
    location: &GeoLocation,
    config: &RiseSetConfig,
    mut lo: f64,
    mut hi: f64,
    f_lo: f64,
) -> Result<f64, EphemError> {
    let lo_sign = f_lo.is_sign_negative();
    for _ in 0..BISECTION_STEPS {
        let mid = 0.5 * (lo + hi);
        let f_mid = altitude_above_horizon(source, location, config, mid)?;
        if f_mid.is_sign_negative() == lo_sign {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    Ok(0.5 * (lo + hi))
}

/// First moonrise and first moonset within the local civil date of `date`.
pub fn moon_rise_set<S: PositionSource + ?Sized>(
    source: &S,
    location: &GeoLocation,
    date: &CivilTime,
    config: &RiseSetConfig,
) -> Result<MoonRiseSet, EphemError> {
    let start = location.local_to_jd(&date.midnight());
    let steps = (1.0 / SCAN_STEP_DAYS).round() as usize;

    let mut rise = None;
    let mut set = None;
    let mut t0 = start;
    let mut f0 = altitude_above_horizon(source, location, config, t0)?;

    for k in 1..=steps {
        let t1 = start + k as f64 * SCAN_STEP_DAYS;
        let f1 = altitude_above_horizon(source, location, config, t1)?;
        if f0 < 0.0 && f1 >= 0.0 && rise.is_none() {
            rise = Some(bisect(source, location, config, t0, t1, f0)?);
        } else if f0 >= 0.0 && f1 < 0.0 && set.is_none() {
            set = Some(bisect(source, location, config, t0, t1, f0)?);
        }
        if rise.is_some() && set.is_some() {
            break;
        }
        t0 = t1;
        f0 = f1;
    }

    tracing::debug!(?rise, ?set, "moon horizon crossings");

    Ok(MoonRiseSet {
        moonrise: rise.map(|jd| location.jd_to_local(jd)),
        moonset: set.map(|jd| location.jd_to_local(jd)),
        moonrise_jd: rise,
        moonset_jd: set,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vaas_ephem::SeriesEphemeris;

    fn delhi() -> GeoLocation {
        GeoLocation::new(28.6139, 77.209, 0.0).with_utc_offset(5.5)
    }

    #[test]
    fn crossings_fall_on_requested_date() {
        let date = CivilTime::date(2024, 6, 17);
        let r = moon_rise_set(&SeriesEphemeris, &delhi(), &date, &RiseSetConfig::default())
            .unwrap();
        for t in [r.moonrise, r.moonset].into_iter().flatten() {
            assert!(t.same_date(&date), "event {t} not on {date}");
        }
    }

    #[test]
    fn rising_means_altitude_increasing() {
        let loc = delhi();
        let cfg = RiseSetConfig::default();
        let r = moon_rise_set(&SeriesEphemeris, &loc, &CivilTime::date(2024, 6, 17), &cfg)
            .unwrap();
        if let Some(jd) = r.moonrise_jd {
            let before = altitude_above_horizon(&SeriesEphemeris, &loc, &cfg, jd - 0.01).unwrap();
            let after = altitude_above_horizon(&SeriesEphemeris, &loc, &cfg, jd + 0.01).unwrap();
            assert!(before < 0.0 && after > 0.0);
        }
    }

    #[test]
    fn most_days_in_a_month_have_a_moonrise() {
        let loc = delhi();
        let cfg = RiseSetConfig::default();
        let start = CivilTime::date(2024, 6, 1);
        let with_rise = (0..30)
            .filter(|&d| {
                moon_rise_set(&SeriesEphemeris, &loc, &start.add_days(d), &cfg)
                    .map(|r| r.moonrise.is_some())
                    .unwrap_or(false)
            })
            .count();
        assert!((27..=30).contains(&with_rise), "days with moonrise = {with_rise}");
    }

    #[test]
    fn moonrise_is_later_each_day() {
        let loc = delhi();
        let cfg = RiseSetConfig::default();
        let rises: Vec<f64> = (0..5)
            .filter_map(|d| {
                moon_rise_set(&SeriesEphemeris, &loc, &CivilTime::date(2024, 6, 10).add_days(d), &cfg)
                    .ok()
                    .and_then(|r| r.moonrise_jd)
            })
            .collect();
        for w in rises.windows(2) {
            let delay_min = (w[1] - w[0] - 1.0) * 1440.0;
            assert!((5.0..100.0).contains(&delay_min), "delay = {delay_min} min");
        }
    }
}
