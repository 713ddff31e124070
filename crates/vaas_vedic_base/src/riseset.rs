//! Sunrise/sunset computation with twilight variants.
//!
//! Iterative hour-angle algorithm from standard spherical astronomy
//! (Meeus ch. 15, USNO). Computes the time when the Sun's geocentric
//! altitude equals a target depression angle for an observer and date.
//!
//! Sun positions come from any [`PositionSource`]; UTC is used as UT.

use std::f64::consts::TAU;

use vaas_ephem::{
    Body, PositionSource, SeriesEphemeris, ecliptic_to_equatorial, mean_obliquity_deg,
};
use vaas_time::{CivilTime, civil_to_jd, gmst_rad, julian_centuries, local_sidereal_time_rad};

use crate::error::RiseSetError;
use crate::riseset_types::{
    ALL_EVENTS, GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetResult, RiseSetTimes,
};
use crate::util::wrap_pi;
use crate::Computed;

/// Maximum iterations for the rise/set refinement loop.
const MAX_ITERATIONS: usize = 5;

/// Convergence threshold in days (~0.086 seconds).
const CONVERGENCE_DAYS: f64 = 1.0e-6;

/// IAU 2015 nominal solar radius in km.
const SUN_RADIUS_KM: f64 = 696_000.0;

/// Astronomical unit in km.
const AU_KM: f64 = 149_597_870.7;

/// Hour angle advance, rad/day.
const SIDEREAL_RATE_RAD: f64 = TAU * vaas_time::SIDEREAL_RATE;

/// Approximate local solar noon JD from 0h UT JD and longitude.
///
/// `JD_noon = JD_0h + 0.5 - longitude_deg / 360`
pub fn approximate_local_noon_jd(jd_ut_midnight: f64, longitude_deg: f64) -> f64 {
    jd_ut_midnight + 0.5 - longitude_deg / 360.0
}

/// Approximate solar noon (JD, UT) falling on the local civil `date`.
///
/// The longitude estimate is shifted by whole days onto the civil noon of the
/// location's zone, so zones far from `longitude / 15` keep their own date.
pub fn local_noon_jd_for_date(date: &CivilTime, location: &GeoLocation) -> f64 {
    let noon = approximate_local_noon_jd(civil_to_jd(&date.midnight()), location.longitude_deg);
    let civil_noon = location.local_to_jd(&date.at_time(12, 0, 0.0));
    noon + (civil_noon - noon).round()
}

/// Solar angular semidiameter in arcminutes from Earth-Sun distance in AU.
pub fn solar_semidiameter_arcmin(distance_au: f64) -> f64 {
    (SUN_RADIUS_KM / (distance_au * AU_KM)).asin().to_degrees() * 60.0
}

/// Sun's (RA, Dec, distance AU) at a JD from the given source.
fn sun_ra_dec_dist<S: PositionSource + ?Sized>(
    source: &S,
    jd: f64,
) -> Result<(f64, f64, f64), RiseSetError> {
    let pos = source.position(Body::Sun, jd)?;
    let eq = ecliptic_to_equatorial(
        pos.longitude_deg,
        pos.latitude_deg,
        mean_obliquity_deg(julian_centuries(jd)),
    );
    Ok((eq.ra_rad, eq.dec_rad, pos.distance))
}

/// Hour angle of the Sun at `jd` for an observer at `longitude_rad`, in [-π, π].
fn hour_angle(jd: f64, longitude_rad: f64, ra: f64) -> f64 {
    let lst = local_sidereal_time_rad(gmst_rad(jd), longitude_rad);
    wrap_pi(lst - ra)
}

/// Time the Sun crosses the local meridian nearest to `jd_ut_noon`.
pub fn solar_transit_jd<S: PositionSource + ?Sized>(
    source: &S,
    location: &GeoLocation,
    jd_ut_noon: f64,
) -> Result<f64, RiseSetError> {
    let mut jd = jd_ut_noon;
    for _ in 0..MAX_ITERATIONS {
        let (ra, _, _) = sun_ra_dec_dist(source, jd)?;
        let correction = -hour_angle(jd, location.longitude_rad(), ra) / SIDEREAL_RATE_RAD;
        jd += correction;
        if correction.abs() < CONVERGENCE_DAYS {
            break;
        }
    }
    Ok(jd)
}

/// Compute a single rise/set event for the Sun.
///
/// # Arguments
/// * `source`: position source for the Sun
/// * `location`: observer geographic location
/// * `event`: the event type (sunrise, sunset, twilight variant)
/// * `jd_ut_noon`: approximate local noon on the desired date.
///   Use [`local_noon_jd_for_date`] to compute it from a local civil date.
/// * `config`: refraction, limb, and altitude parameters
///
/// # Returns
/// * `RiseSetResult::Event` with the event time as JD (UT)
/// * `RiseSetResult::NeverRises` if the Sun stays below the horizon (polar night)
/// * `RiseSetResult::NeverSets` if the Sun stays above the horizon (midnight sun)
pub fn compute_rise_set<S: PositionSource + ?Sized>(
    source: &S,
    location: &GeoLocation,
    event: RiseSetEvent,
    jd_ut_noon: f64,
    config: &RiseSetConfig,
) -> Result<RiseSetResult, RiseSetError> {
    let phi = location.latitude_rad();
    let lon = location.longitude_rad();

    let (ra, dec, dist) = sun_ra_dec_dist(source, jd_ut_noon)?;
    let h0_rad = config
        .target_altitude_deg(event, solar_semidiameter_arcmin(dist), location.altitude_m)
        .to_radians();

    let cos_h0 = (h0_rad.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos());
    if cos_h0 > 1.0 {
        return Ok(RiseSetResult::NeverRises);
    }
    if cos_h0 < -1.0 {
        return Ok(RiseSetResult::NeverSets);
    }
    let h0 = cos_h0.acos();

    // Transit: correct noon by the hour angle at noon.
    let jd_transit = jd_ut_noon - hour_angle(jd_ut_noon, lon, ra) / SIDEREAL_RATE_RAD;

    let h0_days = h0 / SIDEREAL_RATE_RAD;
    let mut jd_event = if event.is_rising() {
        jd_transit - h0_days
    } else {
        jd_transit + h0_days
    };

    for _ in 0..MAX_ITERATIONS {
        let (ra_i, dec_i, dist_i) = sun_ra_dec_dist(source, jd_event)?;
        let h0_rad_i = config
            .target_altitude_deg(event, solar_semidiameter_arcmin(dist_i), location.altitude_m)
            .to_radians();

        let cos_h_i = (h0_rad_i.sin() - phi.sin() * dec_i.sin()) / (phi.cos() * dec_i.cos());
        if cos_h_i > 1.0 {
            return Ok(RiseSetResult::NeverRises);
        }
        if cos_h_i < -1.0 {
            return Ok(RiseSetResult::NeverSets);
        }
        let h_target = cos_h_i.acos();
        let ha_target = if event.is_rising() { -h_target } else { h_target };

        let dha = wrap_pi(ha_target - hour_angle(jd_event, lon, ra_i));
        let correction = dha / SIDEREAL_RATE_RAD;
        jd_event += correction;

        if correction.abs() < CONVERGENCE_DAYS {
            break;
        }
    }

    Ok(RiseSetResult::Event {
        jd_ut: jd_event,
        event,
    })
}

/// Compute all 8 rise/set events for a day.
///
/// Returns results in chronological order:
/// AstronomicalDawn, NauticalDawn, CivilDawn, Sunrise,
/// Sunset, CivilDusk, NauticalDusk, AstronomicalDusk.
///
/// Each event is computed independently; if one event cannot occur (e.g.,
/// NeverRises at high latitudes), it is included as NeverRises/NeverSets.
pub fn compute_all_events<S: PositionSource + ?Sized>(
    source: &S,
    location: &GeoLocation,
    jd_ut_noon: f64,
    config: &RiseSetConfig,
) -> Result<Vec<RiseSetResult>, RiseSetError> {
    ALL_EVENTS
        .iter()
        .map(|&evt| compute_rise_set(source, location, evt, jd_ut_noon, config))
        .collect()
}

/// Something that can produce sunrise, sunset and solar noon for a local date.
pub trait RiseSetProvider: Send + Sync {
    /// Rise/set times for the local civil date `date` (time of day ignored).
    fn rise_set(&self, date: &CivilTime, location: &GeoLocation)
    -> Result<RiseSetTimes, RiseSetError>;
}

/// Built-in provider: the hour-angle algorithm over a position source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeriesRiseSet<S = SeriesEphemeris> {
    pub source: S,
    pub config: RiseSetConfig,
}

impl SeriesRiseSet<SeriesEphemeris> {
    pub fn new(config: RiseSetConfig) -> Self {
        Self {
            source: SeriesEphemeris,
            config,
        }
    }
}

impl<S: PositionSource> SeriesRiseSet<S> {
    pub fn with_source(source: S, config: RiseSetConfig) -> Self {
        Self { source, config }
    }
}

impl<S: PositionSource> RiseSetProvider for SeriesRiseSet<S> {
    fn rise_set(
        &self,
        date: &CivilTime,
        location: &GeoLocation,
    ) -> Result<RiseSetTimes, RiseSetError> {
        let noon = local_noon_jd_for_date(date, location);

        let event_jd = |event| -> Result<f64, RiseSetError> {
            match compute_rise_set(&self.source, location, event, noon, &self.config)? {
                RiseSetResult::Event { jd_ut, .. } => Ok(jd_ut),
                RiseSetResult::NeverRises => Err(RiseSetError::NeverRises),
                RiseSetResult::NeverSets => Err(RiseSetError::NeverSets),
            }
        };
        let sunrise_jd = event_jd(RiseSetEvent::Sunrise)?;
        let sunset_jd = event_jd(RiseSetEvent::Sunset)?;
        let solar_noon_jd = solar_transit_jd(&self.source, location, noon)?;

        Ok(RiseSetTimes {
            sunrise: location.jd_to_local(sunrise_jd),
            sunset: location.jd_to_local(sunset_jd),
            solar_noon: location.jd_to_local(solar_noon_jd),
            sunrise_jd,
            sunset_jd,
            solar_noon_jd,
        })
    }
}

/// Fixed civil fallback: 06:00 sunrise, 18:00 sunset, 12:00 noon, local time,
/// on the same calendar day.
pub fn fallback_rise_set(date: &CivilTime, location: &GeoLocation) -> RiseSetTimes {
    let sunrise = date.at_time(6, 0, 0.0);
    let sunset = date.at_time(18, 0, 0.0);
    let solar_noon = date.at_time(12, 0, 0.0);
    RiseSetTimes {
        sunrise,
        sunset,
        solar_noon,
        sunrise_jd: location.local_to_jd(&sunrise),
        sunset_jd: location.local_to_jd(&sunset),
        solar_noon_jd: location.local_to_jd(&solar_noon),
    }
}

/// Rise/set for a local date, degrading to [`fallback_rise_set`] when the
/// provider fails. All three times come from the same path.
pub fn rise_set_times<P: RiseSetProvider + ?Sized>(
    provider: &P,
    date: &CivilTime,
    location: &GeoLocation,
) -> Computed<RiseSetTimes> {
    Computed::or_fallback(
        provider.rise_set(date, location).map_err(Into::into),
        |_| fallback_rise_set(date, location),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_noon_greenwich() {
        let jd_0h = 2_460_000.5;
        let noon = approximate_local_noon_jd(jd_0h, 0.0);
        assert!((noon - (jd_0h + 0.5)).abs() < 1e-10);
    }

    #[test]
    fn local_noon_east_90() {
        let jd_0h = 2_460_000.5;
        // 90 deg east → noon is 6 hours earlier in UT
        let noon = approximate_local_noon_jd(jd_0h, 90.0);
        assert!((noon - (jd_0h + 0.25)).abs() < 1e-10);
    }

    #[test]
    fn local_noon_for_date_follows_longitude_zone() {
        let loc = GeoLocation::new(28.6139, 77.209, 0.0).with_utc_offset(5.5);
        let date = CivilTime::date(2024, 6, 17);
        let plain = approximate_local_noon_jd(civil_to_jd(&date), loc.longitude_deg);
        assert!((local_noon_jd_for_date(&date, &loc) - plain).abs() < 1e-10);
    }

    #[test]
    fn local_noon_for_date_shifts_far_east_zone() {
        let loc = GeoLocation::new(-13.83, -171.76, 0.0).with_utc_offset(13.0);
        let date = CivilTime::date(2024, 6, 17);
        let plain = approximate_local_noon_jd(civil_to_jd(&date), loc.longitude_deg);
        let noon = local_noon_jd_for_date(&date, &loc);
        assert!((plain - noon - 1.0).abs() < 1e-10);
        assert!(loc.jd_to_local(noon).same_date(&date));
    }

    #[test]
    fn solar_semidiameter_typical() {
        let sd = solar_semidiameter_arcmin(1.0);
        assert!((sd - 16.0).abs() < 0.5, "semidiameter at 1 AU = {sd}");
    }

    #[test]
    fn solar_semidiameter_varies() {
        assert!(solar_semidiameter_arcmin(0.983) > solar_semidiameter_arcmin(1.017));
    }

    #[test]
    fn polar_night_tromso() {
        let loc = GeoLocation::new(69.65, 18.96, 0.0);
        let jd_0h = civil_to_jd(&CivilTime::date(2024, 12, 21));
        let noon = approximate_local_noon_jd(jd_0h, loc.longitude_deg);
        let r = compute_rise_set(
            &SeriesEphemeris,
            &loc,
            RiseSetEvent::Sunrise,
            noon,
            &RiseSetConfig::default(),
        );
        assert_eq!(r, Ok(RiseSetResult::NeverRises));
    }

    #[test]
    fn midnight_sun_tromso() {
        let loc = GeoLocation::new(69.65, 18.96, 0.0);
        let jd_0h = civil_to_jd(&CivilTime::date(2024, 6, 21));
        let noon = approximate_local_noon_jd(jd_0h, loc.longitude_deg);
        let r = compute_rise_set(
            &SeriesEphemeris,
            &loc,
            RiseSetEvent::Sunset,
            noon,
            &RiseSetConfig::default(),
        );
        assert_eq!(r, Ok(RiseSetResult::NeverSets));
    }

    #[test]
    fn equator_equinox_day_about_twelve_hours() {
        let loc = GeoLocation::new(0.0, 0.0, 0.0);
        let t = SeriesRiseSet::new(RiseSetConfig::default())
            .rise_set(&CivilTime::date(2024, 3, 20), &loc)
            .unwrap();
        let len = t.day_length_hours();
        assert!((len - 12.1).abs() < 0.1, "day length = {len}");
        assert_eq!(t.sunrise.hour, 6);
    }

    #[test]
    fn events_are_chronological() {
        let loc = GeoLocation::new(28.6139, 77.209, 0.0);
        let jd_0h = civil_to_jd(&CivilTime::date(2024, 3, 20));
        let noon = approximate_local_noon_jd(jd_0h, loc.longitude_deg);
        let all = compute_all_events(&SeriesEphemeris, &loc, noon, &RiseSetConfig::default())
            .unwrap();
        let jds: Vec<f64> = all.iter().filter_map(RiseSetResult::jd).collect();
        assert_eq!(jds.len(), 8);
        assert!(jds.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn transit_between_rise_and_set() {
        let loc = GeoLocation::new(28.6139, 77.209, 0.0).with_utc_offset(5.5);
        let t = SeriesRiseSet::new(RiseSetConfig::default())
            .rise_set(&CivilTime::date(2024, 6, 17), &loc)
            .unwrap();
        assert!(t.sunrise_jd < t.solar_noon_jd && t.solar_noon_jd < t.sunset_jd);
        let mid = 0.5 * (t.sunrise_jd + t.sunset_jd);
        assert!((mid - t.solar_noon_jd).abs() * 1440.0 < 2.0);
    }

    struct Failing;

    impl RiseSetProvider for Failing {
        fn rise_set(
            &self,
            _date: &CivilTime,
            _location: &GeoLocation,
        ) -> Result<RiseSetTimes, RiseSetError> {
            Err(RiseSetError::Unavailable("test"))
        }
    }

    #[test]
    fn failing_provider_degrades_to_fixed_times() {
        let loc = GeoLocation::new(28.6139, 77.209, 0.0).with_utc_offset(5.5);
        let date = CivilTime::date(2024, 6, 17);
        let c = rise_set_times(&Failing, &date, &loc);
        assert!(c.is_degraded());
        assert_eq!(c.value.sunrise, date.at_time(6, 0, 0.0));
        assert_eq!(c.value.sunset, date.at_time(18, 0, 0.0));
        assert_eq!(c.value.solar_noon, date.at_time(12, 0, 0.0));
    }
}
