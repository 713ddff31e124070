//! The panchang engine: one entry point that wires rise/set, positions and
//! the derived quantities together for a date and location.

use std::sync::Arc;

use tracing::debug;
use vaas_ephem::{
    Body, CelestialPosition, PositionSource, SeriesEphemeris, lahiri_ayanamsha_deg,
    normalize_360,
};
use vaas_time::CivilTime;
use vaas_vedic_base::{
    Computed, DegradedReason, GeoLocation, Language, PujaTime, RiseSetProvider, RiseSetTimes,
    SeriesRiseSet, ShivObservance, TithiResult, approximate_tithi, classify,
    karana_from_elongation, moon_rise_set, muhurta_windows, nakshatra_for_day,
    nakshatra_from_sidereal, puja_time_at, rise_set_times, tithi_at, vaar_for_date,
    yoga_for_day, yoga_from_sum,
};

use crate::config::{NakshatraMethod, PanchangConfig, Precision};
use crate::panchang_types::{PanchangResult, ShivVaasResult, TithiDetails};

/// Sun and Moon at the reference instant.
#[derive(Debug, Clone, Copy)]
struct SunMoon {
    sun: CelestialPosition,
    moon: CelestialPosition,
}

/// Everything computed once per (date, location, instant).
#[derive(Debug, Clone)]
struct DayState {
    date: CivilTime,
    rise_set: Computed<RiseSetTimes>,
    reference_jd: f64,
    reference_instant: CivilTime,
    tithi: Computed<TithiResult>,
    positions: Option<SunMoon>,
}

impl DayState {
    fn degraded(&self) -> Vec<DegradedReason> {
        let mut out = Vec::new();
        push_reason(&mut out, self.rise_set.degraded.clone());
        push_reason(&mut out, self.tithi.degraded.clone());
        out
    }

    /// Precision actually achieved for the positions.
    fn effective_precision(&self, requested: Precision) -> Precision {
        if self.positions.is_some() {
            requested
        } else {
            Precision::Approximate
        }
    }
}

fn push_reason(out: &mut Vec<DegradedReason>, reason: Option<DegradedReason>) {
    if let Some(r) = reason {
        if !out.contains(&r) {
            out.push(r);
        }
    }
}

/// Panchang and Shiv Vaas calculator.
///
/// Holds no mutable state; one engine can serve any number of threads.
pub struct PanchangEngine {
    config: PanchangConfig,
    rise_set: Box<dyn RiseSetProvider>,
    delegate: Option<Arc<dyn PositionSource>>,
}

impl std::fmt::Debug for PanchangEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanchangEngine")
            .field("config", &self.config)
            .field("delegate", &self.delegate.as_ref().map(|d| d.name()))
            .finish_non_exhaustive()
    }
}

impl Default for PanchangEngine {
    fn default() -> Self {
        Self::new(PanchangConfig::default())
    }
}

impl PanchangEngine {
    /// Engine with the built-in series rise/set provider and no delegate.
    pub fn new(config: PanchangConfig) -> Self {
        Self {
            config,
            rise_set: Box::new(SeriesRiseSet::new(config.rise_set)),
            delegate: None,
        }
    }

    /// Position source used under [`Precision::Delegated`].
    pub fn with_position_source(mut self, source: Arc<dyn PositionSource>) -> Self {
        self.delegate = Some(source);
        self
    }

    /// Replace the sunrise/sunset provider.
    pub fn with_rise_set_provider(mut self, provider: Box<dyn RiseSetProvider>) -> Self {
        self.rise_set = provider;
        self
    }

    pub fn config(&self) -> &PanchangConfig {
        &self.config
    }

    /// Sunrise, sunset and solar noon for a local date, degraded to fixed
    /// civil times when the provider fails.
    pub fn rise_set_for(&self, date: &CivilTime, location: &GeoLocation) -> Computed<RiseSetTimes> {
        rise_set_times(self.rise_set.as_ref(), &date.midnight(), location)
    }

    /// The position source selected by the configured precision.
    ///
    /// `Ok(None)` means no positions are wanted.
    fn source(&self) -> Result<Option<&dyn PositionSource>, DegradedReason> {
        match self.config.precision {
            Precision::Approximate => Ok(None),
            Precision::SeriesBased => Ok(Some(&SeriesEphemeris)),
            Precision::Delegated => match &self.delegate {
                Some(d) => Ok(Some(d.as_ref())),
                None => Err(DegradedReason::DelegateMissing),
            },
        }
    }

    fn sun_moon(&self, jd: f64) -> Result<Option<SunMoon>, DegradedReason> {
        let Some(source) = self.source()? else {
            return Ok(None);
        };
        let sun = source.position(Body::Sun, jd)?;
        let moon = source.position(Body::Moon, jd)?;
        Ok(Some(SunMoon { sun, moon }))
    }

    fn day_state(
        &self,
        date: &CivilTime,
        location: &GeoLocation,
        instant: Option<CivilTime>,
    ) -> DayState {
        let date = date.midnight();
        let rise_set = self.rise_set_for(&date, location);
        let (reference_jd, reference_instant) = match instant {
            Some(t) => (location.local_to_jd(&t), t),
            None => (rise_set.value.sunrise_jd, rise_set.value.sunrise),
        };

        let epoch_days = date.epoch_days();
        let approximate = || approximate_tithi(epoch_days);
        let (tithi, positions) = match self.sun_moon(reference_jd) {
            Ok(Some(p)) => (
                Computed::exact(tithi_at(p.sun.longitude_deg, p.moon.longitude_deg)),
                Some(p),
            ),
            Ok(None) => (Computed::exact(approximate()), None),
            Err(reason) => (Computed::or_fallback(Err(reason), |_| approximate()), None),
        };

        debug!(
            %reference_instant,
            tithi = tithi.value.number,
            degraded = tithi.is_degraded(),
            "evaluated day"
        );

        DayState {
            date,
            rise_set,
            reference_jd,
            reference_instant,
            tithi,
            positions,
        }
    }

    /// Tithi at sunrise of `date`, or at the local `instant` when given.
    #[tracing::instrument(skip(self))]
    pub fn compute_tithi(
        &self,
        date: &CivilTime,
        location: &GeoLocation,
        lang: Language,
        instant: Option<CivilTime>,
    ) -> Computed<TithiDetails> {
        let state = self.day_state(date, location, instant);
        Computed {
            value: TithiDetails::new(state.tithi.value, lang),
            degraded: state.degraded().into_iter().next(),
        }
    }

    /// Full daily panchang.
    #[tracing::instrument(skip(self))]
    pub fn compute_panchang(
        &self,
        date: &CivilTime,
        location: &GeoLocation,
        lang: Language,
        instant: Option<CivilTime>,
    ) -> PanchangResult {
        let state = self.day_state(date, location, instant);
        let mut degraded = state.degraded();
        let tithi = state.tithi.value;
        let karana = karana_from_elongation(tithi.elongation_deg);

        let (nakshatra, yoga, nakshatra_method) =
            match (self.config.nakshatra_method, state.positions) {
                (NakshatraMethod::MoonLongitude, Some(p)) => {
                    let aya = lahiri_ayanamsha_deg(state.reference_jd);
                    let moon_sid = normalize_360(p.moon.longitude_deg - aya);
                    let sun_sid = normalize_360(p.sun.longitude_deg - aya);
                    (
                        nakshatra_from_sidereal(moon_sid),
                        yoga_from_sum(normalize_360(moon_sid + sun_sid)),
                        NakshatraMethod::MoonLongitude,
                    )
                }
                _ => (
                    nakshatra_for_day(&state.date),
                    yoga_for_day(&state.date),
                    NakshatraMethod::DayOfYear,
                ),
            };

        let vaar = vaar_for_date(&state.date);
        let muhurta = muhurta_windows(&state.rise_set.value, vaar);

        let moon_rise_set = match self.source() {
            Ok(Some(source)) if state.positions.is_some() => {
                match moon_rise_set(source, location, &state.date, &self.config.rise_set) {
                    Ok(m) => Some(m),
                    Err(e) => {
                        tracing::warn!(error = %e, "moonrise unavailable");
                        push_reason(&mut degraded, Some(e.into()));
                        None
                    }
                }
            }
            _ => None,
        };

        PanchangResult {
            date: state.date,
            reference_instant: state.reference_instant,
            language: lang,
            precision: state.effective_precision(self.config.precision),
            nakshatra_method,
            tithi: TithiDetails::new(tithi, lang),
            karana,
            karana_name: karana.name_in(lang),
            nakshatra,
            nakshatra_name: nakshatra.name_in(lang),
            yoga,
            yoga_name: yoga.name_in(lang),
            vaar,
            vaar_name: vaar.name_in(lang),
            sun_longitude_deg: state.positions.map(|p| p.sun.longitude_deg),
            moon_longitude_deg: state.positions.map(|p| p.moon.longitude_deg),
            rise_set: state.rise_set.value,
            moon_rise_set,
            muhurta,
            degraded,
        }
    }

    /// Shiv Vaas for the tithi at sunrise (or at `instant`), valid from this
    /// sunrise until the next.
    #[tracing::instrument(skip(self))]
    pub fn compute_shiv_vaas(
        &self,
        date: &CivilTime,
        location: &GeoLocation,
        lang: Language,
        instant: Option<CivilTime>,
    ) -> ShivVaasResult {
        let state = self.day_state(date, location, instant);
        let mut degraded = state.degraded();
        let next = self.rise_set_for(&state.date.add_days(1), location);
        push_reason(&mut degraded, next.degraded);

        let tithi = state.tithi.value;
        let class = classify(tithi.number);
        let info = class.info();
        debug!(tithi = tithi.number, index = class.index, "classified");

        ShivVaasResult {
            index: class.index,
            abode: class.abode,
            auspiciousness: class.auspiciousness,
            name: info.name.get(lang),
            significance: info.significance.get(lang),
            recommended: info.recommended.get(lang),
            avoid: info.avoid.get(lang),
            result: info.result.get(lang),
            shastric_statement: info.shastric_statement.get(lang),
            formula: class.formula,
            valid_from: state.rise_set.value.sunrise,
            valid_until: next.value.sunrise,
            sunrise: state.rise_set.value.sunrise,
            reference_instant: state.reference_instant,
            tithi: TithiDetails::new(tithi, lang),
            observances: vaas_vedic_base::shiv_observances(&state.date, &tithi),
            language: lang,
            degraded,
        }
    }

    /// Worship band at a local instant.
    pub fn puja_time_for(&self, instant: &CivilTime, lang: Language) -> PujaTime {
        puja_time_at(instant, lang)
    }

    /// Shiva observances falling on `date` for a tithi.
    pub fn shiv_observances(&self, date: &CivilTime, tithi: &TithiResult) -> Vec<ShivObservance> {
        vaas_vedic_base::shiv_observances(date, tithi)
    }

    /// Panchang at sunrise for `days` consecutive local dates from `start`.
    #[tracing::instrument(skip(self))]
    pub fn panchang_for_range(
        &self,
        start: &CivilTime,
        days: u32,
        location: &GeoLocation,
        lang: Language,
    ) -> Vec<PanchangResult> {
        (0..days)
            .map(|i| {
                let date = start.midnight().add_days(i64::from(i));
                self.compute_panchang(&date, location, lang, None)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vaas_ephem::EphemError;
    use vaas_vedic_base::RiseSetError;

    fn delhi() -> GeoLocation {
        GeoLocation::new(28.6139, 77.2090, 0.0).with_utc_offset(5.5)
    }

    struct Broken;

    impl PositionSource for Broken {
        fn position(&self, _: Body, jd: f64) -> Result<CelestialPosition, EphemError> {
            Err(EphemError::OutOfRange { jd })
        }
    }

    struct NoSun;

    impl RiseSetProvider for NoSun {
        fn rise_set(&self, _: &CivilTime, _: &GeoLocation) -> Result<RiseSetTimes, RiseSetError> {
            Err(RiseSetError::NeverRises)
        }
    }

    #[test]
    fn engine_is_send_sync() {
        fn check<T: Send + Sync>() {}
        check::<PanchangEngine>();
    }

    #[test]
    fn series_is_exact() {
        let engine = PanchangEngine::default();
        let t = engine.compute_tithi(&CivilTime::date(2024, 6, 17), &delhi(), Language::English, None);
        assert!(!t.is_degraded());
        assert!((1..=30).contains(&t.value.tithi.number));
    }

    #[test]
    fn approximate_is_not_degraded() {
        let engine =
            PanchangEngine::new(PanchangConfig::default().with_precision(Precision::Approximate));
        let p = engine.compute_panchang(&CivilTime::date(2024, 6, 17), &delhi(), Language::English, None);
        assert!(p.degraded.is_empty());
        assert_eq!(p.precision, Precision::Approximate);
        assert_eq!(p.sun_longitude_deg, None);
        assert_eq!(p.moon_rise_set, None);
    }

    #[test]
    fn approximate_shiv_vaas_uses_folded_day_count() {
        // 2024-06-17 is epoch day 19891: raw day-count tithi 18, folded to 3
        let engine =
            PanchangEngine::new(PanchangConfig::default().with_precision(Precision::Approximate));
        let s = engine.compute_shiv_vaas(&CivilTime::date(2024, 6, 17), &delhi(), Language::English, None);
        assert_eq!(s.tithi.tithi.number, 3);
        assert_eq!(s.index, 4);
        assert_eq!(s.formula, "(3 × 2 + 5) mod 7 = 4");
    }

    #[test]
    fn missing_delegate_matches_approximate_shiv_vaas() {
        let date = CivilTime::date(2024, 6, 17);
        let approx =
            PanchangEngine::new(PanchangConfig::default().with_precision(Precision::Approximate))
                .compute_shiv_vaas(&date, &delhi(), Language::English, None);
        let missing =
            PanchangEngine::new(PanchangConfig::default().with_precision(Precision::Delegated))
                .compute_shiv_vaas(&date, &delhi(), Language::English, None);
        assert_eq!(missing.index, approx.index);
        assert_eq!(missing.tithi.tithi.number, 3);
    }

    #[test]
    fn delegate_missing_degrades() {
        let engine =
            PanchangEngine::new(PanchangConfig::default().with_precision(Precision::Delegated));
        let t = engine.compute_tithi(&CivilTime::date(2024, 6, 17), &delhi(), Language::English, None);
        assert_eq!(t.degraded, Some(DegradedReason::DelegateMissing));
    }

    #[test]
    fn failing_delegate_degrades() {
        let engine =
            PanchangEngine::new(PanchangConfig::default().with_precision(Precision::Delegated))
                .with_position_source(Arc::new(Broken));
        let p = engine.compute_panchang(&CivilTime::date(2024, 6, 17), &delhi(), Language::English, None);
        assert!(matches!(
            p.degraded.as_slice(),
            [DegradedReason::PositionUnavailable(EphemError::OutOfRange { .. })]
        ));
        assert_eq!(p.precision, Precision::Approximate);
    }

    #[test]
    fn series_delegate_matches_builtin() {
        let date = CivilTime::date(2024, 3, 20);
        let builtin = PanchangEngine::default().compute_panchang(&date, &delhi(), Language::English, None);
        let delegated =
            PanchangEngine::new(PanchangConfig::default().with_precision(Precision::Delegated))
                .with_position_source(Arc::new(SeriesEphemeris))
                .compute_panchang(&date, &delhi(), Language::English, None);
        assert_eq!(builtin.tithi, delegated.tithi);
        assert_eq!(builtin.sun_longitude_deg, delegated.sun_longitude_deg);
        assert_eq!(delegated.precision, Precision::Delegated);
    }

    #[test]
    fn rise_set_failure_uses_civil_times() {
        let engine = PanchangEngine::default().with_rise_set_provider(Box::new(NoSun));
        let s = engine.compute_shiv_vaas(&CivilTime::date(2024, 6, 17), &delhi(), Language::English, None);
        assert_eq!(s.sunrise, CivilTime::new(2024, 6, 17, 6, 0, 0.0));
        assert_eq!(s.valid_until, CivilTime::new(2024, 6, 18, 6, 0, 0.0));
        assert_eq!(
            s.degraded,
            vec![DegradedReason::RiseSetUnavailable(RiseSetError::NeverRises)]
        );
    }

    #[test]
    fn instant_overrides_sunrise() {
        let engine = PanchangEngine::default();
        let at = CivilTime::new(2024, 6, 17, 22, 30, 0.0);
        let p = engine.compute_panchang(&CivilTime::date(2024, 6, 17), &delhi(), Language::English, Some(at));
        assert_eq!(p.reference_instant, at);
    }

    #[test]
    fn moon_longitude_method_uses_positions() {
        let engine = PanchangEngine::new(
            PanchangConfig::default().with_nakshatra_method(NakshatraMethod::MoonLongitude),
        );
        let p = engine.compute_panchang(&CivilTime::date(2024, 6, 17), &delhi(), Language::English, None);
        assert_eq!(p.nakshatra_method, NakshatraMethod::MoonLongitude);
        let moon = p.moon_longitude_deg.unwrap();
        let aya = lahiri_ayanamsha_deg(p.rise_set.sunrise_jd);
        assert_eq!(p.nakshatra, nakshatra_from_sidereal(normalize_360(moon - aya)));
    }

    #[test]
    fn moon_longitude_method_falls_back_without_positions() {
        let engine = PanchangEngine::new(
            PanchangConfig::default()
                .with_precision(Precision::Approximate)
                .with_nakshatra_method(NakshatraMethod::MoonLongitude),
        );
        let date = CivilTime::date(2024, 6, 17);
        let p = engine.compute_panchang(&date, &delhi(), Language::English, None);
        assert_eq!(p.nakshatra_method, NakshatraMethod::DayOfYear);
        assert_eq!(p.nakshatra, nakshatra_for_day(&date));
    }
}
