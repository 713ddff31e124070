//! Result types returned by the engine.

use vaas_time::CivilTime;
use vaas_vedic_base::{
    Auspiciousness, DegradedReason, KaranaResult, Language, MoonRiseSet, MuhurtaWindows,
    NakshatraResult, RiseSetTimes, ShivObservance, ShivVaasAbode, TithiResult, Vaar, YogaResult,
};

use crate::config::{NakshatraMethod, Precision};

/// Tithi with its names rendered in the requested language.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiDetails {
    pub tithi: TithiResult,
    /// Table name, e.g. "Purnima/Amavasya".
    pub name: &'static str,
    /// Name with the fifteenth tithi resolved to Purnima or Amavasya.
    pub specific_name: &'static str,
    pub paksha_name: &'static str,
}

impl TithiDetails {
    pub fn new(tithi: TithiResult, lang: Language) -> Self {
        Self {
            tithi,
            name: tithi.name_in(lang),
            specific_name: tithi.specific_name(lang),
            paksha_name: tithi.paksha.label().get(lang),
        }
    }
}

/// Complete daily panchang.
#[derive(Debug, Clone, PartialEq)]
pub struct PanchangResult {
    /// Local civil date the panchang is for.
    pub date: CivilTime,
    /// Local instant the tithi, karana and positions refer to: sunrise
    /// unless a specific time was requested.
    pub reference_instant: CivilTime,
    pub language: Language,
    pub precision: Precision,
    pub nakshatra_method: NakshatraMethod,

    pub tithi: TithiDetails,
    pub karana: KaranaResult,
    pub karana_name: &'static str,
    pub nakshatra: NakshatraResult,
    pub nakshatra_name: &'static str,
    pub yoga: YogaResult,
    pub yoga_name: &'static str,
    pub vaar: Vaar,
    pub vaar_name: &'static str,

    /// Tropical Sun longitude at the reference instant; `None` when no
    /// positions were computed.
    pub sun_longitude_deg: Option<f64>,
    /// Tropical Moon longitude at the reference instant.
    pub moon_longitude_deg: Option<f64>,

    pub rise_set: RiseSetTimes,
    /// `None` when no positions were computed.
    pub moon_rise_set: Option<MoonRiseSet>,
    pub muhurta: MuhurtaWindows,

    /// Every fallback taken while computing this result.
    pub degraded: Vec<DegradedReason>,
}

impl PanchangResult {
    pub fn is_degraded(&self) -> bool {
        !self.degraded.is_empty()
    }
}

/// Shiv Vaas for a day, with the abode's description in one language.
#[derive(Debug, Clone, PartialEq)]
pub struct ShivVaasResult {
    /// 1..=7.
    pub index: u8,
    pub abode: ShivVaasAbode,
    pub auspiciousness: Auspiciousness,
    pub name: &'static str,
    pub significance: &'static str,
    pub recommended: &'static [&'static str],
    pub avoid: &'static [&'static str],
    pub result: &'static str,
    pub shastric_statement: &'static str,
    /// e.g. "(14 × 2 + 5) mod 7 = 5".
    pub formula: String,

    /// Start of validity: sunrise of the date.
    pub valid_from: CivilTime,
    /// End of validity (exclusive): sunrise of the following date.
    pub valid_until: CivilTime,
    pub sunrise: CivilTime,
    /// Instant the tithi was evaluated at.
    pub reference_instant: CivilTime,

    pub tithi: TithiDetails,
    pub observances: Vec<ShivObservance>,
    pub language: Language,
    pub degraded: Vec<DegradedReason>,
}

impl ShivVaasResult {
    pub fn is_degraded(&self) -> bool {
        !self.degraded.is_empty()
    }
}
