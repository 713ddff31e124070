//! Panchang primitives and the Shiv Vaas classifier.
//!
//! This crate provides:
//! - Sunrise/sunset (with twilight variants) and moonrise/moonset
//! - Tithi, karana, nakshatra, yoga and vaar
//! - Rahu Kaal, Yamaganda, Gulika Kaal and Abhijit windows
//! - The Shiv Vaas formula with its seven-abode table
//! - Shiva observance days and worship-time bands
//! - `Computed<T>` / `DegradedReason` for results produced by a fallback path
//!
//! All functions are pure; positions come from a `vaas_ephem::PositionSource`.

pub mod degraded;
pub mod error;
pub mod karana;
pub mod language;
pub mod moonrise;
pub mod muhurta;
pub mod nakshatra;
pub mod puja_kaal;
pub mod riseset;
pub mod riseset_types;
pub mod shiv_vaas;
pub mod tithi;
pub mod util;
pub mod vaar;
pub mod validate;
pub mod vrat;
pub mod yoga;

pub use degraded::{Computed, DegradedReason};
pub use error::{RiseSetError, VedicError};
pub use karana::{KARANA_SEGMENT_DEG, Karana, KaranaResult, karana_from_elongation};
pub use language::{Bilingual, BilingualList, Language, UnknownLanguage};
pub use moonrise::{MoonRiseSet, moon_rise_set};
pub use muhurta::{MuhurtaWindows, TimeWindow, muhurta_windows};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN_27, Nakshatra, NakshatraResult, nakshatra_for_day,
    nakshatra_from_sidereal,
};
pub use puja_kaal::{PujaKaal, PujaTime, puja_time_at};
pub use riseset::{
    RiseSetProvider, SeriesRiseSet, approximate_local_noon_jd, compute_all_events,
    compute_rise_set, fallback_rise_set, local_noon_jd_for_date, rise_set_times,
    solar_semidiameter_arcmin, solar_transit_jd,
};
pub use riseset_types::{
    ALL_EVENTS, GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetResult, RiseSetTimes,
};
pub use shiv_vaas::{
    ABODE_SHLOKA, ALL_ABODES, AbodeInfo, Auspiciousness, FORMULA_SHLOKA, FORMULA_TITLE,
    ShivVaasAbode, ShivVaasClass, classify, formula_string, shiv_vaas_index,
};
pub use tithi::{
    ALL_TITHI_NAMES, APPROX_SYNODIC_MONTH_DAYS, Paksha, TITHI_SEGMENT_DEG, TithiName,
    TithiResult, approximate_tithi, tithi_at, tithi_from_elongation,
};
pub use util::normalize_360;
pub use vaar::{ALL_VAARS, Vaar, vaar_for_date};
pub use validate::{validate_coordinates, validate_utc_offset};
pub use vrat::{ShivObservance, shiv_observances};
pub use yoga::{ALL_YOGAS, YOGA_SPAN, Yoga, YogaResult, yoga_for_day, yoga_from_sum};
