//! Engine configuration.

use std::str::FromStr;

use vaas_vedic_base::RiseSetConfig;

use crate::error::PanchangError;

/// How Sun and Moon longitudes are obtained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Precision {
    /// Day-count tithi approximation; no positions are computed.
    Approximate,
    /// Built-in trigonometric series.
    #[default]
    SeriesBased,
    /// Caller-supplied `PositionSource`; falls back to the approximation
    /// when it is missing or fails.
    Delegated,
}

impl Precision {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Approximate => "approximate",
            Self::SeriesBased => "series",
            Self::Delegated => "delegated",
        }
    }
}

impl FromStr for Precision {
    type Err = PanchangError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "approximate" | "approx" => Ok(Self::Approximate),
            "series" | "series-based" => Ok(Self::SeriesBased),
            "delegated" | "delegate" => Ok(Self::Delegated),
            _ => Err(PanchangError::UnknownOption {
                option: "precision",
                value: s.to_string(),
            }),
        }
    }
}

/// How nakshatra and yoga are derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NakshatraMethod {
    /// `day_of_year mod 27`. A calendrical simplification, kept as default.
    #[default]
    DayOfYear,
    /// Sidereal (Lahiri) Moon longitude, and Sun + Moon sum for yoga.
    MoonLongitude,
}

impl NakshatraMethod {
    pub const fn name(self) -> &'static str {
        match self {
            Self::DayOfYear => "day-of-year",
            Self::MoonLongitude => "moon-longitude",
        }
    }
}

impl FromStr for NakshatraMethod {
    type Err = PanchangError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day-of-year" | "day" | "doy" => Ok(Self::DayOfYear),
            "moon-longitude" | "moon" | "longitude" => Ok(Self::MoonLongitude),
            _ => Err(PanchangError::UnknownOption {
                option: "nakshatra method",
                value: s.to_string(),
            }),
        }
    }
}

/// Configuration for [`crate::PanchangEngine`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PanchangConfig {
    pub precision: Precision,
    pub nakshatra_method: NakshatraMethod,
    pub rise_set: RiseSetConfig,
}

impl PanchangConfig {
    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_nakshatra_method(mut self, method: NakshatraMethod) -> Self {
        self.nakshatra_method = method;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = PanchangConfig::default();
        assert_eq!(c.precision, Precision::SeriesBased);
        assert_eq!(c.nakshatra_method, NakshatraMethod::DayOfYear);
        assert_eq!(c.rise_set, RiseSetConfig::default());
    }

    #[test]
    fn parse_options() {
        assert_eq!("approx".parse::<Precision>(), Ok(Precision::Approximate));
        assert_eq!("Moon".parse::<NakshatraMethod>(), Ok(NakshatraMethod::MoonLongitude));
        assert!("exact".parse::<Precision>().is_err());
    }

    #[test]
    fn names_parse_back() {
        for p in [Precision::Approximate, Precision::SeriesBased, Precision::Delegated] {
            assert_eq!(p.name().parse::<Precision>(), Ok(p));
        }
        for m in [NakshatraMethod::DayOfYear, NakshatraMethod::MoonLongitude] {
            assert_eq!(m.name().parse::<NakshatraMethod>(), Ok(m));
        }
    }
}
