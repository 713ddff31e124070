//! Validated caller input.
//!
//! The presentation layer hands over strings and raw numbers; this is where
//! they are checked once so the engine can assume valid input.

use vaas_time::{CivilTime, parse_date, parse_time};
use vaas_vedic_base::GeoLocation;

use crate::error::PanchangError;

/// A validated date, location and optional specific local time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanchangRequest {
    pub date: CivilTime,
    pub location: GeoLocation,
    /// Specific local instant on `date`, if one was requested.
    pub instant: Option<CivilTime>,
}

impl PanchangRequest {
    /// Parse `YYYY-MM-DD`, optional `HH:MM`, and coordinates.
    ///
    /// `utc_offset_hours` defaults to local mean time when `None`.
    pub fn parse(
        date: &str,
        time: Option<&str>,
        latitude_deg: f64,
        longitude_deg: f64,
        utc_offset_hours: Option<f64>,
    ) -> Result<Self, PanchangError> {
        let date = parse_date(date)?;
        let instant = match time {
            Some(t) => {
                let (hour, minute) = parse_time(t)?;
                Some(date.at_time(hour, minute, 0.0))
            }
            None => None,
        };
        let mut location = GeoLocation::new(latitude_deg, longitude_deg, 0.0);
        if let Some(offset) = utc_offset_hours {
            location = location.with_utc_offset(offset);
        }
        Ok(Self {
            date,
            location: location.validated()?,
            instant,
        })
    }

    pub fn with_altitude(mut self, altitude_m: f64) -> Self {
        self.location.altitude_m = altitude_m;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_request() {
        let r = PanchangRequest::parse("2024-06-17", Some("07:45"), 28.6139, 77.209, Some(5.5))
            .unwrap();
        assert_eq!(r.date, CivilTime::date(2024, 6, 17));
        assert_eq!(r.instant, Some(CivilTime::new(2024, 6, 17, 7, 45, 0.0)));
        assert_eq!(r.location.utc_offset_hours, 5.5);
    }

    #[test]
    fn defaults_to_local_mean_time() {
        let r = PanchangRequest::parse("2024-06-17", None, 0.0, 30.0, None).unwrap();
        assert_eq!(r.location.utc_offset_hours, 2.0);
        assert_eq!(r.instant, None);
    }

    #[test]
    fn rejects_bad_inputs() {
        assert!(matches!(
            PanchangRequest::parse("2024-02-30", None, 0.0, 0.0, None),
            Err(PanchangError::Time(_))
        ));
        assert!(matches!(
            PanchangRequest::parse("2024-06-17", Some("25:00"), 0.0, 0.0, None),
            Err(PanchangError::Time(_))
        ));
        assert!(matches!(
            PanchangRequest::parse("2024-06-17", None, 95.0, 0.0, None),
            Err(PanchangError::Location(_))
        ));
    }
}
