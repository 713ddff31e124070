//! Day-part windows derived from sunrise and sunset.
//!
//! Rahu Kaal, Yamaganda and Gulika Kaal each occupy one of the eight equal
//! parts of the daytime, chosen by weekday. Abhijit is the eighth of the
//! fifteen daytime muhurtas, centred on local noon.

use vaas_time::CivilTime;

use crate::riseset_types::RiseSetTimes;
use crate::vaar::Vaar;

/// A local time interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeWindow {
    pub start: CivilTime,
    pub end: CivilTime,
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}:{:02} - {:02}:{:02}",
            self.start.hour, self.start.minute, self.end.hour, self.end.minute
        )
    }
}

/// The four daytime windows of a panchang.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MuhurtaWindows {
    pub rahu_kaal: TimeWindow,
    pub yamaganda: TimeWindow,
    pub gulika_kaal: TimeWindow,
    pub abhijit: TimeWindow,
}

/// 1-based octant of the day for Rahu Kaal, Sunday first.
const RAHU_OCTANT: [u8; 7] = [8, 2, 7, 5, 6, 4, 3];
/// 1-based octant of the day for Yamaganda, Sunday first.
const YAMAGANDA_OCTANT: [u8; 7] = [5, 4, 3, 2, 1, 7, 6];
/// 1-based octant of the day for Gulika Kaal, Sunday first.
const GULIKA_OCTANT: [u8; 7] = [7, 6, 5, 4, 3, 2, 1];

fn window(sunrise: &CivilTime, start_hours: f64, length_hours: f64) -> TimeWindow {
    TimeWindow {
        start: sunrise.shift_hours(start_hours),
        end: sunrise.shift_hours(start_hours + length_hours),
    }
}

fn octant(times: &RiseSetTimes, n: u8) -> TimeWindow {
    let part = times.day_length_hours() / 8.0;
    window(&times.sunrise, (n - 1) as f64 * part, part)
}

/// Rahu Kaal, Yamaganda, Gulika Kaal and Abhijit for one day.
pub fn muhurta_windows(times: &RiseSetTimes, vaar: Vaar) -> MuhurtaWindows {
    let w = vaar.weekday() as usize;
    let muhurta = times.day_length_hours() / 15.0;
    MuhurtaWindows {
        rahu_kaal: octant(times, RAHU_OCTANT[w]),
        yamaganda: octant(times, YAMAGANDA_OCTANT[w]),
        gulika_kaal: octant(times, GULIKA_OCTANT[w]),
        abhijit: window(&times.sunrise, 7.0 * muhurta, muhurta),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::riseset::fallback_rise_set;
    use crate::riseset_types::GeoLocation;

    fn six_to_six() -> RiseSetTimes {
        fallback_rise_set(
            &CivilTime::date(2024, 6, 17),
            &GeoLocation::new(0.0, 0.0, 0.0),
        )
    }

    #[test]
    fn monday_rahu_kaal_is_second_octant() {
        let w = muhurta_windows(&six_to_six(), Vaar::Somvaar);
        assert_eq!((w.rahu_kaal.start.hour, w.rahu_kaal.start.minute), (7, 30));
        assert_eq!((w.rahu_kaal.end.hour, w.rahu_kaal.end.minute), (9, 0));
    }

    #[test]
    fn sunday_rahu_kaal_is_last_octant() {
        let w = muhurta_windows(&six_to_six(), Vaar::Ravivaar);
        assert_eq!(w.rahu_kaal.to_string(), "16:30 - 18:00");
    }

    #[test]
    fn thursday_yamaganda_first_octant() {
        let w = muhurta_windows(&six_to_six(), Vaar::Guruvaar);
        assert_eq!(w.yamaganda.to_string(), "06:00 - 07:30");
        assert_eq!(w.gulika_kaal.to_string(), "09:00 - 10:30");
    }

    #[test]
    fn abhijit_straddles_noon() {
        let w = muhurta_windows(&six_to_six(), Vaar::Budhvaar);
        assert_eq!(w.abhijit.to_string(), "11:36 - 12:24");
    }
}
