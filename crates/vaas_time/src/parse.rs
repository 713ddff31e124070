//! Validators for caller-supplied date and time strings.
//!
//! Accepted layouts:
//! - date: `YYYY-MM-DD` (exactly four, two and two digits)
//! - time: `H:MM` or `HH:MM`, 24-hour clock
//! - datetime: `YYYY-MM-DDTHH:MM[:SS]` or `YYYY-MM-DD HH:MM[:SS]`

use crate::civil_time::CivilTime;
use crate::error::TimeError;
use crate::julian::days_in_month;

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_number<T: std::str::FromStr>(s: &str, what: &str) -> Result<T, TimeError> {
    s.parse()
        .map_err(|_| TimeError::InvalidFormat(format!("{what} '{s}' is not a number")))
}

/// Parse and validate a `YYYY-MM-DD` calendar date (midnight).
pub fn parse_date(s: &str) -> Result<CivilTime, TimeError> {
    let parts: Vec<&str> = s.trim().split('-').collect();
    let [y, m, d] = parts.as_slice() else {
        return Err(TimeError::InvalidFormat(format!(
            "expected YYYY-MM-DD, got '{s}'"
        )));
    };
    if y.len() != 4 || m.len() != 2 || d.len() != 2 || ![y, m, d].iter().all(|p| all_digits(p))
    {
        return Err(TimeError::InvalidFormat(format!(
            "expected YYYY-MM-DD, got '{s}'"
        )));
    }
    let year: i32 = parse_number(y, "year")?;
    let month: u32 = parse_number(m, "month")?;
    let day: u32 = parse_number(d, "day")?;
    if day == 0 || day > days_in_month(year, month) {
        return Err(TimeError::InvalidDate { year, month, day });
    }
    Ok(CivilTime::date(year, month, day))
}

/// Parse and validate an `H:MM` / `HH:MM` time of day.
///
/// Returns `(hour, minute)`.
pub fn parse_time(s: &str) -> Result<(u32, u32), TimeError> {
    let s = s.trim();
    let Some((h, m)) = s.split_once(':') else {
        return Err(TimeError::InvalidFormat(format!("expected HH:MM, got '{s}'")));
    };
    if !(1..=2).contains(&h.len()) || m.len() != 2 || !all_digits(h) || !all_digits(m) {
        return Err(TimeError::InvalidFormat(format!("expected HH:MM, got '{s}'")));
    }
    let hour: u32 = parse_number(h, "hour")?;
    let minute: u32 = parse_number(m, "minute")?;
    if hour > 23 || minute > 59 {
        return Err(TimeError::InvalidTime { hour, minute });
    }
    Ok((hour, minute))
}

/// Parse `YYYY-MM-DDTHH:MM[:SS]` (a space may replace the `T`, a trailing
/// `Z` is ignored).
pub fn parse_datetime(s: &str) -> Result<CivilTime, TimeError> {
    let s = s.trim().trim_end_matches('Z');
    let Some((date, time)) = s.split_once(['T', ' ']) else {
        return parse_date(s);
    };
    let base = parse_date(date)?;
    let (hm, second) = match time.rsplit_once(':') {
        Some((hm, sec)) if hm.contains(':') => {
            let second: f64 = parse_number(sec, "second")?;
            if !(0.0..60.0).contains(&second) {
                return Err(TimeError::InvalidFormat(format!("second '{sec}' out of range")));
            }
            (hm, second)
        }
        _ => (time, 0.0),
    };
    let (hour, minute) = parse_time(hm)?;
    Ok(base.at_time(hour, minute, second))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_ok() {
        let t = parse_date("2024-06-17").unwrap();
        assert_eq!((t.year, t.month, t.day, t.hour), (2024, 6, 17, 0));
    }

    #[test]
    fn date_rejects_layout() {
        assert!(matches!(parse_date("2024-6-17"), Err(TimeError::InvalidFormat(_))));
        assert!(matches!(parse_date("17/06/2024"), Err(TimeError::InvalidFormat(_))));
        assert!(matches!(parse_date("2024-06-17<b>"), Err(TimeError::InvalidFormat(_))));
        assert!(matches!(parse_date(""), Err(TimeError::InvalidFormat(_))));
    }

    #[test]
    fn date_rejects_impossible_day() {
        assert_eq!(
            parse_date("2023-02-29"),
            Err(TimeError::InvalidDate {
                year: 2023,
                month: 2,
                day: 29
            })
        );
        assert!(parse_date("2024-02-29").is_ok());
        assert!(parse_date("2024-13-01").is_err());
    }

    #[test]
    fn time_ok() {
        assert_eq!(parse_time("05:30").unwrap(), (5, 30));
        assert_eq!(parse_time("5:30").unwrap(), (5, 30));
        assert_eq!(parse_time("23:59").unwrap(), (23, 59));
    }

    #[test]
    fn time_rejects() {
        assert_eq!(
            parse_time("24:00"),
            Err(TimeError::InvalidTime {
                hour: 24,
                minute: 0
            })
        );
        assert!(parse_time("12:60").is_err());
        assert!(parse_time("12:5").is_err());
        assert!(parse_time("noon").is_err());
    }

    #[test]
    fn datetime_variants() {
        let t = parse_datetime("2024-06-17T18:45").unwrap();
        assert_eq!((t.day, t.hour, t.minute), (17, 18, 45));
        let t = parse_datetime("2024-06-17 18:45:30").unwrap();
        assert_eq!(t.second, 30.0);
        let t = parse_datetime("2024-06-17T18:45:30Z").unwrap();
        assert_eq!(t.hour, 18);
        let t = parse_datetime("2024-06-17").unwrap();
        assert_eq!(t.hour, 0);
    }
}
