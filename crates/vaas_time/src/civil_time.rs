//! Civil calendar date/time with sub-second precision.
//!
//! `CivilTime` is the canonical instant type used throughout the engine.
//! It carries no timezone of its own: the caller decides whether the fields
//! are UTC or observer-local and converts with [`CivilTime::shift_hours`].

use crate::julian::{
    SECONDS_PER_DAY, UNIX_EPOCH_JD, date_from_day_number, day_of_year, julian_day_number,
    weekday_from_jd,
};

/// Civil calendar date and time of day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CivilTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

/// Julian Day of a civil instant whose fields are UTC.
///
/// Integer day number from the Gregorian formula, plus `(hour - 12) / 24`
/// so that `.0` falls on noon. Reproducible bit-for-bit for equal fields.
pub fn civil_to_jd(t: &CivilTime) -> f64 {
    let jdn = julian_day_number(t.year, t.month, t.day);
    let hour = t.hour as f64 + t.minute as f64 / 60.0 + t.second / 3600.0;
    jdn as f64 + (hour - 12.0) / 24.0
}

/// Civil instant from a Julian Day, rounded to the nearest millisecond.
pub fn jd_to_civil(jd: f64) -> CivilTime {
    let z = jd + 0.5;
    let mut jdn = z.floor() as i64;
    let mut millis = ((z - z.floor()) * SECONDS_PER_DAY * 1000.0).round() as i64;
    if millis >= 86_400_000 {
        millis -= 86_400_000;
        jdn += 1;
    }
    let (year, month, day) = date_from_day_number(jdn);
    let hour = (millis / 3_600_000) as u32;
    let minute = ((millis / 60_000) % 60) as u32;
    let second = (millis % 60_000) as f64 / 1000.0;
    CivilTime {
        year,
        month,
        day,
        hour,
        minute,
        second,
    }
}

impl CivilTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Midnight at the start of a calendar date.
    pub fn date(year: i32, month: u32, day: u32) -> Self {
        Self::new(year, month, day, 0, 0, 0.0)
    }

    /// Julian Day, treating the fields as UTC.
    pub fn to_jd(&self) -> f64 {
        civil_to_jd(self)
    }

    /// Inverse of [`CivilTime::to_jd`].
    pub fn from_jd(jd: f64) -> Self {
        jd_to_civil(jd)
    }

    /// The same calendar date at a different time of day.
    pub fn at_time(&self, hour: u32, minute: u32, second: f64) -> Self {
        Self::new(self.year, self.month, self.day, hour, minute, second)
    }

    /// Midnight at the start of this instant's calendar date.
    pub fn midnight(&self) -> Self {
        self.at_time(0, 0, 0.0)
    }

    /// Shift by a (possibly fractional, possibly negative) number of hours.
    ///
    /// Converts local civil time to UTC with `-offset`, and back with `+offset`.
    pub fn shift_hours(&self, hours: f64) -> Self {
        if hours == 0.0 {
            return *self;
        }
        jd_to_civil(self.to_jd() + hours / 24.0)
    }

    /// Shift by whole calendar days, keeping the time of day.
    pub fn add_days(&self, days: i64) -> Self {
        let jdn = julian_day_number(self.year, self.month, self.day) + days;
        let (year, month, day) = date_from_day_number(jdn);
        Self::new(year, month, day, self.hour, self.minute, self.second)
    }

    /// Day of year, 1-based.
    pub fn day_of_year(&self) -> u32 {
        day_of_year(self.year, self.month, self.day)
    }

    /// Weekday of the calendar date, 0 = Sunday .. 6 = Saturday.
    pub fn weekday(&self) -> u8 {
        weekday_from_jd(self.midnight().to_jd())
    }

    /// Fractional days elapsed since 1970-01-01T00:00, treating fields as UTC.
    pub fn epoch_days(&self) -> f64 {
        self.to_jd() - UNIX_EPOCH_JD
    }

    /// Hours since midnight as a fraction.
    pub fn hour_fraction(&self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0 + self.second / 3600.0
    }

    /// Whether two instants fall on the same calendar date.
    pub fn same_date(&self, other: &CivilTime) -> bool {
        self.year == other.year && self.month == other.month && self.day == other.day
    }
}

impl std::fmt::Display for CivilTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02} {:02}:{:02}:{:06.3}",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}
