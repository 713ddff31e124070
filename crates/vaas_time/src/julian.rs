//! Julian Day arithmetic on the proleptic Gregorian calendar.
//!
//! The Julian Day is a continuous count of days from noon, 1 January 4713 BCE
//! (Julian calendar). A value with fractional part `.0` is noon UTC, `.5` is
//! midnight. All functions here are pure and never consult the host timezone.
//!
//! Sources: Fliegel & Van Flandern (1968), Meeus "Astronomical Algorithms"
//! ch. 7. Public domain formulas.

/// Julian Day of the J2000.0 epoch (2000-Jan-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Day of the Unix epoch (1970-Jan-01 00:00 UTC).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Seconds in one civil day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days in a Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Julian Day Number (integer, at noon) of a Gregorian calendar date.
///
/// `a = (14 - month) / 12`, `y = year + 4800 - a`, `m = month + 12a - 3`,
/// `JDN = day + (153m + 2)/5 + 365y + y/4 - y/100 + y/400 - 32045`,
/// with floor division throughout.
pub fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    let month = month as i64;
    let a = (14 - month).div_euclid(12);
    let y = year as i64 + 4800 - a;
    let m = month + 12 * a - 3;
    day as i64 + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

/// Gregorian calendar date `(year, month, day)` of a Julian Day Number.
///
/// Inverse of [`julian_day_number`] (Fliegel & Van Flandern).
pub fn date_from_day_number(jdn: i64) -> (i32, u32, u32) {
    let mut l = jdn + 68_569;
    let n = (4 * l).div_euclid(146_097);
    l -= (146_097 * n + 3).div_euclid(4);
    let i = (4000 * (l + 1)).div_euclid(1_461_001);
    l = l - (1461 * i).div_euclid(4) + 31;
    let j = (80 * l).div_euclid(2447);
    let day = l - (2447 * j).div_euclid(80);
    l = j.div_euclid(11);
    let month = j + 2 - 12 * l;
    let year = 100 * (n - 49) + i + l;
    (year as i32, month as u32, day as u32)
}

/// Julian Date from a calendar date with fractional day.
///
/// `day_frac` is the day of month plus the elapsed fraction of that day
/// counted from midnight, e.g. `15.5` is the 15th at 12:00.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let day = day_frac.floor();
    let frac = day_frac - day;
    julian_day_number(year, month, day as u32) as f64 - 0.5 + frac
}

/// Calendar date `(year, month, day_frac)` from a Julian Date.
///
/// `day_frac` follows the same convention as [`calendar_to_jd`].
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = jd + 0.5;
    let jdn = z.floor();
    let frac = z - jdn;
    let (year, month, day) = date_from_day_number(jdn as i64);
    (year, month, day as f64 + frac)
}

/// Whether `year` is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a Gregorian month. Returns 0 for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Day of year, 1-based (1 January = 1).
pub fn day_of_year(year: i32, month: u32, day: u32) -> u32 {
    (julian_day_number(year, month, day) - julian_day_number(year, 1, 0)) as u32
}

/// Weekday of a Julian Date, 0 = Sunday .. 6 = Saturday.
///
/// The weekday changes at midnight of the frame the JD is expressed in.
pub fn weekday_from_jd(jd: f64) -> u8 {
    ((jd + 1.5).floor() as i64).rem_euclid(7) as u8
}

/// Julian centuries since J2000.0.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}
