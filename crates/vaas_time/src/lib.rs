//! Civil time and Julian Day conversions.
//!
//! This crate provides:
//! - Gregorian calendar ↔ Julian Day conversion
//! - `CivilTime`, the timezone-agnostic instant used by the engine
//! - Greenwich / local sidereal time for hour-angle computations
//! - Validators for `YYYY-MM-DD` and `HH:MM` caller input

pub mod civil_time;
pub mod error;
pub mod julian;
pub mod parse;
pub mod sidereal;

pub use civil_time::{CivilTime, civil_to_jd, jd_to_civil};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd,
    date_from_day_number, day_of_year, days_in_month, is_leap_year, jd_to_calendar,
    julian_centuries, julian_day_number, weekday_from_jd,
};
pub use parse::{parse_date, parse_datetime, parse_time};
pub use sidereal::{SIDEREAL_RATE, earth_rotation_angle_rad, gmst_rad, local_sidereal_time_rad};
