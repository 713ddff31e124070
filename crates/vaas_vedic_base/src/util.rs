//! Shared utility functions for vedic calculations.

pub use vaas_ephem::normalize_360;

/// Index of the equal segment of width `span_deg` containing `deg`.
///
/// `deg` is normalized first; the result is clamped to `count - 1` so that
/// floating-point edge cases at 360 never produce an out-of-range index.
pub fn segment_index(deg: f64, span_deg: f64, count: u8) -> u8 {
    let idx = (normalize_360(deg) / span_deg).floor() as i64;
    idx.clamp(0, count as i64 - 1) as u8
}

/// Wrap an angle in radians to [-π, π].
pub fn wrap_pi(rad: f64) -> f64 {
    use std::f64::consts::{PI, TAU};
    let r = rad.rem_euclid(TAU);
    if r > PI { r - TAU } else { r }
}
