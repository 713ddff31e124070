//! Input validation for caller-supplied coordinates.
//!
//! The computation functions assume validated input; these checks are the
//! only place invalid locations are rejected.

use crate::error::VedicError;

/// Check latitude ∈ [-90, 90] and longitude ∈ [-180, 180], both finite.
pub fn validate_coordinates(latitude_deg: f64, longitude_deg: f64) -> Result<(), VedicError> {
    if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
        return Err(VedicError::InvalidLocation("latitude must be within [-90, 90]"));
    }
    if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
        return Err(VedicError::InvalidLocation(
            "longitude must be within [-180, 180]",
        ));
    }
    Ok(())
}

/// Check a UTC offset lies within the civil range [-12, +14] hours.
pub fn validate_utc_offset(hours: f64) -> Result<(), VedicError> {
    if !hours.is_finite() || !(-12.0..=14.0).contains(&hours) {
        return Err(VedicError::InvalidLocation(
            "UTC offset must be within [-12, +14] hours",
        ));
    }
    Ok(())
}
