//! Daily panchang and Shiv Vaas engine.
//!
//! [`PanchangEngine`] ties together:
//! - sunrise/sunset from a [`vaas_vedic_base::RiseSetProvider`]
//! - Sun/Moon longitudes at a chosen [`Precision`]
//! - tithi, karana, nakshatra, yoga, vaar and muhurta windows
//! - the Shiv Vaas abode with its validity window
//!
//! Every public calculation returns a value. When a precise path fails the
//! result carries a `DegradedReason` instead of an error.

pub mod config;
pub mod error;
pub mod panchang;
pub mod panchang_types;
pub mod request;

pub use config::{NakshatraMethod, PanchangConfig, Precision};
pub use error::PanchangError;
pub use panchang::PanchangEngine;
pub use panchang_types::{PanchangResult, ShivVaasResult, TithiDetails};
pub use request::PanchangRequest;
