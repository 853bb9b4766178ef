//! Core types for electricity map zone data.
//!
//! Zone details are already-fetched snapshots of a zone's production,
//! consumption and emission figures. This crate only models and parses
//! them; everything presentational lives in `emap-chart`.

pub mod error;
pub mod mode;
pub mod zone;

pub use error::ModeParseError;
pub use mode::{ElectricityMode, MODE_ORDER};
pub use zone::{is_estimated, EstimationMethod, ZoneDetail, ZoneDetails, ZoneKey};

/// Embedded zone details for Germany, used by tests and as demo data.
pub static SAMPLE_ZONE_DETAILS: &str = include_str!("../../fixtures/zone_details_de.json");
