//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use emap_chart::{Locale, MixMode, TimeAverage};
use emap_types::ZoneDetails;

/// Shared application state for electricity map apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Zone details for the selected zone (None until loaded)
    pub zone_details: Signal<Option<ZoneDetails>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Selected state datetime; None follows the latest state
    pub selected_datetime: Signal<Option<DateTime<Utc>>>,
    pub display_by_emissions: Signal<bool>,
    pub mix_mode: Signal<MixMode>,
    pub time_average: Signal<TimeAverage>,
    /// Collapsed state of the data-sources accordion under the bar breakdown chart
    pub data_sources_collapsed_bar_breakdown: Signal<bool>,
    pub is_faq_modal_open: Signal<bool>,
    pub locale: Signal<Locale>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            zone_details: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selected_datetime: Signal::new(None),
            display_by_emissions: Signal::new(false),
            mix_mode: Signal::new(MixMode::default()),
            time_average: Signal::new(TimeAverage::default()),
            data_sources_collapsed_bar_breakdown: Signal::new(true),
            is_faq_modal_open: Signal::new(false),
            locale: Signal::new(Locale::default()),
        }
    }

    /// Hourly states are power; longer aggregates are energy.
    pub fn is_hourly(&self) -> bool {
        (self.time_average)().is_hourly()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
