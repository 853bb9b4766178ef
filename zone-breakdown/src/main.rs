//! Zone electricity breakdown
//!
//! Shows how a zone's electricity is produced, consumed and exchanged with
//! its neighbours, as a bar breakdown chart rendered in inline SVG.
//!
//! Data flow:
//! 1. `build.rs` copies the zone details snapshot into `OUT_DIR`.
//! 2. `include_str!` embeds the snapshot into the WASM binary.
//! 3. On mount: parse the snapshot into `ZoneDetails` and store it in AppState.
//! 4. The chart derives its rows from AppState and re-renders whenever the
//!    selected time, mix mode, display mode or locale change.

use dioxus::prelude::*;
use emap_chart::t;
use emap_types::ZoneDetails;
use emap_ui::charts::BarBreakdownChart;
use emap_ui::components::{
    DisplayToggles, ErrorDisplay, FAQButton, FaqModal, LoadingSpinner, LocaleSelector, TimeSlider,
};
use emap_ui::state::AppState;

// Embed the zone details snapshot at compile time.
const ZONE_DETAILS_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/zone_details.json"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("zone-breakdown-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Parse the snapshot once on mount ───
    use_effect(move || {
        match ZoneDetails::from_json(ZONE_DETAILS_JSON) {
            Ok(details) => {
                if details.zone_states.is_empty() {
                    log::warn!("[EMAP] zone {} has no states", details.zone_key);
                }
                state.zone_details.set(Some(details));
            }
            Err(err) => {
                log::error!("[EMAP] failed to parse zone details: {:#}", err);
                state
                    .error_msg
                    .set(Some(format!("Could not load zone details: {}", err)));
            }
        }
        state.loading.set(false);
    });

    let locale = (state.locale)();
    let zone_label = state
        .zone_details
        .read()
        .as_ref()
        .map(|details| details.zone_key.to_string())
        .unwrap_or_default();

    // ─── Render ───
    rsx! {
        header {
            style: "position: sticky; top: 0; z-index: 10; display: flex; justify-content: space-between; align-items: center; padding: 8px 16px; background: #FFFFFF; border-bottom: 1px solid #E5E5E5;",
            h1 {
                style: "margin: 0; font-size: 18px;",
                {format!("{}: {}", t(locale, "controls.zone"), zone_label)}
            }
            div {
                style: "display: flex; gap: 8px; align-items: center;",
                LocaleSelector {}
                FAQButton { is_icon_only: false }
            }
        }
        div {
            style: "max-width: 640px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else {
                DisplayToggles {}
                TimeSlider {}
                BarBreakdownChart { has_estimation_pill: true }
            }
        }
        FaqModal {}
    }
}
