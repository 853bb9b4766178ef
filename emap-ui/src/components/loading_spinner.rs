//! Loading spinner component.

use crate::state::AppState;
use dioxus::prelude::*;
use emap_chart::t;

/// Simple loading indicator.
#[component]
pub fn LoadingSpinner() -> Element {
    let state = use_context::<AppState>();
    let label = t((state.locale)(), "controls.loading");
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "{label}"
        }
    }
}
