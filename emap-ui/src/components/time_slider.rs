//! Slider scrubbing through the loaded zone states.

use crate::state::AppState;
use dioxus::prelude::*;
use emap_chart::t;

/// Range input over the state datetimes; the rightmost position is the latest state.
#[component]
pub fn TimeSlider() -> Element {
    let mut state = use_context::<AppState>();
    let locale = (state.locale)();
    let datetimes = state
        .zone_details
        .read()
        .as_ref()
        .map(|details| details.datetimes())
        .unwrap_or_default();

    if datetimes.is_empty() {
        return rsx! {};
    }

    let last = datetimes.len() - 1;
    let selected_index = (state.selected_datetime)()
        .and_then(|selected| datetimes.iter().position(|dt| *dt == selected))
        .unwrap_or(last);
    let label = datetimes[selected_index].format("%Y-%m-%d %H:%M UTC").to_string();

    let on_input = move |evt: Event<FormData>| {
        let Ok(index) = evt.value().parse::<usize>() else {
            return;
        };
        if let Some(datetime) = datetimes.get(index) {
            state.selected_datetime.set(Some(*datetime));
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                r#for: "time-slider",
                style: "font-weight: bold;",
                {format!("{}: ", t(locale, "controls.time"))}
            }
            input {
                id: "time-slider",
                r#type: "range",
                min: "0",
                max: "{last}",
                value: "{selected_index}",
                style: "flex: 1;",
                oninput: on_input,
            }
            span {
                style: "font-size: 12px; color: #666; white-space: nowrap;",
                "{label}"
            }
        }
    }
}
