//! Toggles for mix mode, electricity/emissions display and time aggregation.

use crate::state::AppState;
use dioxus::prelude::*;
use emap_chart::{t, MixMode, TimeAverage};

const TIME_AVERAGES: [TimeAverage; 4] = [
    TimeAverage::Hourly,
    TimeAverage::Daily,
    TimeAverage::Monthly,
    TimeAverage::Yearly,
];

/// Dropdowns switching what the breakdown chart shows.
#[component]
pub fn DisplayToggles() -> Element {
    let mut state = use_context::<AppState>();
    let locale = (state.locale)();
    let mix_mode = (state.mix_mode)();
    let display_by_emissions = (state.display_by_emissions)();
    let time_average = (state.time_average)();

    let on_mix_change = move |evt: Event<FormData>| match evt.value().parse::<MixMode>() {
        Ok(mode) => state.mix_mode.set(mode),
        Err(err) => log::warn!("[EMAP] {}", err),
    };

    let on_display_change = move |evt: Event<FormData>| {
        state.display_by_emissions.set(evt.value() == "emissions");
    };

    let on_time_change = move |evt: Event<FormData>| match evt.value().parse::<TimeAverage>() {
        Ok(average) => state.time_average.set(average),
        Err(err) => log::warn!("[EMAP] {}", err),
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; flex-wrap: wrap; gap: 12px; align-items: center;",
            select {
                onchange: on_mix_change,
                option {
                    value: "consumption",
                    selected: mix_mode == MixMode::Consumption,
                    {t(locale, "controls.consumption")}
                }
                option {
                    value: "production",
                    selected: mix_mode == MixMode::Production,
                    {t(locale, "controls.production")}
                }
            }
            select {
                onchange: on_display_change,
                option {
                    value: "electricity",
                    selected: !display_by_emissions,
                    {t(locale, "controls.electricity")}
                }
                option {
                    value: "emissions",
                    selected: display_by_emissions,
                    {t(locale, "controls.emissions")}
                }
            }
            label {
                style: "font-weight: bold;",
                {format!("{}: ", t(locale, "controls.time"))}
                select {
                    onchange: on_time_change,
                    for average in TIME_AVERAGES {
                        option {
                            value: "{average.as_str()}",
                            selected: average == time_average,
                            "{average.as_str()}"
                        }
                    }
                }
            }
        }
    }
}
