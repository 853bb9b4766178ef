//! Dropdown selector for the UI language.

use crate::state::AppState;
use dioxus::prelude::*;
use emap_chart::{t, Locale};

/// Locale dropdown selector.
/// Updates `locale` in AppState on change.
#[component]
pub fn LocaleSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.locale)();

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<Locale>() {
        Ok(locale) => state.locale.set(locale),
        Err(err) => log::warn!("[EMAP] {}", err),
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "locale-select",
                style: "font-weight: bold; margin-right: 8px;",
                {format!("{}: ", t(selected, "controls.language"))}
            }
            select {
                id: "locale-select",
                onchange: on_change,
                for locale in Locale::ALL {
                    option {
                        value: "{locale.code()}",
                        selected: locale == selected,
                        "{locale.display_name()}"
                    }
                }
            }
        }
    }
}
