//! Modal listing frequently asked questions about the charts.

use crate::components::button::{Button, ButtonKind, ButtonSize};
use crate::state::AppState;
use dioxus::prelude::*;
use emap_chart::t;

const FAQ_ENTRIES: [&str; 3] = ["faq.estimated", "faq.capacity", "faq.emissions"];

/// Shown while `is_faq_modal_open` is set; closing resets it.
#[component]
pub fn FaqModal() -> Element {
    let mut state = use_context::<AppState>();
    if !(state.is_faq_modal_open)() {
        return rsx! {};
    }
    let locale = (state.locale)();

    rsx! {
        div {
            style: "position: fixed; inset: 0; background: rgba(0, 0, 0, 0.4); display: flex; align-items: center; justify-content: center; z-index: 100;",
            onclick: move |_| state.is_faq_modal_open.set(false),
            div {
                role: "dialog",
                style: "background: #FFFFFF; border-radius: 16px; padding: 16px 20px; max-width: 480px; max-height: 80vh; overflow-y: auto;",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                h2 {
                    style: "margin: 0 0 12px 0; font-size: 18px;",
                    {t(locale, "faq.title")}
                }
                for entry in FAQ_ENTRIES {
                    div {
                        key: "{entry}",
                        style: "margin-bottom: 12px;",
                        h3 {
                            style: "margin: 0 0 4px 0; font-size: 14px;",
                            {t(locale, &format!("{entry}.question"))}
                        }
                        p {
                            style: "margin: 0; font-size: 13px; color: #525252;",
                            {t(locale, &format!("{entry}.answer"))}
                        }
                    }
                }
                Button {
                    kind: ButtonKind::Secondary,
                    size: ButtonSize::Sm,
                    onclick: move |_| state.is_faq_modal_open.set(false),
                    {t(locale, "button.close")}
                }
            }
        }
    }
}
