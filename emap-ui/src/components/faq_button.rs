//! Button opening the FAQ modal.

use crate::components::button::{Button, ButtonKind, ButtonSize};
use crate::js_bridge::{self, TrackEvent};
use crate::state::AppState;
use dioxus::prelude::*;
use emap_chart::constants::DEFAULT_ICON_SIZE;
use emap_chart::t;

#[derive(Props, Clone, PartialEq)]
pub struct FAQButtonProps {
    /// Hide the label and only show the icon
    #[props(default = false)]
    pub is_icon_only: bool,
    #[props(default = DEFAULT_ICON_SIZE)]
    pub icon_size: u32,
    #[props(default)]
    pub size: ButtonSize,
    #[props(default = String::new())]
    pub class: String,
}

#[derive(Props, Clone, PartialEq)]
pub struct InfoIconProps {
    #[props(default = DEFAULT_ICON_SIZE)]
    pub size: u32,
}

/// Filled circle with an "i".
#[component]
pub fn InfoIcon(props: InfoIconProps) -> Element {
    rsx! {
        svg {
            width: "{props.size}",
            height: "{props.size}",
            view_box: "0 0 16 16",
            circle { cx: "8", cy: "8", r: "8", fill: "currentColor" }
            rect { x: "7", y: "7", width: "2", height: "5", fill: "#FFFFFF" }
            circle { cx: "8", cy: "4.5", r: "1.1", fill: "#FFFFFF" }
        }
    }
}

/// Secondary button that opens the FAQ modal.
#[component]
pub fn FAQButton(props: FAQButtonProps) -> Element {
    let mut state = use_context::<AppState>();
    let locale = (state.locale)();
    let label = t(locale, "button.faq");

    rsx! {
        Button {
            kind: ButtonKind::Secondary,
            size: props.size,
            class: props.class.clone(),
            icon: rsx! { InfoIcon { size: props.icon_size } },
            onclick: move |_| {
                log::info!("[EMAP] opening FAQ modal");
                js_bridge::track_event(TrackEvent::FaqButtonClicked, serde_json::json!({}));
                state.is_faq_modal_open.set(true);
            },
            if !props.is_icon_only {
                "{label}"
            }
        }
    }
}
