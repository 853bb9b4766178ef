//! Error display component.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Displays an error message in a styled box that can be dismissed.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let mut state = use_context::<AppState>();
    rsx! {
        div {
            role: "alert",
            style: "display: flex; justify-content: space-between; gap: 8px; padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 8px; border: 1px solid #EF9A9A;",
            span {
                strong { "Error: " }
                "{props.message}"
            }
            button {
                r#type: "button",
                style: "background: none; border: none; color: inherit; cursor: pointer;",
                onclick: move |_| state.error_msg.set(None),
                "×"
            }
        }
    }
}
