use dioxus::prelude::*;

#[component]
pub fn HorizontalDivider() -> Element {
    rsx! {
        div {
            style: "height: 1px; background: #E5E5E5; margin: 8px 0;",
        }
    }
}
