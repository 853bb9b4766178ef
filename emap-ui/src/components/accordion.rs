//! Collapsible section whose state lives in a shared signal.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct AccordionProps {
    pub title: String,
    /// Shared collapsed flag, so the state survives re-mounts
    pub is_collapsed: Signal<bool>,
    /// Called when the section goes from collapsed to open
    pub on_open: Option<EventHandler<()>>,
    #[props(default = String::new())]
    pub class: String,
    pub children: Element,
}

/// New collapsed flag and whether this toggle opened the section.
fn toggle(was_collapsed: bool) -> (bool, bool) {
    (!was_collapsed, was_collapsed)
}

#[component]
pub fn Accordion(props: AccordionProps) -> Element {
    let mut is_collapsed = props.is_collapsed;
    let on_open = props.on_open;
    let collapsed = is_collapsed();
    let chevron = if collapsed { "▸" } else { "▾" };

    rsx! {
        div {
            class: "{props.class}",
            button {
                r#type: "button",
                style: "display: flex; width: 100%; justify-content: space-between; align-items: center; background: none; border: none; padding: 8px 0; cursor: pointer; font-weight: 600;",
                aria_expanded: !collapsed,
                onclick: move |_| {
                    let (next, opened) = toggle(is_collapsed());
                    is_collapsed.set(next);
                    if opened {
                        if let Some(handler) = on_open {
                            handler.call(());
                        }
                    }
                },
                span { "{props.title}" }
                span { "{chevron}" }
            }
            if !collapsed {
                div {
                    style: "padding-bottom: 8px;",
                    {props.children}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_reports_transition() {
        assert_eq!(toggle(true), (false, true));
    }

    #[test]
    fn closing_does_not_report_open() {
        assert_eq!(toggle(false), (true, false));
    }
}
