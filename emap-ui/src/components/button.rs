//! Generic button, rendered as a link when given an `href`.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonKind {
    #[default]
    Primary,
    Secondary,
    Tertiary,
    Link,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub kind: ButtonKind,
    #[props(default)]
    pub size: ButtonSize,
    /// Rendered before the label
    pub icon: Option<Element>,
    /// Turns the button into an anchor opening in a new tab
    pub href: Option<String>,
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(default = false)]
    pub is_disabled: bool,
    #[props(default = String::new())]
    pub class: String,
    pub children: Element,
}

fn button_style(kind: ButtonKind, size: ButtonSize, is_disabled: bool) -> String {
    let (background, color, border) = match kind {
        ButtonKind::Primary => ("#166534", "#FFFFFF", "1px solid #166534"),
        ButtonKind::Secondary => ("#FFFFFF", "#171717", "1px solid #E5E5E5"),
        ButtonKind::Tertiary => ("transparent", "#171717", "1px solid transparent"),
        ButtonKind::Link => ("transparent", "#15803D", "none"),
    };
    let (padding, font_size) = match size {
        ButtonSize::Sm => ("4px 8px", 12),
        ButtonSize::Md => ("6px 12px", 14),
        ButtonSize::Lg => ("10px 16px", 16),
    };
    let radius = if kind == ButtonKind::Link { "0" } else { "9999px" };
    let opacity = if is_disabled { 0.5 } else { 1.0 };
    format!(
        "display: inline-flex; align-items: center; gap: 6px; cursor: pointer; \
         text-decoration: none; font-weight: 600; background: {background}; color: {color}; \
         border: {border}; border-radius: {radius}; padding: {padding}; \
         font-size: {font_size}px; opacity: {opacity};"
    )
}

/// Button with optional leading icon.
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let style = button_style(props.kind, props.size, props.is_disabled);
    let onclick = props.onclick;
    let is_disabled = props.is_disabled;
    let handle_click = move |evt: MouseEvent| {
        if is_disabled {
            return;
        }
        if let Some(handler) = onclick {
            handler.call(evt);
        }
    };

    match props.href {
        Some(href) => rsx! {
            a {
                class: "{props.class}",
                style: "{style}",
                href: "{href}",
                target: "_blank",
                rel: "noreferrer",
                onclick: handle_click,
                {props.icon}
                {props.children}
            }
        },
        None => rsx! {
            button {
                class: "{props.class}",
                style: "{style}",
                r#type: "button",
                disabled: is_disabled,
                onclick: handle_click,
                {props.icon}
                {props.children}
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secondary_is_outlined() {
        let style = button_style(ButtonKind::Secondary, ButtonSize::Md, false);
        assert!(style.contains("background: #FFFFFF"));
        assert!(style.contains("border: 1px solid #E5E5E5"));
        assert!(style.contains("font-size: 14px"));
    }

    #[test]
    fn disabled_is_dimmed() {
        let style = button_style(ButtonKind::Primary, ButtonSize::Sm, true);
        assert!(style.contains("opacity: 0.5"));
        assert!(style.contains("padding: 4px 8px"));
    }

    #[test]
    fn links_are_square() {
        assert!(button_style(ButtonKind::Link, ButtonSize::Lg, false).contains("border-radius: 0;"));
    }
}
