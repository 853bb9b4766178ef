//! Installed-capacity legend swatch shown above the power chart.

use dioxus::prelude::*;
use emap_chart::constants::CAPACITY_BAR_COLOR;

#[derive(Props, Clone, PartialEq)]
pub struct CapacityLegendProps {
    pub children: Element,
}

/// Swatch explaining the grey capacity bars.
#[component]
pub fn CapacityLegend(props: CapacityLegendProps) -> Element {
    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 4px; font-size: 11px; color: #737373;",
            span {
                style: "display: inline-block; width: 12px; height: 12px; border-radius: 2px; background: {CAPACITY_BAR_COLOR};",
            }
            {props.children}
        }
    }
}
