//! Coloured square identifying a production mode.

use dioxus::prelude::*;
use emap_chart::constants::{mode_color, ROW_HEIGHT};
use emap_types::ElectricityMode;

#[derive(Props, Clone, PartialEq)]
pub struct ProductionSourceLegendProps {
    pub electricity_type: ElectricityMode,
    #[props(default = 11.0)]
    pub size: f64,
}

#[component]
pub fn ProductionSourceLegend(props: ProductionSourceLegendProps) -> Element {
    let y = (ROW_HEIGHT - props.size) / 2.0;
    let color = mode_color(props.electricity_type);
    let title = props.electricity_type.as_str();
    rsx! {
        rect {
            x: "0",
            y: "{y}",
            width: "{props.size}",
            height: "{props.size}",
            rx: "2",
            fill: "{color}",
            title { "{title}" }
        }
    }
}
