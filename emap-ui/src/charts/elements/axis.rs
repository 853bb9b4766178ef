//! Tick labels and grid lines above the chart rows.

use dioxus::prelude::*;
use emap_chart::constants::{AXIS_LEGEND_PADDING, LABEL_MAX_WIDTH, PADDING_X, SCALE_TICKS, X_AXIS_HEIGHT};
use emap_chart::units::format_tick;
use emap_chart::LinearScale;

#[derive(Props, Clone, PartialEq)]
pub struct AxisProps {
    pub scale: LinearScale,
    /// Height of the chart area the grid lines span
    pub height: f64,
    /// Divisor turning domain values into the displayed unit
    pub formatting_factor: f64,
    /// Texts under the left and right ends of the axis
    pub axis_legend_text: Option<(String, String)>,
}

#[component]
pub fn Axis(props: AxisProps) -> Element {
    let ticks: Vec<(f64, String)> = props
        .scale
        .ticks(SCALE_TICKS)
        .into_iter()
        .map(|tick| (props.scale.apply(tick), format_tick(tick, props.formatting_factor)))
        .collect();
    let (range_start, range_end) = props.scale.range();
    let grid_height = (props.height - X_AXIS_HEIGHT).max(0.0);
    let legend_y = grid_height + AXIS_LEGEND_PADDING - 2.0;
    let offset_x = LABEL_MAX_WIDTH + PADDING_X;

    rsx! {
        g {
            fill: "none",
            font_size: "10",
            font_family: "sans-serif",
            text_anchor: "middle",
            transform: "translate({offset_x}, {X_AXIS_HEIGHT})",
            if let Some((left, right)) = props.axis_legend_text {
                text {
                    x: "{range_start}",
                    y: "{legend_y}",
                    fill: "#737373",
                    text_anchor: "start",
                    "{left}"
                }
                text {
                    x: "{range_end}",
                    y: "{legend_y}",
                    fill: "#737373",
                    text_anchor: "end",
                    "{right}"
                }
            }
            for (x, label) in ticks {
                g {
                    key: "{x}",
                    transform: "translate({x}, 0)",
                    text {
                        fill: "#737373",
                        y: "-3",
                        font_size: "8",
                        "{label}"
                    }
                    line {
                        stroke: "rgba(115, 115, 115, 0.3)",
                        y2: "{grid_height}",
                    }
                }
            }
        }
    }
}
