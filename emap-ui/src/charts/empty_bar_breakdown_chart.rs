//! Placeholder rows shown when there is no data at the selected time.

use dioxus::prelude::*;
use emap_chart::constants::{
    CAPACITY_BAR_COLOR, EMPTY_CHART_ROWS, LABEL_MAX_WIDTH, PADDING_X, PADDING_Y, ROW_HEIGHT,
    X_AXIS_HEIGHT,
};
use emap_chart::layout::row_y;

#[derive(Props, Clone, PartialEq)]
pub struct EmptyBarBreakdownChartProps {
    pub height: f64,
    pub width: f64,
    pub over_lay_text: Option<String>,
}

/// Widths of the placeholder bars, as fractions of the bar area.
const PLACEHOLDER_WIDTHS: [f64; 4] = [0.6, 0.35, 0.8, 0.5];

#[component]
pub fn EmptyBarBreakdownChart(props: EmptyBarBreakdownChartProps) -> Element {
    let bar_area = (props.width - LABEL_MAX_WIDTH - PADDING_X).max(0.0);
    let rows: Vec<(f64, f64)> = (0..EMPTY_CHART_ROWS)
        .map(|index| {
            let fraction = PLACEHOLDER_WIDTHS[index % PLACEHOLDER_WIDTHS.len()];
            (row_y(index), bar_area * fraction)
        })
        .collect();
    let rows_y = X_AXIS_HEIGHT + PADDING_Y;
    let label_width = LABEL_MAX_WIDTH - 2.0 * PADDING_X;
    let bars_x = LABEL_MAX_WIDTH + PADDING_X;

    rsx! {
        div {
            style: "position: relative;",
            svg {
                width: "100%",
                height: "{props.height}",
                style: "opacity: 0.4;",
                g {
                    transform: "translate(0, {rows_y})",
                    for (index, (y, bar_width)) in rows.into_iter().enumerate() {
                        g {
                            key: "{index}",
                            transform: "translate(0, {y})",
                            rect {
                                x: "{PADDING_X}",
                                width: "{label_width}",
                                height: "{ROW_HEIGHT}",
                                rx: "2",
                                fill: "{CAPACITY_BAR_COLOR}",
                            }
                            rect {
                                x: "{bars_x}",
                                width: "{bar_width}",
                                height: "{ROW_HEIGHT}",
                                fill: "{CAPACITY_BAR_COLOR}",
                            }
                        }
                    }
                }
            }
            if let Some(text) = props.over_lay_text {
                div {
                    style: "position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; text-align: center; padding: 0 24px; font-weight: 600;",
                    "{text}"
                }
            }
        }
    }
}
