//! Import and export rows on the shared power scale.

use crate::charts::elements::{Axis, HorizontalBar, Row};
use crate::state::AppState;
use dioxus::prelude::*;
use emap_chart::constants::{
    AXIS_LEGEND_PADDING, CAPACITY_BAR_COLOR, EXPORT_COLOR, IMPORT_COLOR, PADDING_Y, ROW_HEIGHT,
    X_AXIS_HEIGHT,
};
use emap_chart::exchange::ExchangeDataType;
use emap_chart::tooltip::{LayerKey, Point};
use emap_chart::{t, LinearScale};

#[derive(Props, Clone, PartialEq)]
pub struct BarElectricityExchangeChartProps {
    pub power_scale: LinearScale,
    pub height: f64,
    pub formatting_factor: f64,
    pub exchange_data: Vec<ExchangeDataType>,
    pub width: f64,
    pub on_row_mouse_over: EventHandler<(LayerKey, Point)>,
    pub on_row_mouse_out: EventHandler<()>,
    #[props(default = false)]
    pub is_mobile: bool,
}

pub(crate) fn flow_color(row: &ExchangeDataType) -> &'static str {
    if row.is_export() {
        EXPORT_COLOR
    } else {
        IMPORT_COLOR
    }
}

#[component]
pub fn BarElectricityExchangeChart(props: BarElectricityExchangeChartProps) -> Element {
    let state = use_context::<AppState>();
    let locale = (state.locale)();
    let svg_height = props.height + AXIS_LEGEND_PADDING;
    let rows_y = X_AXIS_HEIGHT + PADDING_Y;
    let legend = (
        t(locale, "country-panel.graph-legends.exported"),
        t(locale, "country-panel.graph-legends.imported"),
    );
    let legend_height = ROW_HEIGHT - 2.0;
    let rows: Vec<(LayerKey, &'static str, ExchangeDataType)> = props
        .exchange_data
        .iter()
        .map(|row| (LayerKey::Zone(row.zone_key.clone()), flow_color(row), row.clone()))
        .collect();
    let on_row_mouse_over = props.on_row_mouse_over;
    let on_row_mouse_out = props.on_row_mouse_out;

    rsx! {
        svg {
            width: "100%",
            height: "{svg_height}",
            style: "overflow: visible;",
            Axis {
                scale: props.power_scale,
                height: props.height,
                formatting_factor: props.formatting_factor,
                axis_legend_text: legend,
            }
            g {
                transform: "translate(0, {rows_y})",
                for (index, (layer_key, color, row)) in rows.into_iter().enumerate() {
                    Row {
                        key: "{row.zone_key}",
                        index,
                        label: row.zone_key.to_string(),
                        width: props.width,
                        scale: props.power_scale,
                        value: row.exchange,
                        is_mobile: props.is_mobile,
                        on_mouse_over: move |point: Point| {
                            on_row_mouse_over.call((layer_key.clone(), point))
                        },
                        on_mouse_out: move |_| on_row_mouse_out.call(()),
                        legend: rsx! {
                            rect {
                                y: "1",
                                width: "11",
                                height: "{legend_height}",
                                rx: "2",
                                fill: "{color}",
                            }
                        },
                        HorizontalBar {
                            class: "capacity".to_string(),
                            fill: CAPACITY_BAR_COLOR.to_string(),
                            range: (
                                Some(row.exchange_capacity_range.0),
                                Some(row.exchange_capacity_range.1),
                            ),
                            scale: props.power_scale,
                        }
                        HorizontalBar {
                            class: "exchange".to_string(),
                            fill: color.to_string(),
                            range: (Some(0.0), row.exchange),
                            scale: props.power_scale,
                        }
                    }
                }
            }
        }
    }
}
