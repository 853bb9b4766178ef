//! tCO₂eq/h rows for production modes and exchanges.

use crate::charts::elements::{Axis, HorizontalBar, ProductionSourceLegend, Row};
use crate::state::AppState;
use dioxus::prelude::*;
use emap_chart::constants::{AXIS_LEGEND_PADDING, EMISSIONS_COLOR, EXPORT_COLOR, IMPORT_COLOR};
use emap_chart::exchange::ExchangeDataType;
use emap_chart::layout::{bar_scale, emissions_domain, get_data_block_positions};
use emap_chart::production::ProductionDataType;
use emap_chart::tooltip::{LayerKey, Point};
use emap_chart::t;
use emap_chart::units::scale_co2;

#[derive(Props, Clone, PartialEq)]
pub struct BarBreakdownEmissionsChartProps {
    pub production_data: Vec<ProductionDataType>,
    pub exchange_data: Vec<ExchangeDataType>,
    pub width: f64,
    pub height: f64,
    pub on_row_mouse_over: EventHandler<(LayerKey, Point)>,
    pub on_row_mouse_out: EventHandler<()>,
    #[props(default = false)]
    pub is_mobile: bool,
}

#[component]
pub fn BarBreakdownEmissionsChart(props: BarBreakdownEmissionsChartProps) -> Element {
    let state = use_context::<AppState>();
    let locale = (state.locale)();
    let positions = get_data_block_positions(props.production_data.len(), props.exchange_data.len());
    let domain = emissions_domain(&props.production_data, &props.exchange_data);
    let co2_scale = bar_scale(domain, props.width);
    let formatting_factor = scale_co2(domain.0.abs().max(domain.1.abs())).formatting_factor;
    let svg_height = props.height + AXIS_LEGEND_PADDING;
    let exchange_rows: Vec<(LayerKey, &'static str, ExchangeDataType)> = props
        .exchange_data
        .iter()
        .map(|row| {
            let color = if row.is_export() { EXPORT_COLOR } else { IMPORT_COLOR };
            (LayerKey::Zone(row.zone_key.clone()), color, row.clone())
        })
        .collect();
    let on_row_mouse_over = props.on_row_mouse_over;
    let on_row_mouse_out = props.on_row_mouse_out;

    rsx! {
        svg {
            width: "100%",
            height: "{svg_height}",
            style: "overflow: visible;",
            Axis {
                scale: co2_scale,
                height: props.height,
                formatting_factor,
            }
            g {
                transform: "translate(0, {positions.production_y})",
                for (index, row) in props.production_data.clone().into_iter().enumerate() {
                    Row {
                        key: "{row.mode}",
                        index,
                        label: t(locale, row.mode.as_str()),
                        width: props.width,
                        scale: co2_scale,
                        value: row.g_co2eq,
                        is_mobile: props.is_mobile,
                        on_mouse_over: move |point: Point| {
                            on_row_mouse_over.call((LayerKey::Mode(row.mode), point))
                        },
                        on_mouse_out: move |_| on_row_mouse_out.call(()),
                        legend: rsx! { ProductionSourceLegend { electricity_type: row.mode } },
                        HorizontalBar {
                            class: "production".to_string(),
                            fill: EMISSIONS_COLOR.to_string(),
                            range: (Some(0.0), row.g_co2eq),
                            scale: co2_scale,
                        }
                    }
                }
            }
            g {
                transform: "translate(0, {positions.exchange_y})",
                for (index, (layer_key, color, row)) in exchange_rows.into_iter().enumerate() {
                    Row {
                        key: "{row.zone_key}",
                        index,
                        label: row.zone_key.to_string(),
                        width: props.width,
                        scale: co2_scale,
                        value: row.g_co2eq,
                        is_mobile: props.is_mobile,
                        on_mouse_over: move |point: Point| {
                            on_row_mouse_over.call((layer_key.clone(), point))
                        },
                        on_mouse_out: move |_| on_row_mouse_out.call(()),
                        HorizontalBar {
                            class: "exchange".to_string(),
                            fill: color.to_string(),
                            range: (Some(0.0), row.g_co2eq),
                            scale: co2_scale,
                        }
                    }
                }
            }
        }
    }
}
