//! Production and storage rows on the shared power scale.

use crate::charts::elements::{Axis, HorizontalBar, ProductionSourceLegend, Row};
use crate::state::AppState;
use dioxus::prelude::*;
use emap_chart::constants::{mode_color, AXIS_LEGEND_PADDING, CAPACITY_BAR_COLOR};
use emap_chart::production::{get_electricity_production_value, ProductionDataType};
use emap_chart::tooltip::{LayerKey, Point};
use emap_chart::{t, LinearScale};
use emap_types::ZoneDetail;

#[derive(Props, Clone, PartialEq)]
pub struct BarElectricityProductionChartProps {
    pub power_scale: LinearScale,
    pub height: f64,
    /// Divisor applied to tick values, from the chart's power unit
    pub formatting_factor: f64,
    pub production_y: f64,
    pub production_data: Vec<ProductionDataType>,
    pub current_data: ZoneDetail,
    pub width: f64,
    pub on_row_mouse_over: EventHandler<(LayerKey, Point)>,
    pub on_row_mouse_out: EventHandler<()>,
    #[props(default = false)]
    pub is_mobile: bool,
}

/// Grey capacity range of a row: storage can charge and discharge at full capacity.
pub(crate) fn capacity_range(row: &ProductionDataType) -> (Option<f64>, Option<f64>) {
    if row.is_storage {
        (row.capacity.map(|capacity| -capacity), row.capacity)
    } else {
        (Some(0.0), row.capacity)
    }
}

#[component]
pub fn BarElectricityProductionChart(props: BarElectricityProductionChartProps) -> Element {
    let state = use_context::<AppState>();
    let locale = (state.locale)();
    let svg_height = props.height + AXIS_LEGEND_PADDING;
    let legend = (
        t(locale, "country-panel.graph-legends.stored"),
        t(locale, "country-panel.graph-legends.produced"),
    );
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
                transform: "translate(0, {props.production_y})",
                for (index, row) in props.production_data.clone().into_iter().enumerate() {
                    Row {
                        key: "{row.mode}",
                        index,
                        label: t(locale, row.mode.as_str()),
                        width: props.width,
                        scale: props.power_scale,
                        value: get_electricity_production_value(&row),
                        is_mobile: props.is_mobile,
                        on_mouse_over: move |point: Point| {
                            on_row_mouse_over.call((LayerKey::Mode(row.mode), point))
                        },
                        on_mouse_out: move |_| on_row_mouse_out.call(()),
                        legend: rsx! { ProductionSourceLegend { electricity_type: row.mode } },
                        HorizontalBar {
                            class: "capacity".to_string(),
                            fill: CAPACITY_BAR_COLOR.to_string(),
                            range: capacity_range(&row),
                            scale: props.power_scale,
                        }
                        HorizontalBar {
                            class: "production".to_string(),
                            fill: mode_color(row.mode).to_string(),
                            range: (Some(0.0), get_electricity_production_value(&row)),
                            scale: props.power_scale,
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emap_chart::production::get_production_data;
    use emap_types::{ElectricityMode, ZoneDetails, SAMPLE_ZONE_DETAILS};

    #[test]
    fn storage_capacity_spans_both_directions() {
        let details = ZoneDetails::from_json(SAMPLE_ZONE_DETAILS).unwrap();
        let state = details.zone_states.values().next().unwrap();
        let rows = get_production_data(state);
        let hydro_storage = rows
            .iter()
            .find(|row| row.mode == ElectricityMode::HydroStorage)
            .unwrap();
        assert_eq!(capacity_range(hydro_storage), (Some(-9830.0), Some(9830.0)));
        let solar = rows.iter().find(|row| row.mode == ElectricityMode::Solar).unwrap();
        assert_eq!(capacity_range(solar), (Some(0.0), Some(82_600.0)));
    }
}
