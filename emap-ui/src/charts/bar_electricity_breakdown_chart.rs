//! Production and exchange charts sharing one power scale.

use crate::charts::{BarElectricityExchangeChart, BarElectricityProductionChart};
use crate::state::AppState;
use dioxus::prelude::*;
use emap_chart::exchange::ExchangeDataType;
use emap_chart::layout::{bar_scale, get_data_block_positions, power_domain};
use emap_chart::production::ProductionDataType;
use emap_chart::tooltip::{LayerKey, Point};
use emap_chart::units::{max_power_value, scale_power};
use emap_types::ZoneDetail;

#[derive(Props, Clone, PartialEq)]
pub struct BarElectricityBreakdownChartProps {
    pub current_data: ZoneDetail,
    pub production_data: Vec<ProductionDataType>,
    pub exchange_data: Vec<ExchangeDataType>,
    pub width: f64,
    pub on_row_mouse_over: EventHandler<(LayerKey, Point)>,
    pub on_row_mouse_out: EventHandler<()>,
    #[props(default = false)]
    pub is_mobile: bool,
}

#[component]
pub fn BarElectricityBreakdownChart(props: BarElectricityBreakdownChartProps) -> Element {
    let state = use_context::<AppState>();
    let mix_mode = (state.mix_mode)();
    let positions = get_data_block_positions(props.production_data.len(), props.exchange_data.len());
    let power_scale = bar_scale(
        power_domain(&props.production_data, &props.exchange_data),
        props.width,
    );
    let formatting_factor =
        scale_power(max_power_value(&props.current_data, mix_mode), state.is_hourly())
            .formatting_factor;
    let production_height = positions.production_y + positions.production_height;
    let exchange_height = positions.production_y + positions.exchange_height;

    rsx! {
        div {
            BarElectricityProductionChart {
                power_scale,
                height: production_height,
                formatting_factor,
                production_y: positions.production_y,
                production_data: props.production_data.clone(),
                current_data: props.current_data.clone(),
                width: props.width,
                on_row_mouse_over: props.on_row_mouse_over,
                on_row_mouse_out: props.on_row_mouse_out,
                is_mobile: props.is_mobile,
            }
            if !props.exchange_data.is_empty() {
                BarElectricityExchangeChart {
                    power_scale,
                    height: exchange_height,
                    formatting_factor,
                    exchange_data: props.exchange_data.clone(),
                    width: props.width,
                    on_row_mouse_over: props.on_row_mouse_over,
                    on_row_mouse_out: props.on_row_mouse_out,
                    is_mobile: props.is_mobile,
                }
            }
        }
    }
}
