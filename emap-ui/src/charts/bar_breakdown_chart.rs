//! Bar breakdown chart: heading, hover tooltip, chart body and data sources.

use crate::charts::data_sources::{SourceIcon, SourceKind};
use crate::charts::elements::{BySource, CapacityLegend};
use crate::charts::{
    BarBreakdownEmissionsChart, BarElectricityBreakdownChart, BreakdownChartTooltip,
    DataSources, EmptyBarBreakdownChart,
};
use crate::components::{Accordion, HorizontalDivider};
use crate::hooks::{
    use_bar_breakdown_chart_data, use_chart_geometry, use_zone_data_sources, ChartGeometry,
};
use crate::js_bridge::{self, TrackEvent};
use crate::state::AppState;
use dioxus::prelude::*;
use emap_chart::constants::X_PADDING;
use emap_chart::tooltip::{
    clamp_below_header, get_offset_tooltip_position, tooltip_height, LayerKey, Point,
    TooltipState, Viewport,
};
use emap_chart::t;
use emap_chart::units::determine_unit;

#[derive(Props, Clone, PartialEq)]
pub struct BarBreakdownChartProps {
    #[props(default = false)]
    pub has_estimation_pill: bool,
}

/// Pointer input driving the tooltip overlay.
#[derive(Debug, Clone, PartialEq)]
enum TooltipEvent {
    Over(LayerKey, Point),
    /// Mouse left a row, or the mobile close button was pressed.
    Out,
}

fn next_tooltip_state(
    event: TooltipEvent,
    display_by_emissions: bool,
    geometry: ChartGeometry,
) -> Option<TooltipState> {
    match event {
        TooltipEvent::Over(layer_key, cursor) => Some(hover_tooltip_state(
            layer_key,
            cursor,
            display_by_emissions,
            geometry.is_bigger_than_mobile(),
            geometry.viewport,
        )),
        TooltipEvent::Out => None,
    }
}

/// Tooltip state for a row hovered at `cursor` (client coordinates).
fn hover_tooltip_state(
    layer_key: LayerKey,
    cursor: Point,
    display_by_emissions: bool,
    is_bigger_than_mobile: bool,
    viewport: Viewport,
) -> TooltipState {
    let position = get_offset_tooltip_position(
        cursor.x,
        cursor.y,
        tooltip_height(display_by_emissions),
        is_bigger_than_mobile,
        viewport,
    );
    TooltipState {
        selected_layer_key: layer_key,
        x: position.x,
        y: position.y,
    }
}

#[component]
pub fn BarBreakdownChart(props: BarBreakdownChartProps) -> Element {
    let state = use_context::<AppState>();
    let chart_data = use_bar_breakdown_chart_data();
    let data_sources = use_zone_data_sources(chart_data);
    let mut geometry = use_chart_geometry();
    let mut observer_width = use_signal(|| 0.0_f64);
    let mut tooltip_data: Signal<Option<TooltipState>> = use_signal(|| None);

    let data = chart_data();
    let locale = (state.locale)();
    let display_by_emissions = (state.display_by_emissions)();
    let mix_mode = (state.mix_mode)();
    let is_hourly = state.is_hourly();
    let width = observer_width() + X_PADDING;
    let measured = geometry();
    let header_height = measured.header_height;
    let is_bigger_than_mobile = measured.is_bigger_than_mobile();

    let on_resize = move |evt: Event<ResizeData>| {
        if let Ok(size) = evt.get_content_box_size() {
            observer_width.set(size.width);
        }
        geometry.set(ChartGeometry::measure());
    };

    if data.is_loading {
        return rsx! {};
    }

    let Some(current) = data.current_zone_detail.clone() else {
        return rsx! {
            div {
                style: "position: relative; width: 100%; font-size: 14px;",
                onresize: on_resize,
                BySource {
                    is_dimmed: true,
                    estimated_percentage: None,
                    unit: None,
                    estimation_method: None,
                }
                EmptyBarBreakdownChart {
                    height: data.height,
                    width,
                    over_lay_text: t(locale, "country-panel.noDataAtTimestamp"),
                }
            }
        };
    };

    let graph_unit = determine_unit(display_by_emissions, &current, mix_mode, is_hourly);
    let capacity_legend = format!(
        "{} ({})",
        t(locale, "country-panel.graph-legends.installed-capacity"),
        graph_unit
    );
    let sources = data_sources();
    let overlay = tooltip_data().map(|tooltip| {
        let top = clamp_below_header(tooltip.y, header_height);
        (tooltip.selected_layer_key, tooltip.x, top)
    });

    let on_mouse_over = move |(layer_key, cursor): (LayerKey, Point)| {
        let measured = ChartGeometry::measure();
        if *geometry.peek() != measured {
            geometry.set(measured);
        }
        tooltip_data.set(next_tooltip_state(
            TooltipEvent::Over(layer_key, cursor),
            display_by_emissions,
            measured,
        ));
    };
    let mut on_mouse_out = move |_: ()| {
        tooltip_data.set(next_tooltip_state(
            TooltipEvent::Out,
            display_by_emissions,
            *geometry.peek(),
        ));
    };

    rsx! {
        div {
            style: "margin-top: 16px; border-radius: 16px; border: 1px solid #E5E5E5; padding: 0 16px 8px 16px; font-size: 14px;",
            onresize: on_resize,
            BySource {
                has_estimation_pill: props.has_estimation_pill,
                estimated_percentage: current.estimated_percentage,
                unit: Some(graph_unit.clone()),
                estimation_method: current.estimation_method.clone(),
            }
            if !display_by_emissions {
                CapacityLegend { "{capacity_legend}" }
            }
            if let Some((layer_key, left, top)) = overlay {
                div {
                    style: "position: fixed; left: {left}px; top: {top}px; z-index: 50; pointer-events: none; display: flex; flex-direction: column; align-items: center; gap: 4px;",
                    BreakdownChartTooltip {
                        selected_layer_key: layer_key,
                        zone_detail: current.clone(),
                        has_estimation_pill: props.has_estimation_pill,
                    }
                    if !is_bigger_than_mobile {
                        button {
                            r#type: "button",
                            style: "pointer-events: auto; width: 32px; height: 32px; border-radius: 9999px; border: none; background: #FFFFFF; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.2);",
                            onclick: move |_| on_mouse_out(()),
                            "×"
                        }
                    }
                }
            }
            if display_by_emissions {
                BarBreakdownEmissionsChart {
                    production_data: data.production_data.clone(),
                    exchange_data: data.exchange_data.clone(),
                    width,
                    height: data.height,
                    on_row_mouse_over: on_mouse_over,
                    on_row_mouse_out: on_mouse_out,
                    is_mobile: false,
                }
            } else {
                BarElectricityBreakdownChart {
                    current_data: current.clone(),
                    production_data: data.production_data.clone(),
                    exchange_data: data.exchange_data.clone(),
                    width,
                    on_row_mouse_over: on_mouse_over,
                    on_row_mouse_out: on_mouse_out,
                    is_mobile: false,
                }
            }
            if sources.show_data_source_accordion() {
                HorizontalDivider {}
                Accordion {
                    title: t(locale, "data-sources.title"),
                    is_collapsed: state.data_sources_collapsed_bar_breakdown,
                    on_open: move |_| {
                        js_bridge::track_event(
                            TrackEvent::DataSourcesClicked,
                            serde_json::json!({ "chart": "bar-breakdown-chart" }),
                        );
                    },
                    div {
                        DataSources {
                            title: t(locale, "data-sources.capacity"),
                            icon: rsx! { SourceIcon { kind: SourceKind::Capacity } },
                            sources: sources.capacity_sources.clone(),
                        }
                        DataSources {
                            title: t(locale, "data-sources.power"),
                            icon: rsx! { SourceIcon { kind: SourceKind::Power } },
                            sources: sources.power_generation_sources.clone(),
                        }
                        DataSources {
                            title: t(locale, "data-sources.emission"),
                            icon: rsx! { SourceIcon { kind: SourceKind::Emission } },
                            sources: sources.emission_factor_sources.clone(),
                            emission_factor_sources_to_production_sources: sources
                                .emission_factor_sources_to_production_sources
                                .clone(),
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
    use emap_types::ElectricityMode;

    const DESKTOP: Viewport = Viewport {
        width: 1280.0,
        height: 800.0,
    };

    #[test]
    fn hover_places_tooltip_next_to_cursor() {
        let state = hover_tooltip_state(
            LayerKey::Mode(ElectricityMode::Wind),
            Point { x: 400.0, y: 500.0 },
            false,
            true,
            DESKTOP,
        );
        assert_eq!(state.selected_layer_key, LayerKey::Mode(ElectricityMode::Wind));
        assert_eq!(state.x, 410.0);
        // 500 - (360 - 40) = 180
        assert_eq!(state.y, 180.0);
    }

    #[test]
    fn tooltip_is_kept_below_header() {
        let state = hover_tooltip_state(
            LayerKey::Mode(ElectricityMode::Coal),
            Point { x: 400.0, y: 120.0 },
            true,
            true,
            DESKTOP,
        );
        // 120 - (190 - 40) is negative and floors at 0
        assert_eq!(state.y, 0.0);
        assert_eq!(clamp_below_header(state.y, 64.0), 64.0);
    }

    #[test]
    fn mouse_out_clears_tooltip() {
        let geometry = ChartGeometry {
            viewport: DESKTOP,
            header_height: 64.0,
        };
        let hovered = next_tooltip_state(
            TooltipEvent::Over(LayerKey::Mode(ElectricityMode::Wind), Point { x: 400.0, y: 500.0 }),
            false,
            geometry,
        );
        assert!(hovered.is_some());
        assert_eq!(next_tooltip_state(TooltipEvent::Out, false, geometry), None);
    }

    #[test]
    fn placement_follows_measured_viewport() {
        let hover = TooltipEvent::Over(
            LayerKey::Mode(ElectricityMode::Solar),
            Point { x: 100.0, y: 300.0 },
        );
        let desktop = ChartGeometry {
            viewport: DESKTOP,
            header_height: 0.0,
        };
        let narrowed = ChartGeometry {
            viewport: Viewport {
                width: 375.0,
                height: 700.0,
            },
            header_height: 0.0,
        };
        assert!(desktop.is_bigger_than_mobile());
        assert!(!narrowed.is_bigger_than_mobile());
        let wide = next_tooltip_state(hover.clone(), false, desktop).unwrap();
        assert_eq!(wide.x, 110.0);
        let narrow = next_tooltip_state(hover, false, narrowed).unwrap();
        assert_eq!((narrow.x, narrow.y), (0.0, 0.0));
    }

    #[test]
    fn mobile_tooltip_is_anchored() {
        let state = hover_tooltip_state(
            LayerKey::Mode(ElectricityMode::Solar),
            Point { x: 100.0, y: 300.0 },
            false,
            false,
            Viewport {
                width: 375.0,
                height: 700.0,
            },
        );
        assert_eq!((state.x, state.y), (0.0, 0.0));
    }
}
