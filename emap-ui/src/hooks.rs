//! Hooks deriving chart inputs from `AppState`.

use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use emap_chart::sources::ZoneDataSources;
use emap_chart::tooltip::{is_bigger_than_mobile, Viewport};
use emap_chart::BarBreakdownChartData;

/// Rows, current state and height of the bar breakdown chart.
///
/// Recomputed whenever the zone details, the selected datetime, the mix mode
/// or the loading flag change.
pub fn use_bar_breakdown_chart_data() -> Memo<BarBreakdownChartData> {
    let state = use_context::<AppState>();
    use_memo(move || {
        let zone_details = state.zone_details.read();
        BarBreakdownChartData::derive(
            zone_details.as_ref(),
            (state.selected_datetime)(),
            (state.mix_mode)(),
            (state.loading)(),
        )
    })
}

/// Capacity, generation and emission-factor sources for the shown state.
pub fn use_zone_data_sources(chart_data: Memo<BarBreakdownChartData>) -> Memo<ZoneDataSources> {
    use_memo(move || {
        let data = chart_data.read();
        match data.zone_details.as_ref() {
            Some(zone_details) => {
                ZoneDataSources::derive(zone_details, data.current_zone_detail.as_ref())
            }
            None => ZoneDataSources::default(),
        }
    })
}

/// Window size and header height the tooltip is placed against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartGeometry {
    pub viewport: Viewport,
    pub header_height: f64,
}

impl ChartGeometry {
    /// Read the current geometry from the DOM.
    pub fn measure() -> Self {
        Self {
            viewport: js_bridge::viewport(),
            header_height: js_bridge::header_height(),
        }
    }

    /// Whether the window is at least the `sm` breakpoint wide.
    pub fn is_bigger_than_mobile(&self) -> bool {
        is_bigger_than_mobile(self.viewport.width)
    }
}

/// Geometry measured on mount. Owners refresh it with `ChartGeometry::measure`
/// on resize and hover.
pub fn use_chart_geometry() -> Signal<ChartGeometry> {
    use_signal(ChartGeometry::measure)
}
