//! SVG building blocks shared by the breakdown charts.

mod axis;
mod by_source;
mod capacity_legend;
mod horizontal_bar;
mod production_source_legend;
mod row;

pub use axis::Axis;
pub use by_source::{estimation_pill_label, BySource};
pub use capacity_legend::CapacityLegend;
pub use horizontal_bar::{bar_extent, HorizontalBar};
pub use production_source_legend::ProductionSourceLegend;
pub use row::Row;
