//! Bar breakdown charts rendered as inline SVG.

mod bar_breakdown_chart;
mod bar_breakdown_emissions_chart;
mod bar_electricity_breakdown_chart;
mod bar_electricity_exchange_chart;
mod bar_electricity_production_chart;
mod breakdown_chart_tooltip;
mod data_sources;
pub mod elements;
mod empty_bar_breakdown_chart;

pub use bar_breakdown_chart::BarBreakdownChart;
pub use bar_breakdown_emissions_chart::BarBreakdownEmissionsChart;
pub use bar_electricity_breakdown_chart::BarElectricityBreakdownChart;
pub use bar_electricity_exchange_chart::BarElectricityExchangeChart;
pub use bar_electricity_production_chart::BarElectricityProductionChart;
pub use breakdown_chart_tooltip::BreakdownChartTooltip;
pub use data_sources::DataSources;
pub use empty_bar_breakdown_chart::EmptyBarBreakdownChart;
