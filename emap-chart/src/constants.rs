//! Layout constants and colors shared by every bar breakdown chart.

use emap_types::ElectricityMode;

/// Width reserved on the left of each row for its label and legend icon.
pub const LABEL_MAX_WIDTH: f64 = 102.0;
pub const ROW_HEIGHT: f64 = 13.0;
pub const PADDING_X: f64 = 5.0;
pub const PADDING_Y: f64 = 7.0;
pub const X_AXIS_HEIGHT: f64 = 15.0;
/// Baseline adjustment so row labels sit centred on their bar.
pub const TEXT_ADJUST_Y: f64 = 11.0;
pub const SCALE_TICKS: usize = 4;
/// Room below the axis for the stored/produced legend text.
pub const AXIS_LEGEND_PADDING: f64 = 16.0;
/// Added to the observed container width of the breakdown chart.
pub const X_PADDING: f64 = 20.0;

pub const DEFAULT_ICON_SIZE: u32 = 16;

pub const EMISSIONS_TOOLTIP_HEIGHT: f64 = 190.0;
pub const POWER_TOOLTIP_HEIGHT: f64 = 360.0;
pub const TOOLTIP_WIDTH: f64 = 320.0;

/// Minimum viewport width of the `sm` breakpoint.
pub const SM_BREAKPOINT: f64 = 640.0;

/// Number of placeholder rows drawn when there is no data at a timestamp.
pub const EMPTY_CHART_ROWS: usize = 12;

pub const CAPACITY_BAR_COLOR: &str = "rgba(0, 0, 0, 0.1)";
pub const EXPORT_COLOR: &str = "#94A3B8";
pub const IMPORT_COLOR: &str = "#475569";
pub const EMISSIONS_COLOR: &str = "#A1A1AA";

/// Fill color of a mode's production bar and legend icon.
pub fn mode_color(mode: ElectricityMode) -> &'static str {
    match mode {
        ElectricityMode::Nuclear => "#AEB800",
        ElectricityMode::Geothermal => "#A73C2B",
        ElectricityMode::Biomass => "#166A57",
        ElectricityMode::Coal => "#545454",
        ElectricityMode::Wind => "#69D6F8",
        ElectricityMode::Solar => "#FFC700",
        ElectricityMode::Hydro => "#1878EA",
        ElectricityMode::HydroStorage => "#2B3CD8",
        ElectricityMode::BatteryStorage => "#B76DD8",
        ElectricityMode::Gas => "#AAA189",
        ElectricityMode::Oil => "#584745",
        ElectricityMode::Unknown => "#ACACAC",
    }
}
