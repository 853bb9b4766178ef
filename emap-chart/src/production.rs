//! Production rows of the bar breakdown charts.

use emap_types::{ElectricityMode, ZoneDetail, MODE_ORDER};
use serde::Serialize;

/// One generation or storage mode as drawn in a chart row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductionDataType {
    pub mode: ElectricityMode,
    /// MW produced; always `None` for storage modes.
    pub production: Option<f64>,
    pub capacity: Option<f64>,
    /// MW charged (positive) or discharged (negative); storage modes only.
    pub storage: Option<f64>,
    pub is_storage: bool,
    /// gCO₂eq/kWh of this mode.
    pub co2_intensity: Option<f64>,
    /// tCO₂eq/h emitted by this mode.
    pub g_co2eq: Option<f64>,
}

/// Build one row per mode, in display order.
pub fn get_production_data(zone_detail: &ZoneDetail) -> Vec<ProductionDataType> {
    MODE_ORDER
        .iter()
        .map(|&mode| {
            let is_storage = mode.is_storage();
            let production = zone_detail.production_for(mode);
            let storage = zone_detail.storage_for(mode);
            let capacity = zone_detail.capacity_for(mode);
            let co2_intensity = zone_detail.co2_intensity_for(mode);
            let mut row = ProductionDataType {
                mode,
                production,
                capacity,
                storage,
                is_storage,
                co2_intensity,
                g_co2eq: None,
            };
            row.g_co2eq = get_production_co2_value(&row);
            row
        })
        .collect()
}

/// Signed value drawn for a production row.
///
/// Storage shows `-storage`, so charging is drawn to the left of zero and
/// discharging to the right. An unknown value on a mode with zero
/// installed capacity is treated as zero.
pub fn get_electricity_production_value(row: &ProductionDataType) -> Option<f64> {
    let value = if row.is_storage {
        row.storage.map(|storage| -storage)
    } else {
        row.production
    };
    match value {
        Some(value) if value.is_finite() => Some(value),
        _ if row.capacity == Some(0.0) => Some(0.0),
        _ => None,
    }
}

/// Emissions in tCO₂eq/h of a row.
///
/// Charging storage does not emit, so it counts as zero.
pub fn get_production_co2_value(row: &ProductionDataType) -> Option<f64> {
    let intensity = row.co2_intensity?;
    let value = get_electricity_production_value(row)?;
    let value = if row.is_storage { value.max(0.0) } else { value };
    Some(value * intensity / 1000.0)
}
