//! Vertical block positions and horizontal domains of the breakdown charts.

use crate::constants::{LABEL_MAX_WIDTH, PADDING_X, PADDING_Y, ROW_HEIGHT, X_AXIS_HEIGHT};
use crate::exchange::ExchangeDataType;
use crate::production::{get_electricity_production_value, ProductionDataType};
use crate::scale::LinearScale;

/// Where the production and exchange blocks start inside the chart SVG.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataBlockPositions {
    pub production_height: f64,
    pub production_y: f64,
    pub exchange_height: f64,
    pub exchange_y: f64,
}

pub fn get_data_block_positions(production_len: usize, exchange_len: usize) -> DataBlockPositions {
    let production_height = production_len as f64 * (ROW_HEIGHT + PADDING_Y);
    let production_y = X_AXIS_HEIGHT + PADDING_Y;
    let exchange_height = exchange_len as f64 * (ROW_HEIGHT + PADDING_Y);
    let exchange_y = production_y + production_height + ROW_HEIGHT + PADDING_Y;
    DataBlockPositions {
        production_height,
        production_y,
        exchange_height,
        exchange_y,
    }
}

/// Total height of the rows, excluding the axis legend below them.
pub fn chart_height(positions: &DataBlockPositions, exchange_len: usize) -> f64 {
    if exchange_len == 0 {
        positions.production_y + positions.production_height
    } else {
        positions.exchange_y + positions.exchange_height
    }
}

/// Offset of row `index` from the top of its block.
pub fn row_y(index: usize) -> f64 {
    index as f64 * (ROW_HEIGHT + PADDING_Y)
}

/// MW domain covering capacities, production, storage and exchanges.
///
/// Always includes zero so bars have a common origin.
pub fn power_domain(production: &[ProductionDataType], exchanges: &[ExchangeDataType]) -> (f64, f64) {
    let mut min: f64 = 0.0;
    let mut max: f64 = 0.0;
    for row in production {
        let capacity = row.capacity.unwrap_or(0.0);
        if row.is_storage {
            min = min.min(-capacity);
        }
        max = max.max(capacity);
        if let Some(value) = get_electricity_production_value(row) {
            min = min.min(value);
            max = max.max(value);
        }
    }
    for row in exchanges {
        let (low, high) = row.exchange_capacity_range;
        min = min.min(low);
        max = max.max(high);
        if let Some(value) = row.exchange {
            min = min.min(value);
            max = max.max(value);
        }
    }
    (min, max)
}

/// tCO₂eq/h domain: production and imports to the right, exports to the left.
pub fn emissions_domain(
    production: &[ProductionDataType],
    exchanges: &[ExchangeDataType],
) -> (f64, f64) {
    let mut min: f64 = 0.0;
    let mut max: f64 = 0.0;
    let values = production
        .iter()
        .filter_map(|row| row.g_co2eq)
        .chain(exchanges.iter().filter_map(|row| row.g_co2eq));
    for value in values {
        min = min.min(value);
        max = max.max(value);
    }
    (min, max)
}

/// Scale placing `domain` across the bar area of a chart `width` pixels wide.
pub fn bar_scale(domain: (f64, f64), width: f64) -> LinearScale {
    let bar_width = (width - LABEL_MAX_WIDTH - PADDING_X).max(0.0);
    LinearScale::new(domain, (0.0, bar_width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exchange::{exchange_keys, get_exchange_data};
    use crate::mix::MixMode;
    use crate::production::get_production_data;
    use emap_types::{ZoneDetails, SAMPLE_ZONE_DETAILS};

    #[test]
    fn block_positions_follow_row_constants() {
        let positions = get_data_block_positions(12, 7);
        assert_eq!(positions.production_y, 22.0);
        assert_eq!(positions.production_height, 240.0);
        assert_eq!(positions.exchange_y, 22.0 + 240.0 + 20.0);
        assert_eq!(positions.exchange_height, 140.0);
        assert_eq!(chart_height(&positions, 7), 282.0 + 140.0);
        assert_eq!(chart_height(&get_data_block_positions(12, 0), 0), 262.0);
    }

    #[test]
    fn rows_are_evenly_spaced() {
        assert_eq!(row_y(0), 0.0);
        assert_eq!(row_y(3), 60.0);
    }

    #[test]
    fn power_domain_spans_storage_and_exchanges() {
        let details = ZoneDetails::from_json(SAMPLE_ZONE_DETAILS).unwrap();
        let state = details.zone_states.values().next().unwrap();
        let production = get_production_data(state);

        let production_only = power_domain(&production, &[]);
        assert_eq!(production_only, (-9830.0, 82_600.0));

        let keys = exchange_keys(&details);
        let exchanges = get_exchange_data(state, &keys, MixMode::Consumption);
        assert_eq!(power_domain(&production, &exchanges), (-9830.0, 82_600.0));
    }

    #[test]
    fn emissions_domain_includes_exports() {
        let details = ZoneDetails::from_json(SAMPLE_ZONE_DETAILS).unwrap();
        let state = details.zone_states.values().next().unwrap();
        let production = get_production_data(state);
        let keys = exchange_keys(&details);
        let exchanges = get_exchange_data(state, &keys, MixMode::Consumption);
        let (min, max) = emissions_domain(&production, &exchanges);
        assert!(min < 0.0);
        assert!((max - 12_660.24).abs() < 1e-6);
    }

    #[test]
    fn empty_rows_give_zero_domain() {
        assert_eq!(power_domain(&[], &[]), (0.0, 0.0));
    }

    #[test]
    fn bar_scale_leaves_room_for_labels() {
        let scale = bar_scale((0.0, 100.0), 407.0);
        assert_eq!(scale.range(), (0.0, 300.0));
        assert_eq!(bar_scale((0.0, 1.0), 50.0).range(), (0.0, 0.0));
    }
}
