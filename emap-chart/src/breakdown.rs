//! Everything the bar breakdown chart needs for the selected timestamp.

use crate::constants::EMPTY_CHART_ROWS;
use crate::exchange::{exchange_keys, get_exchange_data, ExchangeDataType};
use crate::layout::{chart_height, get_data_block_positions};
use crate::mix::MixMode;
use crate::production::{get_production_data, ProductionDataType};
use chrono::{DateTime, Utc};
use emap_types::{ZoneDetail, ZoneDetails};

#[derive(Debug, Clone, PartialEq)]
pub struct BarBreakdownChartData {
    /// The state shown, `None` when there is no usable data at the timestamp.
    pub current_zone_detail: Option<ZoneDetail>,
    pub zone_details: Option<ZoneDetails>,
    pub production_data: Vec<ProductionDataType>,
    pub exchange_data: Vec<ExchangeDataType>,
    pub is_loading: bool,
    pub height: f64,
}

impl BarBreakdownChartData {
    /// Derive chart data from the loaded zone details.
    ///
    /// Without a selected datetime the latest state is used. States flagged
    /// invalid count as missing.
    pub fn derive(
        zone_details: Option<&ZoneDetails>,
        selected_datetime: Option<DateTime<Utc>>,
        mix_mode: MixMode,
        is_loading: bool,
    ) -> Self {
        let current_zone_detail = zone_details
            .and_then(|details| match selected_datetime {
                Some(datetime) => details.state_at(&datetime),
                None => details.latest(),
            })
            .filter(|state| state.is_valid)
            .cloned();

        let (production_data, exchange_data) = match (&current_zone_detail, zone_details) {
            (Some(state), Some(details)) => {
                let keys = exchange_keys(details);
                (
                    get_production_data(state),
                    get_exchange_data(state, &keys, mix_mode),
                )
            }
            _ => (Vec::new(), Vec::new()),
        };

        let height = if current_zone_detail.is_some() {
            let positions = get_data_block_positions(production_data.len(), exchange_data.len());
            chart_height(&positions, exchange_data.len())
        } else {
            chart_height(&get_data_block_positions(EMPTY_CHART_ROWS, 0), 0)
        };

        if current_zone_detail.is_none() && !is_loading {
            log::info!("[EMAP] no usable zone state at {:?}", selected_datetime);
        }

        Self {
            current_zone_detail,
            zone_details: zone_details.cloned(),
            production_data,
            exchange_data,
            is_loading,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emap_types::SAMPLE_ZONE_DETAILS;

    fn sample() -> ZoneDetails {
        ZoneDetails::from_json(SAMPLE_ZONE_DETAILS).unwrap()
    }

    #[test]
    fn selected_state_drives_rows() {
        let details = sample();
        let datetime = details.datetimes()[0];
        let data =
            BarBreakdownChartData::derive(Some(&details), Some(datetime), MixMode::Consumption, false);
        let current = data.current_zone_detail.unwrap();
        assert_eq!(current.state_datetime, datetime);
        assert_eq!(data.production_data.len(), 12);
        assert_eq!(data.exchange_data.len(), 7);
        assert_eq!(data.height, 422.0);
    }

    #[test]
    fn production_mode_is_shorter() {
        let details = sample();
        let datetime = details.datetimes()[0];
        let data =
            BarBreakdownChartData::derive(Some(&details), Some(datetime), MixMode::Production, false);
        assert!(data.exchange_data.is_empty());
        assert_eq!(data.height, 262.0);
    }

    #[test]
    fn invalid_or_missing_state_has_no_current_detail() {
        let details = sample();
        // latest state in the fixture is flagged invalid
        let latest = BarBreakdownChartData::derive(Some(&details), None, MixMode::Consumption, false);
        assert!(latest.current_zone_detail.is_none());
        assert!(latest.production_data.is_empty());
        assert_eq!(latest.height, 262.0);

        let missing = "2020-01-01T00:00:00Z".parse().unwrap();
        let data =
            BarBreakdownChartData::derive(Some(&details), Some(missing), MixMode::Consumption, false);
        assert!(data.current_zone_detail.is_none());
    }

    #[test]
    fn nothing_loaded_yet() {
        let data = BarBreakdownChartData::derive(None, None, MixMode::Consumption, true);
        assert!(data.is_loading);
        assert!(data.zone_details.is_none());
        assert!(data.current_zone_detail.is_none());
    }
}
