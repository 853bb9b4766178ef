//! Exchange rows: flows between the selected zone and its neighbours.

use crate::mix::MixMode;
use emap_types::{ZoneDetail, ZoneDetails, ZoneKey};
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExchangeDataType {
    pub zone_key: ZoneKey,
    /// MW, positive for imports and negative for exports.
    pub exchange: Option<f64>,
    pub exchange_capacity_range: (f64, f64),
    /// gCO₂eq/kWh of the flowing electricity.
    pub co2_intensity: Option<f64>,
    /// tCO₂eq/h carried by the flow, signed like `exchange`.
    pub g_co2eq: Option<f64>,
}

impl ExchangeDataType {
    pub fn is_import(&self) -> bool {
        self.exchange.map(|e| e > 0.0).unwrap_or(false)
    }

    pub fn is_export(&self) -> bool {
        self.exchange.map(|e| e < 0.0).unwrap_or(false)
    }
}

/// Every neighbour seen in any loaded state, sorted by zone key.
///
/// Using the union keeps the rows stable while scrubbing through time.
pub fn exchange_keys(zone_details: &ZoneDetails) -> Vec<ZoneKey> {
    zone_details
        .zone_states
        .values()
        .flat_map(|state| state.exchange.keys().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Intensity of a flow: the neighbour's for imports, the zone's own for exports.
fn exchange_co2_intensity(
    zone_detail: &ZoneDetail,
    zone_key: &ZoneKey,
    exchange: Option<f64>,
    mix_mode: MixMode,
) -> Option<f64> {
    match exchange {
        Some(flow) if flow < 0.0 => match mix_mode {
            MixMode::Consumption => zone_detail.co2intensity,
            MixMode::Production => zone_detail.co2intensity_production,
        },
        _ => zone_detail.exchange_co2_intensity_for(zone_key),
    }
}

/// Build one row per neighbour. Production mode shows no exchanges.
pub fn get_exchange_data(
    zone_detail: &ZoneDetail,
    keys: &[ZoneKey],
    mix_mode: MixMode,
) -> Vec<ExchangeDataType> {
    if !mix_mode.is_consumption() {
        return Vec::new();
    }
    keys.iter()
        .map(|zone_key| {
            let exchange = zone_detail.exchange_for(zone_key);
            let exchange_capacity_range = zone_detail
                .exchange_capacity_for(zone_key)
                .unwrap_or((0.0, 0.0));
            let co2_intensity = exchange_co2_intensity(zone_detail, zone_key, exchange, mix_mode);
            let g_co2eq = match (exchange, co2_intensity) {
                (Some(flow), Some(intensity)) => Some(flow * intensity / 1000.0),
                _ => None,
            };
            ExchangeDataType {
                zone_key: zone_key.clone(),
                exchange,
                exchange_capacity_range,
                co2_intensity,
                g_co2eq,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use emap_types::SAMPLE_ZONE_DETAILS;

    fn sample() -> ZoneDetails {
        ZoneDetails::from_json(SAMPLE_ZONE_DETAILS).unwrap()
    }

    #[test]
    fn keys_are_sorted_union() {
        let keys = exchange_keys(&sample());
        let names: Vec<&str> = keys.iter().map(ZoneKey::as_str).collect();
        assert_eq!(names, vec!["AT", "CH", "CZ", "DK-DK1", "FR", "NL", "PL"]);
    }

    #[test]
    fn production_mode_hides_exchanges() {
        let details = sample();
        let keys = exchange_keys(&details);
        let state = details.zone_states.values().next().unwrap();
        assert!(get_exchange_data(state, &keys, MixMode::Production).is_empty());
        assert_eq!(get_exchange_data(state, &keys, MixMode::Consumption).len(), 7);
    }

    #[test]
    fn import_uses_neighbour_intensity_export_uses_own() {
        let details = sample();
        let keys = exchange_keys(&details);
        let state = details.zone_states.values().next().unwrap();
        let rows = get_exchange_data(state, &keys, MixMode::Consumption);

        let fr = rows.iter().find(|r| r.zone_key.as_str() == "FR").unwrap();
        assert!(fr.is_import());
        assert_eq!(fr.co2_intensity, Some(33.6));

        let at = rows.iter().find(|r| r.zone_key.as_str() == "AT").unwrap();
        assert!(at.is_export());
        assert_eq!(at.co2_intensity, Some(312.4));
        assert!(at.g_co2eq.unwrap() < 0.0);
        assert_eq!(at.exchange_capacity_range, (-5400.0, 5400.0));
    }

    #[test]
    fn missing_neighbour_in_state_is_unknown() {
        let details = sample();
        let keys = exchange_keys(&details);
        let state = details.zone_states.values().nth(2).unwrap();
        let rows = get_exchange_data(state, &keys, MixMode::Consumption);
        assert_eq!(rows.len(), 7);
        assert!(rows.iter().all(|r| r.exchange.is_none() && r.g_co2eq.is_none()));
        assert!(rows.iter().all(|r| r.exchange_capacity_range == (0.0, 0.0)));
    }
}
