use crate::mode::ElectricityMode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identifier of a grid region, e.g. `DE`, `FR` or `US-CAL-CISO`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneKey(pub String);

impl ZoneKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZoneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ZoneKey {
    fn from(value: &str) -> Self {
        ZoneKey(value.to_string())
    }
}

/// How the figures of an estimated zone state were produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EstimationMethod {
    /// Time slicer average.
    Tsa,
    ForecastsHierarchy,
    ModeBreakdown,
    ReconstructBreakdown,
    EstimatedConstructBreakdown,
    Other(String),
}

impl From<String> for EstimationMethod {
    fn from(value: String) -> Self {
        match value.as_str() {
            "TSA" => EstimationMethod::Tsa,
            "FORECASTS_HIERARCHY" => EstimationMethod::ForecastsHierarchy,
            "MODE_BREAKDOWN" => EstimationMethod::ModeBreakdown,
            "RECONSTRUCT_BREAKDOWN" => EstimationMethod::ReconstructBreakdown,
            "ESTIMATED_CONSTRUCT_BREAKDOWN" => EstimationMethod::EstimatedConstructBreakdown,
            _ => EstimationMethod::Other(value),
        }
    }
}

impl From<EstimationMethod> for String {
    fn from(value: EstimationMethod) -> Self {
        match value {
            EstimationMethod::Tsa => "TSA".to_string(),
            EstimationMethod::ForecastsHierarchy => "FORECASTS_HIERARCHY".to_string(),
            EstimationMethod::ModeBreakdown => "MODE_BREAKDOWN".to_string(),
            EstimationMethod::ReconstructBreakdown => "RECONSTRUCT_BREAKDOWN".to_string(),
            EstimationMethod::EstimatedConstructBreakdown => {
                "ESTIMATED_CONSTRUCT_BREAKDOWN".to_string()
            }
            EstimationMethod::Other(other) => other,
        }
    }
}

/// Snapshot of one zone's production, consumption and emission figures at
/// a single timestamp.
///
/// Power values are in MW, carbon intensities in gCO₂eq/kWh and CO₂ totals
/// in tCO₂eq/h. `None` means the value is unknown for this timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneDetail {
    pub zone_key: ZoneKey,
    pub state_datetime: DateTime<Utc>,
    #[serde(default)]
    pub co2intensity: Option<f64>,
    #[serde(default)]
    pub co2intensity_production: Option<f64>,
    #[serde(default)]
    pub fossil_fuel_ratio: Option<f64>,
    #[serde(default)]
    pub renewable_ratio: Option<f64>,
    #[serde(default)]
    pub total_production: Option<f64>,
    #[serde(default)]
    pub total_consumption: Option<f64>,
    #[serde(default)]
    pub total_import: Option<f64>,
    #[serde(default)]
    pub total_export: Option<f64>,
    #[serde(default)]
    pub total_co2_production: Option<f64>,
    #[serde(default)]
    pub total_co2_consumption: Option<f64>,
    #[serde(default)]
    pub total_co2_import: Option<f64>,
    #[serde(default)]
    pub total_co2_export: Option<f64>,
    /// Keyed by generation mode (`hydro`, not `hydro storage`).
    #[serde(default)]
    pub production: BTreeMap<String, Option<f64>>,
    /// Positive while charging, negative while discharging.
    #[serde(default)]
    pub storage: BTreeMap<String, Option<f64>>,
    /// Keyed by full mode name, storage modes included.
    #[serde(default)]
    pub capacity: BTreeMap<String, Option<f64>>,
    #[serde(default)]
    pub production_co2_intensities: BTreeMap<String, Option<f64>>,
    #[serde(default)]
    pub discharge_co2_intensities: BTreeMap<String, Option<f64>>,
    /// `;`-separated source names per mode.
    #[serde(default)]
    pub production_co2_intensity_sources: BTreeMap<String, String>,
    #[serde(default)]
    pub capacity_sources: BTreeMap<String, Vec<String>>,
    /// Net flow per neighbour, positive for imports.
    #[serde(default)]
    pub exchange: BTreeMap<ZoneKey, Option<f64>>,
    #[serde(default)]
    pub exchange_capacities: BTreeMap<ZoneKey, (f64, f64)>,
    #[serde(default)]
    pub exchange_co2_intensities: BTreeMap<ZoneKey, Option<f64>>,
    #[serde(default)]
    pub source: Vec<String>,
    #[serde(default = "default_is_valid")]
    pub is_valid: bool,
    #[serde(default)]
    pub estimation_method: Option<EstimationMethod>,
    #[serde(default)]
    pub estimated_percentage: Option<f64>,
}

fn default_is_valid() -> bool {
    true
}

impl ZoneDetail {
    /// Production of a generation mode. Storage modes have no production.
    pub fn production_for(&self, mode: ElectricityMode) -> Option<f64> {
        if mode.is_storage() {
            return None;
        }
        self.production.get(mode.as_str()).copied().flatten()
    }

    pub fn storage_for(&self, mode: ElectricityMode) -> Option<f64> {
        if !mode.is_storage() {
            return None;
        }
        self.storage.get(mode.generation_mode()).copied().flatten()
    }

    pub fn capacity_for(&self, mode: ElectricityMode) -> Option<f64> {
        self.capacity.get(mode.as_str()).copied().flatten()
    }

    /// Carbon intensity of a mode; storage modes use their discharge intensity.
    pub fn co2_intensity_for(&self, mode: ElectricityMode) -> Option<f64> {
        if mode.is_storage() {
            self.discharge_co2_intensities
                .get(mode.generation_mode())
                .copied()
                .flatten()
        } else {
            self.production_co2_intensities
                .get(mode.as_str())
                .copied()
                .flatten()
        }
    }

    pub fn co2_intensity_source_for(&self, mode: ElectricityMode) -> Option<&str> {
        self.production_co2_intensity_sources
            .get(mode.as_str())
            .or_else(|| {
                self.production_co2_intensity_sources
                    .get(mode.generation_mode())
            })
            .map(String::as_str)
    }

    pub fn exchange_for(&self, zone_key: &ZoneKey) -> Option<f64> {
        self.exchange.get(zone_key).copied().flatten()
    }

    pub fn exchange_capacity_for(&self, zone_key: &ZoneKey) -> Option<(f64, f64)> {
        self.exchange_capacities.get(zone_key).copied()
    }

    pub fn exchange_co2_intensity_for(&self, zone_key: &ZoneKey) -> Option<f64> {
        self.exchange_co2_intensities.get(zone_key).copied().flatten()
    }

    /// Whether any figure of this state is estimated.
    pub fn is_estimated(&self) -> bool {
        is_estimated(self.estimation_method.as_ref(), self.estimated_percentage)
    }
}

/// A state is estimated when it names a method or a non-zero estimated share.
pub fn is_estimated(method: Option<&EstimationMethod>, estimated_percentage: Option<f64>) -> bool {
    method.is_some() || estimated_percentage.unwrap_or(0.0) > 0.0
}

/// All states loaded for a zone, ordered chronologically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneDetails {
    pub zone_key: ZoneKey,
    #[serde(default)]
    pub has_data: bool,
    #[serde(default)]
    pub has_parser: bool,
    #[serde(default)]
    pub zone_states: BTreeMap<DateTime<Utc>, ZoneDetail>,
}

impl ZoneDetails {
    /// Parse zone details JSON.
    ///
    /// Accepts either the bare object or the API envelope `{ "data": { ... } }`.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let mut value: serde_json::Value = serde_json::from_str(json)?;
        let envelope = value.get_mut("data").map(serde_json::Value::take);
        if let Some(data) = envelope {
            value = data;
        }
        let details: ZoneDetails = serde_json::from_value(value)?;
        log::info!(
            "[EMAP] parsed {} states for zone {}",
            details.zone_states.len(),
            details.zone_key
        );
        Ok(details)
    }

    pub fn datetimes(&self) -> Vec<DateTime<Utc>> {
        self.zone_states.keys().copied().collect()
    }

    pub fn state_at(&self, datetime: &DateTime<Utc>) -> Option<&ZoneDetail> {
        self.zone_states.get(datetime)
    }

    pub fn latest(&self) -> Option<&ZoneDetail> {
        self.zone_states.values().next_back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SAMPLE_ZONE_DETAILS;

    fn sample() -> ZoneDetails {
        ZoneDetails::from_json(SAMPLE_ZONE_DETAILS).unwrap()
    }

    #[test]
    fn parses_sample_fixture() {
        let details = sample();
        assert_eq!(details.zone_key, ZoneKey::from("DE"));
        assert!(details.has_data);
        assert_eq!(details.zone_states.len(), 3);
        let datetimes = details.datetimes();
        assert!(datetimes.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn accepts_api_envelope() {
        let wrapped = format!("{{\"data\": {}}}", SAMPLE_ZONE_DETAILS);
        let details = ZoneDetails::from_json(&wrapped).unwrap();
        assert_eq!(details.zone_states.len(), 3);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(ZoneDetails::from_json("{ not json").is_err());
        assert!(ZoneDetails::from_json("{\"hasData\": true}").is_err());
    }

    #[test]
    fn storage_modes_read_generation_keys() {
        let details = sample();
        let first = details.zone_states.values().next().unwrap();
        assert_eq!(first.storage_for(ElectricityMode::HydroStorage), Some(-1240.0));
        assert_eq!(first.storage_for(ElectricityMode::Hydro), None);
        assert_eq!(first.production_for(ElectricityMode::HydroStorage), None);
        assert_eq!(first.production_for(ElectricityMode::Wind), Some(18250.0));
        assert_eq!(first.capacity_for(ElectricityMode::BatteryStorage), Some(2400.0));
        assert_eq!(first.co2_intensity_for(ElectricityMode::HydroStorage), Some(254.2));
        assert_eq!(first.co2_intensity_for(ElectricityMode::Coal), Some(986.0));
    }

    #[test]
    fn null_exchange_is_unknown() {
        let details = sample();
        let second = details.zone_states.values().nth(1).unwrap();
        assert_eq!(second.exchange_for(&ZoneKey::from("PL")), None);
        assert_eq!(second.exchange_for(&ZoneKey::from("FR")), Some(1510.0));
        assert_eq!(
            second.exchange_capacity_for(&ZoneKey::from("FR")),
            Some((-3000.0, 3000.0))
        );
    }

    #[test]
    fn estimation_method_round_trips_unknown_names() {
        let method: EstimationMethod = serde_json::from_str("\"TSA\"").unwrap();
        assert_eq!(method, EstimationMethod::Tsa);
        let other: EstimationMethod = serde_json::from_str("\"SOMETHING_NEW\"").unwrap();
        assert_eq!(other, EstimationMethod::Other("SOMETHING_NEW".to_string()));
        assert_eq!(serde_json::to_string(&other).unwrap(), "\"SOMETHING_NEW\"");
    }

    #[test]
    fn zero_percent_is_measured() {
        let details = sample();
        let first = details.zone_states.values().next().unwrap();
        assert_eq!(first.estimated_percentage, Some(0.0));
        assert!(!first.is_estimated());
        let second = details.zone_states.values().nth(1).unwrap();
        assert!(second.is_estimated());
        assert!(is_estimated(Some(&EstimationMethod::ModeBreakdown), None));
        assert!(!is_estimated(None, None));
    }

    #[test]
    fn latest_state_is_last_chronologically() {
        let details = sample();
        let latest = details.latest().unwrap();
        assert!(!latest.is_valid);
        assert_eq!(latest.state_datetime.to_rfc3339(), "2024-03-12T12:00:00+00:00");
    }
}
