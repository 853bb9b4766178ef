use crate::error::ModeParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A generation or storage mode reported for a zone.
///
/// Serialized with the lowercase names used by the zone details API,
/// including the two storage modes (`"hydro storage"`, `"battery storage"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ElectricityMode {
    #[serde(rename = "nuclear")]
    Nuclear,
    #[serde(rename = "geothermal")]
    Geothermal,
    #[serde(rename = "biomass")]
    Biomass,
    #[serde(rename = "coal")]
    Coal,
    #[serde(rename = "wind")]
    Wind,
    #[serde(rename = "solar")]
    Solar,
    #[serde(rename = "hydro")]
    Hydro,
    #[serde(rename = "hydro storage")]
    HydroStorage,
    #[serde(rename = "battery storage")]
    BatteryStorage,
    #[serde(rename = "gas")]
    Gas,
    #[serde(rename = "oil")]
    Oil,
    #[serde(rename = "unknown")]
    Unknown,
}

/// Display order of the rows in the breakdown charts.
pub const MODE_ORDER: [ElectricityMode; 12] = [
    ElectricityMode::Nuclear,
    ElectricityMode::Geothermal,
    ElectricityMode::Biomass,
    ElectricityMode::Coal,
    ElectricityMode::Wind,
    ElectricityMode::Solar,
    ElectricityMode::Hydro,
    ElectricityMode::HydroStorage,
    ElectricityMode::BatteryStorage,
    ElectricityMode::Gas,
    ElectricityMode::Oil,
    ElectricityMode::Unknown,
];

impl ElectricityMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElectricityMode::Nuclear => "nuclear",
            ElectricityMode::Geothermal => "geothermal",
            ElectricityMode::Biomass => "biomass",
            ElectricityMode::Coal => "coal",
            ElectricityMode::Wind => "wind",
            ElectricityMode::Solar => "solar",
            ElectricityMode::Hydro => "hydro",
            ElectricityMode::HydroStorage => "hydro storage",
            ElectricityMode::BatteryStorage => "battery storage",
            ElectricityMode::Gas => "gas",
            ElectricityMode::Oil => "oil",
            ElectricityMode::Unknown => "unknown",
        }
    }

    /// True for the modes that can both charge and discharge.
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            ElectricityMode::HydroStorage | ElectricityMode::BatteryStorage
        )
    }

    /// Key used in the `production`, `storage` and `*Co2Intensities` maps.
    ///
    /// Storage modes drop their ` storage` suffix: `hydro storage` is stored
    /// under `hydro` and `battery storage` under `battery`.
    pub fn generation_mode(&self) -> &'static str {
        match self {
            ElectricityMode::HydroStorage => "hydro",
            ElectricityMode::BatteryStorage => "battery",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for ElectricityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElectricityMode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MODE_ORDER
            .iter()
            .copied()
            .find(|mode| mode.as_str() == s.trim())
            .ok_or_else(|| ModeParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_modes_map_to_generation_keys() {
        assert!(ElectricityMode::HydroStorage.is_storage());
        assert!(ElectricityMode::BatteryStorage.is_storage());
        assert!(!ElectricityMode::Hydro.is_storage());
        assert_eq!(ElectricityMode::HydroStorage.generation_mode(), "hydro");
        assert_eq!(ElectricityMode::BatteryStorage.generation_mode(), "battery");
        assert_eq!(ElectricityMode::Coal.generation_mode(), "coal");
    }

    #[test]
    fn parse_mode_names() {
        assert_eq!(
            "hydro storage".parse::<ElectricityMode>().unwrap(),
            ElectricityMode::HydroStorage
        );
        assert_eq!("wind".parse::<ElectricityMode>().unwrap(), ElectricityMode::Wind);
        let err = "fusion".parse::<ElectricityMode>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown electricity mode: fusion");
    }

    #[test]
    fn serde_uses_api_names() {
        let json = serde_json::to_string(&ElectricityMode::BatteryStorage).unwrap();
        assert_eq!(json, "\"battery storage\"");
        let mode: ElectricityMode = serde_json::from_str("\"solar\"").unwrap();
        assert_eq!(mode, ElectricityMode::Solar);
    }

    #[test]
    fn mode_order_has_every_mode_once() {
        let mut seen = MODE_ORDER.to_vec();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), MODE_ORDER.len());
    }
}
