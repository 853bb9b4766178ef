//! Display options that change which figures the charts show.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether the breakdown shows what a zone produces or what it consumes
/// (production plus imports minus exports).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MixMode {
    Production,
    #[default]
    Consumption,
}

impl MixMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MixMode::Production => "production",
            MixMode::Consumption => "consumption",
        }
    }

    pub fn is_consumption(&self) -> bool {
        matches!(self, MixMode::Consumption)
    }
}

impl fmt::Display for MixMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MixMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "production" => Ok(MixMode::Production),
            "consumption" => Ok(MixMode::Consumption),
            other => Err(format!("unknown mix mode: {}", other)),
        }
    }
}

/// Aggregation window of the loaded zone states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeAverage {
    #[default]
    Hourly,
    Daily,
    Monthly,
    Yearly,
}

impl TimeAverage {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeAverage::Hourly => "hourly",
            TimeAverage::Daily => "daily",
            TimeAverage::Monthly => "monthly",
            TimeAverage::Yearly => "yearly",
        }
    }

    /// Hourly states are shown as power; longer windows as energy.
    pub fn is_hourly(&self) -> bool {
        matches!(self, TimeAverage::Hourly)
    }
}

impl FromStr for TimeAverage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hourly" => Ok(TimeAverage::Hourly),
            "daily" => Ok(TimeAverage::Daily),
            "monthly" => Ok(TimeAverage::Monthly),
            "yearly" => Ok(TimeAverage::Yearly),
            other => Err(format!("unknown time average: {}", other)),
        }
    }
}
