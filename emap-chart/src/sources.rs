//! Data-source citations listed under the breakdown chart.

use emap_types::{ElectricityMode, ZoneDetail, ZoneDetails};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ZoneDataSources {
    pub capacity_sources: Vec<String>,
    pub power_generation_sources: Vec<String>,
    pub emission_factor_sources: Vec<String>,
    /// Emission factor source -> modes it is used for.
    pub emission_factor_sources_to_production_sources: BTreeMap<String, Vec<String>>,
}

impl ZoneDataSources {
    /// Collect sources for the current state.
    ///
    /// Power generation sources are gathered across all loaded states so
    /// the list does not flicker while scrubbing through time.
    pub fn derive(zone_details: &ZoneDetails, current: Option<&ZoneDetail>) -> Self {
        let power_generation_sources: BTreeSet<String> = zone_details
            .zone_states
            .values()
            .flat_map(|state| state.source.iter().cloned())
            .filter(|source| !source.trim().is_empty())
            .collect();

        let Some(current) = current else {
            return Self {
                power_generation_sources: power_generation_sources.into_iter().collect(),
                ..Self::default()
            };
        };

        let capacity_sources: BTreeSet<String> = current
            .capacity_sources
            .values()
            .flatten()
            .cloned()
            .collect();

        let mut by_source: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (mode, sources) in &current.production_co2_intensity_sources {
            let mode_label = mode
                .parse::<ElectricityMode>()
                .map(|m| m.as_str().to_string())
                .unwrap_or_else(|_| mode.clone());
            for source in sources.split(';').map(str::trim).filter(|s| !s.is_empty()) {
                by_source
                    .entry(source.to_string())
                    .or_default()
                    .insert(mode_label.clone());
            }
        }

        Self {
            capacity_sources: capacity_sources.into_iter().collect(),
            power_generation_sources: power_generation_sources.into_iter().collect(),
            emission_factor_sources: by_source.keys().cloned().collect(),
            emission_factor_sources_to_production_sources: by_source
                .into_iter()
                .map(|(source, modes)| (source, modes.into_iter().collect()))
                .collect(),
        }
    }

    pub fn show_capacity_sources(&self) -> bool {
        !self.capacity_sources.is_empty()
    }

    pub fn show_power_sources(&self) -> bool {
        !self.power_generation_sources.is_empty()
    }

    pub fn show_emission_sources(&self) -> bool {
        !self.emission_factor_sources.is_empty()
    }

    /// The accordion is only rendered when at least one list has entries.
    pub fn show_data_source_accordion(&self) -> bool {
        self.show_capacity_sources() || self.show_power_sources() || self.show_emission_sources()
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
    fn collects_unique_sorted_sources() {
        let details = sample();
        let current = details.zone_states.values().next();
        let sources = ZoneDataSources::derive(&details, current);
        assert_eq!(
            sources.power_generation_sources,
            vec!["energy-charts.info".to_string(), "entsoe.eu".to_string()]
        );
        assert_eq!(
            sources.capacity_sources,
            vec!["ENTSO-E".to_string(), "Fraunhofer ISE".to_string()]
        );
        assert_eq!(
            sources.emission_factor_sources,
            vec![
                "INCER ACV".to_string(),
                "IPCC 2014".to_string(),
                "UNECE 2022".to_string(),
                "assumes thermal".to_string(),
            ]
        );
        assert!(sources.show_data_source_accordion());
    }

    #[test]
    fn splits_combined_emission_sources() {
        let details = sample();
        let current = details.zone_states.values().next();
        let sources = ZoneDataSources::derive(&details, current);
        let unece = &sources.emission_factor_sources_to_production_sources["UNECE 2022"];
        assert_eq!(unece, &vec!["coal".to_string(), "hydro".to_string(), "wind".to_string()]);
        let ipcc = &sources.emission_factor_sources_to_production_sources["IPCC 2014"];
        assert!(ipcc.contains(&"coal".to_string()));
    }

    #[test]
    fn empty_state_only_keeps_generation_sources() {
        let details = sample();
        let empty = details.zone_states.values().nth(2);
        let sources = ZoneDataSources::derive(&details, empty);
        assert!(sources.capacity_sources.is_empty());
        assert!(sources.emission_factor_sources.is_empty());
        assert!(sources.show_power_sources());
    }

    #[test]
    fn no_sources_hides_accordion() {
        assert!(!ZoneDataSources::default().show_data_source_accordion());
    }
}
