//! Unit selection and number formatting for power and emission values.
//!
//! Power figures arrive in MW and CO₂ figures in tonnes; the displayed unit
//! is picked from the largest value on the chart so that axis ticks stay
//! short.

use crate::exchange::get_exchange_data;
use crate::layout::emissions_domain;
use crate::mix::MixMode;
use crate::production::get_production_data;
use emap_types::{ZoneDetail, ZoneKey, MODE_ORDER};

/// Unit and divisor for displaying MW values.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerScale {
    pub unit: String,
    /// Divide a MW value by this to express it in `unit`.
    pub formatting_factor: f64,
}

/// Unit and divisor for displaying tonne values.
#[derive(Debug, Clone, PartialEq)]
pub struct Co2Scale {
    pub unit: &'static str,
    /// Divide a tonne value by this to express it in `unit`.
    pub formatting_factor: f64,
}

/// Pick the power unit for a chart whose largest value is `max_value` MW.
///
/// Hourly states are power (`MW`); longer aggregates are energy (`MWh`).
pub fn scale_power(max_value: f64, is_power: bool) -> PowerScale {
    let max_value = max_value.abs();
    let (unit, formatting_factor) = if max_value < 1.0 && max_value > 0.0 {
        ("kW", 1e-3)
    } else if max_value < 1e3 {
        ("MW", 1.0)
    } else if max_value < 1e6 {
        ("GW", 1e3)
    } else {
        ("TW", 1e6)
    };
    let unit = if is_power {
        unit.to_string()
    } else {
        format!("{}h", unit)
    };
    PowerScale {
        unit,
        formatting_factor,
    }
}

/// Pick the CO₂ mass unit for a chart whose largest value is `max_value` tonnes.
pub fn scale_co2(max_value: f64) -> Co2Scale {
    let max_value = max_value.abs();
    let (unit, formatting_factor) = if max_value < 1.0 && max_value > 0.0 {
        ("kg", 1e-3)
    } else if max_value < 1e3 {
        ("t", 1.0)
    } else if max_value < 1e6 {
        ("kt", 1e3)
    } else {
        ("Mt", 1e6)
    };
    Co2Scale {
        unit,
        formatting_factor,
    }
}

/// Format a number with up to three significant digits, trimming zeros.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "?".to_string();
    }
    let magnitude = value.abs();
    let decimals = if magnitude >= 100.0 || magnitude == 0.0 {
        0
    } else if magnitude >= 10.0 {
        1
    } else {
        2
    };
    let text = format!("{:.*}", decimals, value);
    let text = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    };
    if text == "-0" {
        "0".to_string()
    } else {
        text
    }
}

/// Format a MW value with its own best-fitting unit, e.g. `18.3 GW`.
pub fn format_power(value: Option<f64>, is_power: bool) -> String {
    match value {
        Some(value) if value.is_finite() => {
            let scale = scale_power(value, is_power);
            format!(
                "{} {}",
                format_number(value / scale.formatting_factor),
                scale.unit
            )
        }
        _ => "?".to_string(),
    }
}

/// Format a tonne value with its own best-fitting unit, e.g. `5.6 kt`.
pub fn format_co2(value: Option<f64>, is_hourly: bool) -> String {
    match value {
        Some(value) if value.is_finite() => {
            let scale = scale_co2(value);
            let suffix = if is_hourly { "/h" } else { "" };
            format!(
                "{} {}{}",
                format_number(value / scale.formatting_factor),
                scale.unit,
                suffix
            )
        }
        _ => "?".to_string(),
    }
}

/// Format an axis tick that is expressed in the chart's shared unit.
pub fn format_tick(value: f64, formatting_factor: f64) -> String {
    format_number(value / formatting_factor)
}

/// Largest absolute MW figure that the electricity chart will draw for a state.
pub fn max_power_value(zone_detail: &ZoneDetail, mix_mode: MixMode) -> f64 {
    let mut max_value: f64 = 0.0;
    for mode in MODE_ORDER {
        let value = if mode.is_storage() {
            zone_detail.storage_for(mode)
        } else {
            zone_detail.production_for(mode)
        };
        let candidates = [value, zone_detail.capacity_for(mode)];
        for candidate in candidates.into_iter().flatten() {
            max_value = max_value.max(candidate.abs());
        }
    }
    if mix_mode.is_consumption() {
        for (key, value) in &zone_detail.exchange {
            if let Some(value) = value {
                max_value = max_value.max(value.abs());
            }
            if let Some((low, high)) = zone_detail.exchange_capacity_for(key) {
                max_value = max_value.max(low.abs()).max(high.abs());
            }
        }
    }
    max_value
}

/// Largest absolute tonne figure that the emissions chart will draw for a state.
///
/// Built from the same rows as the chart, so exports carry the zone's own
/// intensity.
pub fn max_co2_value(zone_detail: &ZoneDetail, mix_mode: MixMode) -> f64 {
    let production = get_production_data(zone_detail);
    let keys: Vec<ZoneKey> = zone_detail.exchange.keys().cloned().collect();
    let exchanges = get_exchange_data(zone_detail, &keys, mix_mode);
    let (min, max) = emissions_domain(&production, &exchanges);
    min.abs().max(max.abs())
}

/// Unit label for the breakdown chart header and capacity legend.
pub fn determine_unit(
    display_by_emissions: bool,
    zone_detail: &ZoneDetail,
    mix_mode: MixMode,
    is_hourly: bool,
) -> String {
    if display_by_emissions {
        let scale = scale_co2(max_co2_value(zone_detail, mix_mode));
        let suffix = if is_hourly { "/h" } else { "" };
        format!("{}CO₂eq{}", scale.unit, suffix)
    } else {
        scale_power(max_power_value(zone_detail, mix_mode), is_hourly).unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emap_types::{ZoneDetails, SAMPLE_ZONE_DETAILS};

    fn first_state() -> ZoneDetail {
        let details = ZoneDetails::from_json(SAMPLE_ZONE_DETAILS).unwrap();
        details.zone_states.values().next().unwrap().clone()
    }

    #[test]
    fn power_unit_follows_magnitude() {
        assert_eq!(scale_power(0.5, true).unit, "kW");
        assert_eq!(scale_power(850.0, true).unit, "MW");
        assert_eq!(scale_power(82_600.0, true).unit, "GW");
        assert_eq!(scale_power(2_000_000.0, true).unit, "TW");
        assert_eq!(scale_power(82_600.0, false).unit, "GWh");
        assert_eq!(scale_power(82_600.0, true).formatting_factor, 1e3);
    }

    #[test]
    fn co2_unit_follows_magnitude() {
        assert_eq!(scale_co2(0.2).unit, "kg");
        assert_eq!(scale_co2(640.0).unit, "t");
        assert_eq!(scale_co2(12_660.0).unit, "kt");
        assert_eq!(scale_co2(3e6).unit, "Mt");
    }

    #[test]
    fn formats_numbers_compactly() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(18.26), "18.3");
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(120.4), "120");
        assert_eq!(format_number(-2.0), "-2");
        assert_eq!(format_number(f64::NAN), "?");
    }

    #[test]
    fn formats_power_and_co2_values() {
        assert_eq!(format_power(Some(18_300.0), true), "18.3 GW");
        assert_eq!(format_power(Some(310.0), false), "310 MWh");
        assert_eq!(format_power(None, true), "?");
        assert_eq!(format_co2(Some(12_660.24), true), "12.7 kt/h");
        assert_eq!(format_tick(40_000.0, 1e3), "40");
    }

    #[test]
    fn unit_for_power_display() {
        let state = first_state();
        assert_eq!(
            determine_unit(false, &state, MixMode::Consumption, true),
            "GW"
        );
        assert_eq!(
            determine_unit(false, &state, MixMode::Production, false),
            "GWh"
        );
    }

    #[test]
    fn unit_for_emissions_display() {
        let state = first_state();
        // coal: 12 840 MW * 986 g/kWh = 12 660 t/h
        assert_eq!(
            determine_unit(true, &state, MixMode::Production, true),
            "ktCO₂eq/h"
        );
        assert_eq!(
            determine_unit(true, &state, MixMode::Production, false),
            "ktCO₂eq"
        );
    }

    #[test]
    fn emissions_unit_matches_drawn_export() {
        let mut state = first_state();
        state.capacity.clear();
        state.production.clear();
        state.storage.clear();
        state.production_co2_intensities.clear();
        state.exchange.clear();
        state.exchange_co2_intensities.clear();
        state.production.insert("coal".to_string(), Some(900.0));
        state.production_co2_intensities.insert("coal".to_string(), Some(1000.0));
        let at = ZoneKey::from("AT");
        state.exchange.insert(at.clone(), Some(-2000.0));
        state.exchange_co2_intensities.insert(at, Some(600.0));
        state.co2intensity = Some(300.0);

        // export drawn at 2000 MW * 300 g/kWh = 600 t, below coal's 900 t
        assert_eq!(max_co2_value(&state, MixMode::Consumption), 900.0);
        assert_eq!(
            determine_unit(true, &state, MixMode::Consumption, true),
            "tCO₂eq/h"
        );
    }

    #[test]
    fn max_power_includes_exchanges_only_for_consumption() {
        let mut state = first_state();
        state.capacity.clear();
        state.production.clear();
        state.storage.clear();
        assert_eq!(max_power_value(&state, MixMode::Production), 0.0);
        assert_eq!(max_power_value(&state, MixMode::Consumption), 5400.0);
    }
}
