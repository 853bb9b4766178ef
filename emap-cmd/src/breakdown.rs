//! Breakdown, export and sources commands over a zone details snapshot.

use crate::ViewArgs;
use anyhow::Context;
use emap_chart::production::get_electricity_production_value;
use emap_chart::sources::ZoneDataSources;
use emap_chart::units::{
    determine_unit, format_co2, format_power, max_co2_value, max_power_value, scale_co2,
    scale_power,
};
use emap_chart::{t, BarBreakdownChartData};
use emap_types::ZoneDetails;
use log::info;
use serde::Serialize;
use std::io::Write;

/// Read and parse a zone details snapshot.
pub fn load_zone_details(path: &str) -> anyhow::Result<ZoneDetails> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read zone details from {}", path))?;
    ZoneDetails::from_json(&text).with_context(|| format!("Failed to parse {}", path))
}

/// One breakdown row as written to CSV.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow {
    pub datetime: String,
    /// `production` or `exchange`
    pub kind: &'static str,
    pub key: String,
    pub value_mw: Option<f64>,
    pub capacity_mw: Option<f64>,
    pub co2_intensity: Option<f64>,
    pub emissions_t: Option<f64>,
}

fn chart_data(details: &ZoneDetails, view: &ViewArgs) -> BarBreakdownChartData {
    BarBreakdownChartData::derive(Some(details), view.datetime, view.mix_mode, false)
}

/// Rows of the selected state, production first.
pub fn export_rows(details: &ZoneDetails, view: &ViewArgs) -> Vec<ExportRow> {
    let data = chart_data(details, view);
    let Some(current) = data.current_zone_detail.as_ref() else {
        return Vec::new();
    };
    let datetime = current.state_datetime.to_rfc3339();
    let production = data.production_data.iter().map(|row| ExportRow {
        datetime: datetime.clone(),
        kind: "production",
        key: row.mode.to_string(),
        value_mw: get_electricity_production_value(row),
        capacity_mw: row.capacity,
        co2_intensity: row.co2_intensity,
        emissions_t: row.g_co2eq,
    });
    let exchanges = data.exchange_data.iter().map(|row| ExportRow {
        datetime: datetime.clone(),
        kind: "exchange",
        key: row.zone_key.to_string(),
        value_mw: row.exchange,
        capacity_mw: Some(if row.is_export() {
            row.exchange_capacity_range.0
        } else {
            row.exchange_capacity_range.1
        }),
        co2_intensity: row.co2_intensity,
        emissions_t: row.g_co2eq,
    });
    production.chain(exchanges).collect()
}

pub fn write_csv<W: Write>(rows: &[ExportRow], writer: W) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Plain-text rendering of the breakdown chart.
pub fn breakdown_table(details: &ZoneDetails, view: &ViewArgs) -> String {
    let locale = view.locale;
    let is_hourly = view.time_average.is_hourly();
    let data = chart_data(details, view);
    let Some(current) = data.current_zone_detail.as_ref() else {
        return format!("{}\n", t(locale, "country-panel.noDataAtTimestamp"));
    };

    let heading_key = if view.emissions {
        "country-panel.by-source.emissions"
    } else if view.mix_mode.is_consumption() {
        "country-panel.by-source.electricity-consumption"
    } else {
        "country-panel.by-source.electricity-production"
    };
    let unit = determine_unit(view.emissions, current, view.mix_mode, is_hourly);
    let mut out = format!(
        "{} {} ({}) - {}\n",
        t(locale, heading_key),
        details.zone_key,
        unit,
        current.state_datetime.format("%Y-%m-%d %H:%M UTC")
    );

    let power_factor = scale_power(max_power_value(current, view.mix_mode), is_hourly).formatting_factor;
    let co2_factor = scale_co2(max_co2_value(current, view.mix_mode)).formatting_factor;
    let in_unit = |value: Option<f64>, factor: f64| {
        value
            .map(|value| format!("{:.2}", value / factor))
            .unwrap_or_else(|| "?".to_string())
    };

    for row in &data.production_data {
        let label = t(locale, row.mode.as_str());
        if view.emissions {
            out.push_str(&format!("{:<18} {:>10}\n", label, in_unit(row.g_co2eq, co2_factor)));
        } else {
            out.push_str(&format!(
                "{:<18} {:>10} / {:>10}\n",
                label,
                in_unit(get_electricity_production_value(row), power_factor),
                in_unit(row.capacity, power_factor)
            ));
        }
    }
    for row in &data.exchange_data {
        let value = if view.emissions {
            in_unit(row.g_co2eq, co2_factor)
        } else {
            in_unit(row.exchange, power_factor)
        };
        out.push_str(&format!("{:<18} {:>10}\n", row.zone_key.as_str(), value));
    }

    if view.emissions {
        let total = if view.mix_mode.is_consumption() {
            current.total_co2_consumption
        } else {
            current.total_co2_production
        };
        out.push_str(&format!("total {}\n", format_co2(total, is_hourly)));
    } else {
        let total = if view.mix_mode.is_consumption() {
            current.total_consumption
        } else {
            current.total_production
        };
        out.push_str(&format!("total {}\n", format_power(total, is_hourly)));
    }
    out
}

/// Plain-text listing of the data sources behind the selected state.
pub fn sources_report(details: &ZoneDetails, view: &ViewArgs) -> String {
    let locale = view.locale;
    let data = chart_data(details, view);
    let sources = ZoneDataSources::derive(details, data.current_zone_detail.as_ref());
    if !sources.show_data_source_accordion() {
        return String::new();
    }

    let mut out = format!("{}\n", t(locale, "data-sources.title"));
    let mut section = |key: &str, entries: Vec<String>| {
        if entries.is_empty() {
            return;
        }
        out.push_str(&format!("{}\n", t(locale, key)));
        for entry in entries {
            out.push_str(&format!("  - {}\n", entry));
        }
    };
    section("data-sources.capacity", sources.capacity_sources.clone());
    section("data-sources.power", sources.power_generation_sources.clone());
    let emission_entries = sources
        .emission_factor_sources
        .iter()
        .map(|source| {
            match sources.emission_factor_sources_to_production_sources.get(source) {
                Some(modes) if !modes.is_empty() => {
                    let modes: Vec<String> = modes.iter().map(|mode| t(locale, mode)).collect();
                    format!("{} ({})", source, modes.join(", "))
                }
                _ => source.clone(),
            }
        })
        .collect();
    section("data-sources.emission", emission_entries);
    out
}

pub fn run_breakdown(view: &ViewArgs) -> anyhow::Result<()> {
    let details = load_zone_details(&view.file)?;
    print!("{}", breakdown_table(&details, view));
    Ok(())
}

pub fn run_export(view: &ViewArgs, output: &str) -> anyhow::Result<()> {
    let details = load_zone_details(&view.file)?;
    let rows = export_rows(&details, view);
    if rows.is_empty() {
        anyhow::bail!("No usable state in {} for {:?}", view.file, view.datetime);
    }
    let file = std::fs::File::create(output)
        .with_context(|| format!("Failed to create {}", output))?;
    write_csv(&rows, file)?;
    info!("Wrote {} rows to {}", rows.len(), output);
    Ok(())
}

pub fn run_sources(view: &ViewArgs) -> anyhow::Result<()> {
    let details = load_zone_details(&view.file)?;
    let report = sources_report(&details, view);
    if report.is_empty() {
        info!("No data sources listed for {}", details.zone_key);
    }
    print!("{}", report);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use emap_chart::{Locale, MixMode, TimeAverage};
    use emap_types::SAMPLE_ZONE_DETAILS;

    fn sample() -> ZoneDetails {
        ZoneDetails::from_json(SAMPLE_ZONE_DETAILS).unwrap()
    }

    fn view(datetime: Option<&str>) -> ViewArgs {
        ViewArgs {
            file: "zone_details_de.json".to_string(),
            datetime: datetime.map(|dt| dt.parse().unwrap()),
            mix_mode: MixMode::Consumption,
            emissions: false,
            time_average: TimeAverage::Hourly,
            locale: Locale::En,
        }
    }

    #[test]
    fn export_has_production_then_exchanges() {
        let rows = export_rows(&sample(), &view(Some("2024-03-12T10:00:00Z")));
        assert_eq!(rows.len(), 12 + 7);
        assert!(rows[..12].iter().all(|row| row.kind == "production"));
        assert!(rows[12..].iter().all(|row| row.kind == "exchange"));
        let battery = rows.iter().find(|row| row.key == "battery storage").unwrap();
        assert_eq!(battery.value_mw, Some(-85.0));
    }

    #[test]
    fn export_of_invalid_state_is_empty() {
        assert!(export_rows(&sample(), &view(None)).is_empty());
    }

    #[test]
    fn csv_has_header_and_blank_unknowns() {
        let rows = vec![ExportRow {
            datetime: "2024-03-12T10:00:00+00:00".to_string(),
            kind: "exchange",
            key: "PL".to_string(),
            value_mw: None,
            capacity_mw: Some(2000.0),
            co2_intensity: None,
            emissions_t: None,
        }];
        let mut buffer = Vec::new();
        write_csv(&rows, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("datetime,kind,key,value_mw,capacity_mw,co2_intensity,emissions_t")
        );
        assert_eq!(lines.next(), Some("2024-03-12T10:00:00+00:00,exchange,PL,,2000.0,,"));
    }

    #[test]
    fn table_shows_unit_and_rows() {
        let table = breakdown_table(&sample(), &view(Some("2024-03-12T10:00:00Z")));
        assert!(table.starts_with("Electricity consumption by source DE (GW)"));
        assert!(table.contains("wind"));
        assert!(table.contains("total 61.9 GW"));
    }

    #[test]
    fn emissions_table_values_match_heading_unit() {
        let mut args = view(Some("2024-03-12T10:00:00Z"));
        args.emissions = true;
        let table = breakdown_table(&sample(), &args);
        assert!(table.starts_with("Emissions by source DE (ktCO₂eq/h)"));
        // coal: 12 660 t/h
        assert!(table
            .lines()
            .any(|line| line.starts_with("coal") && line.trim_end().ends_with("12.66")));
    }

    #[test]
    fn table_without_state_says_so() {
        let table = breakdown_table(&sample(), &view(None));
        assert_eq!(table, "Data is temporarily unavailable for the selected time\n");
    }

    #[test]
    fn sources_list_modes_per_emission_factor() {
        let report = sources_report(&sample(), &view(Some("2024-03-12T10:00:00Z")));
        assert!(report.starts_with("Show data sources\n"));
        assert!(report.contains("  - entsoe.eu\n"));
        assert!(report.contains("UNECE 2022 (coal, hydro, wind)"));
    }
}
