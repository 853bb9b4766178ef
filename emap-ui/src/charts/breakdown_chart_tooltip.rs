//! Tooltip card for a hovered production or exchange row.

use crate::charts::elements::estimation_pill_label;
use crate::state::AppState;
use dioxus::prelude::*;
use emap_chart::constants::TOOLTIP_WIDTH;
use emap_chart::tooltip::{BreakdownTooltipContent, LayerKey, TooltipKind};
use emap_chart::units::{format_co2, format_number, format_power};
use emap_chart::{t, Locale};
use emap_types::ZoneDetail;

#[derive(Props, Clone, PartialEq)]
pub struct BreakdownChartTooltipProps {
    pub selected_layer_key: LayerKey,
    pub zone_detail: ZoneDetail,
    #[props(default = false)]
    pub has_estimation_pill: bool,
}

/// Direction label for storage and exchange rows.
fn direction_label(locale: Locale, kind: TooltipKind) -> Option<String> {
    match kind {
        TooltipKind::Production => None,
        TooltipKind::Storage { charging: true } => Some(t(locale, "tooltips.storing")),
        TooltipKind::Storage { charging: false } => Some(t(locale, "tooltips.discharging")),
        TooltipKind::Import => Some(t(locale, "tooltips.importing")),
        TooltipKind::Export => Some(t(locale, "tooltips.exporting")),
    }
}

/// `usage / total` line, in tonnes when displaying emissions.
fn usage_line(
    locale: Locale,
    content: &BreakdownTooltipContent,
    display_by_emissions: bool,
    is_hourly: bool,
) -> String {
    let of = t(locale, "tooltips.of");
    if display_by_emissions {
        format!(
            "{} {} {}",
            format_co2(content.emissions, is_hourly),
            of,
            format_co2(content.total_emissions, is_hourly)
        )
    } else {
        format!(
            "{} {} {}",
            format_power(content.usage, is_hourly),
            of,
            format_power(content.total, is_hourly)
        )
    }
}

#[component]
pub fn BreakdownChartTooltip(props: BreakdownChartTooltipProps) -> Element {
    let state = use_context::<AppState>();
    let locale = (state.locale)();
    let mix_mode = (state.mix_mode)();
    let display_by_emissions = (state.display_by_emissions)();
    let is_hourly = state.is_hourly();

    let Some(content) = BreakdownTooltipContent::for_layer(
        &props.selected_layer_key,
        &props.zone_detail,
        mix_mode,
        display_by_emissions,
    ) else {
        return rsx! {};
    };

    let title = content.title(locale);
    let headline = content.headline(locale, &props.zone_detail.zone_key, mix_mode, display_by_emissions);
    let direction = direction_label(locale, content.kind);
    let usage = usage_line(locale, &content, display_by_emissions, is_hourly);
    let capacity = (!display_by_emissions)
        .then(|| content.capacity.map(|capacity| format_power(Some(capacity), true)))
        .flatten();
    let intensity = content
        .co2_intensity
        .map(|intensity| format!("{} gCO₂eq/kWh", format_number(intensity)));
    let source = content.co2_intensity_source.clone();
    let pill = (props.has_estimation_pill && content.is_estimated).then(|| {
        estimation_pill_label(
            locale,
            props.zone_detail.estimation_method.as_ref(),
            content.estimated_percentage,
        )
    });

    rsx! {
        div {
            style: "width: {TOOLTIP_WIDTH}px; max-width: 100%; background: #FFFFFF; border-radius: 12px; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15); padding: 12px; font-size: 13px;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                strong { "{title}" }
                if let Some(pill) = pill {
                    span {
                        style: "border-radius: 9999px; background: #FEF3C7; color: #92400E; font-size: 11px; padding: 2px 8px;",
                        "{pill}"
                    }
                }
            }
            if let Some(direction) = direction {
                div { style: "color: #737373; font-size: 11px;", "{direction}" }
            }
            p { style: "margin: 8px 0;", "{headline}" }
            div { style: "font-weight: 600;", "{usage}" }
            if let Some(capacity) = capacity {
                div {
                    style: "color: #525252;",
                    {format!("{}: {}", t(locale, "tooltips.capacity"), capacity)}
                }
            }
            if let Some(intensity) = intensity {
                div {
                    style: "color: #525252; margin-top: 4px;",
                    {format!("{}: {}", t(locale, "tooltips.co2-intensity"), intensity)}
                }
            }
            if let Some(source) = source {
                div {
                    style: "color: #737373; font-size: 11px;",
                    {format!("{}: {}", t(locale, "tooltips.source"), source)}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emap_chart::MixMode;
    use emap_types::{ElectricityMode, ZoneDetails, SAMPLE_ZONE_DETAILS};

    fn first_state() -> ZoneDetail {
        let details = ZoneDetails::from_json(SAMPLE_ZONE_DETAILS).unwrap();
        details.zone_states.values().next().unwrap().clone()
    }

    #[test]
    fn storage_direction_is_labelled() {
        assert_eq!(
            direction_label(Locale::En, TooltipKind::Storage { charging: false }).as_deref(),
            Some("Discharging")
        );
        assert_eq!(direction_label(Locale::En, TooltipKind::Production), None);
    }

    #[test]
    fn usage_line_uses_best_units() {
        let state = first_state();
        let content = BreakdownTooltipContent::for_layer(
            &LayerKey::Mode(ElectricityMode::Solar),
            &state,
            MixMode::Consumption,
            false,
        )
        .unwrap();
        assert_eq!(usage_line(Locale::En, &content, false, true), "14.6 GW of 61.9 GW");
    }
}
