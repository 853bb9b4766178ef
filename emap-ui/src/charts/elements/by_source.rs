//! Chart heading with unit and estimation pill.

use crate::state::AppState;
use dioxus::prelude::*;
use emap_chart::units::format_number;
use emap_chart::{t, t_with, Locale, MixMode};
use emap_types::{is_estimated, EstimationMethod};

#[derive(Props, Clone, PartialEq)]
pub struct BySourceProps {
    #[props(default = false)]
    pub has_estimation_pill: bool,
    #[props(!optional)]
    pub estimated_percentage: Option<f64>,
    #[props(!optional)]
    pub unit: Option<String>,
    #[props(!optional)]
    pub estimation_method: Option<EstimationMethod>,
    /// Fade the heading, used above the empty chart
    #[props(default = false)]
    pub is_dimmed: bool,
}

fn title_key(display_by_emissions: bool, mix_mode: MixMode) -> &'static str {
    if display_by_emissions {
        "country-panel.by-source.emissions"
    } else if mix_mode.is_consumption() {
        "country-panel.by-source.electricity-consumption"
    } else {
        "country-panel.by-source.electricity-production"
    }
}

/// The pill is shown only for states with estimated figures; 0% counts as measured.
fn shows_estimation_pill(
    has_estimation_pill: bool,
    method: Option<&EstimationMethod>,
    estimated_percentage: Option<f64>,
) -> bool {
    has_estimation_pill && is_estimated(method, estimated_percentage)
}

/// Text of the estimation pill for a state.
pub fn estimation_pill_label(
    locale: Locale,
    method: Option<&EstimationMethod>,
    estimated_percentage: Option<f64>,
) -> String {
    if matches!(method, Some(EstimationMethod::Tsa)) {
        return t(locale, "estimation-card.TSA.pill");
    }
    match estimated_percentage {
        Some(percentage) if percentage > 0.0 && percentage < 100.0 => {
            let percentage = format_number(percentage);
            t_with(
                locale,
                "estimation-card.aggregated_estimated.pill",
                &[("percentage", percentage.as_str())],
            )
        }
        _ => t(locale, "estimation-card.estimated.pill"),
    }
}

#[component]
pub fn BySource(props: BySourceProps) -> Element {
    let state = use_context::<AppState>();
    let locale = (state.locale)();
    let title = t(locale, title_key((state.display_by_emissions)(), (state.mix_mode)()));
    let show_pill = shows_estimation_pill(
        props.has_estimation_pill,
        props.estimation_method.as_ref(),
        props.estimated_percentage,
    );
    let opacity = if props.is_dimmed { 0.4 } else { 1.0 };
    let pill = estimation_pill_label(
        locale,
        props.estimation_method.as_ref(),
        props.estimated_percentage,
    );

    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: center; padding-top: 16px; padding-bottom: 4px; opacity: {opacity};",
            h2 {
                style: "margin: 0; font-size: 14px; font-weight: 600;",
                "{title}"
                if let Some(unit) = props.unit {
                    span {
                        style: "font-weight: 400; color: #737373; margin-left: 4px;",
                        "({unit})"
                    }
                }
            }
            if show_pill {
                span {
                    style: "border-radius: 9999px; background: #FEF3C7; color: #92400E; font-size: 11px; font-weight: 600; padding: 2px 8px;",
                    "{pill}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preliminary_data_gets_its_own_pill() {
        let label = estimation_pill_label(Locale::En, Some(&EstimationMethod::Tsa), Some(12.0));
        assert_eq!(label, "Preliminary");
    }

    #[test]
    fn partial_estimates_show_percentage() {
        let label = estimation_pill_label(Locale::En, None, Some(12.0));
        assert_eq!(label, "12% estimated");
        let label = estimation_pill_label(Locale::En, Some(&EstimationMethod::ModeBreakdown), None);
        assert_eq!(label, "Estimated");
    }

    #[test]
    fn measured_state_hides_pill() {
        assert!(!shows_estimation_pill(true, None, Some(0.0)));
        assert!(!shows_estimation_pill(true, None, None));
        assert!(shows_estimation_pill(true, None, Some(12.0)));
        assert!(shows_estimation_pill(true, Some(&EstimationMethod::Tsa), Some(0.0)));
        assert!(!shows_estimation_pill(false, Some(&EstimationMethod::Tsa), Some(12.0)));
    }

    #[test]
    fn heading_follows_display_mode() {
        assert_eq!(title_key(true, MixMode::Production), "country-panel.by-source.emissions");
        assert_eq!(
            title_key(false, MixMode::Consumption),
            "country-panel.by-source.electricity-consumption"
        );
    }
}
