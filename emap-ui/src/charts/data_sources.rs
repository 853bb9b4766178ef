//! One titled list of data sources inside the accordion.

use crate::state::AppState;
use dioxus::prelude::*;
use emap_chart::{t, Locale};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Capacity,
    Power,
    Emission,
}

#[derive(Props, Clone, PartialEq)]
pub struct SourceIconProps {
    pub kind: SourceKind,
}

/// Small glyph in front of each source list title.
#[component]
pub fn SourceIcon(props: SourceIconProps) -> Element {
    let path = match props.kind {
        // utility pole
        SourceKind::Capacity => "M7 1h2v3h4v2H9v9H7V6H3V4h4z",
        // wind turbine
        SourceKind::Power => "M8 1l1 6 5 3-1 1-5-2-5 2-1-1 5-3zM7 9h2v6H7z",
        // factory
        SourceKind::Emission => "M1 15V7l4 2V7l4 2V3h3v12z",
    };
    rsx! {
        svg {
            width: "14",
            height: "14",
            view_box: "0 0 16 16",
            path { d: "{path}", fill: "currentColor" }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct DataSourcesProps {
    pub title: String,
    pub icon: Element,
    pub sources: Vec<String>,
    /// Emission factor source -> modes it applies to
    pub emission_factor_sources_to_production_sources: Option<BTreeMap<String, Vec<String>>>,
}

/// Source name, followed by the translated modes it covers when known.
fn source_label(
    locale: Locale,
    source: &str,
    modes_by_source: Option<&BTreeMap<String, Vec<String>>>,
) -> String {
    match modes_by_source.and_then(|map| map.get(source)) {
        Some(modes) if !modes.is_empty() => {
            let modes: Vec<String> = modes.iter().map(|mode| t(locale, mode)).collect();
            format!("{} ({})", source, modes.join(", "))
        }
        _ => source.to_string(),
    }
}

#[component]
pub fn DataSources(props: DataSourcesProps) -> Element {
    let state = use_context::<AppState>();
    let locale = (state.locale)();
    if props.sources.is_empty() {
        return rsx! {};
    }
    let labels: Vec<String> = props
        .sources
        .iter()
        .map(|source| {
            source_label(
                locale,
                source,
                props.emission_factor_sources_to_production_sources.as_ref(),
            )
        })
        .collect();

    rsx! {
        div {
            style: "margin-bottom: 8px;",
            div {
                style: "display: flex; align-items: center; gap: 6px; font-weight: 600; font-size: 13px;",
                {props.icon}
                "{props.title}"
            }
            ul {
                style: "margin: 4px 0 0 0; padding-left: 20px; font-size: 12px; color: #525252;",
                for label in labels {
                    li { key: "{label}", "{label}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emission_sources_list_their_modes() {
        let mut map = BTreeMap::new();
        map.insert(
            "IPCC 2014".to_string(),
            vec!["coal".to_string(), "gas".to_string()],
        );
        assert_eq!(
            source_label(Locale::En, "IPCC 2014", Some(&map)),
            "IPCC 2014 (coal, gas)"
        );
        assert_eq!(source_label(Locale::En, "entsoe.eu", Some(&map)), "entsoe.eu");
        assert_eq!(source_label(Locale::En, "entsoe.eu", None), "entsoe.eu");
    }
}
