//! Translations for chart labels, legends and buttons.
//!
//! A flat key -> (en, fr) table. Placeholders use the `{{name}}` form and
//! are filled by [`t_with`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Fr];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Fr => "Français",
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "fr" => Ok(Locale::Fr),
            other => Err(format!("unsupported locale: {}", other)),
        }
    }
}

static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> =
    OnceLock::new();

fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // Buttons and modals
    map.insert("button.faq", ("FAQ", "FAQ"));
    map.insert("button.close", ("Close", "Fermer"));
    map.insert("faq.title", ("Frequently asked questions", "Questions fréquentes"));
    map.insert(
        "faq.estimated.question",
        ("Why are some values estimated?", "Pourquoi certaines valeurs sont-elles estimées ?"),
    );
    map.insert(
        "faq.estimated.answer",
        (
            "When a data source is late or incomplete, missing values are estimated from recent history.",
            "Lorsqu'une source est en retard ou incomplète, les valeurs manquantes sont estimées à partir de l'historique récent.",
        ),
    );
    map.insert(
        "faq.capacity.question",
        ("What does the grey bar mean?", "Que signifie la barre grise ?"),
    );
    map.insert(
        "faq.capacity.answer",
        (
            "It shows the installed capacity of each source. Storage can both charge and discharge, so its bar extends on both sides.",
            "Elle indique la capacité installée de chaque source. Le stockage peut se charger et se décharger, sa barre s'étend donc des deux côtés.",
        ),
    );
    map.insert(
        "faq.emissions.question",
        ("How are emissions computed?", "Comment les émissions sont-elles calculées ?"),
    );
    map.insert(
        "faq.emissions.answer",
        (
            "Each source's power is multiplied by its life-cycle emission factor.",
            "La puissance de chaque source est multipliée par son facteur d'émission sur le cycle de vie.",
        ),
    );

    // Panel headers
    map.insert(
        "country-panel.by-source.electricity-production",
        ("Electricity production by source", "Production d'électricité par source"),
    );
    map.insert(
        "country-panel.by-source.electricity-consumption",
        ("Electricity consumption by source", "Consommation d'électricité par source"),
    );
    map.insert(
        "country-panel.by-source.emissions",
        ("Emissions by source", "Émissions par source"),
    );
    map.insert(
        "country-panel.noDataAtTimestamp",
        ("Data is temporarily unavailable for the selected time", "Les données sont temporairement indisponibles pour cette période"),
    );
    map.insert(
        "country-panel.graph-legends.installed-capacity",
        ("installed capacity", "capacité installée"),
    );
    map.insert("country-panel.graph-legends.stored", ("stored", "stockée"));
    map.insert("country-panel.graph-legends.produced", ("produced", "produite"));
    map.insert("country-panel.graph-legends.exported", ("exported", "exportée"));
    map.insert("country-panel.graph-legends.imported", ("imported", "importée"));

    // Estimation pills
    map.insert("estimation-card.estimated.pill", ("Estimated", "Estimé"));
    map.insert(
        "estimation-card.aggregated_estimated.pill",
        ("{{percentage}}% estimated", "{{percentage}} % estimé"),
    );
    map.insert("estimation-card.TSA.pill", ("Preliminary", "Préliminaire"));

    // Data sources
    map.insert("data-sources.title", ("Show data sources", "Afficher les sources"));
    map.insert("data-sources.capacity", ("Capacity data", "Données de capacité"));
    map.insert("data-sources.power", ("Power generation data", "Données de production"));
    map.insert("data-sources.emission", ("Emission factor data", "Facteurs d'émission"));

    // Tooltips
    map.insert(
        "tooltips.production-share",
        (
            "{{percentage}}% of electricity {{verb}} in {{zone}} comes from {{mode}}",
            "{{percentage}} % de l'électricité {{verb}} en {{zone}} provient de : {{mode}}",
        ),
    );
    map.insert(
        "tooltips.emissions-share",
        (
            "{{percentage}}% of emissions from electricity {{verb}} in {{zone}} come from {{mode}}",
            "{{percentage}} % des émissions de l'électricité {{verb}} en {{zone}} proviennent de : {{mode}}",
        ),
    );
    map.insert(
        "tooltips.import-share",
        (
            "{{percentage}}% of electricity available in {{zone}} is imported from {{neighbour}}",
            "{{percentage}} % de l'électricité disponible en {{zone}} est importée de {{neighbour}}",
        ),
    );
    map.insert(
        "tooltips.export-share",
        (
            "{{percentage}}% of electricity produced in {{zone}} is exported to {{neighbour}}",
            "{{percentage}} % de l'électricité produite en {{zone}} est exportée vers {{neighbour}}",
        ),
    );
    map.insert("tooltips.verb.produced", ("produced", "produite"));
    map.insert("tooltips.verb.available", ("available", "disponible"));
    map.insert("tooltips.capacity", ("Capacity", "Capacité"));
    map.insert("tooltips.emissions", ("Emissions", "Émissions"));
    map.insert("tooltips.co2-intensity", ("Carbon intensity", "Intensité carbone"));
    map.insert("tooltips.source", ("Source", "Source"));
    map.insert("tooltips.storing", ("Storing", "Stockage"));
    map.insert("tooltips.discharging", ("Discharging", "Déstockage"));
    map.insert("tooltips.importing", ("Importing", "Import"));
    map.insert("tooltips.exporting", ("Exporting", "Export"));
    map.insert("tooltips.unknown", ("?", "?"));
    map.insert("tooltips.of", ("of", "sur"));

    // Controls
    map.insert("controls.zone", ("Zone", "Zone"));
    map.insert("controls.time", ("Time", "Heure"));
    map.insert("controls.production", ("Production", "Production"));
    map.insert("controls.consumption", ("Consumption", "Consommation"));
    map.insert("controls.emissions", ("Emissions", "Émissions"));
    map.insert("controls.electricity", ("Electricity", "Électricité"));
    map.insert("controls.language", ("Language", "Langue"));
    map.insert("controls.loading", ("Loading data...", "Chargement des données..."));

    // Modes
    map.insert("nuclear", ("nuclear", "nucléaire"));
    map.insert("geothermal", ("geothermal", "géothermie"));
    map.insert("biomass", ("biomass", "biomasse"));
    map.insert("coal", ("coal", "charbon"));
    map.insert("wind", ("wind", "éolien"));
    map.insert("solar", ("solar", "solaire"));
    map.insert("hydro", ("hydro", "hydraulique"));
    map.insert("hydro storage", ("hydro storage", "stockage hydraulique"));
    map.insert("battery storage", ("battery storage", "stockage batterie"));
    map.insert("gas", ("gas", "gaz"));
    map.insert("oil", ("oil", "pétrole"));
    map.insert("unknown", ("unknown", "inconnu"));

    map
}

fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key. Unknown keys fall back to the key itself.
pub fn t(locale: Locale, key: &str) -> String {
    match translations().get(key) {
        Some(&(en, fr)) => match locale {
            Locale::En => en.to_string(),
            Locale::Fr => fr.to_string(),
        },
        None => key.to_string(),
    }
}

/// Translate a key and fill its `{{name}}` placeholders.
pub fn t_with(locale: Locale, key: &str, args: &[(&str, &str)]) -> String {
    args.iter().fold(t(locale, key), |text, (name, value)| {
        text.replace(&format!("{{{{{}}}}}", name), value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_known_keys() {
        assert_eq!(t(Locale::En, "button.faq"), "FAQ");
        assert_eq!(t(Locale::Fr, "wind"), "éolien");
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(t(Locale::Fr, "no.such.key"), "no.such.key");
    }

    #[test]
    fn fills_placeholders() {
        let text = t_with(
            Locale::En,
            "estimation-card.aggregated_estimated.pill",
            &[("percentage", "12")],
        );
        assert_eq!(text, "12% estimated");
    }

    #[test]
    fn every_mode_has_a_label() {
        for mode in emap_types::MODE_ORDER {
            assert!(translations().contains_key(mode.as_str()), "{}", mode);
        }
    }

    #[test]
    fn parses_locale_codes() {
        assert_eq!("FR".parse::<Locale>().unwrap(), Locale::Fr);
        assert!("de".parse::<Locale>().is_err());
    }
}
