//! Hover tooltip state, placement and content for the breakdown charts.

use crate::constants::{
    EMISSIONS_TOOLTIP_HEIGHT, POWER_TOOLTIP_HEIGHT, SM_BREAKPOINT, TOOLTIP_WIDTH,
};
use crate::exchange::get_exchange_data;
use crate::i18n::{t, t_with, Locale};
use crate::mix::MixMode;
use crate::production::{get_electricity_production_value, get_production_data};
use crate::units::format_number;
use emap_types::{ElectricityMode, ZoneDetail, ZoneKey};
use std::fmt;

/// The row being hovered: a production mode or a neighbouring zone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LayerKey {
    Mode(ElectricityMode),
    Zone(ZoneKey),
}

impl fmt::Display for LayerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerKey::Mode(mode) => write!(f, "{}", mode),
            LayerKey::Zone(zone_key) => write!(f, "{}", zone_key),
        }
    }
}

/// Chart-local hover state; `None` whenever no row is hovered.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipState {
    pub selected_layer_key: LayerKey,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

pub fn is_bigger_than_mobile(viewport_width: f64) -> bool {
    viewport_width >= SM_BREAKPOINT
}

pub fn tooltip_height(display_by_emissions: bool) -> f64 {
    if display_by_emissions {
        EMISSIONS_TOOLTIP_HEIGHT
    } else {
        POWER_TOOLTIP_HEIGHT
    }
}

/// Place a tooltip next to the cursor.
///
/// On mobile the tooltip is a full-width sheet anchored at the origin. On
/// larger screens it sits 10px right of the cursor with the cursor 40px
/// above its bottom edge, flipped to the left when it would overflow the
/// viewport, and kept inside the viewport vertically.
pub fn get_offset_tooltip_position(
    mouse_position_x: f64,
    mouse_position_y: f64,
    tooltip_height: f64,
    is_bigger_than_mobile: bool,
    viewport: Viewport,
) -> Point {
    if !is_bigger_than_mobile {
        return Point::default();
    }
    let x_offset = 10.0;
    let y_offset = tooltip_height - 40.0;

    let mut x = mouse_position_x + x_offset;
    if x + TOOLTIP_WIDTH > viewport.width {
        x = mouse_position_x - x_offset - TOOLTIP_WIDTH;
    }

    let mut y = mouse_position_y - y_offset;
    if y + tooltip_height > viewport.height {
        y = viewport.height - tooltip_height;
    }

    Point {
        x: x.max(0.0),
        y: y.max(0.0),
    }
}

/// Keep the tooltip from sliding under the page header.
pub fn clamp_below_header(y: f64, header_height: f64) -> f64 {
    if y <= header_height {
        header_height
    } else {
        y
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipKind {
    Production,
    Storage { charging: bool },
    Import,
    Export,
}

/// Figures shown in the tooltip of one hovered row.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownTooltipContent {
    pub layer_key: LayerKey,
    pub kind: TooltipKind,
    /// Absolute MW of the row.
    pub usage: Option<f64>,
    /// Installed capacity, or exchange capacity in the flow direction.
    pub capacity: Option<f64>,
    /// Absolute tCO₂eq/h of the row.
    pub emissions: Option<f64>,
    pub total: Option<f64>,
    pub total_emissions: Option<f64>,
    /// Share of `total`, or of `total_emissions` when displaying emissions.
    pub percentage: Option<f64>,
    pub co2_intensity: Option<f64>,
    pub co2_intensity_source: Option<String>,
    pub is_estimated: bool,
    pub estimated_percentage: Option<f64>,
}

fn share(part: Option<f64>, total: Option<f64>) -> Option<f64> {
    match (part, total) {
        (Some(part), Some(total)) if total > 0.0 => Some(part / total * 100.0),
        _ => None,
    }
}

impl BreakdownTooltipContent {
    pub fn for_layer(
        layer_key: &LayerKey,
        zone_detail: &ZoneDetail,
        mix_mode: MixMode,
        display_by_emissions: bool,
    ) -> Option<Self> {
        match layer_key {
            LayerKey::Mode(mode) => {
                Some(Self::for_mode(*mode, zone_detail, mix_mode, display_by_emissions))
            }
            LayerKey::Zone(zone_key) => {
                Self::for_exchange(zone_key, zone_detail, display_by_emissions)
            }
        }
    }

    fn for_mode(
        mode: ElectricityMode,
        zone_detail: &ZoneDetail,
        mix_mode: MixMode,
        display_by_emissions: bool,
    ) -> Self {
        let rows = get_production_data(zone_detail);
        let row = rows.iter().find(|row| row.mode == mode);
        let value = row.and_then(get_electricity_production_value);
        let kind = if mode.is_storage() {
            TooltipKind::Storage {
                charging: value.map(|v| v < 0.0).unwrap_or(false),
            }
        } else {
            TooltipKind::Production
        };
        let usage = value.map(f64::abs);
        let emissions = row.and_then(|row| row.g_co2eq).map(f64::abs);
        let (total, total_emissions) = match mix_mode {
            MixMode::Consumption => (
                zone_detail.total_consumption,
                zone_detail.total_co2_consumption,
            ),
            MixMode::Production => (
                zone_detail.total_production,
                zone_detail.total_co2_production,
            ),
        };
        let percentage = if display_by_emissions {
            share(emissions, total_emissions)
        } else {
            share(usage, total)
        };
        Self {
            layer_key: LayerKey::Mode(mode),
            kind,
            usage,
            capacity: zone_detail.capacity_for(mode),
            emissions,
            total,
            total_emissions,
            percentage,
            co2_intensity: zone_detail.co2_intensity_for(mode),
            co2_intensity_source: zone_detail.co2_intensity_source_for(mode).map(str::to_string),
            is_estimated: zone_detail.is_estimated(),
            estimated_percentage: zone_detail.estimated_percentage,
        }
    }

    fn for_exchange(
        zone_key: &ZoneKey,
        zone_detail: &ZoneDetail,
        display_by_emissions: bool,
    ) -> Option<Self> {
        let row = get_exchange_data(
            zone_detail,
            std::slice::from_ref(zone_key),
            MixMode::Consumption,
        )
        .into_iter()
        .next()?;
        let is_export = row.is_export();
        let (low, high) = row.exchange_capacity_range;
        let (kind, capacity, total, total_emissions) = if is_export {
            (
                TooltipKind::Export,
                low.abs(),
                zone_detail.total_export,
                zone_detail.total_co2_export,
            )
        } else {
            (
                TooltipKind::Import,
                high,
                zone_detail.total_import,
                zone_detail.total_co2_import,
            )
        };
        let usage = row.exchange.map(f64::abs);
        let emissions = row.g_co2eq.map(f64::abs);
        let percentage = if display_by_emissions {
            share(emissions, total_emissions)
        } else {
            share(usage, total)
        };
        Some(Self {
            layer_key: LayerKey::Zone(zone_key.clone()),
            kind,
            usage,
            capacity: Some(capacity),
            emissions,
            total,
            total_emissions,
            percentage,
            co2_intensity: row.co2_intensity,
            co2_intensity_source: None,
            is_estimated: zone_detail.is_estimated(),
            estimated_percentage: zone_detail.estimated_percentage,
        })
    }

    /// Translated label of the hovered row.
    pub fn title(&self, locale: Locale) -> String {
        match &self.layer_key {
            LayerKey::Mode(mode) => t(locale, mode.as_str()),
            LayerKey::Zone(zone_key) => zone_key.to_string(),
        }
    }

    /// One-sentence summary of the row's share.
    pub fn headline(
        &self,
        locale: Locale,
        zone_key: &ZoneKey,
        mix_mode: MixMode,
        display_by_emissions: bool,
    ) -> String {
        let percentage = self
            .percentage
            .map(format_number)
            .unwrap_or_else(|| "?".to_string());
        match &self.layer_key {
            LayerKey::Mode(mode) => {
                let verb = match mix_mode {
                    MixMode::Consumption => t(locale, "tooltips.verb.available"),
                    MixMode::Production => t(locale, "tooltips.verb.produced"),
                };
                let key = if display_by_emissions {
                    "tooltips.emissions-share"
                } else {
                    "tooltips.production-share"
                };
                let mode_label = t(locale, mode.as_str());
                t_with(
                    locale,
                    key,
                    &[
                        ("percentage", percentage.as_str()),
                        ("verb", verb.as_str()),
                        ("zone", zone_key.as_str()),
                        ("mode", mode_label.as_str()),
                    ],
                )
            }
            LayerKey::Zone(neighbour) => {
                let key = if self.kind == TooltipKind::Export {
                    "tooltips.export-share"
                } else {
                    "tooltips.import-share"
                };
                t_with(
                    locale,
                    key,
                    &[
                        ("percentage", percentage.as_str()),
                        ("zone", zone_key.as_str()),
                        ("neighbour", neighbour.as_str()),
                    ],
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emap_types::{ZoneDetails, SAMPLE_ZONE_DETAILS};

    const DESKTOP: Viewport = Viewport {
        width: 1280.0,
        height: 800.0,
    };

    fn first_state() -> ZoneDetail {
        let details = ZoneDetails::from_json(SAMPLE_ZONE_DETAILS).unwrap();
        details.zone_states.values().next().unwrap().clone()
    }

    #[test]
    fn mobile_tooltip_sits_at_origin() {
        let p = get_offset_tooltip_position(300.0, 500.0, 360.0, false, DESKTOP);
        assert_eq!(p, Point { x: 0.0, y: 0.0 });
    }

    #[test]
    fn desktop_tooltip_is_offset_from_cursor() {
        let p = get_offset_tooltip_position(300.0, 500.0, 360.0, true, DESKTOP);
        assert_eq!(p, Point { x: 310.0, y: 180.0 });
        let emissions = get_offset_tooltip_position(300.0, 500.0, 190.0, true, DESKTOP);
        assert_eq!(emissions, Point { x: 310.0, y: 350.0 });
    }

    #[test]
    fn tooltip_flips_left_near_right_edge() {
        let p = get_offset_tooltip_position(1100.0, 500.0, 360.0, true, DESKTOP);
        assert_eq!(p.x, 1100.0 - 10.0 - TOOLTIP_WIDTH);
    }

    #[test]
    fn tooltip_stays_inside_viewport_vertically() {
        let top = get_offset_tooltip_position(300.0, 50.0, 360.0, true, DESKTOP);
        assert_eq!(top.y, 0.0);
        let bottom = get_offset_tooltip_position(300.0, 790.0, 190.0, true, DESKTOP);
        assert_eq!(bottom.y, 800.0 - 190.0);
    }

    #[test]
    fn clamps_tooltip_below_header() {
        assert_eq!(clamp_below_header(20.0, 58.0), 58.0);
        assert_eq!(clamp_below_header(58.0, 58.0), 58.0);
        assert_eq!(clamp_below_header(120.0, 58.0), 120.0);
    }

    #[test]
    fn tooltip_height_depends_on_display() {
        assert_eq!(tooltip_height(true), 190.0);
        assert_eq!(tooltip_height(false), 360.0);
    }

    #[test]
    fn production_tooltip_share_of_consumption() {
        let state = first_state();
        let content = BreakdownTooltipContent::for_layer(
            &LayerKey::Mode(ElectricityMode::Wind),
            &state,
            MixMode::Consumption,
            false,
        )
        .unwrap();
        assert_eq!(content.kind, TooltipKind::Production);
        assert_eq!(content.usage, Some(18_250.0));
        assert_eq!(content.capacity, Some(69_400.0));
        let expected = 18_250.0 / 61_930.0 * 100.0;
        assert!((content.percentage.unwrap() - expected).abs() < 1e-9);
        assert_eq!(content.co2_intensity_source.as_deref(), Some("UNECE 2022"));
        assert_eq!(
            content.headline(Locale::En, &state.zone_key, MixMode::Consumption, false),
            "29.5% of electricity available in DE comes from wind"
        );
    }

    #[test]
    fn charging_storage_is_flagged() {
        let state = first_state();
        let content = BreakdownTooltipContent::for_layer(
            &LayerKey::Mode(ElectricityMode::BatteryStorage),
            &state,
            MixMode::Production,
            false,
        )
        .unwrap();
        assert_eq!(content.kind, TooltipKind::Storage { charging: true });
        assert_eq!(content.usage, Some(85.0));
        assert_eq!(content.emissions, Some(0.0));
    }

    #[test]
    fn export_tooltip_uses_export_totals() {
        let state = first_state();
        let content = BreakdownTooltipContent::for_layer(
            &LayerKey::Zone(ZoneKey::from("AT")),
            &state,
            MixMode::Consumption,
            false,
        )
        .unwrap();
        assert_eq!(content.kind, TooltipKind::Export);
        assert_eq!(content.capacity, Some(5400.0));
        assert_eq!(content.total, Some(2700.0));
        assert_eq!(content.title(Locale::Fr), "AT");
        assert!(content
            .headline(Locale::En, &state.zone_key, MixMode::Consumption, false)
            .ends_with("is exported to AT"));
    }

    #[test]
    fn emissions_share_when_displaying_emissions() {
        let state = first_state();
        let content = BreakdownTooltipContent::for_layer(
            &LayerKey::Mode(ElectricityMode::Coal),
            &state,
            MixMode::Production,
            true,
        )
        .unwrap();
        let expected = 12_660.24 / 17_387.3 * 100.0;
        assert!((content.percentage.unwrap() - expected).abs() < 1e-6);
    }
}
