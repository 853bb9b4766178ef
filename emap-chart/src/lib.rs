//! Presentation logic for the electricity breakdown charts.
//!
//! Everything here is a pure function of zone data and display options, so
//! the Dioxus components in `emap-ui` and the CLI share the same rows,
//! scales, units and tooltip figures:
//! - `production` / `exchange`: chart rows derived from a zone state
//! - `layout` / `scale`: row positions and value-to-pixel mapping
//! - `units`: unit selection and number formatting
//! - `tooltip`: hover placement and tooltip content
//! - `sources`: data-source citations
//! - `i18n`: translated labels

pub mod breakdown;
pub mod constants;
pub mod exchange;
pub mod i18n;
pub mod layout;
pub mod mix;
pub mod production;
pub mod scale;
pub mod sources;
pub mod tooltip;
pub mod units;

pub use breakdown::BarBreakdownChartData;
pub use i18n::{t, t_with, Locale};
pub use mix::{MixMode, TimeAverage};
pub use scale::LinearScale;
