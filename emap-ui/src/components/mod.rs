//! Reusable Dioxus RSX components for electricity map apps.

mod accordion;
mod button;
mod display_toggles;
mod error_display;
mod faq_button;
mod faq_modal;
mod horizontal_divider;
mod loading_spinner;
mod locale_selector;
mod time_slider;

pub use accordion::Accordion;
pub use button::{Button, ButtonKind, ButtonSize};
pub use display_toggles::DisplayToggles;
pub use error_display::ErrorDisplay;
pub use faq_button::{FAQButton, InfoIcon};
pub use faq_modal::FaqModal;
pub use horizontal_divider::HorizontalDivider;
pub use loading_spinner::LoadingSpinner;
pub use locale_selector::LocaleSelector;
pub use time_slider::TimeSlider;
