//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The charts themselves are plain SVG emitted from RSX. JS is only used for
//! forwarding analytics events to the page's tracker; page geometry
//! (header height, viewport size) is read through `web_sys`.

use emap_chart::tooltip::Viewport;
use serde_json::Value;
use wasm_bindgen::JsCast;

/// Analytics events sent from the charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackEvent {
    DataSourcesClicked,
    FaqButtonClicked,
}

impl TrackEvent {
    pub fn name(&self) -> &'static str {
        match self {
            TrackEvent::DataSourcesClicked => "Data Sources Clicked",
            TrackEvent::FaqButtonClicked => "FAQ Button Clicked",
        }
    }
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('EMAP JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// JS snippet forwarding an event to `window.plausible` when it is present.
pub fn track_event_script(event: TrackEvent, props: &Value) -> String {
    let name = serde_json::to_string(event.name()).unwrap_or_default();
    let payload = serde_json::json!({ "props": props });
    format!(
        "if (typeof window.plausible === 'function') {{ window.plausible({}, {}); }}",
        name, payload
    )
}

/// Send an analytics event with its properties.
pub fn track_event(event: TrackEvent, props: Value) {
    log::info!("[EMAP] track {} {}", event.name(), props);
    call_js(&track_event_script(event, &props));
}

/// Height of the page `header` element, 0 when there is none.
pub fn header_height() -> f64 {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.query_selector("header").ok().flatten())
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|header| f64::from(header.offset_height()))
        .unwrap_or(0.0)
}

/// Current window size in CSS pixels.
pub fn viewport() -> Viewport {
    let Some(window) = web_sys::window() else {
        return Viewport {
            width: 0.0,
            height: 0.0,
        };
    };
    Viewport {
        width: window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
        height: window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_sources_event_carries_chart_prop() {
        let script = track_event_script(
            TrackEvent::DataSourcesClicked,
            &serde_json::json!({ "chart": "bar-breakdown-chart" }),
        );
        assert!(script.contains("window.plausible(\"Data Sources Clicked\""));
        assert!(script.contains(r#"{"props":{"chart":"bar-breakdown-chart"}}"#));
    }

    #[test]
    fn event_names_are_stable() {
        assert_eq!(TrackEvent::FaqButtonClicked.name(), "FAQ Button Clicked");
    }
}
