//! A single horizontal bar spanning a value range.

use dioxus::prelude::*;
use emap_chart::constants::ROW_HEIGHT;
use emap_chart::LinearScale;

#[derive(Props, Clone, PartialEq)]
pub struct HorizontalBarProps {
    /// Value range; either end may be unknown
    pub range: (Option<f64>, Option<f64>),
    pub scale: LinearScale,
    pub fill: String,
    #[props(default = String::new())]
    pub class: String,
}

/// Pixel `(x, width)` of a bar, `None` when nothing should be drawn.
///
/// Endpoints may come in either order. Unknown or non-finite ends and
/// zero-width bars draw nothing.
pub fn bar_extent(range: (Option<f64>, Option<f64>), scale: &LinearScale) -> Option<(f64, f64)> {
    let (start, end) = match range {
        (Some(start), Some(end)) if start.is_finite() && end.is_finite() => (start, end),
        _ => return None,
    };
    let x1 = scale.apply(start.min(end));
    let x2 = scale.apply(start.max(end));
    let width = x2 - x1;
    if width > 0.0 {
        Some((x1, width))
    } else {
        None
    }
}

#[component]
pub fn HorizontalBar(props: HorizontalBarProps) -> Element {
    let Some((x, width)) = bar_extent(props.range, &props.scale) else {
        return rsx! {};
    };
    rsx! {
        rect {
            class: "{props.class}",
            x: "{x}",
            y: "0",
            width: "{width}",
            height: "{ROW_HEIGHT}",
            fill: "{props.fill}",
            shape_rendering: "crispEdges",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale() -> LinearScale {
        LinearScale::new((-100.0, 100.0), (0.0, 200.0))
    }

    #[test]
    fn orders_endpoints() {
        assert_eq!(bar_extent((Some(50.0), Some(-50.0)), &scale()), Some((50.0, 100.0)));
    }

    #[test]
    fn unknown_ends_draw_nothing() {
        assert_eq!(bar_extent((Some(0.0), None), &scale()), None);
        assert_eq!(bar_extent((Some(0.0), Some(f64::NAN)), &scale()), None);
    }

    #[test]
    fn zero_width_draws_nothing() {
        assert_eq!(bar_extent((Some(0.0), Some(0.0)), &scale()), None);
    }
}
