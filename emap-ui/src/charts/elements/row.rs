//! One labelled, hoverable chart row.

use dioxus::prelude::*;
use emap_chart::constants::{LABEL_MAX_WIDTH, PADDING_X, PADDING_Y, ROW_HEIGHT, TEXT_ADJUST_Y};
use emap_chart::layout::row_y;
use emap_chart::tooltip::Point;
use emap_chart::LinearScale;

#[derive(Props, Clone, PartialEq)]
pub struct RowProps {
    pub index: usize,
    pub label: String,
    pub width: f64,
    pub scale: LinearScale,
    /// Drawn value; `None` shows a question mark at zero
    #[props(!optional)]
    pub value: Option<f64>,
    /// Called with the cursor position in client coordinates
    pub on_mouse_over: EventHandler<Point>,
    pub on_mouse_out: EventHandler<()>,
    #[props(default = false)]
    pub is_mobile: bool,
    /// Icon drawn left of the label
    pub legend: Option<Element>,
    pub children: Element,
}

#[component]
pub fn Row(props: RowProps) -> Element {
    let y = row_y(props.index);
    let bars_x = LABEL_MAX_WIDTH + PADDING_X;
    let label_x = LABEL_MAX_WIDTH - PADDING_X;
    let hover_height = ROW_HEIGHT + PADDING_Y;
    let unknown_x = props.scale.apply(0.0) + 2.0;
    let is_mobile = props.is_mobile;
    let on_mouse_over = props.on_mouse_over;
    let on_mouse_out = props.on_mouse_out;
    let report = move |evt: MouseEvent| {
        let client = evt.client_coordinates();
        on_mouse_over.call(Point {
            x: client.x,
            y: client.y,
        });
    };

    rsx! {
        g {
            class: "row",
            transform: "translate(0, {y})",
            if let Some(legend) = props.legend {
                g {
                    transform: "translate(0, 0)",
                    {legend}
                }
            }
            text {
                x: "{label_x}",
                y: "{TEXT_ADJUST_Y}",
                fill: "currentColor",
                font_size: "11",
                text_anchor: "end",
                "{props.label}"
            }
            g {
                transform: "translate({bars_x}, 0)",
                {props.children}
                if props.value.is_none() {
                    text {
                        x: "{unknown_x}",
                        y: "{TEXT_ADJUST_Y}",
                        fill: "currentColor",
                        font_size: "11",
                        "?"
                    }
                }
            }
            rect {
                y: "-1",
                width: "{props.width}",
                height: "{hover_height}",
                fill: "transparent",
                style: "cursor: pointer;",
                onmouseover: move |evt| {
                    if !is_mobile {
                        report(evt);
                    }
                },
                onmousemove: move |evt| {
                    if !is_mobile {
                        report(evt);
                    }
                },
                onclick: move |evt| {
                    if is_mobile {
                        report(evt);
                    }
                },
                onmouseout: move |_| on_mouse_out.call(()),
            }
        }
    }
}
