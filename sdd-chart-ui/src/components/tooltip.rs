//! Single hover tooltip drawn inside a chart's SVG.

use dioxus::prelude::*;

/// Anchor point and text lines for the hover tooltip. Each chart keeps at
/// most one of these in a signal, so exactly one tooltip exists at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipInfo {
    /// Anchor in the chart group's coordinate space (the shape centroid).
    pub x: f64,
    pub y: f64,
    pub lines: Vec<String>,
}

impl TooltipInfo {
    pub fn new(x: f64, y: f64, lines: Vec<String>) -> TooltipInfo {
        TooltipInfo { x, y, lines }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct HoverTooltipProps {
    pub info: TooltipInfo,
}

/// Floating label anchored above a shape, dark box with white text.
/// Rendered as the last SVG child so it sits on top of the chart shapes.
#[component]
pub fn HoverTooltip(props: HoverTooltipProps) -> Element {
    let info = &props.info;
    let longest = info.lines.iter().map(|l| l.len()).max().unwrap_or(0);
    let box_width = (longest as f64 * 7.0 + 20.0).max(60.0);
    let box_height = info.lines.len() as f64 * 16.0 + 12.0;
    let anchor_y = info.y - 10.0;
    let box_x = -box_width / 2.0;
    let box_y = -box_height;
    let lines: Vec<(String, f64)> = info
        .lines
        .iter()
        .enumerate()
        .map(|(i, line)| (line.clone(), box_y + 18.0 + i as f64 * 16.0))
        .collect();

    rsx! {
        g {
            transform: "translate({info.x},{anchor_y})",
            pointer_events: "none",
            rect {
                x: "{box_x}",
                y: "{box_y}",
                width: "{box_width}",
                height: "{box_height}",
                fill: "rgba(0,0,0,0.8)",
                rx: "5",
            }
            for (line, line_y) in lines {
                text {
                    x: "0",
                    y: "{line_y}",
                    text_anchor: "middle",
                    fill: "#fff",
                    font_size: "12",
                    "{line}"
                }
            }
        }
    }
}
