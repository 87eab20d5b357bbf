//! Decade-growth bar chart, one bar per demographic.

use dioxus::prelude::*;
use sdd_chart_ui::components::EmptyNotice;
use sdd_chart_ui::palette;
use sdd_chart_ui::scale::{format_int, BandScale, LinearScale};
use sdd_data::Demographic;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 400.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_BOTTOM: f64 = 40.0;
const MARGIN_LEFT: f64 = 50.0;

/// One bar: a demographic and its decade growth in degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthBar {
    pub demographic: Demographic,
    pub value: f64,
}

#[derive(Props, Clone, PartialEq)]
pub struct GrowthBarChartProps {
    pub bars: Vec<GrowthBar>,
}

/// Vertical bars with value labels on top, staggered entrance from the
/// baseline.
#[component]
pub fn GrowthBarChart(props: GrowthBarChartProps) -> Element {
    if props.bars.is_empty() {
        return rsx! {
            EmptyNotice { message: "No growth data" }
        };
    }

    let inner_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let inner_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

    let max = props.bars.iter().map(|b| b.value).fold(0.0, f64::max);
    let y = LinearScale::new((0.0, max * 1.1), (inner_height, 0.0));
    let x = BandScale::new(
        props
            .bars
            .iter()
            .map(|b| b.demographic.label().to_string())
            .collect(),
        (0.0, inner_width),
        0.3,
    );

    struct Bar {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: &'static str,
        label: &'static str,
        label_x: f64,
        label_y: f64,
        value_label: String,
        value_y: f64,
        delay: String,
    }

    let bandwidth = x.bandwidth();
    let bars: Vec<Bar> = props
        .bars
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            let bx = x.position(i);
            let by = y.scale(bar.value);
            Bar {
                x: bx,
                y: by,
                width: bandwidth,
                height: inner_height - by,
                color: palette::series_color(bar.demographic),
                label: bar.demographic.label(),
                label_x: bx + bandwidth / 2.0,
                label_y: inner_height + 20.0,
                value_label: format_int(bar.value),
                value_y: by - 8.0,
                delay: format!("animation-delay: {}ms;", i * 120),
            }
        })
        .collect();

    let grid: Vec<(f64, String)> = y
        .ticks(5)
        .into_iter()
        .map(|t| (y.scale(t), format_int(t)))
        .collect();
    let axis_y = inner_height;

    rsx! {
        svg {
            view_box: "0 0 {WIDTH} {HEIGHT}",
            width: "{WIDTH}",
            height: "{HEIGHT}",
            g {
                transform: "translate({MARGIN_LEFT},{MARGIN_TOP})",

                for (gy, label) in grid {
                    line {
                        x1: "0",
                        x2: "{inner_width}",
                        y1: "{gy}",
                        y2: "{gy}",
                        stroke: "#e0e0e0",
                        stroke_dasharray: "3,3",
                    }
                    text {
                        x: "-8",
                        y: "{gy}",
                        text_anchor: "end",
                        dominant_baseline: "middle",
                        font_size: "11",
                        fill: "#666",
                        "{label}"
                    }
                }
                line {
                    x1: "0",
                    x2: "{inner_width}",
                    y1: "{axis_y}",
                    y2: "{axis_y}",
                    stroke: "#999",
                }

                for bar in &bars {
                    rect {
                        class: "chart-grow-up",
                        style: "{bar.delay}",
                        x: "{bar.x}",
                        y: "{bar.y}",
                        width: "{bar.width}",
                        height: "{bar.height}",
                        fill: "{bar.color}",
                        rx: "3",
                    }
                    text {
                        x: "{bar.label_x}",
                        y: "{bar.value_y}",
                        text_anchor: "middle",
                        font_size: "13",
                        font_weight: "bold",
                        fill: "#333",
                        "+{bar.value_label}"
                    }
                    text {
                        x: "{bar.label_x}",
                        y: "{bar.label_y}",
                        text_anchor: "middle",
                        font_size: "12",
                        fill: "#666",
                        "{bar.label}"
                    }
                }
            }
        }
    }
}
