//! Single line over `(year, value)` points.
//!
//! Used twice in the story: the college-aged Hispanic population series
//! from `data2.csv` and the supplemental HSI count series.

use dioxus::prelude::*;
use sdd_chart_ui::components::{EmptyNotice, HoverTooltip, TooltipInfo};
use sdd_chart_ui::path::line_path;
use sdd_chart_ui::scale::{format_int, format_si, year_date, LinearScale, TimeScale};

const WIDTH: f64 = 700.0;
const HEIGHT: f64 = 350.0;
const MARGIN_TOP: f64 = 30.0;
const MARGIN_RIGHT: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 50.0;
const MARGIN_LEFT: f64 = 80.0;

#[derive(Props, Clone, PartialEq)]
pub struct SingleSeriesChartProps {
    /// `(year, value)` points in ascending year order.
    pub points: Vec<(i32, f64)>,
    pub color: String,
    /// Unit shown in tooltips, e.g. "people" or "institutions".
    #[props(default = String::new())]
    pub unit: String,
}

#[component]
pub fn SingleSeriesChart(props: SingleSeriesChartProps) -> Element {
    let mut tooltip = use_signal(|| None::<TooltipInfo>);

    if props.points.is_empty() {
        return rsx! {
            EmptyNotice { message: "No data loaded" }
        };
    }

    let inner_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let inner_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

    let first_year = props.points.first().map(|p| p.0).unwrap_or(2011);
    let last_year = props.points.last().map(|p| p.0).unwrap_or(2021);
    let min = props.points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
    let max = props.points.iter().map(|p| p.1).fold(0.0, f64::max);
    // Zoom into the observed band rather than baselining at zero; a
    // near-flat series at millions scale would otherwise read as a line
    // glued to the top of the chart.
    let pad = ((max - min) * 0.15).max(max * 0.01);
    let x = TimeScale::new(
        (year_date(first_year), year_date(last_year)),
        (0.0, inner_width),
    );
    let y = LinearScale::new((min - pad, max + pad), (inner_height, 0.0));

    let line: Vec<(f64, f64)> = props
        .points
        .iter()
        .map(|&(year, value)| (x.scale(year_date(year)), y.scale(value)))
        .collect();
    let path = line_path(&line);

    struct Dot {
        cx: f64,
        cy: f64,
        info: TooltipInfo,
    }
    let unit = props.unit.clone();
    let dots: Vec<Dot> = props
        .points
        .iter()
        .map(|&(year, value)| {
            let cx = x.scale(year_date(year));
            let cy = y.scale(value);
            let count = format_int(value);
            let value_line = if unit.is_empty() {
                count
            } else {
                format!("{count} {unit}")
            };
            Dot {
                cx,
                cy,
                info: TooltipInfo::new(cx, cy, vec![year.to_string(), value_line]),
            }
        })
        .collect();

    let grid: Vec<(f64, String)> = y
        .ticks(5)
        .into_iter()
        .map(|t| (y.scale(t), format_si(t)))
        .collect();
    let year_ticks: Vec<(f64, i32)> = props
        .points
        .iter()
        .map(|&(year, _)| (x.scale(year_date(year)), year))
        .collect();
    let axis_y = inner_height;
    let tick_label_y = inner_height + 20.0;
    let color = props.color.clone();
    let info = tooltip();

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
                        x: "-10",
                        y: "{gy}",
                        text_anchor: "end",
                        dominant_baseline: "middle",
                        font_size: "11",
                        fill: "#666",
                        "{label}"
                    }
                }
                for (tx, year) in year_ticks {
                    text {
                        x: "{tx}",
                        y: "{tick_label_y}",
                        text_anchor: "middle",
                        font_size: "11",
                        fill: "#666",
                        "{year}"
                    }
                }
                line {
                    x1: "0",
                    x2: "{inner_width}",
                    y1: "{axis_y}",
                    y2: "{axis_y}",
                    stroke: "#999",
                }

                path {
                    class: "chart-fade-in",
                    d: "{path}",
                    fill: "none",
                    stroke: "{color}",
                    stroke_width: "2.5",
                }
                for dot in &dots {
                    {
                        let info = dot.info.clone();
                        rsx! {
                            circle {
                                cx: "{dot.cx}",
                                cy: "{dot.cy}",
                                r: "4",
                                fill: "{color}",
                                stroke: "#fff",
                                stroke_width: "1.5",
                                onmouseenter: move |_| tooltip.set(Some(info.clone())),
                                onmouseleave: move |_| tooltip.set(None),
                            }
                        }
                    }
                }

                if let Some(info) = info {
                    HoverTooltip { info }
                }
            }
        }
    }
}
