//! Multi-series line chart of degrees per demographic over the decade.

use dioxus::prelude::*;
use sdd_chart_ui::components::{EmptyNotice, HoverTooltip, TooltipInfo};
use sdd_chart_ui::palette;
use sdd_chart_ui::path::line_path;
use sdd_chart_ui::scale::{format_int, year_date, LinearScale, TimeScale};
use sdd_data::{Demographic, DemographicRecord};
use sdd_derive::series::{demo_series, max_value};

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 400.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_RIGHT: f64 = 150.0;
const MARGIN_BOTTOM: f64 = 50.0;
const MARGIN_LEFT: f64 = 80.0;

struct Dot {
    cx: f64,
    cy: f64,
    color: &'static str,
    info: TooltipInfo,
}

struct Series {
    color: &'static str,
    label: &'static str,
    path: String,
    dots: Vec<Dot>,
    legend_y: f64,
}

#[derive(Props, Clone, PartialEq)]
pub struct TimeSeriesChartProps {
    pub records: Vec<DemographicRecord>,
}

/// Four lines with dots, a y-grid and a legend. All series share one
/// y-domain so their slopes are comparable.
#[component]
pub fn TimeSeriesChart(props: TimeSeriesChartProps) -> Element {
    let mut tooltip = use_signal(|| None::<TooltipInfo>);

    let records = &props.records;
    if records.is_empty() {
        return rsx! {
            EmptyNotice { message: "No degree data loaded" }
        };
    }

    let inner_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let inner_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

    let first_year = records.first().map(|r| r.year).unwrap_or(2011);
    let last_year = records.last().map(|r| r.year).unwrap_or(2021);
    let x = TimeScale::new(
        (year_date(first_year), year_date(last_year)),
        (0.0, inner_width),
    );
    let y = LinearScale::new((0.0, max_value(records) * 1.05), (inner_height, 0.0));

    let grid: Vec<(f64, String)> = y
        .ticks(5)
        .into_iter()
        .map(|t| (y.scale(t), format_int(t)))
        .collect();
    let year_ticks: Vec<(f64, i32)> = records
        .iter()
        .map(|r| (x.scale(year_date(r.year)), r.year))
        .collect();

    let series: Vec<Series> = Demographic::ALL
        .iter()
        .enumerate()
        .map(|(i, &demo)| {
            let points: Vec<(f64, f64)> = demo_series(records, demo)
                .into_iter()
                .map(|(year, value)| (x.scale(year_date(year)), y.scale(value)))
                .collect();
            let dots = demo_series(records, demo)
                .into_iter()
                .map(|(year, value)| {
                    let cx = x.scale(year_date(year));
                    let cy = y.scale(value);
                    let count = format_int(value);
                    Dot {
                        cx,
                        cy,
                        color: palette::series_color(demo),
                        info: TooltipInfo::new(
                            cx,
                            cy,
                            vec![format!("{}: {year}", demo.label()), format!("{count} degrees")],
                        ),
                    }
                })
                .collect();
            Series {
                color: palette::series_color(demo),
                label: demo.label(),
                path: line_path(&points),
                dots,
                legend_y: i as f64 * 22.0,
            }
        })
        .collect();

    let axis_y = inner_height;
    let legend_x = inner_width + 20.0;
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
                    {
                        let label_y = axis_y + 20.0;
                        rsx! {
                            text {
                                x: "{tx}",
                                y: "{label_y}",
                                text_anchor: "middle",
                                font_size: "11",
                                fill: "#666",
                                "{year}"
                            }
                        }
                    }
                }
                line {
                    x1: "0",
                    x2: "{inner_width}",
                    y1: "{axis_y}",
                    y2: "{axis_y}",
                    stroke: "#999",
                }

                for (si, s) in series.iter().enumerate() {
                    {
                        let delay = format!("animation-delay: {}ms;", si * 150);
                        rsx! {
                            path {
                                class: "chart-fade-in",
                                style: "{delay}",
                                d: "{s.path}",
                                fill: "none",
                                stroke: "{s.color}",
                                stroke_width: "2.5",
                            }
                        }
                    }
                    for dot in &s.dots {
                        {
                            let info = dot.info.clone();
                            rsx! {
                                circle {
                                    cx: "{dot.cx}",
                                    cy: "{dot.cy}",
                                    r: "4",
                                    fill: "{dot.color}",
                                    stroke: "#fff",
                                    stroke_width: "1.5",
                                    onmouseenter: move |_| tooltip.set(Some(info.clone())),
                                    onmouseleave: move |_| tooltip.set(None),
                                }
                            }
                        }
                    }
                    text {
                        x: "{legend_x}",
                        y: "{s.legend_y}",
                        font_size: "13",
                        fill: "{s.color}",
                        font_weight: "bold",
                        "{s.label}"
                    }
                }

                if let Some(info) = info {
                    HoverTooltip { info }
                }
            }
        }
    }
}
