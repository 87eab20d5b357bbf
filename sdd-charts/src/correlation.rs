//! Factor-vs-degrees scatter with an OLS trend line.

use dioxus::prelude::*;
use sdd_chart_ui::components::{EmptyNotice, HoverTooltip, TooltipInfo};
use sdd_chart_ui::palette;
use sdd_chart_ui::scale::{format_int, format_si, LinearScale};
use sdd_data::{Demographic, DemographicRecord};
use sdd_derive::factors::{paired_points, Factor};
use sdd_derive::linear_regression;

const WIDTH: f64 = 700.0;
const HEIGHT: f64 = 400.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_RIGHT: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 70.0;
const MARGIN_LEFT: f64 = 70.0;

#[derive(Props, Clone, PartialEq)]
pub struct CorrelationChartProps {
    pub records: Vec<DemographicRecord>,
}

/// Scatter of a modeled factor series against real degree counts, joined
/// by year, with the fitted line dashed and Pearson's r annotated. The
/// fit disappears (rather than erroring) when the pairing yields fewer
/// than two points.
#[component]
pub fn CorrelationChart(props: CorrelationChartProps) -> Element {
    let mut factor = use_signal(|| Factor::HsiGrowth);
    let mut demographic = use_signal(|| Demographic::Hispanic);
    let mut tooltip = use_signal(|| None::<TooltipInfo>);

    let current_factor = factor();
    let current_demo = demographic();
    let points = paired_points(current_factor, &props.records, current_demo);

    let controls = rsx! {
        div {
            style: "display: flex; gap: 16px; align-items: center; margin-bottom: 8px;",
            select {
                onchange: move |evt| {
                    if let Ok(f) = evt.value().parse::<Factor>() {
                        factor.set(f);
                    }
                },
                for f in Factor::ALL {
                    option {
                        value: "{f.id()}",
                        selected: f == current_factor,
                        "{f.label()}"
                    }
                }
            }
            select {
                onchange: move |evt| {
                    if let Ok(d) = evt.value().parse::<Demographic>() {
                        demographic.set(d);
                    }
                },
                for d in Demographic::ALL {
                    option {
                        value: "{d.key()}",
                        selected: d == current_demo,
                        "{d.label()}"
                    }
                }
            }
        }
    };

    if points.is_empty() {
        return rsx! {
            div {
                {controls}
                EmptyNotice { message: "No overlapping years between the factor and the data" }
            }
        };
    }

    let inner_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let inner_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

    let x_min = points
        .iter()
        .map(|p| p.factor_value)
        .fold(f64::INFINITY, f64::min);
    let x_max = points.iter().map(|p| p.factor_value).fold(0.0, f64::max);
    let y_max = points.iter().map(|p| p.outcome_value).fold(0.0, f64::max);
    let x_pad = (x_max - x_min) * 0.08;
    let x = LinearScale::new((x_min - x_pad, x_max + x_pad), (0.0, inner_width));
    let y = LinearScale::new((0.0, y_max * 1.1), (inner_height, 0.0));

    let pairs: Vec<(f64, f64)> = points
        .iter()
        .map(|p| (p.factor_value, p.outcome_value))
        .collect();
    let fit = linear_regression(&pairs);
    let trend = fit.map(|fit| {
        (
            x.scale(x_min),
            y.scale(fit.slope * x_min + fit.intercept),
            x.scale(x_max),
            y.scale(fit.slope * x_max + fit.intercept),
        )
    });
    let r_label = fit.map(|fit| format!("r = {:.2}", fit.correlation));

    struct Dot {
        cx: f64,
        cy: f64,
        info: TooltipInfo,
    }
    let dots: Vec<Dot> = points
        .iter()
        .map(|p| {
            let cx = x.scale(p.factor_value);
            let cy = y.scale(p.outcome_value);
            let count = format_int(p.outcome_value);
            Dot {
                cx,
                cy,
                info: TooltipInfo::new(
                    cx,
                    cy,
                    vec![
                        p.year.to_string(),
                        format!("{}: {:.0}", current_factor.label(), p.factor_value),
                        format!("{count} degrees"),
                    ],
                ),
            }
        })
        .collect();

    let x_ticks: Vec<(f64, String)> = x
        .ticks(6)
        .into_iter()
        .map(|t| (x.scale(t), format_si(t)))
        .collect();
    let y_ticks: Vec<(f64, String)> = y
        .ticks(5)
        .into_iter()
        .map(|t| (y.scale(t), format_si(t)))
        .collect();

    let color = palette::series_color(current_demo);
    let axis_y = inner_height;
    let x_tick_y = inner_height + 20.0;
    let x_title_y = inner_height + 45.0;
    let x_title_x = inner_width / 2.0;
    let y_title_x = -(inner_height / 2.0);
    let factor_title = current_factor.label();
    let demo_title = current_demo.label();
    let info = tooltip();

    rsx! {
        div {
            {controls}
            svg {
                view_box: "0 0 {WIDTH} {HEIGHT}",
                width: "{WIDTH}",
                height: "{HEIGHT}",
                g {
                    transform: "translate({MARGIN_LEFT},{MARGIN_TOP})",

                    for (gy, label) in y_ticks {
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
                    for (tx, label) in x_ticks {
                        text {
                            x: "{tx}",
                            y: "{x_tick_y}",
                            text_anchor: "middle",
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
                    line {
                        x1: "0",
                        x2: "0",
                        y1: "0",
                        y2: "{axis_y}",
                        stroke: "#999",
                    }
                    text {
                        x: "{x_title_x}",
                        y: "{x_title_y}",
                        text_anchor: "middle",
                        font_size: "12",
                        fill: "#333",
                        "{factor_title}"
                    }
                    text {
                        transform: "rotate(-90)",
                        x: "{y_title_x}",
                        y: "-50",
                        text_anchor: "middle",
                        font_size: "12",
                        fill: "#333",
                        "{demo_title} STEM degrees"
                    }

                    if let Some((tx1, ty1, tx2, ty2)) = trend {
                        line {
                            x1: "{tx1}",
                            y1: "{ty1}",
                            x2: "{tx2}",
                            y2: "{ty2}",
                            stroke: "#888",
                            stroke_width: "2",
                            stroke_dasharray: "6,4",
                        }
                    }
                    for dot in &dots {
                        {
                            let info = dot.info.clone();
                            rsx! {
                                circle {
                                    class: "chart-fade-in",
                                    cx: "{dot.cx}",
                                    cy: "{dot.cy}",
                                    r: "5",
                                    fill: "{color}",
                                    fill_opacity: "0.8",
                                    stroke: "#fff",
                                    stroke_width: "1",
                                    onmouseenter: move |_| tooltip.set(Some(info.clone())),
                                    onmouseleave: move |_| tooltip.set(None),
                                }
                            }
                        }
                    }
                    if let Some(r_label) = r_label {
                        text {
                            x: "{inner_width}",
                            y: "-10",
                            text_anchor: "end",
                            font_size: "13",
                            font_weight: "bold",
                            fill: "#333",
                            "{r_label}"
                        }
                    }

                    if let Some(info) = info {
                        HoverTooltip { info }
                    }
                }
            }
        }
    }
}
