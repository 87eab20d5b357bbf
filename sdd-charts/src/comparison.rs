//! Side-by-side demographic comparison over a selectable year range.

use dioxus::prelude::*;
use sdd_chart_ui::components::{DemographicToggles, EmptyNotice};
use sdd_chart_ui::interact::toggle_capped;
use sdd_chart_ui::palette;
use sdd_chart_ui::scale::{format_int, BandScale, LinearScale};
use sdd_data::{Demographic, DemographicRecord};
use sdd_derive::{growth_table, GrowthSummary};

const WIDTH: f64 = 700.0;
const HEIGHT: f64 = 400.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_RIGHT: f64 = 150.0;
const MARGIN_BOTTOM: f64 = 80.0;
const MARGIN_LEFT: f64 = 80.0;

/// How many demographics can be compared at once.
const SELECTION_CAP: usize = 3;

/// Metric shown before the user touches the dropdown.
const DEFAULT_METRIC: Metric = Metric::Total;

/// What the bars measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Degrees awarded in the end year.
    Total,
    /// Absolute growth over the range.
    Growth,
    /// Percent growth over the range.
    Percentage,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Total, Metric::Growth, Metric::Percentage];

    pub fn id(&self) -> &'static str {
        match self {
            Metric::Total => "total",
            Metric::Growth => "growth",
            Metric::Percentage => "percentage",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Metric::Total => "Total Degrees",
            Metric::Growth => "Degree Growth",
            Metric::Percentage => "Percentage Growth",
        }
    }

    fn value(&self, summary: &GrowthSummary) -> f64 {
        match self {
            Metric::Total => summary.end_value,
            Metric::Growth => summary.growth,
            Metric::Percentage => summary.percentage,
        }
    }

    fn format(&self, value: f64) -> String {
        match self {
            Metric::Percentage => format!("{value:.1}%"),
            _ => format_int(value),
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ComparisonChartProps {
    pub records: Vec<DemographicRecord>,
}

/// Animated bars for up to three demographics, with a metric dropdown,
/// a year-range pair, and a derived insights list. Deselecting every
/// demographic swaps the chart for an informational placeholder.
#[component]
pub fn ComparisonChart(props: ComparisonChartProps) -> Element {
    let mut selected =
        use_signal(|| vec![Demographic::Hispanic, Demographic::Black, Demographic::Asian]);
    let mut metric = use_signal(|| DEFAULT_METRIC);
    let years: Vec<i32> = props.records.iter().map(|r| r.year).collect();
    let first = years.first().copied().unwrap_or(2011);
    let last = years.last().copied().unwrap_or(2021);
    let mut start_year = use_signal(move || first);
    let mut end_year = use_signal(move || last);

    if props.records.is_empty() {
        return rsx! {
            EmptyNotice { message: "No degree data loaded" }
        };
    }

    let current_metric = metric();
    let current_selection = selected();
    let summaries: Vec<GrowthSummary> = growth_table(&props.records, start_year(), end_year())
        .into_iter()
        .filter(|s| current_selection.contains(&s.demographic))
        .collect();

    let controls = rsx! {
        div {
            style: "display: flex; gap: 16px; flex-wrap: wrap; align-items: center; margin-bottom: 8px;",
            select {
                onchange: move |evt| {
                    if let Some(m) = Metric::ALL.iter().find(|m| m.id() == evt.value()) {
                        metric.set(*m);
                    }
                },
                for m in Metric::ALL {
                    option {
                        value: "{m.id()}",
                        selected: m == current_metric,
                        "{m.label()}"
                    }
                }
            }
            select {
                onchange: move |evt| {
                    if let Ok(year) = evt.value().parse::<i32>() {
                        start_year.set(year);
                    }
                },
                for year in years.clone() {
                    option {
                        value: "{year}",
                        selected: year == start_year(),
                        "From {year}"
                    }
                }
            }
            select {
                onchange: move |evt| {
                    if let Ok(year) = evt.value().parse::<i32>() {
                        end_year.set(year);
                    }
                },
                for year in years.clone() {
                    option {
                        value: "{year}",
                        selected: year == end_year(),
                        "To {year}"
                    }
                }
            }
        }
        DemographicToggles {
            selected: current_selection.clone(),
            cap: SELECTION_CAP,
            on_toggle: move |demo| {
                let mut next = selected();
                toggle_capped(&mut next, demo, SELECTION_CAP);
                selected.set(next);
            },
        }
    };

    if summaries.is_empty() {
        let message = if current_selection.is_empty() {
            "Select at least one demographic to compare"
        } else {
            "No records for the chosen year range"
        };
        return rsx! {
            div {
                {controls}
                EmptyNotice { message: "{message}" }
            }
        };
    }

    let inner_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let inner_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

    let values: Vec<f64> = summaries.iter().map(|s| current_metric.value(s)).collect();
    let max = values.iter().copied().fold(0.0, f64::max);
    let min = values.iter().copied().fold(0.0, f64::min);
    let y = LinearScale::new((min * 1.1, max * 1.1), (inner_height, 0.0));
    let x = BandScale::new(
        summaries
            .iter()
            .map(|s| s.demographic.label().to_string())
            .collect(),
        (0.0, inner_width),
        0.3,
    );
    let baseline = y.scale(0.0);

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
    let bars: Vec<Bar> = summaries
        .iter()
        .enumerate()
        .map(|(i, summary)| {
            let value = current_metric.value(summary);
            let bx = x.position(i);
            let by = y.scale(value);
            let top = by.min(baseline);
            Bar {
                x: bx,
                y: top,
                width: bandwidth,
                height: (by - baseline).abs(),
                color: palette::series_color(summary.demographic),
                label: summary.demographic.label(),
                label_x: bx + bandwidth / 2.0,
                label_y: inner_height + 24.0,
                value_label: current_metric.format(value),
                value_y: top - 8.0,
                delay: format!("animation-delay: {}ms;", i * 120),
            }
        })
        .collect();

    let insights = derive_insights(&summaries, start_year(), end_year());
    let grid: Vec<(f64, String)> = y
        .ticks(5)
        .into_iter()
        .map(|t| (y.scale(t), current_metric.format(t)))
        .collect();
    let metric_title = current_metric.label();
    let title_x = inner_width / 2.0;

    rsx! {
        div {
            {controls}
            svg {
                view_box: "0 0 {WIDTH} {HEIGHT}",
                width: "{WIDTH}",
                height: "{HEIGHT}",
                g {
                    transform: "translate({MARGIN_LEFT},{MARGIN_TOP})",
                    text {
                        x: "{title_x}",
                        y: "-20",
                        text_anchor: "middle",
                        font_size: "14",
                        font_weight: "bold",
                        fill: "#333",
                        "{metric_title}"
                    }
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
                        y1: "{baseline}",
                        y2: "{baseline}",
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
                            "{bar.value_label}"
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
            ul {
                style: "font-size: 13px; color: #444; line-height: 1.6;",
                for insight in insights {
                    li { "{insight}" }
                }
            }
        }
    }
}

/// Human-readable observations about the compared demographics.
fn derive_insights(summaries: &[GrowthSummary], start: i32, end: i32) -> Vec<String> {
    let mut insights = Vec::new();

    if let Some(fastest) = summaries
        .iter()
        .max_by(|a, b| a.percentage.total_cmp(&b.percentage))
    {
        insights.push(format!(
            "{} shows the fastest growth from {start} to {end} at {:.1}%",
            fastest.demographic.label(),
            fastest.percentage
        ));
    }
    if let Some(largest) = summaries.iter().max_by(|a, b| a.growth.total_cmp(&b.growth)) {
        insights.push(format!(
            "{} added the most degrees: {} over the range",
            largest.demographic.label(),
            format_int(largest.growth)
        ));
    }
    for summary in summaries.iter().filter(|s| s.growth < 0.0) {
        insights.push(format!(
            "{} awarded fewer degrees in {end} than in {start}",
            summary.demographic.label()
        ));
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(demo: Demographic, start: f64, end: f64) -> GrowthSummary {
        GrowthSummary {
            demographic: demo,
            start_value: start,
            end_value: end,
            growth: end - start,
            percentage: if start > 0.0 {
                (end - start) / start * 100.0
            } else {
                0.0
            },
        }
    }

    #[test]
    fn initial_view_shows_total_degrees() {
        assert_eq!(DEFAULT_METRIC, Metric::Total);
        let s = summary(Demographic::Hispanic, 25000.0, 52499.0);
        assert_eq!(DEFAULT_METRIC.value(&s), 52499.0);
    }

    #[test]
    fn metric_values_and_formatting() {
        let s = summary(Demographic::Hispanic, 25000.0, 52499.0);
        assert_eq!(Metric::Total.value(&s), 52499.0);
        assert_eq!(Metric::Growth.value(&s), 27499.0);
        assert!((Metric::Percentage.value(&s) - 109.996).abs() < 1e-9);
        assert_eq!(Metric::Total.format(52499.0), "52,499");
        assert_eq!(Metric::Percentage.format(109.996), "110.0%");
    }

    #[test]
    fn insights_name_fastest_and_largest() {
        let summaries = vec![
            summary(Demographic::Hispanic, 25000.0, 52499.0),
            summary(Demographic::Asian, 30000.0, 38594.0),
        ];
        let insights = derive_insights(&summaries, 2011, 2021);
        assert!(insights[0].starts_with("Hispanic"));
        assert!(insights[0].contains("110.0%"));
        assert!(insights[1].contains("27,499"));
    }

    #[test]
    fn shrinking_demographic_gets_called_out() {
        let summaries = vec![summary(Demographic::Other, 21001.0, 14120.0)];
        let insights = derive_insights(&summaries, 2011, 2021);
        assert!(insights.iter().any(|i| i.contains("fewer degrees")));
    }
}
