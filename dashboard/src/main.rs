//! Who is driving the growth in STEM degrees?
//!
//! A single-page data story over IPEDS-derived STEM degree counts
//! (2011-2021) broken down by demographic. Narrative sections interleave
//! with interactive charts; three tabs split the story into an overview,
//! the driving factors, and a geographic view.
//!
//! Data flow:
//! 1. On mount, `data.csv` and `data2.csv` are fetched from the app's
//!    assets and parsed into typed records.
//! 2. Each chart derives its own shapes from those records and redraws
//!    in full whenever a control changes.
//! 3. The map tab fetches the us-atlas topology separately on first use.

use dioxus::prelude::*;
use sdd_chart_ui::components::{ChartHeader, ErrorDisplay, LoadingSpinner, TabBar};
use sdd_chart_ui::fetch::fetch_text;
use sdd_chart_ui::storage;
use sdd_charts::{
    ComparisonChart, CorrelationChart, DonutSlider, GeoMap, GrowthBar, GrowthBarChart,
    ScatterPlaceholder, SingleSeriesChart, TimeSeriesChart,
};
use sdd_data::{parse_demographics, parse_year_amounts, Demographic, DemographicRecord, YearAmount};
use sdd_derive::series::year_points;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Decade growth shown by the headline bar chart. Fixed editorial
/// numbers rather than a derivation, matching the story text.
const DECADE_GROWTH: [(Demographic, f64); 4] = [
    (Demographic::Black, 12_844.0),
    (Demographic::Hispanic, 52_499.0),
    (Demographic::Asian, 38_594.0),
    (Demographic::Other, 21_001.0),
];

/// Hispanic-Serving Institution counts, 2011-2021 (HACU annual surveys).
const HSI_COUNTS: [(i32, f64); 11] = [
    (2011, 293.0),
    (2012, 311.0),
    (2013, 329.0),
    (2014, 347.0),
    (2015, 365.0),
    (2016, 381.0),
    (2017, 399.0),
    (2018, 417.0),
    (2019, 435.0),
    (2020, 452.0),
    (2021, 469.0),
];

/// Which story tab is showing. Exactly one pane renders at a time; the
/// loaded records live above the panes, so switching never refetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActivePane {
    Overview,
    DrivingFactors,
    Geography,
}

impl ActivePane {
    const ALL: [ActivePane; 3] = [
        ActivePane::Overview,
        ActivePane::DrivingFactors,
        ActivePane::Geography,
    ];

    fn label(&self) -> &'static str {
        match self {
            ActivePane::Overview => "Overview",
            ActivePane::DrivingFactors => "Driving Factors",
            ActivePane::Geography => "Geography",
        }
    }
}

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let records = use_resource(|| async move {
        let body = fetch_text("/assets/data.csv").await?;
        Ok::<Vec<DemographicRecord>, anyhow::Error>(parse_demographics(&body)?)
    });
    let population = use_resource(|| async move {
        let body = fetch_text("/assets/data2.csv").await?;
        Ok::<Vec<YearAmount>, anyhow::Error>(parse_year_amounts(&body)?)
    });

    let mut pane = use_signal(|| ActivePane::Overview);
    let mut high_contrast = use_signal(storage::load_contrast);
    let mut progress = use_signal(|| 0.0f64);

    // Scroll progress for the reading bar. The listener lives for the
    // page's lifetime, so forgetting the closure is fine.
    use_effect(move || {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return,
        };
        let on_scroll = Closure::<dyn FnMut()>::new(move || {
            let window = match web_sys::window() {
                Some(w) => w,
                None => return,
            };
            let root = match window.document().and_then(|d| d.document_element()) {
                Some(e) => e,
                None => return,
            };
            let viewport = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let max = root.scroll_height() as f64 - viewport;
            let y = window.scroll_y().unwrap_or(0.0);
            let fraction = if max > 0.0 { (y / max).clamp(0.0, 1.0) } else { 0.0 };
            progress.set(fraction);
        });
        window.set_onscroll(Some(on_scroll.as_ref().unchecked_ref()));
        on_scroll.forget();
        log::debug!("scroll progress listener installed");
    });

    let contrast = high_contrast();
    let root_class = if contrast {
        "dashboard high-contrast"
    } else {
        "dashboard"
    };
    let contrast_label = if contrast {
        "Standard colors"
    } else {
        "High contrast"
    };
    let bar_width = format!("width: {:.2}%;", progress() * 100.0);
    let active_index = ActivePane::ALL
        .iter()
        .position(|p| *p == pane())
        .unwrap_or(0);
    let tab_labels: Vec<String> = ActivePane::ALL.iter().map(|p| p.label().to_string()).collect();

    let content = match &*records.read() {
        None => rsx! {
            LoadingSpinner {}
        },
        Some(Err(e)) => rsx! {
            ErrorDisplay { message: "Could not load the degree data: {e}" }
        },
        Some(Ok(records)) => match pane() {
            ActivePane::Overview => rsx! {
                Overview { records: records.clone() }
            },
            ActivePane::DrivingFactors => {
                let population = population
                    .read()
                    .as_ref()
                    .map(|r| r.as_ref().map(Vec::clone).map_err(|e| format!("{e:#}")));
                rsx! {
                    DrivingFactors {
                        records: records.clone(),
                        population,
                    }
                }
            }
            ActivePane::Geography => rsx! {
                Geography {}
            },
        },
    };

    rsx! {
        style { "{STYLE}" }
        div {
            class: "{root_class}",
            div { class: "progress-track",
                div { class: "progress-fill", style: "{bar_width}" }
            }
            header {
                h1 { "The Changing Face of STEM" }
                p { class: "subtitle",
                    "Who is driving the growth in STEM degrees? A decade of \
                     demographic data, 2011-2021."
                }
                button {
                    class: "contrast-toggle",
                    onclick: move |_| {
                        let next = !high_contrast();
                        storage::store_contrast(next);
                        high_contrast.set(next);
                    },
                    "{contrast_label}"
                }
            }

            TabBar {
                labels: tab_labels,
                active: active_index,
                on_select: move |i: usize| pane.set(ActivePane::ALL[i]),
            }

            {content}

            footer {
                p {
                    "Degree counts derived from IPEDS completions surveys. \
                     State-level figures are modeled, not reported."
                }
            }
        }
    }
}

#[component]
fn Overview(records: Vec<DemographicRecord>) -> Element {
    let growth_bars: Vec<GrowthBar> = DECADE_GROWTH
        .iter()
        .map(|&(demographic, value)| GrowthBar { demographic, value })
        .collect();

    rsx! {
        section {
            p { class: "lede",
                "Between 2011 and 2021, the number of STEM bachelor's degrees \
                 earned by Hispanic students more than doubled, from 25,000 to \
                 52,499. No other group grew as fast. This page follows that \
                 growth: where it shows up, what moved alongside it, and what \
                 it suggests for groups still underrepresented in STEM."
            }
        }
        section {
            ChartHeader {
                title: "STEM degrees by demographic, 2011-2021",
                subtitle: "Hover a point for the exact count",
            }
            TimeSeriesChart { records: records.clone() }
            p {
                "Every group gained over the decade, but the slopes differ \
                 sharply. Hispanic students went from third place to first \
                 among the four groups tracked here."
            }
        }
        section {
            ChartHeader {
                title: "Share of degrees, year by year",
                subtitle: "Drag the slider to step through the decade",
            }
            DonutSlider { records: records.clone() }
        }
        section {
            ChartHeader {
                title: "Growth over the decade",
            }
            GrowthBarChart { bars: growth_bars }
        }
        section {
            ChartHeader {
                title: "Compare demographics",
                subtitle: "Pick up to three groups, a metric, and a year range",
            }
            ComparisonChart { records: records.clone() }
        }
        section {
            ChartHeader {
                title: "Enrollment vs. degrees by state",
            }
            ScatterPlaceholder {}
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct DrivingFactorsProps {
    records: Vec<DemographicRecord>,
    /// The `data2.csv` load: `None` while in flight, error as text.
    population: Option<Result<Vec<YearAmount>, String>>,
}

#[component]
fn DrivingFactors(props: DrivingFactorsProps) -> Element {
    let hsi_points: Vec<(i32, f64)> = HSI_COUNTS.to_vec();

    let population_section = match &props.population {
        None => rsx! {
            LoadingSpinner {}
        },
        Some(Err(e)) => rsx! {
            ErrorDisplay { message: "Could not load the population data: {e}" }
        },
        Some(Ok(population)) => {
            let points = year_points(population);
            rsx! {
                SingleSeriesChart {
                    points,
                    color: "#82ca9d",
                    unit: "people",
                }
                p {
                    "The population grew about 9% over the decade, far \
                     short of the 110% growth in degrees. Population \
                     alone does not explain the trend."
                }
            }
        }
    };

    rsx! {
        section {
            p { class: "lede",
                "Degree growth does not happen in a vacuum. Three trends moved \
                 with it: the number of Hispanic-Serving Institutions, the \
                 college-aged Hispanic population, and targeted STEM funding."
            }
            p {
                "A Hispanic-Serving Institution (HSI) is a college or \
                 university where Hispanic students make up at least a quarter \
                 of full-time undergraduate enrollment. The designation \
                 unlocks federal grant programs aimed at building STEM \
                 capacity, and the count of HSIs grew by about 60% over the \
                 decade."
            }
        }
        section {
            ChartHeader {
                title: "Hispanic-Serving Institutions",
                subtitle: "Number of designated HSIs per year",
            }
            SingleSeriesChart {
                points: hsi_points,
                color: "#ffc658",
                unit: "institutions",
            }
        }
        section {
            ChartHeader {
                title: "College-aged Hispanic population",
                subtitle: "18-24 year olds, US total",
            }
            {population_section}
        }
        section {
            ChartHeader {
                title: "What correlates with the growth?",
                subtitle: "Pick a factor and a demographic; the dashed line is the least-squares fit",
            }
            CorrelationChart { records: props.records.clone() }
            p {
                "Correlation is not causation, and the factor series here are \
                 modeled rather than measured. But the pattern is consistent: \
                 the years with more HSIs and more targeted funding are the \
                 years with more Hispanic STEM graduates. Programs built on \
                 the HSI model, applied to institutions serving Black and \
                 Native students, are the most direct lever this data \
                 suggests."
            }
        }
    }
}

#[component]
fn Geography() -> Element {
    rsx! {
        section {
            p { class: "lede",
                "Growth is not evenly spread. Border states and states with \
                 large existing Hispanic populations lead; the map below \
                 steps through the decade state by state."
            }
            GeoMap {}
        }
    }
}

const STYLE: &str = r#"
.dashboard {
    max-width: 960px;
    margin: 0 auto;
    padding: 24px 16px 64px;
    font-family: 'Segoe UI', system-ui, sans-serif;
    color: #222;
}
.dashboard header { position: relative; margin-bottom: 24px; }
.dashboard h1 { font-size: 30px; margin-bottom: 4px; }
.dashboard .subtitle { color: #666; font-size: 15px; }
.dashboard section { margin: 36px 0; }
.dashboard .lede { font-size: 17px; line-height: 1.7; }
.dashboard p { line-height: 1.6; }
.dashboard footer { margin-top: 48px; font-size: 12px; color: #888; }

.progress-track {
    position: fixed;
    top: 0; left: 0; right: 0;
    height: 4px;
    background: #eee;
    z-index: 10;
}
.progress-fill { height: 100%; background: #3d426b; }

.contrast-toggle {
    position: absolute;
    top: 0; right: 0;
    padding: 6px 12px;
    border: 1px solid #999;
    border-radius: 4px;
    background: #fff;
    cursor: pointer;
}

.dashboard svg circle:hover { r: 6px; }
.dashboard svg path:hover { filter: brightness(1.08); }

.chart-fade-in { opacity: 0; animation: chart-fade 0.7s ease-out forwards; }
@keyframes chart-fade { to { opacity: 1; } }

.chart-grow-up {
    transform-box: fill-box;
    transform-origin: bottom;
    animation: chart-grow 0.8s ease-out backwards;
}
@keyframes chart-grow { from { transform: scaleY(0); } }

.high-contrast { background: #111; color: #f5f5f5; }
.high-contrast .subtitle,
.high-contrast footer,
.high-contrast p { color: #ddd; }
.high-contrast .contrast-toggle { background: #222; color: #f5f5f5; }
.high-contrast svg text { fill: #f5f5f5; }
"#;
