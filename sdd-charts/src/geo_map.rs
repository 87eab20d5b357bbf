//! Choropleth of synthesized state-level degree data.

use dioxus::prelude::*;
use sdd_chart_ui::components::{ErrorDisplay, HoverTooltip, LoadingSpinner, TooltipInfo, YearSlider};
use sdd_chart_ui::fetch::fetch_text;
use sdd_chart_ui::palette;
use sdd_chart_ui::scale::format_int;
use sdd_data::Demographic;
use sdd_derive::QuantileScale;
use sdd_geo::synth::{END_YEAR, START_YEAR};
use sdd_geo::{decode_states, synthesize, StateShape, Topology, ATLAS_HEIGHT, ATLAS_WIDTH, DEFAULT_SEED};
use std::collections::HashMap;

/// Pre-projected 975x610 states topology.
const ATLAS_URL: &str = "https://cdn.jsdelivr.net/npm/us-atlas@3/states-10m.json";

const WIDTH: f64 = 960.0;
const HEIGHT: f64 = 600.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 50.0;
const MARGIN_LEFT: f64 = 20.0;

/// Number of quantile color buckets.
const BUCKETS: usize = 9;

/// US map with states filled by a 9-bucket quantile scale over the
/// selected demographic's values for the selected year.
///
/// The topology is fetched from the CDN on mount; there is no bundled
/// fallback, so an offline load renders the error state. Cancelling the
/// component mid-fetch (tab switch) drops the resource and the response
/// is discarded.
#[component]
pub fn GeoMap() -> Element {
    let shapes = use_resource(|| async move {
        let body = fetch_text(ATLAS_URL).await?;
        let topo: Topology = serde_json::from_str(&body)?;
        Ok::<Vec<StateShape>, anyhow::Error>(decode_states(&topo))
    });

    let mut demographic = use_signal(|| Demographic::Hispanic);
    let mut year_index = use_signal(|| 0usize);
    let mut tooltip = use_signal(|| None::<TooltipInfo>);

    // Synthesis covers every state/demographic/year combination, so it
    // only depends on the decoded shapes; memoizing keeps hover and
    // control changes from re-running the generator.
    let records = use_memo(move || match &*shapes.read() {
        Some(Ok(shapes)) => {
            let states: Vec<(String, String)> = shapes
                .iter()
                .map(|s| (s.id.clone(), s.name.clone()))
                .collect();
            synthesize(&states, DEFAULT_SEED)
        }
        _ => Vec::new(),
    });

    let current_demo = demographic();
    let years: Vec<i32> = (START_YEAR..=END_YEAR).collect();
    let year = years[year_index().min(years.len() - 1)];

    let guard = shapes.read();
    let shapes = match &*guard {
        None => {
            return rsx! {
                LoadingSpinner {}
            }
        }
        Some(Err(e)) => {
            log::error!("map topology load failed: {e:#}");
            return rsx! {
                ErrorDisplay { message: "Could not load the US map: {e}" }
            };
        }
        Some(Ok(shapes)) => shapes,
    };

    let records = records.read();
    let by_state: HashMap<&str, (f64, f64)> = records
        .iter()
        .filter(|r| r.demographic == current_demo && r.year == year)
        .map(|r| (r.state_id.as_str(), (r.value, r.growth_percent)))
        .collect();

    let (ramp_from, ramp_to) = palette::ramp_endpoints(current_demo);
    let values: Vec<f64> = by_state.values().map(|(v, _)| *v).collect();
    let scale = QuantileScale::new(&values, palette::ramp(ramp_from, ramp_to, BUCKETS));

    struct Shape {
        path: String,
        fill: String,
        info: TooltipInfo,
    }

    let map_scale = ((WIDTH - MARGIN_LEFT - MARGIN_RIGHT) / ATLAS_WIDTH)
        .min((HEIGHT - MARGIN_TOP - MARGIN_BOTTOM) / ATLAS_HEIGHT);
    let drawn: Vec<Shape> = shapes
        .iter()
        .map(|shape| {
            let (value, growth) = by_state.get(shape.id.as_str()).copied().unwrap_or((0.0, 0.0));
            let fill = scale
                .as_ref()
                .map(|s| s.color(value).to_string())
                .unwrap_or_else(|| "#eee".to_string());
            let count = format_int(value);
            Shape {
                path: shape.path.clone(),
                fill,
                info: TooltipInfo::new(
                    shape.centroid.0,
                    shape.centroid.1,
                    vec![
                        shape.name.clone(),
                        format!("{count} degrees"),
                        format!("+{growth:.0}% since {START_YEAR}"),
                    ],
                ),
            }
        })
        .collect();

    let slider_label = year.to_string();
    let title_x = WIDTH / 2.0;
    let demo_label = current_demo.label();
    let legend_y = HEIGHT - 30.0;
    let legend_label_y = legend_y - 6.0;
    let info = tooltip();

    rsx! {
        div {
            div {
                style: "display: flex; gap: 16px; align-items: center;",
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
                YearSlider {
                    index: year_index().min(years.len() - 1),
                    len: years.len(),
                    label: slider_label,
                    on_change: move |next| year_index.set(next),
                }
            }
            svg {
                view_box: "0 0 {WIDTH} {HEIGHT}",
                width: "{WIDTH}",
                height: "{HEIGHT}",
                defs {
                    linearGradient {
                        id: "geo-ramp",
                        x1: "0%",
                        x2: "100%",
                        y1: "0%",
                        y2: "0%",
                        stop { offset: "0%", stop_color: "{ramp_from}" }
                        stop { offset: "100%", stop_color: "{ramp_to}" }
                    }
                }
                text {
                    x: "{title_x}",
                    y: "30",
                    text_anchor: "middle",
                    font_size: "15",
                    font_weight: "bold",
                    fill: "#333",
                    "{demo_label} STEM degrees by state, {year}"
                }
                g {
                    transform: "translate({MARGIN_LEFT},{MARGIN_TOP}) scale({map_scale})",
                    for shape in &drawn {
                        {
                            let info = shape.info.clone();
                            rsx! {
                                path {
                                    d: "{shape.path}",
                                    fill: "{shape.fill}",
                                    stroke: "#fff",
                                    stroke_width: "0.8",
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
                rect {
                    x: "40",
                    y: "{legend_y}",
                    width: "240",
                    height: "10",
                    fill: "url(#geo-ramp)",
                }
                text {
                    x: "40",
                    y: "{legend_label_y}",
                    font_size: "10",
                    fill: "#666",
                    "Fewer degrees"
                }
                text {
                    x: "280",
                    y: "{legend_label_y}",
                    text_anchor: "end",
                    font_size: "10",
                    fill: "#666",
                    "More degrees"
                }
            }
        }
    }
}
