//! Slider-driven per-year donut of demographic shares.

use dioxus::prelude::*;
use sdd_chart_ui::components::{EmptyNotice, HoverTooltip, TooltipInfo, YearSlider};
use sdd_chart_ui::palette;
use sdd_chart_ui::path::{annular_sector, sector_centroid};
use sdd_chart_ui::scale::format_int;
use sdd_data::DemographicRecord;
use sdd_derive::donut_slices;
use std::f64::consts::PI;

const WIDTH: f64 = 400.0;
const HEIGHT: f64 = 300.0;
const CX: f64 = 140.0;
const CY: f64 = 150.0;
const OUTER_RADIUS: f64 = 100.0;
const INNER_RADIUS: f64 = 60.0;

#[derive(Props, Clone, PartialEq)]
pub struct DonutChartProps {
    pub record: DemographicRecord,
}

/// One year's donut: slices clockwise from 12 o'clock in fixed
/// demographic order, legend with counts and percentages.
#[component]
pub fn DonutChart(props: DonutChartProps) -> Element {
    let mut tooltip = use_signal(|| None::<TooltipInfo>);

    let slices = donut_slices(&props.record);
    if slices.is_empty() {
        let year = props.record.year;
        return rsx! {
            EmptyNotice { message: "No degrees recorded for {year}" }
        };
    }

    struct Arc {
        d: String,
        color: &'static str,
        label: &'static str,
        legend_line: String,
        legend_y: f64,
        swatch_y: f64,
        info: TooltipInfo,
    }

    let mut angle = 0.0;
    let arcs: Vec<Arc> = slices
        .iter()
        .enumerate()
        .map(|(i, slice)| {
            let sweep = slice.percent / 100.0 * 2.0 * PI;
            let start = angle;
            let end = angle + sweep;
            angle = end;
            let (tx, ty) = sector_centroid(CX, CY, INNER_RADIUS, OUTER_RADIUS, start, end);
            let count = format_int(slice.value);
            let percent = format!("{:.1}%", slice.percent);
            Arc {
                d: annular_sector(CX, CY, INNER_RADIUS, OUTER_RADIUS, start, end),
                color: palette::series_color(slice.demographic),
                label: slice.demographic.label(),
                legend_line: format!("{}: {count} ({percent})", slice.demographic.label()),
                legend_y: 80.0 + i as f64 * 24.0,
                swatch_y: 70.0 + i as f64 * 24.0,
                info: TooltipInfo::new(tx, ty, vec![slice.demographic.label().to_string(), format!("{count} ({percent})")]),
            }
        })
        .collect();

    let year = props.record.year;
    let total = format_int(props.record.total());
    let center_label_y = CY + 18.0;
    let info = tooltip();

    rsx! {
        svg {
            view_box: "0 0 {WIDTH} {HEIGHT}",
            width: "{WIDTH}",
            height: "{HEIGHT}",

            for (i, arc) in arcs.iter().enumerate() {
                {
                    let delay = format!("animation-delay: {}ms;", i * 100);
                    let info = arc.info.clone();
                    rsx! {
                        path {
                            class: "chart-fade-in",
                            style: "{delay}",
                            d: "{arc.d}",
                            fill: "{arc.color}",
                            stroke: "#fff",
                            stroke_width: "2",
                            onmouseenter: move |_| tooltip.set(Some(info.clone())),
                            onmouseleave: move |_| tooltip.set(None),
                        }
                    }
                }
            }

            text {
                x: "{CX}",
                y: "{CY}",
                text_anchor: "middle",
                font_size: "22",
                font_weight: "bold",
                fill: "#333",
                "{year}"
            }
            text {
                x: "{CX}",
                y: "{center_label_y}",
                text_anchor: "middle",
                font_size: "11",
                fill: "#666",
                "{total} total"
            }

            for arc in &arcs {
                rect {
                    x: "260",
                    y: "{arc.swatch_y}",
                    width: "12",
                    height: "12",
                    fill: "{arc.color}",
                }
                text {
                    x: "278",
                    y: "{arc.legend_y}",
                    font_size: "11",
                    fill: "#333",
                    "{arc.legend_line}"
                }
            }

            if let Some(info) = info {
                HoverTooltip { info }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct DonutSliderProps {
    pub records: Vec<DemographicRecord>,
}

/// Year slider over the loaded records driving one donut at a time.
/// The slider index is clamped before it reaches state, so the selected
/// record always exists.
#[component]
pub fn DonutSlider(props: DonutSliderProps) -> Element {
    let mut index = use_signal(|| 0usize);

    if props.records.is_empty() {
        return rsx! {
            EmptyNotice { message: "No degree data loaded" }
        };
    }

    let i = index().min(props.records.len() - 1);
    let record = props.records[i].clone();
    let label = record.year.to_string();
    let len = props.records.len();

    rsx! {
        div {
            YearSlider {
                index: i,
                len,
                label,
                on_change: move |next| index.set(next),
            }
            DonutChart { record }
        }
    }
}
