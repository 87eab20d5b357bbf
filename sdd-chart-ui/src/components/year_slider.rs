//! Slider selecting one index out of a fixed ordered list.

use crate::interact::clamp_index;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct YearSliderProps {
    /// Current index into the list.
    pub index: usize,
    /// Number of items; the slider covers `0..len`.
    pub len: usize,
    /// Label shown beside the slider (e.g. the selected year).
    #[props(default = String::new())]
    pub label: String,
    pub on_change: EventHandler<usize>,
}

/// Range input driving an index, clamped to `[0, len-1]` before the
/// owner ever sees it.
#[component]
pub fn YearSlider(props: YearSliderProps) -> Element {
    let max = props.len.saturating_sub(1);
    let len = props.len;

    rsx! {
        div {
            style: "display: flex; gap: 12px; align-items: center; margin: 10px 0;",
            input {
                r#type: "range",
                min: "0",
                max: "{max}",
                value: "{props.index}",
                style: "width: 400px;",
                oninput: move |evt| {
                    if let Ok(raw) = evt.value().parse::<i64>() {
                        props.on_change.call(clamp_index(raw, len));
                    }
                },
            }
            if !props.label.is_empty() {
                span {
                    style: "font-weight: bold; min-width: 48px;",
                    "{props.label}"
                }
            }
        }
    }
}
