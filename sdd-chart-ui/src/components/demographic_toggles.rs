//! Demographic toggle buttons with a selection cap.

use crate::palette;
use dioxus::prelude::*;
use sdd_data::Demographic;

#[derive(Props, Clone, PartialEq)]
pub struct DemographicTogglesProps {
    /// Currently selected demographics, in selection order.
    pub selected: Vec<Demographic>,
    /// Maximum number of simultaneous selections.
    #[props(default = 3)]
    pub cap: usize,
    /// Fired with the toggled demographic; the owner applies the capped
    /// toggle to its own state.
    pub on_toggle: EventHandler<Demographic>,
}

/// One button per demographic, outlined in its series color, filled when
/// selected. Clicking a fourth button while three are selected is ignored
/// by the owner's `toggle_capped` transition.
#[component]
pub fn DemographicToggles(props: DemographicTogglesProps) -> Element {
    rsx! {
        div {
            style: "display: flex; gap: 8px; flex-wrap: wrap; margin: 4px 0;",
            for demo in Demographic::ALL {
                {
                    let active = props.selected.contains(&demo);
                    let color = palette::series_color(demo);
                    let style = if active {
                        format!("padding: 6px 12px; border-radius: 4px; cursor: pointer; border: 2px solid {color}; background: {color}; color: #222; font-weight: bold;")
                    } else {
                        format!("padding: 6px 12px; border-radius: 4px; cursor: pointer; border: 2px solid {color}; background: #fff; color: #222;")
                    };
                    rsx! {
                        button {
                            style: "{style}",
                            onclick: move |_| props.on_toggle.call(demo),
                            "{demo.label()}"
                        }
                    }
                }
            }
            span {
                style: "font-size: 11px; color: #888; align-self: center;",
                "max {props.cap}"
            }
        }
    }
}
