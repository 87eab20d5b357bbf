//! Placeholder for the planned state-level scatter.

use dioxus::prelude::*;

/// Dashed-border notice standing in for a scatter of state-level
/// enrollment against degree counts; the public sources it would need
/// are linked so the section still tells the reader where to look.
#[component]
pub fn ScatterPlaceholder() -> Element {
    rsx! {
        div {
            style: "border: 2px dashed #bbb; border-radius: 8px; padding: 40px; text-align: center; color: #666;",
            p {
                style: "font-weight: bold; margin-bottom: 8px;",
                "State-level scatter coming soon"
            }
            p {
                "Per-state enrollment vs. degree data is not yet published in a joinable form. \
                 The underlying sources are available from "
                a {
                    href: "https://nces.ed.gov/ipeds/",
                    target: "_blank",
                    "IPEDS"
                }
                " and the "
                a {
                    href: "https://www.census.gov/data.html",
                    target: "_blank",
                    "US Census"
                }
                "."
            }
        }
    }
}
