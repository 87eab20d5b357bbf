//! Centered placeholder for empty derived data.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct EmptyNoticeProps {
    pub message: String,
}

/// Informational placeholder rendered instead of an empty drawing surface,
/// e.g. when every demographic is deselected. Fully recoverable by
/// changing the selection, unlike `ErrorDisplay`.
#[component]
pub fn EmptyNotice(props: EmptyNoticeProps) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; min-height: 200px; color: #666; font-style: italic;",
            "{props.message}"
        }
    }
}
