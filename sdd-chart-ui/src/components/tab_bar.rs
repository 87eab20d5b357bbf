//! Mutually exclusive tab buttons.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct TabBarProps {
    pub labels: Vec<String>,
    /// Index of the active tab.
    pub active: usize,
    pub on_select: EventHandler<usize>,
}

/// Tab strip activating exactly one pane. Which pane is shown is the
/// owner's state (a tagged union), not a class toggled on shared DOM
/// nodes, so switching tabs never reloads data.
#[component]
pub fn TabBar(props: TabBarProps) -> Element {
    rsx! {
        div {
            style: "display: flex; gap: 4px; border-bottom: 2px solid #e0e0e0; margin-bottom: 16px;",
            for (i, label) in props.labels.iter().enumerate() {
                {
                    let style = if i == props.active {
                        "padding: 8px 16px; border: none; cursor: pointer; background: #fff; border-bottom: 3px solid #3d426b; font-weight: bold;"
                    } else {
                        "padding: 8px 16px; border: none; cursor: pointer; background: #f5f5f5; border-bottom: 3px solid transparent;"
                    };
                    rsx! {
                        button {
                            style: "{style}",
                            onclick: move |_| props.on_select.call(i),
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
