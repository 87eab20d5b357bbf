//! Shared UI building blocks for the dashboard charts.
//!
//! Scales, path generators and formatting are plain functions testable on
//! the host; the `components` module holds the reusable Dioxus pieces
//! (headers, error/loading/empty states, toggles, sliders, tab bar) and
//! `fetch`/`storage` wrap the web platform.

pub mod components;
pub mod fetch;
pub mod interact;
pub mod palette;
pub mod path;
pub mod scale;
pub mod storage;
