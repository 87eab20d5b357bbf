//! Reusable Dioxus RSX components for the dashboard charts.

mod chart_header;
mod demographic_toggles;
mod empty_notice;
mod error_display;
mod loading_spinner;
mod tab_bar;
mod tooltip;
mod year_slider;

pub use chart_header::ChartHeader;
pub use demographic_toggles::DemographicToggles;
pub use empty_notice::EmptyNotice;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use tab_bar::TabBar;
pub use tooltip::{HoverTooltip, TooltipInfo};
pub use year_slider::YearSlider;
