//! The dashboard's chart components, one module per chart.
//!
//! Every chart follows the same shape: derive chart-ready data from its
//! props (or a fetched resource), build scales, and emit the full SVG
//! element tree. State changes re-derive and re-emit everything; nothing
//! mutates a previous render.

pub mod comparison;
pub mod correlation;
pub mod donut;
pub mod geo_map;
pub mod growth_bars;
pub mod scatter;
pub mod single_series;
pub mod time_series;

pub use comparison::{ComparisonChart, Metric};
pub use correlation::CorrelationChart;
pub use donut::{DonutChart, DonutSlider};
pub use geo_map::GeoMap;
pub use growth_bars::{GrowthBar, GrowthBarChart};
pub use scatter::ScatterPlaceholder;
pub use single_series::SingleSeriesChart;
pub use time_series::TimeSeriesChart;
