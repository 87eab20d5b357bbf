//! Pure, stateless transforms from loaded records to chart-ready shapes.
//!
//! Every function here can be called repeatedly with no side effects; the
//! chart components re-derive on each state change and redraw from scratch.

pub mod factors;
pub mod growth;
pub mod quantile;
pub mod regression;
pub mod series;
pub mod share;

pub use growth::{growth_between, growth_table, GrowthSummary};
pub use quantile::QuantileScale;
pub use regression::{linear_regression, RegressionResult};
pub use share::{donut_slices, DonutSlice};
