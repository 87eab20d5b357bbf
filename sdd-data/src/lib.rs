//! Typed records and CSV parsing for the STEM degrees dashboard.
//!
//! The dashboard ships two small CSV files: `data.csv` with STEM degrees
//! awarded per demographic per year (2011-2021), and `data2.csv` with a
//! single yearly amount series. This crate turns those CSV bodies into
//! validated, year-sorted record vectors. Fetching is the caller's concern;
//! everything here is a pure string-to-records transform.

pub mod demographic;
pub mod error;
pub mod loader;
pub mod record;

pub use demographic::Demographic;
pub use error::DataError;
pub use loader::{parse_demographics, parse_year_amounts};
pub use record::{DemographicRecord, YearAmount};
