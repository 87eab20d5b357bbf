//! Growth between two exact years of the loaded series.

use sdd_data::{Demographic, DemographicRecord};
use serde::Serialize;

/// Start/end values and derived growth for one demographic over a year
/// range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthSummary {
    pub demographic: Demographic,
    pub start_value: f64,
    pub end_value: f64,
    /// `end_value - start_value`.
    pub growth: f64,
    /// Percent growth relative to the start value; 0 when the start value
    /// is not positive.
    pub percentage: f64,
}

/// Growth for one demographic between `start_year` and `end_year`.
///
/// Returns `None` when either year has no exact matching record. No
/// interpolation: asking for a year outside the dataset is "no data",
/// never a crash.
pub fn growth_between(
    records: &[DemographicRecord],
    demographic: Demographic,
    start_year: i32,
    end_year: i32,
) -> Option<GrowthSummary> {
    let start = records.iter().find(|r| r.year == start_year)?;
    let end = records.iter().find(|r| r.year == end_year)?;

    let start_value = start.value(demographic);
    let end_value = end.value(demographic);
    let growth = end_value - start_value;
    let percentage = if start_value > 0.0 {
        growth / start_value * 100.0
    } else {
        0.0
    };

    Some(GrowthSummary {
        demographic,
        start_value,
        end_value,
        growth,
        percentage,
    })
}

/// Growth summaries for all four demographics over the same year range.
///
/// Empty when either endpoint year is missing from the data.
pub fn growth_table(
    records: &[DemographicRecord],
    start_year: i32,
    end_year: i32,
) -> Vec<GrowthSummary> {
    let table: Vec<GrowthSummary> = Demographic::ALL
        .iter()
        .filter_map(|&demo| growth_between(records, demo, start_year, end_year))
        .collect();
    if table.is_empty() {
        log::warn!("no growth table: no record for {start_year} or {end_year}");
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: i32, hispanic: f64) -> DemographicRecord {
        DemographicRecord {
            year,
            black: 100.0,
            hispanic,
            asian: 50.0,
            other: 25.0,
        }
    }

    #[test]
    fn hispanic_decade_growth() {
        let records = vec![record(2011, 25000.0), record(2021, 52499.0)];
        let summary =
            growth_between(&records, Demographic::Hispanic, 2011, 2021).unwrap();
        assert_eq!(summary.start_value, 25000.0);
        assert_eq!(summary.end_value, 52499.0);
        assert_eq!(summary.growth, 27499.0);
        assert!((summary.percentage - 109.996).abs() < 1e-9);
    }

    #[test]
    fn missing_year_yields_none() {
        let records = vec![record(2011, 25000.0), record(2021, 52499.0)];
        assert!(growth_between(&records, Demographic::Hispanic, 2011, 2025).is_none());
        assert!(growth_between(&records, Demographic::Hispanic, 2009, 2021).is_none());
    }

    #[test]
    fn zero_start_value_gives_zero_percentage() {
        let records = vec![record(2011, 0.0), record(2021, 500.0)];
        let summary =
            growth_between(&records, Demographic::Hispanic, 2011, 2021).unwrap();
        assert_eq!(summary.growth, 500.0);
        assert_eq!(summary.percentage, 0.0);
    }

    #[test]
    fn table_covers_all_demographics() {
        let records = vec![record(2011, 25000.0), record(2021, 52499.0)];
        let table = growth_table(&records, 2011, 2021);
        assert_eq!(table.len(), 4);
        assert_eq!(table[1].demographic, Demographic::Hispanic);
        // Flat series have zero growth.
        assert_eq!(table[0].growth, 0.0);
    }

    #[test]
    fn table_is_empty_when_endpoint_missing() {
        let records = vec![record(2011, 25000.0)];
        assert!(growth_table(&records, 2011, 2021).is_empty());
    }
}
