//! Shaping records into per-demographic line series.

use sdd_data::{Demographic, DemographicRecord, YearAmount};

/// `(year, value)` points for one demographic, in record order.
pub fn demo_series(records: &[DemographicRecord], demographic: Demographic) -> Vec<(i32, f64)> {
    records
        .iter()
        .map(|r| (r.year, r.value(demographic)))
        .collect()
}

/// `(year, value)` points for a single-series dataset, in record order.
pub fn year_points(records: &[YearAmount]) -> Vec<(i32, f64)> {
    records.iter().map(|r| (r.year, r.amount)).collect()
}

/// The maximum count across every demographic and year, for a shared
/// y-domain. 0.0 for an empty input.
pub fn max_value(records: &[DemographicRecord]) -> f64 {
    records
        .iter()
        .flat_map(|r| Demographic::ALL.iter().map(|&d| r.value(d)))
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_follows_record_order() {
        let records = vec![
            DemographicRecord {
                year: 2011,
                black: 1.0,
                hispanic: 2.0,
                asian: 3.0,
                other: 4.0,
            },
            DemographicRecord {
                year: 2012,
                black: 5.0,
                hispanic: 6.0,
                asian: 7.0,
                other: 8.0,
            },
        ];
        assert_eq!(
            demo_series(&records, Demographic::Hispanic),
            vec![(2011, 2.0), (2012, 6.0)]
        );
        assert_eq!(max_value(&records), 8.0);
        assert_eq!(max_value(&[]), 0.0);
    }

    #[test]
    fn year_points_from_amounts() {
        let records = vec![
            YearAmount {
                year: 2011,
                amount: 5_600_000.0,
            },
            YearAmount {
                year: 2012,
                amount: 5_650_000.0,
            },
        ];
        assert_eq!(
            year_points(&records),
            vec![(2011, 5_600_000.0), (2012, 5_650_000.0)]
        );
    }
}
