//! Per-year donut slice derivation.

use sdd_data::{Demographic, DemographicRecord};
use serde::Serialize;

/// One donut slice: a demographic's count and its share of the year total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DonutSlice {
    pub demographic: Demographic,
    pub value: f64,
    /// Share of the year's total, in percent.
    pub percent: f64,
}

/// Slices for one year's donut, in fixed demographic order.
///
/// Empty when the year total is not positive, which the renderer shows as
/// a textual placeholder instead of an empty ring.
pub fn donut_slices(record: &DemographicRecord) -> Vec<DonutSlice> {
    let total = record.total();
    if total <= 0.0 {
        return Vec::new();
    }
    Demographic::ALL
        .iter()
        .map(|&demo| {
            let value = record.value(demo);
            DonutSlice {
                demographic: demo,
                value,
                percent: value / total * 100.0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentages_sum_to_one_hundred() {
        let record = DemographicRecord {
            year: 2021,
            black: 12844.0,
            hispanic: 52499.0,
            asian: 38594.0,
            other: 21001.0,
        };
        let slices = donut_slices(&record);
        assert_eq!(slices.len(), 4);
        let sum: f64 = slices.iter().map(|s| s.percent).sum();
        assert!((sum - 100.0).abs() < 1e-9);
        assert_eq!(slices[1].demographic, Demographic::Hispanic);
        assert!(slices[1].percent > 40.0);
    }

    #[test]
    fn zero_total_yields_no_slices() {
        let record = DemographicRecord {
            year: 2011,
            black: 0.0,
            hispanic: 0.0,
            asian: 0.0,
            other: 0.0,
        };
        assert!(donut_slices(&record).is_empty());
    }
}
