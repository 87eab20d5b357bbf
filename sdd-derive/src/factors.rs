//! Candidate explanatory factor series for the correlation chart.
//!
//! No public per-year dataset exists for these factors, so the chart uses
//! modeled series spanning the same 2011-2021 window as the degree data:
//! HSI counts grow linearly, funding trends up with fluctuation, population
//! and completion rate climb steadily. Values are deterministic functions
//! of the year index.

use sdd_data::{Demographic, DemographicRecord};
use std::fmt;
use std::str::FromStr;

/// First and last year of the modeled window.
pub const START_YEAR: i32 = 2011;
pub const END_YEAR: i32 = 2021;

/// An explanatory factor paired against STEM degree counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Factor {
    HsiGrowth,
    FundingLevel,
    PopulationGrowth,
    CompletionRate,
}

impl Factor {
    pub const ALL: [Factor; 4] = [
        Factor::HsiGrowth,
        Factor::FundingLevel,
        Factor::PopulationGrowth,
        Factor::CompletionRate,
    ];

    /// Stable id used as the dropdown option value.
    pub fn id(&self) -> &'static str {
        match self {
            Factor::HsiGrowth => "hsi_growth",
            Factor::FundingLevel => "funding_level",
            Factor::PopulationGrowth => "population_growth",
            Factor::CompletionRate => "completion_rate",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Factor::HsiGrowth => "HSI Growth",
            Factor::FundingLevel => "STEM Funding Level",
            Factor::PopulationGrowth => "Population Growth",
            Factor::CompletionRate => "Completion Rate",
        }
    }

    /// The factor's value for year index `i` (0 = 2011).
    fn value_at(&self, i: usize) -> f64 {
        let i = i as f64;
        match self {
            Factor::HsiGrowth => 100.0 + i * 16.0,
            Factor::FundingLevel => 500.0 + i * 50.0 + i.sin() * 30.0,
            Factor::PopulationGrowth => 15_000.0 + i * 400.0,
            Factor::CompletionRate => 60.0 + i * 0.8,
        }
    }

    /// `(year, value)` points over the modeled window.
    pub fn series(&self) -> Vec<(i32, f64)> {
        (START_YEAR..=END_YEAR)
            .map(|year| (year, self.value_at((year - START_YEAR) as usize)))
            .collect()
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Factor {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Factor::ALL
            .iter()
            .copied()
            .find(|f| f.id() == s)
            .ok_or(())
    }
}

/// A factor value paired with one demographic's degree count for the same
/// year.
#[derive(Debug, Clone, PartialEq)]
pub struct PairedPoint {
    pub year: i32,
    pub factor_value: f64,
    pub outcome_value: f64,
}

/// Join a factor series with the loaded records by exact year.
///
/// Years present in only one side are dropped, so the pairing never
/// invents data.
pub fn paired_points(
    factor: Factor,
    records: &[DemographicRecord],
    demographic: Demographic,
) -> Vec<PairedPoint> {
    let series = factor.series();
    let total = series.len();
    let points: Vec<PairedPoint> = series
        .into_iter()
        .filter_map(|(year, factor_value)| {
            let record = records.iter().find(|r| r.year == year)?;
            Some(PairedPoint {
                year,
                factor_value,
                outcome_value: record.value(demographic),
            })
        })
        .collect();
    if points.len() < total {
        log::info!(
            "paired {} of {total} {} years against the loaded records",
            points.len(),
            factor.label()
        );
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_spans_the_window() {
        let series = Factor::HsiGrowth.series();
        assert_eq!(series.len(), 11);
        assert_eq!(series[0], (2011, 100.0));
        assert_eq!(series[10], (2021, 260.0));
    }

    #[test]
    fn id_round_trips() {
        for factor in Factor::ALL {
            assert_eq!(factor.id().parse::<Factor>().unwrap(), factor);
        }
        assert!("bogus".parse::<Factor>().is_err());
    }

    #[test]
    fn pairing_drops_years_missing_from_records() {
        let records = vec![
            DemographicRecord {
                year: 2011,
                black: 0.0,
                hispanic: 25000.0,
                asian: 0.0,
                other: 0.0,
            },
            DemographicRecord {
                year: 2021,
                black: 0.0,
                hispanic: 52499.0,
                asian: 0.0,
                other: 0.0,
            },
        ];
        let points = paired_points(Factor::HsiGrowth, &records, Demographic::Hispanic);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].factor_value, 100.0);
        assert_eq!(points[0].outcome_value, 25000.0);
        assert_eq!(points[1].factor_value, 260.0);
    }
}
