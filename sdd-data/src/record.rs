//! Record types produced by the loaders.

use crate::Demographic;
use serde::Serialize;

/// One row of `data.csv`: STEM degrees awarded in a single year, broken
/// down by demographic.
///
/// Count fields default to 0.0 when the CSV cell is missing or
/// unparseable; the whole row is dropped when the year is invalid.
/// Records are immutable after load.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemographicRecord {
    pub year: i32,
    pub black: f64,
    pub hispanic: f64,
    pub asian: f64,
    pub other: f64,
}

impl DemographicRecord {
    /// The count for one demographic.
    pub fn value(&self, demographic: Demographic) -> f64 {
        match demographic {
            Demographic::Black => self.black,
            Demographic::Hispanic => self.hispanic,
            Demographic::Asian => self.asian,
            Demographic::Other => self.other,
        }
    }

    /// Sum across all four demographics.
    pub fn total(&self) -> f64 {
        self.black + self.hispanic + self.asian + self.other
    }
}

/// One row of a single-series CSV (`year,amount`), e.g. the college-aged
/// Hispanic population file `data2.csv`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearAmount {
    pub year: i32,
    pub amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_selects_the_right_field() {
        let rec = DemographicRecord {
            year: 2021,
            black: 1.0,
            hispanic: 2.0,
            asian: 3.0,
            other: 4.0,
        };
        assert_eq!(rec.value(Demographic::Black), 1.0);
        assert_eq!(rec.value(Demographic::Hispanic), 2.0);
        assert_eq!(rec.value(Demographic::Asian), 3.0);
        assert_eq!(rec.value(Demographic::Other), 4.0);
        assert_eq!(rec.total(), 10.0);
    }
}
