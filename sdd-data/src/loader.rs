//! CSV body → record vector loaders.
//!
//! Both loaders follow the same contract: numeric value fields default to
//! 0.0 when missing or unparseable, a row is dropped entirely when its year
//! fails to parse, the output is sorted ascending by year, and an input
//! that is empty (or yields zero valid rows) is an error rather than an
//! empty vector.

use crate::{DataError, DemographicRecord, YearAmount};
use csv::ReaderBuilder;

/// Parse a `year,black,hispanic,asian,other` CSV body (header row
/// expected) into year-sorted records.
pub fn parse_demographics(csv_body: &str) -> Result<Vec<DemographicRecord>, DataError> {
    if csv_body.trim().is_empty() {
        return Err(DataError::Empty);
    }

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(csv_body.as_bytes());

    let mut records = Vec::new();
    for result in rdr.records() {
        let row = result?;
        let year = match row.get(0).unwrap_or("").parse::<i32>() {
            Ok(y) => y,
            Err(_) => {
                log::warn!("dropping row with invalid year: {:?}", row.get(0));
                continue;
            }
        };
        records.push(DemographicRecord {
            year,
            black: parse_count(row.get(1)),
            hispanic: parse_count(row.get(2)),
            asian: parse_count(row.get(3)),
            other: parse_count(row.get(4)),
        });
    }

    if records.is_empty() {
        return Err(DataError::NoValidRows);
    }

    records.sort_by_key(|r| r.year);
    log::info!("loaded {} demographic records", records.len());
    Ok(records)
}

/// Parse a `year,amount` CSV body (header row expected) into year-sorted
/// records.
pub fn parse_year_amounts(csv_body: &str) -> Result<Vec<YearAmount>, DataError> {
    if csv_body.trim().is_empty() {
        return Err(DataError::Empty);
    }

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(csv_body.as_bytes());

    let mut records = Vec::new();
    for result in rdr.records() {
        let row = result?;
        let year = match row.get(0).unwrap_or("").parse::<i32>() {
            Ok(y) => y,
            Err(_) => continue,
        };
        records.push(YearAmount {
            year,
            amount: parse_count(row.get(1)),
        });
    }

    if records.is_empty() {
        return Err(DataError::NoValidRows);
    }

    records.sort_by_key(|r| r.year);
    Ok(records)
}

/// A count cell: non-negative number, or 0.0 when missing/unparseable.
fn parse_count(cell: Option<&str>) -> f64 {
    cell.unwrap_or("").parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "year,black,hispanic,asian,other\n\
                          2012,10498,26734,23011,14562\n\
                          2011,10234,25000,21890,14120\n";

    #[test]
    fn parses_and_sorts_by_year() {
        let records = parse_demographics(SAMPLE).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].year, 2011);
        assert_eq!(records[1].year, 2012);
        assert_eq!(records[0].hispanic, 25000.0);
    }

    #[test]
    fn bad_count_defaults_to_zero() {
        let csv = "year,black,hispanic,asian,other\n2011,n/a,25000,,14120\n";
        let records = parse_demographics(csv).unwrap();
        assert_eq!(records[0].black, 0.0);
        assert_eq!(records[0].asian, 0.0);
        assert_eq!(records[0].hispanic, 25000.0);
    }

    #[test]
    fn bad_year_drops_the_row() {
        let csv = "year,black,hispanic,asian,other\n\
                   oops,1,2,3,4\n\
                   2011,10234,25000,21890,14120\n";
        let records = parse_demographics(csv).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].year, 2011);
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(parse_demographics(""), Err(DataError::Empty)));
        assert!(matches!(parse_demographics("   \n"), Err(DataError::Empty)));
    }

    #[test]
    fn header_only_input_is_an_error() {
        let csv = "year,black,hispanic,asian,other\n";
        assert!(matches!(parse_demographics(csv), Err(DataError::NoValidRows)));
    }

    #[test]
    fn all_invalid_years_is_an_error() {
        let csv = "year,black,hispanic,asian,other\nx,1,2,3,4\ny,5,6,7,8\n";
        assert!(matches!(parse_demographics(csv), Err(DataError::NoValidRows)));
    }

    #[test]
    fn year_amounts_parse_and_sort() {
        let csv = "year,amount\n2013,5700000\n2011,5600000\n2012,5650400\n";
        let records = parse_year_amounts(csv).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].year, 2011);
        assert_eq!(records[2].amount, 5700000.0);
    }
}
