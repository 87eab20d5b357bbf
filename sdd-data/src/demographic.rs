//! The four tracked population categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four demographic categories tracked by the dataset.
///
/// The CSV column names are the lowercase forms (`black`, `hispanic`,
/// `asian`, `other`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Demographic {
    Black,
    Hispanic,
    Asian,
    Other,
}

impl Demographic {
    /// All demographics in CSV column order.
    pub const ALL: [Demographic; 4] = [
        Demographic::Black,
        Demographic::Hispanic,
        Demographic::Asian,
        Demographic::Other,
    ];

    /// The lowercase CSV column / option value for this demographic.
    pub fn key(&self) -> &'static str {
        match self {
            Demographic::Black => "black",
            Demographic::Hispanic => "hispanic",
            Demographic::Asian => "asian",
            Demographic::Other => "other",
        }
    }

    /// Capitalized display label.
    pub fn label(&self) -> &'static str {
        match self {
            Demographic::Black => "Black",
            Demographic::Hispanic => "Hispanic",
            Demographic::Asian => "Asian",
            Demographic::Other => "Other",
        }
    }
}

impl fmt::Display for Demographic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Demographic {
    type Err = crate::DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "black" => Ok(Demographic::Black),
            "hispanic" => Ok(Demographic::Hispanic),
            "asian" => Ok(Demographic::Asian),
            "other" => Ok(Demographic::Other),
            _ => Err(crate::DataError::UnknownDemographic(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_round_trips_through_from_str() {
        for demo in Demographic::ALL {
            assert_eq!(demo.key().parse::<Demographic>().unwrap(), demo);
        }
    }

    #[test]
    fn unknown_key_is_an_error() {
        assert!("martian".parse::<Demographic>().is_err());
    }
}
