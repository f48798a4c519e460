//! Identifiers for the three record collections.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the three collections shipped with the dataset.
///
/// Each variant fixes the file names and the JSON top-level key used by the
/// on-disk layout.
///
/// # Examples
///
/// ```
/// use geodata_core::Dataset;
///
/// assert_eq!(Dataset::SubDistricts.json_file_name(), "sub_districts.json");
/// assert_eq!(Dataset::SubDistricts.key(), "sub_districts");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dataset {
    /// Provinces (changwat).
    Provinces,
    /// Districts (amphoe).
    Districts,
    /// Sub-districts (tambon).
    SubDistricts,
}

impl Dataset {
    /// All collections, ordered from the top of the hierarchy down.
    pub const ALL: [Self; 3] = [Self::Provinces, Self::Districts, Self::SubDistricts];

    /// Top-level JSON key holding the records, also used as the display name.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Provinces => "provinces",
            Self::Districts => "districts",
            Self::SubDistricts => "sub_districts",
        }
    }

    /// File name inside the `json/` directory.
    #[must_use]
    pub const fn json_file_name(self) -> &'static str {
        match self {
            Self::Provinces => "provinces.json",
            Self::Districts => "districts.json",
            Self::SubDistricts => "sub_districts.json",
        }
    }

    /// File name inside the `csv/` directory.
    #[must_use]
    pub const fn csv_file_name(self) -> &'static str {
        match self {
            Self::Provinces => "provinces.csv",
            Self::Districts => "districts.csv",
            Self::SubDistricts => "sub_districts.csv",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when text does not name a [`Dataset`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown dataset {input:?}; expected `provinces`, `districts` or `sub_districts`")]
pub struct DatasetParseError {
    input: String,
}

impl FromStr for Dataset {
    type Err = DatasetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "provinces" => Ok(Self::Provinces),
            "districts" => Ok(Self::Districts),
            "sub_districts" | "sub-districts" | "subdistricts" => Ok(Self::SubDistricts),
            _ => Err(DatasetParseError {
                input: s.to_owned(),
            }),
        }
    }
}
