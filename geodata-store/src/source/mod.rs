//! Where collections come from.
//!
//! [`DatasetSource`] is the seam between the cache and the filesystem.
//! [`FileSource`] implements it for the published directory layout:
//!
//! ```text
//! <root>/json/provinces.json      {"provinces": [...]}
//! <root>/json/districts.json      {"districts": [...]}
//! <root>/json/sub_districts.json  {"sub_districts": [...]}
//! <root>/csv/provinces.csv        header row + records
//! ...
//! ```

use std::{fmt, io::Read, str::FromStr};

use camino::{Utf8Path, Utf8PathBuf};
use geodata_core::{Dataset, Record};
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::GeoDataError;

mod json;
mod tabular;

pub(crate) use json::decode_json;
pub(crate) use tabular::decode_csv;

/// Data directory used when none is configured.
pub const DEFAULT_DATA_DIR: &str = ".";

/// Produce every record of a collection, in file order.
///
/// Implementations are not expected to cache; [`crate::GeoDataStore`] calls
/// [`DatasetSource::read`] at most once per record type.
pub trait DatasetSource {
    /// Read and decode all records of type `R`.
    ///
    /// # Errors
    /// Returns a [`GeoDataError`] of kind `Io` or `Decode`.
    fn read<R: Record>(&self) -> Result<Vec<R>, GeoDataError>;
}

/// On-disk encoding of the collections.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataFormat {
    /// `json/<dataset>.json`, an object keyed by the dataset name.
    #[default]
    Json,
    /// `csv/<dataset>.csv`, a header row followed by records.
    Csv,
}

impl DataFormat {
    /// Sub-directory holding files of this format.
    #[must_use]
    pub const fn directory(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }

    /// File name of `dataset` in this format.
    #[must_use]
    pub const fn file_name(self, dataset: Dataset) -> &'static str {
        match self {
            Self::Json => dataset.json_file_name(),
            Self::Csv => dataset.csv_file_name(),
        }
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.directory())
    }
}

/// Error returned when text does not name a [`DataFormat`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown data format {input:?}; expected `json` or `csv`")]
pub struct DataFormatParseError {
    input: String,
}

impl FromStr for DataFormat {
    type Err = DataFormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(DataFormatParseError {
                input: s.to_owned(),
            }),
        }
    }
}

/// Reads collections from a data directory in a single [`DataFormat`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    root: Utf8PathBuf,
    format: DataFormat,
}

impl FileSource {
    /// Read `format` files beneath `root`.
    ///
    /// An empty `root` falls back to [`DEFAULT_DATA_DIR`].
    pub fn new(root: impl Into<Utf8PathBuf>, format: DataFormat) -> Self {
        let requested = root.into();
        let root = if requested.as_str().is_empty() {
            Utf8PathBuf::from(DEFAULT_DATA_DIR)
        } else {
            requested
        };
        Self { root, format }
    }

    /// Data directory passed at construction.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Encoding read by this source.
    #[must_use]
    pub const fn format(&self) -> DataFormat {
        self.format
    }

    /// Location of the file backing `dataset`.
    #[must_use]
    pub fn path_for(&self, dataset: Dataset) -> Utf8PathBuf {
        self.root
            .join(self.format.directory())
            .join(self.format.file_name(dataset))
    }
}

impl Default for FileSource {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR, DataFormat::default())
    }
}

impl DatasetSource for FileSource {
    fn read<R: Record>(&self) -> Result<Vec<R>, GeoDataError> {
        let dataset = R::DATASET;
        let path = self.path_for(dataset);
        let mut file =
            geodata_fs::open_utf8_file(&path).map_err(|source| GeoDataError::Open {
                dataset,
                path: path.clone(),
                source,
            })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .map_err(|source| GeoDataError::Read {
                dataset,
                path: path.clone(),
                source,
            })?;
        debug!("read {} bytes of {dataset} data from {path}", bytes.len());

        match self.format {
            DataFormat::Json => decode_json(&bytes, dataset, &path),
            DataFormat::Csv => decode_csv(&bytes, dataset, &path),
        }
    }
}
