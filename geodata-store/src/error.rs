//! Errors raised while loading or exporting geodata collections.

use camino::{Utf8Path, Utf8PathBuf};
use geodata_core::Dataset;
use thiserror::Error;

/// Broad classification of a [`GeoDataError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The backing file could not be opened or read.
    Io,
    /// The file was read but its contents were malformed.
    Decode,
    /// Writing an export failed.
    Export,
}

/// Errors raised by [`crate::GeoDataStore`] and the export helpers.
#[derive(Debug, Error)]
pub enum GeoDataError {
    /// Opening the backing file failed.
    #[error("failed to open {dataset} file at {path}")]
    Open {
        /// Collection being loaded.
        dataset: Dataset,
        /// Location of the backing file.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Reading the opened file failed.
    #[error("failed to read {dataset} file at {path}")]
    Read {
        /// Collection being loaded.
        dataset: Dataset,
        /// Location of the backing file.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The JSON payload could not be decoded.
    #[error("failed to decode {dataset} JSON at {path}")]
    DecodeJson {
        /// Collection being loaded.
        dataset: Dataset,
        /// Location of the backing file.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The JSON document was valid but not an object.
    #[error("{dataset} JSON at {path} is not an object")]
    NotAnObject {
        /// Collection being loaded.
        dataset: Dataset,
        /// Location of the backing file.
        path: Utf8PathBuf,
    },
    /// The JSON object lacked the collection's top-level key.
    #[error("{dataset} JSON at {path} has no `{key}` key")]
    MissingKey {
        /// Collection being loaded.
        dataset: Dataset,
        /// Location of the backing file.
        path: Utf8PathBuf,
        /// Key that was expected.
        key: &'static str,
    },
    /// A CSV header or row could not be decoded.
    #[error("failed to decode {dataset} CSV at {path}")]
    DecodeCsv {
        /// Collection being loaded.
        dataset: Dataset,
        /// Location of the backing file.
        path: Utf8PathBuf,
        /// Source error from `csv`.
        #[source]
        source: csv::Error,
    },
    /// Creating the export file (or its parent directories) failed.
    #[error("failed to create export file at {path}")]
    CreateExport {
        /// Target file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Encoding records as JSON failed.
    #[error("failed to encode JSON export at {path}")]
    EncodeJson {
        /// Target file path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Encoding records as CSV failed.
    #[error("failed to encode CSV export at {path}")]
    EncodeCsv {
        /// Target file path.
        path: Utf8PathBuf,
        /// Source error from `csv`.
        #[source]
        source: csv::Error,
    },
    /// Flushing the export to disk failed.
    #[error("failed to write export file at {path}")]
    WriteExport {
        /// Target file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
}

impl GeoDataError {
    /// Classify the failure.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Open { .. } | Self::Read { .. } => ErrorKind::Io,
            Self::DecodeJson { .. }
            | Self::NotAnObject { .. }
            | Self::MissingKey { .. }
            | Self::DecodeCsv { .. } => ErrorKind::Decode,
            Self::CreateExport { .. }
            | Self::EncodeJson { .. }
            | Self::EncodeCsv { .. }
            | Self::WriteExport { .. } => ErrorKind::Export,
        }
    }

    /// Whether the backing file does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Open { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Path of the file involved in the failure.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        match self {
            Self::Open { path, .. }
            | Self::Read { path, .. }
            | Self::DecodeJson { path, .. }
            | Self::NotAnObject { path, .. }
            | Self::MissingKey { path, .. }
            | Self::DecodeCsv { path, .. }
            | Self::CreateExport { path, .. }
            | Self::EncodeJson { path, .. }
            | Self::EncodeCsv { path, .. }
            | Self::WriteExport { path, .. } => path,
        }
    }
}
