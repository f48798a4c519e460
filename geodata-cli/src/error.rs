//! Error types emitted by the geodata CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use geodata_store::GeoDataError;
use thiserror::Error;

/// Errors emitted by the geodata CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the flag or positional argument.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// The data directory does not exist.
    #[error("data directory {path:?} does not exist")]
    MissingDataDir {
        /// Configured data directory.
        path: Utf8PathBuf,
    },
    /// The data directory exists but is not a directory.
    #[error("data directory {path:?} is not a directory")]
    NotADirectory {
        /// Configured data directory.
        path: Utf8PathBuf,
    },
    /// The data directory could not be inspected.
    #[error("failed to inspect data directory {path:?}")]
    InspectDataDir {
        /// Configured data directory.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Loading or exporting a collection failed.
    #[error(transparent)]
    GeoData(#[from] GeoDataError),
    /// Writing to the output stream failed.
    #[error("failed to write output")]
    WriteOutput(#[source] std::io::Error),
}
