//! Command-line interface for browsing the Thailand geodata files.
#![forbid(unsafe_code)]

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use geodata_store::{DEFAULT_DATA_DIR, DataFormat, GeoDataStore};

mod error;
mod export;
mod hierarchy;
mod search;
mod summary;

pub use error::CliError;

use export::{ExportArgs, run_export_with};
use hierarchy::{HierarchyArgs, run_hierarchy_with};
use search::{SearchArgs, run_search_with};
use summary::{SummaryArgs, run_summary_with};

pub(crate) const ARG_DATA_DIR: &str = "data-dir";
pub(crate) const ARG_FORMAT: &str = "format";
pub(crate) const ARG_LANGUAGE: &str = "language";
pub(crate) const ARG_NEEDLE: &str = "needle";
pub(crate) const ARG_PROVINCE_ID: &str = "province-id";
pub(crate) const ARG_DATASET: &str = "dataset";
pub(crate) const ARG_OUTPUT: &str = "output";
pub(crate) const ARG_OUTPUT_FORMAT: &str = "output-format";
pub(crate) const ENV_NEEDLE: &str = "GEODATA_CMDS_SEARCH_NEEDLE";
pub(crate) const ENV_PROVINCE_ID: &str = "GEODATA_CMDS_HIERARCHY_PROVINCE_ID";
pub(crate) const ENV_DATASET: &str = "GEODATA_CMDS_EXPORT_DATASET";
pub(crate) const ENV_OUTPUT: &str = "GEODATA_CMDS_EXPORT_OUTPUT";

/// Run the CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] when argument parsing, configuration, loading or
/// writing fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    execute(cli, &mut stdout)
}

fn execute(cli: Cli, out: &mut dyn Write) -> Result<(), CliError> {
    match cli.command {
        Command::Summary(args) => run_summary_with(args, out),
        Command::Search(args) => run_search_with(args, out),
        Command::Hierarchy(args) => run_hierarchy_with(args, out),
        Command::Export(args) => run_export_with(args, out),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "thailand-geodata",
    about = "Query the provinces, districts and sub-districts of Thailand",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print record counts and a few sample lookups.
    Summary(SummaryArgs),
    /// Find provinces by part of their name.
    Search(SearchArgs),
    /// Show a province with its districts.
    Hierarchy(HierarchyArgs),
    /// Re-encode one collection as JSON or CSV.
    Export(ExportArgs),
}

/// Where the collections are read from, after configuration merging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DataConfig {
    pub(crate) data_dir: Utf8PathBuf,
    pub(crate) format: DataFormat,
}

impl DataConfig {
    pub(crate) fn resolve(data_dir: Option<Utf8PathBuf>, format: Option<DataFormat>) -> Self {
        Self {
            data_dir: data_dir.unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DATA_DIR)),
            format: format.unwrap_or_default(),
        }
    }

    /// Check the data directory before any collection is loaded.
    pub(crate) fn validate(&self) -> Result<(), CliError> {
        require_directory(&self.data_dir)
    }

    pub(crate) fn open_store(&self) -> GeoDataStore {
        GeoDataStore::with_format(self.data_dir.clone(), self.format)
    }
}

fn require_directory(path: &Utf8Path) -> Result<(), CliError> {
    match geodata_fs::dir_is_dir(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::NotADirectory {
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingDataDir {
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectDataDir {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests;
