//! `export` command: re-encode one collection.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use geodata_core::Dataset;
use geodata_store::{DataFormat, DatasetSource, GeoDataStore, export_collection};
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_DATA_DIR, ARG_DATASET, ARG_FORMAT, ARG_OUTPUT, ARG_OUTPUT_FORMAT, CliError, DataConfig,
    ENV_DATASET, ENV_OUTPUT,
};

/// CLI arguments for the `export` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Load one collection and write it to a new file as a JSON \
                 array or as CSV with a header row. Input files are never \
                 modified.",
    about = "Re-encode one collection as JSON or CSV"
)]
#[ortho_config(prefix = "GEODATA")]
pub(crate) struct ExportArgs {
    /// Collection to export (`provinces`, `districts` or `sub_districts`).
    #[arg(long = ARG_DATASET, value_name = "dataset")]
    #[serde(default)]
    pub(crate) dataset: Option<Dataset>,
    /// File to write.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Encoding of the written file (`json` or `csv`).
    #[arg(long = ARG_OUTPUT_FORMAT, value_name = "format")]
    #[serde(default)]
    pub(crate) output_format: Option<DataFormat>,
    /// Directory holding the `json/` and `csv/` folders.
    #[arg(long = ARG_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) data_dir: Option<Utf8PathBuf>,
    /// Encoding to read (`json` or `csv`).
    #[arg(long = ARG_FORMAT, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<DataFormat>,
}

impl ExportArgs {
    pub(crate) fn into_config(self) -> Result<ExportConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ExportConfig::try_from(merged)
    }
}

/// Resolved `export` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExportConfig {
    pub(crate) dataset: Dataset,
    pub(crate) output: Utf8PathBuf,
    pub(crate) output_format: DataFormat,
    pub(crate) data: DataConfig,
}

impl TryFrom<ExportArgs> for ExportConfig {
    type Error = CliError;

    fn try_from(args: ExportArgs) -> Result<Self, Self::Error> {
        let dataset = args.dataset.ok_or(CliError::MissingArgument {
            field: ARG_DATASET,
            env: ENV_DATASET,
        })?;
        let output = args.output.ok_or(CliError::MissingArgument {
            field: ARG_OUTPUT,
            env: ENV_OUTPUT,
        })?;
        Ok(Self {
            dataset,
            output,
            output_format: args.output_format.unwrap_or_default(),
            data: DataConfig::resolve(args.data_dir, args.format),
        })
    }
}

pub(crate) fn run_export_with(args: ExportArgs, out: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.data.validate()?;
    let store = config.data.open_store();
    write_export(&store, &config, out)
}

pub(crate) fn write_export<S: DatasetSource>(
    store: &GeoDataStore<S>,
    config: &ExportConfig,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    debug!(
        "exporting {} as {} to {}",
        config.dataset, config.output_format, config.output
    );
    let collection = store.load(config.dataset)?;
    let written = export_collection(collection, &config.output, config.output_format)?;
    writeln!(
        out,
        "Exported {written} {} records to {}",
        config.dataset, config.output
    )
    .map_err(CliError::WriteOutput)
}
