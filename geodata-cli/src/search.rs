//! `search` command: provinces whose name contains a fragment.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use geodata_core::{Language, Province};
use geodata_store::{DataFormat, DatasetSource, GeoDataStore};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{ARG_DATA_DIR, ARG_FORMAT, ARG_LANGUAGE, ARG_NEEDLE, CliError, DataConfig, ENV_NEEDLE};

/// CLI arguments for the `search` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "List provinces whose name contains the given fragment, \
                 ignoring case. Thai names are searched unless another \
                 language is requested.",
    about = "Find provinces by part of their name"
)]
#[ortho_config(prefix = "GEODATA")]
pub(crate) struct SearchArgs {
    /// Fragment of the province name.
    #[arg(value_name = "needle")]
    #[serde(default)]
    pub(crate) needle: Option<String>,
    /// Name to search (`thai` or `english`).
    #[arg(long = ARG_LANGUAGE, value_name = "language")]
    #[serde(default)]
    pub(crate) language: Option<Language>,
    /// Directory holding the `json/` and `csv/` folders.
    #[arg(long = ARG_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) data_dir: Option<Utf8PathBuf>,
    /// Encoding to read (`json` or `csv`).
    #[arg(long = ARG_FORMAT, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<DataFormat>,
}

impl SearchArgs {
    pub(crate) fn into_config(self) -> Result<SearchConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SearchConfig::try_from(merged)
    }
}

/// Resolved `search` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SearchConfig {
    pub(crate) needle: String,
    pub(crate) language: Language,
    pub(crate) data: DataConfig,
}

impl TryFrom<SearchArgs> for SearchConfig {
    type Error = CliError;

    fn try_from(args: SearchArgs) -> Result<Self, Self::Error> {
        let needle = args.needle.ok_or(CliError::MissingArgument {
            field: ARG_NEEDLE,
            env: ENV_NEEDLE,
        })?;
        Ok(Self {
            needle,
            language: args.language.unwrap_or_default(),
            data: DataConfig::resolve(args.data_dir, args.format),
        })
    }
}

pub(crate) fn run_search_with(args: SearchArgs, out: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.data.validate()?;
    let store = config.data.open_store();
    write_search(&store, &config.needle, config.language, out)
}

pub(crate) fn write_search<S: DatasetSource>(
    store: &GeoDataStore<S>,
    needle: &str,
    language: Language,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let matches = store.search_provinces_by_name(needle, language)?;
    write_matches(out, needle, &matches).map_err(CliError::WriteOutput)
}

fn write_matches(out: &mut dyn Write, needle: &str, matches: &[&Province]) -> std::io::Result<()> {
    writeln!(out, "🔍 Provinces containing '{needle}': {}", matches.len())?;
    for province in matches {
        writeln!(
            out,
            "   - {} ({}) [{}]",
            province.name_thai, province.name_english, province.code
        )?;
    }
    Ok(())
}
