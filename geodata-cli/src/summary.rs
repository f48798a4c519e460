//! `summary` command: record counts and a handful of sample queries.

use std::io::{self, Write};

use camino::Utf8PathBuf;
use clap::Parser;
use geodata_core::{District, Language, Province, Statistics};
use geodata_store::{DataFormat, DatasetSource, GeoDataError, GeoDataStore};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{ARG_DATA_DIR, ARG_FORMAT, CliError, DataConfig};

const BANNER: &str = "🇹🇭 Thailand Geodata Summary";
const RULE_WIDTH: usize = 38;
const BANGKOK_CODE: &str = "10";
const BANGKOK_ID: u32 = 1;
const PROVINCE_NEEDLE: &str = "เชียง";
const LISTED_PROVINCES: usize = 3;
const LISTED_DISTRICTS: usize = 5;

/// CLI arguments for the `summary` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Load all three collections and print their sizes, the \
                 Bangkok record, provinces whose Thai name contains \
                 'เชียง' and the first districts of Bangkok.",
    about = "Print record counts and sample lookups"
)]
#[ortho_config(prefix = "GEODATA")]
pub(crate) struct SummaryArgs {
    /// Directory holding the `json/` and `csv/` folders.
    #[arg(long = ARG_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) data_dir: Option<Utf8PathBuf>,
    /// Encoding to read (`json` or `csv`).
    #[arg(long = ARG_FORMAT, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<DataFormat>,
}

impl SummaryArgs {
    pub(crate) fn into_config(self) -> Result<DataConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(DataConfig::resolve(merged.data_dir, merged.format))
    }
}

/// Everything the report prints, gathered before any output is written.
#[derive(Debug)]
pub(crate) struct Summary<'a> {
    pub(crate) statistics: Statistics,
    pub(crate) bangkok: Option<&'a Province>,
    pub(crate) matching_provinces: Vec<&'a Province>,
    pub(crate) bangkok_districts: Vec<&'a District>,
}

impl<'a> Summary<'a> {
    pub(crate) fn collect<S: DatasetSource>(
        store: &'a GeoDataStore<S>,
    ) -> Result<Self, GeoDataError> {
        Ok(Self {
            statistics: store.statistics()?,
            bangkok: store.province_by_code(BANGKOK_CODE)?,
            matching_provinces: store.search_provinces_by_name(PROVINCE_NEEDLE, Language::Thai)?,
            bangkok_districts: store.districts_by_province_id(BANGKOK_ID)?,
        })
    }

    pub(crate) fn write_to(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{BANNER}")?;
        writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;

        writeln!(out, "📊 Data Statistics:")?;
        writeln!(out, "   Provinces: {}", self.statistics.provinces)?;
        writeln!(out, "   Districts: {}", self.statistics.districts)?;
        writeln!(out, "   Sub-districts: {}", self.statistics.sub_districts)?;
        writeln!(out)?;

        if let Some(bangkok) = self.bangkok {
            writeln!(out, "🏛️  Bangkok Information:")?;
            writeln!(out, "   Thai: {}", bangkok.name_thai)?;
            writeln!(out, "   English: {}", bangkok.name_english)?;
            writeln!(out, "   Code: {}", bangkok.code)?;
            writeln!(out)?;
        }

        writeln!(
            out,
            "🔍 Provinces containing '{PROVINCE_NEEDLE}': {}",
            self.matching_provinces.len()
        )?;
        for province in self.matching_provinces.iter().take(LISTED_PROVINCES) {
            writeln!(
                out,
                "   - {} ({})",
                province.name_thai, province.name_english
            )?;
        }
        writeln!(out)?;

        writeln!(
            out,
            "🏙️  Bangkok has {} districts",
            self.bangkok_districts.len()
        )?;
        for district in self.bangkok_districts.iter().take(LISTED_DISTRICTS) {
            writeln!(
                out,
                "   - {} ({})",
                district.name_thai, district.name_english
            )?;
        }
        let hidden = self.bangkok_districts.len().saturating_sub(LISTED_DISTRICTS);
        if hidden > 0 {
            writeln!(out, "   ... and {hidden} more districts")?;
        }
        Ok(())
    }
}

pub(crate) fn run_summary_with(args: SummaryArgs, out: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate()?;
    let store = config.open_store();
    write_summary(&store, out)
}

pub(crate) fn write_summary<S: DatasetSource>(
    store: &GeoDataStore<S>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let summary = Summary::collect(store)?;
    summary.write_to(out).map_err(CliError::WriteOutput)
}
