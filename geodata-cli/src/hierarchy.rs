//! `hierarchy` command: one province with its districts.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use geodata_core::ProvinceHierarchy;
use geodata_store::{DataFormat, DatasetSource, GeoDataStore};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_DATA_DIR, ARG_FORMAT, ARG_PROVINCE_ID, CliError, DataConfig, ENV_PROVINCE_ID,
};

/// CLI arguments for the `hierarchy` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Print a province, every district beneath it and the number \
                 of sub-districts those districts contain.",
    about = "Show a province with its districts"
)]
#[ortho_config(prefix = "GEODATA")]
pub(crate) struct HierarchyArgs {
    /// Identifier of the province (`PROVINCE_ID`).
    #[arg(value_name = "province-id")]
    #[serde(default)]
    pub(crate) province_id: Option<u32>,
    /// Directory holding the `json/` and `csv/` folders.
    #[arg(long = ARG_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) data_dir: Option<Utf8PathBuf>,
    /// Encoding to read (`json` or `csv`).
    #[arg(long = ARG_FORMAT, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<DataFormat>,
}

impl HierarchyArgs {
    pub(crate) fn into_config(self) -> Result<HierarchyConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        HierarchyConfig::try_from(merged)
    }
}

/// Resolved `hierarchy` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HierarchyConfig {
    pub(crate) province_id: u32,
    pub(crate) data: DataConfig,
}

impl TryFrom<HierarchyArgs> for HierarchyConfig {
    type Error = CliError;

    fn try_from(args: HierarchyArgs) -> Result<Self, Self::Error> {
        let province_id = args.province_id.ok_or(CliError::MissingArgument {
            field: ARG_PROVINCE_ID,
            env: ENV_PROVINCE_ID,
        })?;
        Ok(Self {
            province_id,
            data: DataConfig::resolve(args.data_dir, args.format),
        })
    }
}

pub(crate) fn run_hierarchy_with(
    args: HierarchyArgs,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.data.validate()?;
    let store = config.data.open_store();
    write_hierarchy(&store, config.province_id, out)
}

pub(crate) fn write_hierarchy<S: DatasetSource>(
    store: &GeoDataStore<S>,
    province_id: u32,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let written = match store.province_hierarchy(province_id)? {
        Some(hierarchy) => write_tree(out, &hierarchy),
        None => writeln!(out, "No province with id {province_id}"),
    };
    written.map_err(CliError::WriteOutput)
}

fn write_tree(out: &mut dyn Write, hierarchy: &ProvinceHierarchy<'_>) -> std::io::Result<()> {
    let province = hierarchy.province;
    writeln!(
        out,
        "🏛️  {} ({}), code {}",
        province.name_thai, province.name_english, province.code
    )?;
    writeln!(out, "   Districts: {}", hierarchy.districts.len())?;
    writeln!(out, "   Sub-districts: {}", hierarchy.sub_district_count)?;
    for district in &hierarchy.districts {
        writeln!(
            out,
            "   - {} ({}) [{}]",
            district.name_thai, district.name_english, district.code
        )?;
    }
    Ok(())
}
