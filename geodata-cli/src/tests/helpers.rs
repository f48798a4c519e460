//! Test helpers that lay out sample data directories on disk.

use super::*;
use geodata_core::{
    District, Province, SubDistrict,
    test_support::{sample_districts, sample_provinces, sample_sub_districts},
};
use geodata_store::export_csv;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

/// A temporary data directory populated with the sample collections.
#[derive(Debug)]
pub(super) struct SampleData {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl SampleData {
    pub(super) fn new(format: DataFormat) -> Self {
        Self::with_provinces(format, &sample_provinces())
    }

    pub(super) fn with_provinces(format: DataFormat, provinces: &[Province]) -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
        match format {
            DataFormat::Json => write_json(&root, provinces),
            DataFormat::Csv => write_csv(&root, provinces),
        }
        Self { _dir: dir, root }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn data_config(&self, format: DataFormat) -> DataConfig {
        DataConfig::resolve(Some(self.root.clone()), Some(format))
    }
}

fn write_json(root: &Utf8Path, provinces: &[Province]) {
    let dir = root.join("json");
    fs::create_dir_all(&dir).expect("create json dir");
    let districts: Vec<District> = sample_districts();
    let sub_districts: Vec<SubDistrict> = sample_sub_districts();
    for (file, document) in [
        ("provinces.json", json!({ "provinces": provinces })),
        ("districts.json", json!({ "districts": districts })),
        ("sub_districts.json", json!({ "sub_districts": sub_districts })),
    ] {
        let payload = serde_json::to_string_pretty(&document).expect("encode collection");
        fs::write(dir.join(file), payload).expect("write collection");
    }
}

fn write_csv(root: &Utf8Path, provinces: &[Province]) {
    let dir = root.join("csv");
    export_csv(&dir.join("provinces.csv"), provinces).expect("write provinces");
    export_csv(&dir.join("districts.csv"), &sample_districts()).expect("write districts");
    export_csv(&dir.join("sub_districts.csv"), &sample_sub_districts())
        .expect("write sub-districts");
}

/// Capture everything a command writes.
pub(super) fn capture(
    run: impl FnOnce(&mut dyn Write) -> Result<(), CliError>,
) -> (Result<(), CliError>, String) {
    let mut buffer = Vec::new();
    let outcome = run(&mut buffer);
    let text = String::from_utf8(buffer).expect("utf-8 output");
    (outcome, text)
}
