//! Re-encode loaded collections as JSON or CSV files.

use std::io::{BufWriter, Write};

use camino::Utf8Path;
use log::{debug, info};
use serde::Serialize;

use crate::{Collection, DataFormat, GeoDataError};

/// Write `records` to `path` as a pretty-printed JSON array.
///
/// Parent directories are created as needed. Returns the number of records
/// written.
///
/// # Errors
/// Fails with an `Export` error when the file cannot be created, encoded or
/// flushed.
pub fn export_json<R: Serialize>(path: &Utf8Path, records: &[R]) -> Result<usize, GeoDataError> {
    let mut writer = BufWriter::new(create(path)?);
    serde_json::to_writer_pretty(&mut writer, records).map_err(|source| {
        GeoDataError::EncodeJson {
            path: path.to_path_buf(),
            source,
        }
    })?;
    writer.flush().map_err(|source| GeoDataError::WriteExport {
        path: path.to_path_buf(),
        source,
    })?;
    info!("exported {} records to {path}", records.len());
    Ok(records.len())
}

/// Write `records` to `path` as CSV with a header row.
///
/// Headers come from the records' serialized field names. An empty slice
/// writes nothing and leaves `path` untouched.
///
/// # Errors
/// Fails with an `Export` error when the file cannot be created, encoded or
/// flushed.
pub fn export_csv<R: Serialize>(path: &Utf8Path, records: &[R]) -> Result<usize, GeoDataError> {
    if records.is_empty() {
        debug!("nothing to export to {path}");
        return Ok(0);
    }
    let mut writer = csv::Writer::from_writer(create(path)?);
    for record in records {
        writer
            .serialize(record)
            .map_err(|source| GeoDataError::EncodeCsv {
                path: path.to_path_buf(),
                source,
            })?;
    }
    writer.flush().map_err(|source| GeoDataError::WriteExport {
        path: path.to_path_buf(),
        source,
    })?;
    info!("exported {} records to {path}", records.len());
    Ok(records.len())
}

/// Export a loaded collection in `format`.
///
/// # Errors
/// See [`export_json`] and [`export_csv`].
pub fn export_collection(
    collection: Collection<'_>,
    path: &Utf8Path,
    format: DataFormat,
) -> Result<usize, GeoDataError> {
    match (collection, format) {
        (Collection::Provinces(records), DataFormat::Json) => export_json(path, records),
        (Collection::Provinces(records), DataFormat::Csv) => export_csv(path, records),
        (Collection::Districts(records), DataFormat::Json) => export_json(path, records),
        (Collection::Districts(records), DataFormat::Csv) => export_csv(path, records),
        (Collection::SubDistricts(records), DataFormat::Json) => export_json(path, records),
        (Collection::SubDistricts(records), DataFormat::Csv) => export_csv(path, records),
    }
}

fn create(path: &Utf8Path) -> Result<cap_std::fs_utf8::File, GeoDataError> {
    geodata_fs::create_utf8_file(path).map_err(|source| GeoDataError::CreateExport {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use geodata_core::{Province, test_support::sample_provinces};
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn temp_dir() -> TempDir {
        TempDir::new().expect("tempdir")
    }

    fn utf8(dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir")
    }

    #[rstest]
    fn json_export_writes_pretty_array(temp_dir: TempDir) {
        let path = utf8(&temp_dir).join("out/provinces.json");
        let provinces = sample_provinces();

        let written = export_json(&path, &provinces).expect("export json");

        assert_eq!(written, provinces.len());
        let text = std::fs::read_to_string(&path).expect("read export");
        assert!(text.starts_with("[\n"));
        assert!(text.contains("\"CODE\": \"10\""));
        let decoded: Vec<Province> = serde_json::from_str(&text).expect("decode export");
        assert_eq!(decoded, provinces);
    }

    #[rstest]
    fn csv_export_writes_header_row(temp_dir: TempDir) {
        let path = utf8(&temp_dir).join("provinces.csv");
        let provinces = sample_provinces();

        export_csv(&path, &provinces).expect("export csv");

        let text = std::fs::read_to_string(&path).expect("read export");
        let mut lines = text.lines();
        let header = lines.next().expect("header row");
        assert!(header.starts_with("PROVINCE_ID,CODE,PROVINCE_THAI,PROVINCE_ENGLISH"));
        assert_eq!(lines.count(), provinces.len());
    }

    #[rstest]
    fn empty_csv_export_creates_nothing(temp_dir: TempDir) {
        let path = utf8(&temp_dir).join("empty.csv");
        let written = export_csv::<Province>(&path, &[]).expect("export nothing");
        assert_eq!(written, 0);
        assert!(!path.exists());
    }

    #[rstest]
    fn empty_json_export_writes_empty_array(temp_dir: TempDir) {
        let path = utf8(&temp_dir).join("empty.json");
        export_json::<Province>(&path, &[]).expect("export nothing");
        assert_eq!(std::fs::read_to_string(&path).expect("read export"), "[]");
    }

    #[rstest]
    fn collection_export_dispatches_on_format(temp_dir: TempDir) {
        let provinces = sample_provinces();
        let path = utf8(&temp_dir).join("csv/provinces.csv");
        let written = export_collection(Collection::Provinces(&provinces), &path, DataFormat::Csv)
            .expect("export collection");
        assert_eq!(written, provinces.len());
        assert!(path.is_file());
    }
}
