//! Decoding of the `csv/` layout.

use camino::Utf8Path;
use csv::{ReaderBuilder, StringRecord, Trim};
use geodata_core::{Dataset, Record};
use log::warn;

use crate::GeoDataError;

/// Decode a CSV document whose first row names the fields.
///
/// Rows shorter than the header are padded with empty trailing fields before
/// decoding; longer rows keep their extra fields, which are ignored.
pub(crate) fn decode_csv<R: Record>(
    bytes: &[u8],
    dataset: Dataset,
    path: &Utf8Path,
) -> Result<Vec<R>, GeoDataError> {
    let decode_error = |source| GeoDataError::DecodeCsv {
        dataset,
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(bytes);
    let headers = reader.headers().map_err(decode_error)?.clone();

    let mut records = Vec::new();
    let mut padded_rows = 0_usize;
    for row in reader.records() {
        let mut fields = row.map_err(decode_error)?;
        if pad_to(&mut fields, headers.len()) {
            padded_rows += 1;
        }
        let record = fields
            .deserialize::<R>(Some(&headers))
            .map_err(decode_error)?;
        records.push(record);
    }

    if padded_rows > 0 {
        warn!("padded {padded_rows} short {dataset} rows in {path} with empty fields");
    }
    Ok(records)
}

/// Append empty fields until `record` holds `width` values.
fn pad_to(record: &mut StringRecord, width: usize) -> bool {
    let missing = width.saturating_sub(record.len());
    for _ in 0..missing {
        record.push_field("");
    }
    missing > 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use geodata_core::{District, Province, SubDistrict};
    use rstest::rstest;

    fn decode<R: Record>(payload: &str) -> Result<Vec<R>, GeoDataError> {
        decode_csv(payload.as_bytes(), R::DATASET, Utf8Path::new("fixture.csv"))
    }

    #[rstest]
    fn decodes_rows_by_header_name() {
        let payload = "\
DISTRICT_ID,PROVINCE_ID,CODE,DISTRICT_THAI,DISTRICT_ENGLISH,UPDATED_AT,CREATED_AT
1,1,1001,พระนคร,Phra Nakhon,2024-01-01,2024-01-01
401, 38 ,5001,เมืองเชียงใหม่,\"Mueang Chiang Mai\",,
";
        let districts: Vec<District> = decode(payload).expect("decode districts");
        assert_eq!(districts.len(), 2);
        assert_eq!(districts[1].province_id, 38);
        assert_eq!(districts[1].name_english, "Mueang Chiang Mai");
        assert!(districts[1].created_at.is_empty());
    }

    #[rstest]
    fn short_rows_are_padded() {
        let payload = "\
PROVINCE_ID,CODE,PROVINCE_THAI,PROVINCE_ENGLISH,UPDATED_AT,CREATED_AT
1,10,กรุงเทพมหานคร,Bangkok
";
        let provinces: Vec<Province> = decode(payload).expect("decode padded row");
        assert_eq!(provinces, vec![Province::new(1, "10", "กรุงเทพมหานคร", "Bangkok")]);
    }

    #[rstest]
    fn padding_an_identifier_is_a_decode_error() {
        let payload = "SUB_DISTRICT_ID,DISTRICT_ID,CODE\n9\n";
        let err = decode::<SubDistrict>(payload).expect_err("missing identifier");
        assert!(matches!(err, GeoDataError::DecodeCsv { .. }));
    }

    #[rstest]
    #[case("")]
    #[case("PROVINCE_ID,CODE,PROVINCE_THAI,PROVINCE_ENGLISH\n")]
    fn header_only_yields_no_records(#[case] payload: &str) {
        let provinces: Vec<Province> = decode(payload).expect("decode empty csv");
        assert!(provinces.is_empty());
    }

    #[rstest]
    fn pad_reports_whether_fields_were_added() {
        let mut record = StringRecord::from(vec!["1", "10"]);
        assert!(pad_to(&mut record, 4));
        assert_eq!(record.len(), 4);
        assert!(!pad_to(&mut record, 3));
        assert_eq!(record.len(), 4);
    }
}
