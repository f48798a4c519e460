//! Decoding of the `json/` layout.

use camino::Utf8Path;
use geodata_core::{Dataset, Record};
use serde_json::Value;

use crate::GeoDataError;

/// Decode the records stored under `dataset`'s top-level key.
///
/// A document without the key is an error rather than an empty collection.
pub(crate) fn decode_json<R: Record>(
    bytes: &[u8],
    dataset: Dataset,
    path: &Utf8Path,
) -> Result<Vec<R>, GeoDataError> {
    let document: Value =
        serde_json::from_slice(bytes).map_err(|source| GeoDataError::DecodeJson {
            dataset,
            path: path.to_path_buf(),
            source,
        })?;
    let Value::Object(mut object) = document else {
        return Err(GeoDataError::NotAnObject {
            dataset,
            path: path.to_path_buf(),
        });
    };
    let key = dataset.key();
    let records = object.remove(key).ok_or_else(|| GeoDataError::MissingKey {
        dataset,
        path: path.to_path_buf(),
        key,
    })?;
    serde_json::from_value(records).map_err(|source| GeoDataError::DecodeJson {
        dataset,
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use geodata_core::{District, Province};
    use rstest::rstest;

    fn decode<R: Record>(payload: &str) -> Result<Vec<R>, GeoDataError> {
        decode_json(payload.as_bytes(), R::DATASET, Utf8Path::new("fixture.json"))
    }

    #[rstest]
    fn decodes_records_in_order() {
        let payload = r#"{"provinces": [
            {"PROVINCE_ID": 1, "CODE": "10", "PROVINCE_THAI": "กรุงเทพมหานคร", "PROVINCE_ENGLISH": "Bangkok"},
            {"PROVINCE_ID": 38, "CODE": "50", "PROVINCE_THAI": "เชียงใหม่", "PROVINCE_ENGLISH": "Chiang Mai"}
        ]}"#;
        let provinces: Vec<Province> = decode(payload).expect("decode provinces");
        let codes: Vec<&str> = provinces.iter().map(|p| p.code.as_str()).collect();
        assert_eq!(codes, ["10", "50"]);
    }

    #[rstest]
    fn empty_array_is_an_empty_collection() {
        let districts: Vec<District> = decode(r#"{"districts": []}"#).expect("decode");
        assert!(districts.is_empty());
    }

    #[rstest]
    fn missing_key_is_a_decode_error() {
        let err = decode::<District>(r#"{"provinces": []}"#).expect_err("wrong key");
        match err {
            GeoDataError::MissingKey { key, .. } => assert_eq!(key, "districts"),
            other => panic!("expected MissingKey, found {other:?}"),
        }
    }

    #[rstest]
    #[case("[]")]
    #[case("\"provinces\"")]
    fn non_object_is_rejected(#[case] payload: &str) {
        let err = decode::<Province>(payload).expect_err("not an object");
        assert!(matches!(err, GeoDataError::NotAnObject { .. }));
    }

    #[rstest]
    #[case("{ not json")]
    #[case(r#"{"provinces": [{"CODE": "10"}]}"#)]
    #[case(r#"{"provinces": {"PROVINCE_ID": 1}}"#)]
    fn malformed_payload_is_rejected(#[case] payload: &str) {
        let err = decode::<Province>(payload).expect_err("malformed payload");
        assert!(matches!(err, GeoDataError::DecodeJson { .. }));
    }
}
