//! Unit tests for the collection cache and its queries.

use std::cell::{Cell, RefCell};

use camino::Utf8PathBuf;
use geodata_core::test_support::{
    BANGKOK_ID, CHIANG_MAI_ID, PHRA_NAKHON_ID, sample_districts, sample_provinces,
    sample_sub_districts,
};
use rstest::{fixture, rstest};

use super::*;
use crate::ErrorKind;

/// Serves the sample records from memory and logs every read.
#[derive(Debug, Default)]
struct SampleSource {
    reads: RefCell<Vec<Dataset>>,
    failures_left: Cell<usize>,
}

impl SampleSource {
    fn failing_first(failures: usize) -> Self {
        Self {
            failures_left: Cell::new(failures),
            ..Self::default()
        }
    }

    fn reads_of(&self, dataset: Dataset) -> usize {
        self.reads
            .borrow()
            .iter()
            .filter(|read| **read == dataset)
            .count()
    }
}

impl DatasetSource for SampleSource {
    fn read<R: Record>(&self) -> Result<Vec<R>, GeoDataError> {
        self.reads.borrow_mut().push(R::DATASET);
        let path = Utf8PathBuf::from(format!("memory/{}", R::DATASET.json_file_name()));
        if self.failures_left.get() > 0 {
            self.failures_left.set(self.failures_left.get() - 1);
            return Err(GeoDataError::Read {
                dataset: R::DATASET,
                path,
                source: std::io::Error::other("simulated read failure"),
            });
        }
        let value = match R::DATASET {
            Dataset::Provinces => serde_json::to_value(sample_provinces()),
            Dataset::Districts => serde_json::to_value(sample_districts()),
            Dataset::SubDistricts => serde_json::to_value(sample_sub_districts()),
        }
        .expect("encode sample records");
        serde_json::from_value(value).map_err(|source| GeoDataError::DecodeJson {
            dataset: R::DATASET,
            path,
            source,
        })
    }
}

#[fixture]
fn store() -> GeoDataStore<SampleSource> {
    GeoDataStore::from_source(SampleSource::default())
}

#[rstest]
fn loading_twice_reads_once(store: GeoDataStore<SampleSource>) {
    let first = store.provinces().expect("first load").to_vec();
    let second = store.provinces().expect("cached load");
    assert_eq!(first, second);
    assert_eq!(store.source().reads_of(Dataset::Provinces), 1);
}

#[rstest]
fn collections_load_independently(store: GeoDataStore<SampleSource>) {
    store.districts().expect("load districts");
    assert!(store.is_cached(Dataset::Districts));
    assert!(!store.is_cached(Dataset::Provinces));
    assert!(!store.is_cached(Dataset::SubDistricts));
}

#[rstest]
#[case(Dataset::Provinces, 3)]
#[case(Dataset::Districts, 9)]
#[case(Dataset::SubDistricts, 4)]
fn load_returns_tagged_collection(
    store: GeoDataStore<SampleSource>,
    #[case] dataset: Dataset,
    #[case] expected_len: usize,
) {
    let collection = store.load(dataset).expect("load collection");
    assert_eq!(collection.dataset(), dataset);
    assert_eq!(collection.len(), expected_len);
    store.load(dataset).expect("cached collection");
    assert_eq!(store.source().reads_of(dataset), 1);
}

#[rstest]
fn province_by_code_finds_unique_match(store: GeoDataStore<SampleSource>) {
    let bangkok = store
        .province_by_code("10")
        .expect("load provinces")
        .expect("Bangkok present");
    assert_eq!(bangkok.id, BANGKOK_ID);
    assert_eq!(bangkok.name_english, "Bangkok");
}

#[rstest]
#[case("99")]
#[case("")]
#[case("1")]
fn province_by_code_reports_absence(store: GeoDataStore<SampleSource>, #[case] code: &str) {
    assert_eq!(store.province_by_code(code).expect("load provinces"), None);
}

#[rstest]
#[case("bangkok")]
#[case("BANGKOK")]
#[case("gkok")]
fn english_search_ignores_case(store: GeoDataStore<SampleSource>, #[case] needle: &str) {
    let matches = store
        .search_provinces_by_name(needle, Language::English)
        .expect("search provinces");
    let ids: Vec<u32> = matches.iter().map(|province| province.id).collect();
    assert_eq!(ids, [BANGKOK_ID]);
}

#[rstest]
fn thai_search_keeps_file_order(store: GeoDataStore<SampleSource>) {
    let matches = store
        .search_provinces_by_name("เชียง", Language::Thai)
        .expect("search provinces");
    let names: Vec<&str> = matches.iter().map(|p| p.name_english.as_str()).collect();
    assert_eq!(names, ["Chiang Mai", "Chiang Rai"]);
}

#[rstest]
fn search_uses_only_the_requested_language(store: GeoDataStore<SampleSource>) {
    let matches = store
        .search_provinces_by_name("chiang", Language::Thai)
        .expect("search provinces");
    assert!(matches.is_empty());
}

#[rstest]
fn empty_needle_matches_everything(store: GeoDataStore<SampleSource>) {
    let matches = store
        .search_provinces_by_name("", Language::English)
        .expect("search provinces");
    assert_eq!(matches.len(), sample_provinces().len());
}

#[rstest]
fn districts_by_province_preserve_order(store: GeoDataStore<SampleSource>) {
    let districts = store
        .districts_by_province_id(CHIANG_MAI_ID)
        .expect("filter districts");
    let codes: Vec<&str> = districts.iter().map(|d| d.code.as_str()).collect();
    assert_eq!(codes, ["5001", "5002"]);
}

#[rstest]
fn unknown_province_has_no_districts(store: GeoDataStore<SampleSource>) {
    let districts = store.districts_by_province_id(999).expect("filter districts");
    assert!(districts.is_empty());
}

#[rstest]
fn sub_districts_by_district_filter_parent(store: GeoDataStore<SampleSource>) {
    let sub_districts = store
        .sub_districts_by_district_id(PHRA_NAKHON_ID)
        .expect("filter sub-districts");
    let ids: Vec<u32> = sub_districts.iter().map(|s| s.id).collect();
    assert_eq!(ids, [1, 2]);
}

#[rstest]
fn hierarchy_counts_sub_districts_of_all_districts(store: GeoDataStore<SampleSource>) {
    let hierarchy = store
        .province_hierarchy(BANGKOK_ID)
        .expect("build hierarchy")
        .expect("Bangkok present");
    assert_eq!(hierarchy.province.code, "10");
    assert_eq!(hierarchy.districts.len(), 7);
    assert_eq!(hierarchy.sub_district_count, 3);
}

#[rstest]
fn hierarchy_of_unknown_province_loads_nothing_else(store: GeoDataStore<SampleSource>) {
    assert!(store.province_hierarchy(999).expect("lookup").is_none());
    assert!(!store.is_cached(Dataset::Districts));
    assert!(!store.is_cached(Dataset::SubDistricts));
}

#[rstest]
fn statistics_match_collection_lengths(store: GeoDataStore<SampleSource>) {
    let stats = store.statistics().expect("statistics");
    assert_eq!(stats.provinces, store.provinces().expect("provinces").len());
    assert_eq!(stats.districts, store.districts().expect("districts").len());
    assert_eq!(
        stats.sub_districts,
        store.sub_districts().expect("sub-districts").len()
    );
    for dataset in Dataset::ALL {
        assert_eq!(store.source().reads_of(dataset), 1);
    }
}

#[rstest]
fn failed_load_leaves_cache_empty() {
    let store = GeoDataStore::from_source(SampleSource::failing_first(1));

    let err = store.provinces().expect_err("first read fails");
    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(!store.is_cached(Dataset::Provinces));

    let provinces = store.provinces().expect("second read succeeds");
    assert_eq!(provinces.len(), 3);
    assert_eq!(store.source().reads_of(Dataset::Provinces), 2);
}

#[rstest]
fn lookup_failure_is_distinct_from_no_match() {
    let store = GeoDataStore::from_source(SampleSource::failing_first(1));
    assert!(store.province_by_code("10").is_err());
    assert_eq!(store.province_by_code("99").expect("retry succeeds"), None);
}
