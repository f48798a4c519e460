//! Facade crate for the Thailand geodata store.
//!
//! This crate re-exports the record types and the lazily loading store so
//! callers can depend on a single crate.

#![forbid(unsafe_code)]

pub use geodata_core::{
    Dataset, DatasetParseError, District, Language, LanguageParseError, Named, Province,
    ProvinceHierarchy, Record, Statistics, SubDistrict,
};
pub use geodata_store::{
    Collection, DEFAULT_DATA_DIR, DataFormat, DataFormatParseError, DatasetSource, ErrorKind,
    FileSource, GeoDataError, GeoDataStore, export_collection, export_csv, export_json,
};
