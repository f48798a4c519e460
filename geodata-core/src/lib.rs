//! Core domain types for the Thailand geodata workspace.
//!
//! The crate models the three levels of Thailand's administrative hierarchy
//! ([`Province`], [`District`] and [`SubDistrict`]) together with the closed
//! enumerations used to address them ([`Dataset`] and [`Language`]).
//!
//! Nothing here performs I/O. Loading and caching live in `geodata-store`;
//! this crate only fixes the shape of the records and the serialised column
//! names shared by the JSON and CSV sources.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod dataset;
mod language;
mod record;
mod statistics;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use dataset::{Dataset, DatasetParseError};
pub use language::{Language, LanguageParseError};
pub use record::{District, Named, Province, Record, SubDistrict};
pub use statistics::{ProvinceHierarchy, Statistics};
