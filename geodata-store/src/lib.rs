//! Lazy, read-only access to the Thailand geodata files.
//!
//! Responsibilities:
//! - Decode the JSON and CSV layouts into the `geodata-core` records.
//! - Cache each collection after its first load.
//! - Answer lookups, name searches and parent/child filters.
//! - Re-encode collections for export.
//!
//! Boundaries:
//! - No validation of referential integrity; a dangling parent identifier
//!   simply matches nothing.
//! - No indexes. Every query is a linear scan over at most a few thousand
//!   records.
//!
//! Invariants:
//! - A collection is read from disk at most once per store.
//! - A failed load leaves the cache untouched, so a later call retries.
//! - "Not found" is `Ok(None)` or an empty `Vec`, never an error.
//!
//! # Examples
//!
//! ```no_run
//! use geodata_store::GeoDataStore;
//! use geodata_core::Language;
//!
//! # fn main() -> Result<(), geodata_store::GeoDataError> {
//! let store = GeoDataStore::new("thailand-geography-data");
//! let stats = store.statistics()?;
//! println!("{} provinces", stats.provinces);
//! for province in store.search_provinces_by_name("เชียง", Language::Thai)? {
//!     println!("{}", province.name_english);
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod error;
mod export;
mod source;
mod store;

pub use error::{ErrorKind, GeoDataError};
pub use export::{export_collection, export_csv, export_json};
pub use source::{DEFAULT_DATA_DIR, DataFormat, DataFormatParseError, DatasetSource, FileSource};
pub use store::{Collection, GeoDataStore};
