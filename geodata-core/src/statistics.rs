//! Aggregate views over the loaded collections.

use serde::Serialize;

use crate::{Dataset, District, Province};

/// Number of records held by each collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    /// Number of provinces.
    pub provinces: usize,
    /// Number of districts.
    pub districts: usize,
    /// Number of sub-districts.
    pub sub_districts: usize,
}

impl Statistics {
    /// Count for a single collection.
    #[must_use]
    pub const fn count(&self, dataset: Dataset) -> usize {
        match dataset {
            Dataset::Provinces => self.provinces,
            Dataset::Districts => self.districts,
            Dataset::SubDistricts => self.sub_districts,
        }
    }

    /// Number of records across all collections.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.provinces + self.districts + self.sub_districts
    }
}

/// A province together with the records beneath it.
///
/// Districts are borrowed from the store and keep their file order. Only the
/// number of sub-districts is kept since a province may hold hundreds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvinceHierarchy<'a> {
    /// The province at the root of the hierarchy.
    pub province: &'a Province,
    /// Districts whose parent is [`ProvinceHierarchy::province`].
    pub districts: Vec<&'a District>,
    /// Number of sub-districts belonging to any of the districts.
    pub sub_district_count: usize,
}
