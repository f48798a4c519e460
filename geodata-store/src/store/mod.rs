//! The lazily populated collection cache and its queries.

use std::{cell::OnceCell, collections::HashSet};

use camino::Utf8PathBuf;
use geodata_core::{
    Dataset, District, Language, Named, Province, ProvinceHierarchy, Record, Statistics,
    SubDistrict,
};
use log::{debug, trace};

use crate::{DataFormat, DatasetSource, FileSource, GeoDataError};

/// A borrowed view of one loaded collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection<'a> {
    /// All provinces in file order.
    Provinces(&'a [Province]),
    /// All districts in file order.
    Districts(&'a [District]),
    /// All sub-districts in file order.
    SubDistricts(&'a [SubDistrict]),
}

impl Collection<'_> {
    /// Which collection this is.
    #[must_use]
    pub const fn dataset(&self) -> Dataset {
        match self {
            Self::Provinces(_) => Dataset::Provinces,
            Self::Districts(_) => Dataset::Districts,
            Self::SubDistricts(_) => Dataset::SubDistricts,
        }
    }

    /// Number of records.
    #[must_use]
    pub const fn len(&self) -> usize {
        match self {
            Self::Provinces(records) => records.len(),
            Self::Districts(records) => records.len(),
            Self::SubDistricts(records) => records.len(),
        }
    }

    /// Whether the collection holds no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Read-only store that loads each collection on first use.
///
/// Each collection has its own typed cell, filled at most once. A failed
/// load leaves its cell empty. The store is `!Sync`; wrap it in a lock to
/// share it across threads.
///
/// # Examples
///
/// ```no_run
/// use geodata_store::{DataFormat, GeoDataStore};
///
/// # fn main() -> Result<(), geodata_store::GeoDataError> {
/// let store = GeoDataStore::with_format("thailand-geography-data", DataFormat::Csv);
/// if let Some(bangkok) = store.province_by_code("10")? {
///     let districts = store.districts_by_province_id(bangkok.id)?;
///     assert!(!districts.is_empty());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct GeoDataStore<S = FileSource> {
    source: S,
    provinces: OnceCell<Vec<Province>>,
    districts: OnceCell<Vec<District>>,
    sub_districts: OnceCell<Vec<SubDistrict>>,
}

impl GeoDataStore<FileSource> {
    /// Read the JSON files beneath `data_dir`.
    ///
    /// An empty `data_dir` falls back to [`crate::DEFAULT_DATA_DIR`].
    pub fn new(data_dir: impl Into<Utf8PathBuf>) -> Self {
        Self::with_format(data_dir, DataFormat::Json)
    }

    /// Read `format` files beneath `data_dir`.
    pub fn with_format(data_dir: impl Into<Utf8PathBuf>, format: DataFormat) -> Self {
        Self::from_source(FileSource::new(data_dir, format))
    }
}

impl Default for GeoDataStore<FileSource> {
    fn default() -> Self {
        Self::from_source(FileSource::default())
    }
}

impl<S: DatasetSource> GeoDataStore<S> {
    /// Wrap an arbitrary source with an empty cache.
    pub const fn from_source(source: S) -> Self {
        Self {
            source,
            provinces: OnceCell::new(),
            districts: OnceCell::new(),
            sub_districts: OnceCell::new(),
        }
    }

    /// The underlying source.
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Whether `dataset` has already been loaded.
    pub fn is_cached(&self, dataset: Dataset) -> bool {
        match dataset {
            Dataset::Provinces => self.provinces.get().is_some(),
            Dataset::Districts => self.districts.get().is_some(),
            Dataset::SubDistricts => self.sub_districts.get().is_some(),
        }
    }

    /// Load `dataset`, or return it from the cache.
    ///
    /// # Errors
    /// Returns the source's I/O or decode error; the cache is unchanged.
    pub fn load(&self, dataset: Dataset) -> Result<Collection<'_>, GeoDataError> {
        Ok(match dataset {
            Dataset::Provinces => Collection::Provinces(self.provinces()?),
            Dataset::Districts => Collection::Districts(self.districts()?),
            Dataset::SubDistricts => Collection::SubDistricts(self.sub_districts()?),
        })
    }

    /// All provinces in file order.
    ///
    /// # Errors
    /// Fails when the provinces file cannot be read or decoded.
    pub fn provinces(&self) -> Result<&[Province], GeoDataError> {
        self.cached(&self.provinces)
    }

    /// All districts in file order.
    ///
    /// # Errors
    /// Fails when the districts file cannot be read or decoded.
    pub fn districts(&self) -> Result<&[District], GeoDataError> {
        self.cached(&self.districts)
    }

    /// All sub-districts in file order.
    ///
    /// # Errors
    /// Fails when the sub-districts file cannot be read or decoded.
    pub fn sub_districts(&self) -> Result<&[SubDistrict], GeoDataError> {
        self.cached(&self.sub_districts)
    }

    /// First province whose code equals `code` exactly.
    ///
    /// # Errors
    /// Fails only when the provinces cannot be loaded.
    pub fn province_by_code(&self, code: &str) -> Result<Option<&Province>, GeoDataError> {
        Ok(self.provinces()?.iter().find(|province| province.code == code))
    }

    /// First province with identifier `id`.
    ///
    /// # Errors
    /// Fails only when the provinces cannot be loaded.
    pub fn province_by_id(&self, id: u32) -> Result<Option<&Province>, GeoDataError> {
        Ok(self.provinces()?.iter().find(|province| province.id == id))
    }

    /// Provinces whose `language` name contains `needle`, ignoring case.
    ///
    /// An empty needle matches every province.
    ///
    /// # Errors
    /// Fails only when the provinces cannot be loaded.
    pub fn search_provinces_by_name(
        &self,
        needle: &str,
        language: Language,
    ) -> Result<Vec<&Province>, GeoDataError> {
        let folded = needle.to_lowercase();
        Ok(self
            .provinces()?
            .iter()
            .filter(|province| province.name(language).to_lowercase().contains(&folded))
            .collect())
    }

    /// Districts whose parent province is `province_id`, in file order.
    ///
    /// # Errors
    /// Fails only when the districts cannot be loaded.
    pub fn districts_by_province_id(
        &self,
        province_id: u32,
    ) -> Result<Vec<&District>, GeoDataError> {
        Ok(self
            .districts()?
            .iter()
            .filter(|district| district.province_id == province_id)
            .collect())
    }

    /// Sub-districts whose parent district is `district_id`, in file order.
    ///
    /// # Errors
    /// Fails only when the sub-districts cannot be loaded.
    pub fn sub_districts_by_district_id(
        &self,
        district_id: u32,
    ) -> Result<Vec<&SubDistrict>, GeoDataError> {
        Ok(self
            .sub_districts()?
            .iter()
            .filter(|sub_district| sub_district.district_id == district_id)
            .collect())
    }

    /// The province `province_id` with its districts and sub-district count.
    ///
    /// Returns `Ok(None)` when no such province exists; districts and
    /// sub-districts are only loaded when it does.
    ///
    /// # Errors
    /// Fails when any of the required collections cannot be loaded.
    pub fn province_hierarchy(
        &self,
        province_id: u32,
    ) -> Result<Option<ProvinceHierarchy<'_>>, GeoDataError> {
        let Some(province) = self.province_by_id(province_id)? else {
            return Ok(None);
        };
        let districts = self.districts_by_province_id(province_id)?;
        let district_ids: HashSet<u32> = districts.iter().map(|district| district.id).collect();
        let sub_district_count = self
            .sub_districts()?
            .iter()
            .filter(|sub_district| district_ids.contains(&sub_district.district_id))
            .count();
        Ok(Some(ProvinceHierarchy {
            province,
            districts,
            sub_district_count,
        }))
    }

    /// Record counts of all three collections, loading any that are missing.
    ///
    /// # Errors
    /// Fails on the first collection that cannot be loaded.
    pub fn statistics(&self) -> Result<Statistics, GeoDataError> {
        Ok(Statistics {
            provinces: self.provinces()?.len(),
            districts: self.districts()?.len(),
            sub_districts: self.sub_districts()?.len(),
        })
    }

    fn cached<'a, R: Record>(
        &'a self,
        cell: &'a OnceCell<Vec<R>>,
    ) -> Result<&'a [R], GeoDataError> {
        if let Some(records) = cell.get() {
            trace!("{} served from cache", R::DATASET);
            return Ok(records.as_slice());
        }
        let records = self.source.read::<R>()?;
        debug!("loaded {} {} records", records.len(), R::DATASET);
        Ok(cell.get_or_init(|| records).as_slice())
    }
}

#[cfg(test)]
mod tests;
