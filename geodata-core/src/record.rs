//! Administrative records and the traits shared by all three levels.
//!
//! Field names are serialised using the upper-case column names of the
//! published dataset so the same types decode both the JSON and the CSV
//! layouts.

use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};

use crate::{Dataset, Language};

/// Access to the bilingual name of a record.
pub trait Named {
    /// Return the name written in `language`.
    fn name(&self, language: Language) -> &str;
}

/// A record type stored in one of the dataset collections.
///
/// The associated [`Record::DATASET`] ties a type to its files, which lets
/// loaders stay generic over the record type.
pub trait Record: Named + Clone + Serialize + DeserializeOwned {
    /// Collection holding records of this type.
    const DATASET: Dataset;

    /// Identifier unique within the collection.
    fn id(&self) -> u32;

    /// Administrative code as published.
    fn code(&self) -> &str;
}

// Timestamps are informational; some exports publish them as `null`.
fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A province (changwat), the top level of the hierarchy.
///
/// # Examples
///
/// ```
/// use geodata_core::{Language, Named, Province};
///
/// let bangkok = Province::new(1, "10", "กรุงเทพมหานคร", "Bangkok");
/// assert_eq!(bangkok.name(Language::English), "Bangkok");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Province {
    /// Province identifier.
    #[serde(rename = "PROVINCE_ID")]
    pub id: u32,
    /// Administrative code as published.
    #[serde(rename = "CODE")]
    pub code: String,
    /// Name in Thai script.
    #[serde(rename = "PROVINCE_THAI")]
    pub name_thai: String,
    /// English transliteration of the name.
    #[serde(rename = "PROVINCE_ENGLISH")]
    pub name_english: String,
    /// Last update timestamp, empty when unpublished.
    #[serde(rename = "UPDATED_AT", default, deserialize_with = "string_or_null")]
    pub updated_at: String,
    /// Creation timestamp, empty when unpublished.
    #[serde(rename = "CREATED_AT", default, deserialize_with = "string_or_null")]
    pub created_at: String,
}

impl Province {
    /// Construct a province with empty timestamps.
    pub fn new(
        id: u32,
        code: impl Into<String>,
        name_thai: impl Into<String>,
        name_english: impl Into<String>,
    ) -> Self {
        Self {
            id,
            code: code.into(),
            name_thai: name_thai.into(),
            name_english: name_english.into(),
            updated_at: String::new(),
            created_at: String::new(),
        }
    }
}

/// A district (amphoe) belonging to a [`Province`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    /// District identifier.
    #[serde(rename = "DISTRICT_ID")]
    pub id: u32,
    /// Identifier of the parent province.
    #[serde(rename = "PROVINCE_ID")]
    pub province_id: u32,
    /// Administrative code as published.
    #[serde(rename = "CODE")]
    pub code: String,
    /// Name in Thai script.
    #[serde(rename = "DISTRICT_THAI")]
    pub name_thai: String,
    /// English transliteration of the name.
    #[serde(rename = "DISTRICT_ENGLISH")]
    pub name_english: String,
    /// Last update timestamp, empty when unpublished.
    #[serde(rename = "UPDATED_AT", default, deserialize_with = "string_or_null")]
    pub updated_at: String,
    /// Creation timestamp, empty when unpublished.
    #[serde(rename = "CREATED_AT", default, deserialize_with = "string_or_null")]
    pub created_at: String,
}

impl District {
    /// Construct a district with empty timestamps.
    pub fn new(
        id: u32,
        province_id: u32,
        code: impl Into<String>,
        name_thai: impl Into<String>,
        name_english: impl Into<String>,
    ) -> Self {
        Self {
            id,
            province_id,
            code: code.into(),
            name_thai: name_thai.into(),
            name_english: name_english.into(),
            updated_at: String::new(),
            created_at: String::new(),
        }
    }
}

/// A sub-district (tambon) belonging to a [`District`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubDistrict {
    /// Sub-district identifier.
    #[serde(rename = "SUB_DISTRICT_ID")]
    pub id: u32,
    /// Identifier of the parent district.
    #[serde(rename = "DISTRICT_ID")]
    pub district_id: u32,
    /// Administrative code as published.
    #[serde(rename = "CODE")]
    pub code: String,
    /// Name in Thai script.
    #[serde(rename = "SUB_DISTRICT_THAI")]
    pub name_thai: String,
    /// English transliteration of the name.
    #[serde(rename = "SUB_DISTRICT_ENGLISH")]
    pub name_english: String,
    /// Last update timestamp, empty when unpublished.
    #[serde(rename = "UPDATED_AT", default, deserialize_with = "string_or_null")]
    pub updated_at: String,
    /// Creation timestamp, empty when unpublished.
    #[serde(rename = "CREATED_AT", default, deserialize_with = "string_or_null")]
    pub created_at: String,
}

impl SubDistrict {
    /// Construct a sub-district with empty timestamps.
    pub fn new(
        id: u32,
        district_id: u32,
        code: impl Into<String>,
        name_thai: impl Into<String>,
        name_english: impl Into<String>,
    ) -> Self {
        Self {
            id,
            district_id,
            code: code.into(),
            name_thai: name_thai.into(),
            name_english: name_english.into(),
            updated_at: String::new(),
            created_at: String::new(),
        }
    }
}

macro_rules! impl_record {
    ($ty:ty, $dataset:expr) => {
        impl Named for $ty {
            fn name(&self, language: Language) -> &str {
                match language {
                    Language::Thai => &self.name_thai,
                    Language::English => &self.name_english,
                }
            }
        }

        impl Record for $ty {
            const DATASET: Dataset = $dataset;

            fn id(&self) -> u32 {
                self.id
            }

            fn code(&self) -> &str {
                &self.code
            }
        }
    };
}

impl_record!(Province, Dataset::Provinces);
impl_record!(District, Dataset::Districts);
impl_record!(SubDistrict, Dataset::SubDistricts);
