//! Small, hand-picked records used by unit and behaviour tests across the
//! workspace.
//!
//! The sample covers three provinces (two sharing the `เชียง` prefix), the
//! first seven districts of Bangkok, two districts of Chiang Mai and a few
//! sub-districts. Identifiers follow the published dataset.

use crate::{District, Province, SubDistrict};

/// Identifier of Bangkok in the sample.
pub const BANGKOK_ID: u32 = 1;
/// Identifier of Chiang Mai in the sample.
pub const CHIANG_MAI_ID: u32 = 38;
/// Identifier of the Phra Nakhon district in the sample.
pub const PHRA_NAKHON_ID: u32 = 1;

/// Sample provinces in file order.
#[must_use]
pub fn sample_provinces() -> Vec<Province> {
    vec![
        Province::new(BANGKOK_ID, "10", "กรุงเทพมหานคร", "Bangkok"),
        Province::new(CHIANG_MAI_ID, "50", "เชียงใหม่", "Chiang Mai"),
        Province::new(39, "57", "เชียงราย", "Chiang Rai"),
    ]
}

/// Sample districts in file order.
#[must_use]
pub fn sample_districts() -> Vec<District> {
    vec![
        District::new(PHRA_NAKHON_ID, BANGKOK_ID, "1001", "พระนคร", "Phra Nakhon"),
        District::new(2, BANGKOK_ID, "1002", "ดุสิต", "Dusit"),
        District::new(3, BANGKOK_ID, "1003", "หนองจอก", "Nong Chok"),
        District::new(4, BANGKOK_ID, "1004", "บางรัก", "Bang Rak"),
        District::new(5, BANGKOK_ID, "1005", "บางเขน", "Bang Khen"),
        District::new(6, BANGKOK_ID, "1006", "บางกะปิ", "Bang Kapi"),
        District::new(7, BANGKOK_ID, "1007", "ปทุมวัน", "Pathum Wan"),
        District::new(
            401,
            CHIANG_MAI_ID,
            "5001",
            "เมืองเชียงใหม่",
            "Mueang Chiang Mai",
        ),
        District::new(402, CHIANG_MAI_ID, "5002", "จอมทอง", "Chom Thong"),
    ]
}

/// Sample sub-districts in file order.
#[must_use]
pub fn sample_sub_districts() -> Vec<SubDistrict> {
    vec![
        SubDistrict::new(
            1,
            PHRA_NAKHON_ID,
            "100101",
            "พระบรมมหาราชวัง",
            "Phra Borom Maha Ratchawang",
        ),
        SubDistrict::new(
            2,
            PHRA_NAKHON_ID,
            "100102",
            "วังบูรพาภิรมย์",
            "Wang Burapha Phirom",
        ),
        SubDistrict::new(9, 2, "100201", "ดุสิต", "Dusit"),
        SubDistrict::new(3101, 401, "500101", "ศรีภูมิ", "Si Phum"),
    ]
}
