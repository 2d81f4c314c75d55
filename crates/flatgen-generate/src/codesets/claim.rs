use super::CodeSet;

/// Claim status category codes.
pub static STATUS_CATEGORY: CodeSet = CodeSet::new(
    "status_category",
    &[
        "X0", "A0", "A1", "A2", "A3", "A4", "A5", "A6", "A7", "A8", "P0", "P1", "P2", "P3", "P4",
        "P5", "F0", "F1", "F2", "F3", "F3F", "F3N", "F4", "F5", "E0", "E1", "E2", "D0",
    ],
);

/// Entity identifier codes for status records.
pub static ENTITY: CodeSet = CodeSet::new(
    "entity",
    &[
        "03", "13", "17", "1E", "1G", "1H", "1L", "1O", "1P", "1Q", "1R", "1S", "1T", "1U", "1V",
        "1W", "1X", "1Y", "1Z", "28", "2A", "2B", "2D", "2E", "2I", "2K", "2P", "2Q", "2S", "2Z",
        "4U", "4V", "4W", "4X", "4Y", "4Z", "5A", "5B", "5C", "5D", "5E", "5F", "5G", "5H", "5I",
        "5J", "5K", "5L", "5M", "5N", "5O", "5P", "5Q", "5R", "5S", "5T", "5U", "5V", "5W", "5X",
        "E1", "E2", "E7", "E9", "FA", "FD", "FE", "G0", "G3", "GB", "GD", "GI", "GJ", "GK", "GM",
        "GY", "HF", "HH", "I3", "IL", "IN", "LI", "LR", "MR", "OB", "OD", "OX", "P0", "P2", "30",
        "36", "3A", "3C", "3D", "3E", "3F", "3G", "3H", "3I", "3J", "3K", "3L", "3M", "3N", "3O",
        "3P", "3Q", "3R", "3S", "3T", "3U", "3V", "3W", "3X", "3Y", "3Z", "40", "43", "44", "5Y",
        "5Z", "61", "6A", "6B", "6C", "6D", "6E", "6F", "6G", "6H", "6I", "6J", "6K", "6L", "6M",
        "6N", "6O", "6P", "6Q", "6R", "6S", "6U", "6V", "6W", "6X", "6Y", "71", "72", "73", "P3",
        "P4", "P6", "P7", "PRP", "PT", "PV", "PW", "QA", "QB", "QC", "QD", "QE", "QH", "QK", "QL",
        "QN", "QO", "QS", "QV", "QY", "RC", "RW", "S4", "SEP", "SJ", "SU", "T4", "TL", "TQ", "TT",
        "4A", "4B", "4C", "4D", "4E", "4F", "4G", "4H", "4I", "4M", "4N", "4O", "4P", "4Q", "4R",
        "4S", "74", "77", "7C", "80", "82", "84", "85", "87", "95", "CK", "D2", "DD", "DJ", "DK",
        "DN", "DO", "DQ", "TTP", "TU", "UH", "X3", "X4", "X5", "MSC", "ZZ",
    ],
);

pub static MAINTENANCE_TYPE: CodeSet =
    CodeSet::new("maintenance_type", &["001", "002", "021", "030"]);

pub static PATIENT_GENDER: CodeSet = CodeSet::new("patient_gender", &["F", "M"]);

pub static SERVICE_QUALIFIER: CodeSet = CodeSet::new(
    "service_qualifier",
    &["AD", "ER", "HC", "HP", "IV", "N4", "NU", "WK"],
);

pub static STATUS_CODE: CodeSet = CodeSet::new(
    "status_code",
    &["0", "1", "2", "3", "6", "12", "15", "16", "17", "18", "19", "20"],
);
