use super::{CodeSet, CodeTable};

pub static SERVICE_TYPE: CodeSet = CodeSet::new(
    "service_type",
    &[
        "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15", "16",
        "17", "18", "19", "20", "21", "22", "23", "24", "25", "26", "27", "28", "30", "32", "33",
        "34", "35", "36", "37", "38", "39", "40", "41", "42", "43", "44", "45", "46", "47", "48",
        "49", "50", "51", "52", "53", "54", "55", "56", "57", "58", "59", "60", "61", "62", "63",
        "64", "65", "66", "67", "68", "69", "70", "71", "72", "73", "74", "75", "76", "77", "78",
        "79", "80", "81", "82", "83", "84", "85", "86", "87", "88", "89", "90", "91", "92", "93",
        "94", "95", "96", "97", "98", "99", "A0", "A1", "A2", "A3", "A4", "A5", "A6", "A7", "A8",
        "A9", "AA", "AB", "AC", "AD", "AE", "AF", "AG", "AH", "AI", "AJ", "AK", "AL", "AM", "AN",
        "AO", "AP", "AQ", "AR", "B1", "B2", "B3", "BA", "BB", "BC", "BD", "BE", "BF", "BG", "BH",
        "BI", "BJ", "BK", "BL", "BM", "BN", "BO", "BP", "BQ", "BR", "BS", "BT", "BU", "BV", "BW",
        "BX", "BY", "BZ", "C1", "CA", "CB", "CC", "CD", "CE", "CF", "CG", "CH", "CI", "CJ", "CK",
        "CL", "CM", "CN", "CO", "CP", "CQ", "DG", "DM", "DS", "GF", "GN", "GY", "IC", "MH", "NI",
        "ON", "PT", "PU", "RN", "RT", "TC", "TN", "UC",
    ],
);

pub static BENEFIT_INFORMATION: CodeSet = CodeSet::new(
    "benefit_information",
    &[
        "1", "2", "3", "4", "5", "6", "7", "8", "A", "B", "C", "CB", "D", "E", "F", "G", "H", "I",
        "J", "K", "L", "M", "MC", "N", "O", "P", "Q", "R", "S", "T", "U", "V", "W", "X", "Y", "Z",
    ],
);

pub static INSURANCE_TYPE: CodeSet = CodeSet::new(
    "insurance_type",
    &[
        "12", "13", "14", "15", "16", "41", "42", "43", "47", "AP", "C1", "CO", "CP", "D", "DB",
        "EP", "FF", "GP", "HM", "HN", "HS", "IN", "IP", "LC", "LD", "LI", "LT", "MA", "MB", "MC",
        "MH", "MI", "MP", "OT", "PE", "PL", "PP", "PR", "PS", "QM", "PR", "SP", "TF", "WC", "WU",
    ],
);

pub static TIME_PERIOD: CodeSet = CodeSet::new(
    "time_period",
    &[
        "6", "7", "13", "21", "22", "23", "24", "25", "26", "27", "28", "29", "30", "31", "32",
        "33", "34", "35", "36",
    ],
);

pub static QUANTITY_QUALIFIER: CodeSet = CodeSet::new(
    "quantity_qualifier",
    &[
        "8H", "99", "CA", "CE", "D3", "DB", "DY", "HS", "LA", "LE", "M2", "MN", "P6", "QA", "S7",
        "S8", "VS", "YY",
    ],
);

pub static PROCEDURE_QUALIFIER: CodeSet = CodeSet::new(
    "procedure_qualifier",
    &[
        "AD", "CJ", "HC", "ID", "IV", "N4", "ZZ",
    ],
);

pub static DELIVERY_PATTERN: CodeSet = CodeSet::new(
    "delivery_pattern",
    &[
        "1", "2", "3", "4", "5", "6", "7", "8", "9", "A", "B", "C", "D", "E", "F", "G", "H", "I",
        "J", "K", "L", "M", "N", "O", "P", "Q", "R", "S", "SG", "SL", "SP", "SX", "SY", "SZ", "T",
        "U", "V",
    ],
);

pub static DELIVERY_PERIOD: CodeSet = CodeSet::new(
    "delivery_period",
    &[
        "6", "7", "21", "22", "23", "24", "25", "26", "27", "28", "29", "30", "31", "32", "33",
        "34", "35",
    ],
);

pub static BODY_PART: CodeSet = CodeSet::new(
    "body_part",
    &[
        "Head", "Brain", "Ear", "Eye", "Jaw", "Mouth", "Teeth", "Nose", "Face", "Skull", "Neck",
    ],
);

pub static AUTHORIZATION: CodeSet = CodeSet::new("authorization", &["Y", "N", "U"]);

/// Nature of injury qualifier and the code description it selects.
pub static NATURE_OF_INJURY: CodeTable = CodeTable::new(
    "nature_of_injury",
    &[
        ("GR", "NCCI Nature of Injury Code"),
        ("NI", "Nature of Injury Code"),
    ],
);

pub static SAMPLING_FREQUENCY_QUALIFIER: CodeSet =
    CodeSet::new("sampling_frequency_qualifier", &["DA", "MO", "VS", "WK", "YR"]);
