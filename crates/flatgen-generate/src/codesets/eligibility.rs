use super::CodeSet;

/// Maintenance reason codes, used when the roster indicator is set.
pub static MAINTENANCE_REASON: CodeSet = CodeSet::new(
    "maintenance_reason",
    &[
        "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "14", "15", "16", "17",
        "18", "20", "21", "22", "25", "26", "27", "28", "29", "31", "32", "33", "37", "38", "39",
        "40", "41", "43", "59", "AA", "AB", "AC", "AD", "AE", "AF", "AG", "AH", "AI", "AJ", "AL",
        "EC", "XN", "XT",
    ],
);

pub static ROSTER_RELATIONSHIP: CodeSet = CodeSet::new(
    "roster_relationship",
    &[
        "01", "18", "19", "20", "21", "39", "40", "53", "G8",
    ],
);

pub static MILITARY_AFFILIATION: CodeSet = CodeSet::new(
    "military_affiliation",
    &[
        "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "Q", "R", "S",
        "U", "W",
    ],
);

pub static MILITARY_RANK: CodeSet = CodeSet::new(
    "military_rank",
    &[
        "A1", "A2", "A3", "B1", "B2", "C1", "C2", "C3", "C4", "C5", "C6", "C7", "C8", "C9", "E1",
        "F1", "F2", "F3", "F4", "G1", "G4", "L1", "L2", "L3", "L4", "L5", "L6", "M1", "M2", "M3",
        "M4", "M5", "M6", "P1", "P2", "P3", "P4", "P5", "R1", "R2", "S1", "S2", "S3", "S4", "S5",
        "S6", "S7", "S8", "S9", "SA", "SB", "SC", "T1", "V1", "W1",
    ],
);

pub static MILITARY_STATUS: CodeSet = CodeSet::new(
    "military_status",
    &[
        "AE", "AO", "AS", "AT", "AU", "CC", "DD", "HD", "IR", "LX", "PE", "RE", "RM", "RR", "RU",
    ],
);

pub static ACTION_FULL_LOAD: CodeSet = CodeSet::new("action_full_load", &["I", "L"]);

pub static ACTION_CHANGE_LOAD: CodeSet = CodeSet::new("action_change_load", &["U", "D"]);

/// Relationship codes allowed outside roster files.
pub static RELATIONSHIP: CodeSet =
    CodeSet::new("relationship", &["01", "18", "19", "20", "21", "53", "G8"]);

pub static GENDER: CodeSet = CodeSet::new("gender", &["M", "F", "U"]);

pub static MEMBER_STATUS: CodeSet =
    CodeSet::new("member_status", &["1", "2", "3", "4", "5", "6", "7", "8"]);

pub static ONE_TO_FIVE: CodeSet = CodeSet::new("one_to_five", &["1", "2", "3", "4", "5"]);

pub static STUDENT_STATUS: CodeSet = CodeSet::new("student_status", &["F", "P", "N"]);

pub static DISABILITY_TYPE: CodeSet = CodeSet::new("disability_type", &["1", "2", "3", "4"]);

pub static ONE_TO_THREE: CodeSet = CodeSet::new("one_to_three", &["1", "2", "3"]);

pub static EMPLOYEE_STATUS: CodeSet = CodeSet::new(
    "employee_status",
    &["CO", "FT", "PT", "RT", "RW", "AC", "AO", "AU", "L1", "TE"],
);

pub static EMPLOYMENT_CLASS: CodeSet = CodeSet::new(
    "employment_class",
    &[
        "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12", "17", "18", "19",
        "20", "21", "22", "23",
    ],
);

pub static INCOME_FREQUENCY: CodeSet = CodeSet::new(
    "income_frequency",
    &["1", "2", "3", "4", "6", "7", "8", "9", "B", "C", "H", "Q", "S", "U"],
);

pub static MILITARY_INFORMATION_STATUS: CodeSet = CodeSet::new(
    "military_information_status",
    &["A", "C", "L", "O", "P", "S", "T"],
);

pub static MILITARY_UNIT: CodeSet = CodeSet::new(
    "military_unit",
    &["corps", "division", "battalion", "company", "platoon"],
);

pub static HEALTH_RELATED: CodeSet = CodeSet::new("health_related", &["N", "S", "T", "U", "X"]);

pub static LANGUAGE_QUALIFIER: CodeSet = CodeSet::new("language_qualifier", &["LD", "LE"]);
