use super::CodeSet;

/// Qualifiers for the first communication number when it is not a telephone.
pub static PRIMARY_COMMUNICATION_QUALIFIER: CodeSet = CodeSet::new(
    "primary_communication_qualifier",
    &["ED", "EM", "FX", "UR", "WP"],
);

pub static COMMUNICATION_QUALIFIER: CodeSet = CodeSet::new(
    "communication_qualifier",
    &["ED", "TE", "EM", "FX", "UR", "WP"],
);

pub static EMPLOYER_SIZE: CodeSet = CodeSet::new("employer_size", &["0", "1", "2"]);
