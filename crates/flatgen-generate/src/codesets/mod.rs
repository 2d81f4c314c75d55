//! Fixed domain values drawn by the field tables.
//!
//! Sets are loaded once as statics and never mutated. Integer codes are kept
//! as their decimal text since every value ends up in a text file.

pub mod benefit_entity;
pub mod claim;
pub mod eligibility;
pub mod individual_usage;
pub mod plan_benefit;

/// Named immutable set of codes for one constrained field.
#[derive(Debug)]
pub struct CodeSet {
    pub name: &'static str,
    pub values: &'static [&'static str],
}

impl CodeSet {
    pub const fn new(name: &'static str, values: &'static [&'static str]) -> Self {
        Self { name, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(&value)
    }
}

/// Code to description lookup, e.g. injury codes and their body part names.
#[derive(Debug)]
pub struct CodeTable {
    pub name: &'static str,
    pub entries: &'static [(&'static str, &'static str)],
}

impl CodeTable {
    pub const fn new(name: &'static str, entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { name, entries }
    }

    pub fn lookup(&self, code: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == code)
            .map(|(_, value)| *value)
    }

    pub fn code_at(&self, index: usize) -> Option<&'static str> {
        self.entries.get(index).map(|(key, _)| *key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub static YES_NO: CodeSet = CodeSet::new("yes_no", &["Y", "N"]);

pub static NAME_PREFIX: CodeSet = CodeSet::new("name_prefix", &["Mr", "Ms", "Prince"]);

pub static NAME_SUFFIX: CodeSet =
    CodeSet::new("name_suffix", &["I", "II", "III", "IV", "Jr", "Sr"]);

pub static COVERAGE_LEVEL: CodeSet = CodeSet::new(
    "coverage_level",
    &["CHD", "DEP", "ECH", "EMP", "ESP", "FAM", "IND", "SPC", "SPO"],
);

pub static NETWORK_INDICATOR: CodeSet = CodeSet::new("network_indicator", &["Y", "N", "U", "W"]);

pub static FACILITY_TYPE: CodeSet =
    CodeSet::new("facility_type", &["1", "2", "3", "4", "6", "7", "8"]);

pub static MEDICAL_ASSISTANCE_CATEGORY: CodeSet = CodeSet::new(
    "medical_assistance_category",
    &[
        "HIV/ AIDS",
        "Medicaid and Medicare",
        "Medicare Social Security",
        "Disability Assistance",
        "Veterans Health",
        "Children's Health",
        "Counsel and Counseling",
    ],
);

pub static DELIVERY_QUANTITY_QUALIFIER: CodeSet =
    CodeSet::new("delivery_quantity_qualifier", &["DY", "LO", "HS", "MN", "VS"]);

pub static DELIVERY_TIME: CodeSet =
    CodeSet::new("delivery_time", &["A", "B", "C", "D", "E", "F", "G", "Y"]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_table_lookup_returns_description() {
        let table = &individual_usage::INJURY;
        assert_eq!(table.lookup("28"), Some("Fracture"));
        assert_eq!(table.lookup("03"), Some("Angina Pectoris "));
        assert_eq!(table.lookup("99"), None);
        assert_eq!(table.code_at(0), Some("01"));
    }

    #[test]
    fn reference_sets_keep_their_sizes() {
        assert_eq!(claim::STATUS_CATEGORY.len(), 28);
        assert_eq!(claim::ENTITY.len(), 221);
        assert_eq!(eligibility::MAINTENANCE_REASON.len(), 48);
        assert_eq!(individual_usage::SERVICE_TYPE.len(), 190);
        assert_eq!(plan_benefit::SERVICE_TYPE.len(), 190);
        assert!(plan_benefit::BENEFIT_INFORMATION.contains("Z"));
        assert!(!individual_usage::BENEFIT_INFORMATION.contains("Z"));
    }
}
