use std::borrow::Cow;
use std::fmt;

use chrono::{NaiveDate, NaiveTime};

/// A single computed field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// The empty sentinel, written as nothing between two delimiters.
    Empty,
    Text(String),
    Int(i64),
    /// Written as `%Y%m%d`.
    Date(NaiveDate),
    /// Written as `%H%M%S`.
    Time(NaiveTime),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Empty => true,
            FieldValue::Text(value) => value.is_empty(),
            _ => false,
        }
    }

    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Empty => Cow::Borrowed(""),
            FieldValue::Text(value) => Cow::Borrowed(value.as_str()),
            FieldValue::Int(value) => Cow::Owned(value.to_string()),
            FieldValue::Date(value) => Cow::Owned(value.format("%Y%m%d").to_string()),
            FieldValue::Time(value) => Cow::Owned(value.format("%H%M%S").to_string()),
        }
    }

    /// Compare the rendered text with `expected`.
    pub fn matches(&self, expected: &str) -> bool {
        self.as_text() == expected
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_and_times_render_without_separators() {
        let date = NaiveDate::from_ymd_opt(1999, 3, 7).expect("date");
        let time = NaiveTime::from_hms_opt(4, 5, 6).expect("time");
        assert_eq!(FieldValue::Date(date).as_text(), "19990307");
        assert_eq!(FieldValue::Time(time).as_text(), "040506");
    }

    #[test]
    fn empty_text_counts_as_empty() {
        assert!(FieldValue::Empty.is_empty());
        assert!(FieldValue::text("").is_empty());
        assert!(!FieldValue::Int(0).is_empty());
        assert!(FieldValue::Int(-12).matches("-12"));
    }
}
