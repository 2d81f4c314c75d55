use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDateTime};

use flatgen_core::FileFormat;

/// `{%Y%m%d%H%M%S}_{id}_{suffix}`.
///
/// Two runs for the same id within one second collide.
pub fn file_name(format: FileFormat, generated_at: NaiveDateTime, id: &str) -> String {
    format!(
        "{}_{}_{}",
        generated_at.format("%Y%m%d%H%M%S"),
        id,
        format.file_suffix()
    )
}

/// `{root}/{year}/{month}/{day}` with month and day not zero padded.
pub fn dated_output_dir(root: &Path, generated_at: NaiveDateTime) -> PathBuf {
    root.join(generated_at.year().to_string())
        .join(generated_at.month().to_string())
        .join(generated_at.day().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .and_then(|date| date.and_hms_opt(9, 5, 1))
            .expect("timestamp")
    }

    #[test]
    fn names_follow_timestamp_id_suffix() {
        assert_eq!(
            file_name(FileFormat::Eligibility, at(), "TP12345678"),
            "20240307090501_TP12345678_test.elig31.txt"
        );
        assert_eq!(
            file_name(FileFormat::Claim, at(), "PAYER00001"),
            "20240307090501_PAYER00001_test.cstat"
        );
        assert_eq!(
            file_name(FileFormat::BenefitEntity, at(), "PAYER00001"),
            "20240307090501_PAYER00001_test.bene"
        );
    }

    #[test]
    fn dated_directory_is_not_zero_padded() {
        let dir = dated_output_dir(Path::new("/tmp/data"), at());
        assert_eq!(dir, PathBuf::from("/tmp/data/2024/3/7"));
    }
}
