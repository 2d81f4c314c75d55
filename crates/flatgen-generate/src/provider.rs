use std::collections::HashMap;
use std::ops::Range;

use chrono::{Datelike, NaiveDate, NaiveTime};
use fake::Fake;
use fake::faker::address::en::{
    BuildingNumber, CityName, PostCode, StateAbbr, StateName, StreetName, ZipCode,
};
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::{FirstName, LastName};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_regex::Regex as RandRegex;

use crate::codesets::{CodeSet, CodeTable};
use crate::errors::GenerationError;

const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const DIGITS: &[u8] = b"0123456789";
const MAX_PATTERN_REPEAT: u32 = 16;

const COUNTRY_ALPHA3: &[&str] = &[
    "ARG", "AUS", "AUT", "BEL", "BRA", "CAN", "CHE", "CHL", "CHN", "COL", "CZE", "DEU", "DNK",
    "EGY", "ESP", "EST", "FIN", "FRA", "GBR", "GRC", "HUN", "IND", "IRL", "ISL", "ISR", "ITA",
    "JPN", "KAZ", "KOR", "MEX", "NLD", "NOR", "NZL", "POL", "PRT", "ROU", "SVK", "SWE", "TUR",
    "UKR", "USA", "ZAF",
];

const LANGUAGE_CODES: &[&str] = &[
    "AR", "CS", "DA", "DE", "EL", "EN", "ES", "ET", "FA", "FI", "FR", "HU", "IS", "IT", "JA",
    "KK", "KO", "NL", "NO", "PL", "PT", "RU", "SK", "SV", "TR", "UK", "ZH",
];

/// Source of realistic random values for field tables.
///
/// The random source is injected so seeded runs reproduce the same file.
pub struct ValueProvider<R: RngCore = ChaCha8Rng> {
    rng: R,
    patterns: HashMap<&'static str, RandRegex>,
}

impl ValueProvider<ChaCha8Rng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> ValueProvider<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            patterns: HashMap::new(),
        }
    }

    pub fn alphanumeric(&mut self, len: usize) -> String {
        self.draw_from(ALPHANUMERIC, len)
    }

    pub fn digits(&mut self, len: usize) -> String {
        self.draw_from(DIGITS, len)
    }

    /// Integer in `range`; an empty range yields its start.
    pub fn int_in(&mut self, range: Range<i64>) -> i64 {
        if range.is_empty() {
            return range.start;
        }
        self.rng.random_range(range)
    }

    pub fn choose(&mut self, set: &CodeSet) -> &'static str {
        if set.is_empty() {
            return "";
        }
        let index = self.rng.random_range(0..set.len());
        set.values[index]
    }

    pub fn choose_code(&mut self, table: &CodeTable) -> &'static str {
        if table.is_empty() {
            return "";
        }
        let index = self.rng.random_range(0..table.len());
        table.code_at(index).unwrap_or_default()
    }

    /// Uniform date between January 1st of `from_year` and December 31st of
    /// `to_year`, both inclusive.
    pub fn date_in_years(&mut self, from_year: i32, to_year: i32) -> NaiveDate {
        let (low, high) = if from_year <= to_year {
            (from_year, to_year)
        } else {
            (to_year, from_year)
        };
        let start = NaiveDate::from_ymd_opt(low, 1, 1).unwrap_or(NaiveDate::MIN);
        let end = NaiveDate::from_ymd_opt(high, 12, 31).unwrap_or(NaiveDate::MAX);
        let span = (end - start).num_days().max(0);
        let offset = self.rng.random_range(0..=span);
        start
            .checked_add_signed(chrono::Duration::days(offset))
            .unwrap_or(start)
    }

    /// Date within `years_ahead` years of `base`, starting at its year.
    pub fn date_from_year(&mut self, base: NaiveDate, years_ahead: i32) -> NaiveDate {
        let year = base.year();
        self.date_in_years(year, year + years_ahead)
    }

    pub fn time_of_day(&mut self) -> NaiveTime {
        let seconds = self.rng.random_range(0..86_400_u32);
        NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0).unwrap_or(NaiveTime::MIN)
    }

    pub fn first_name(&mut self) -> String {
        FirstName().fake_with_rng(&mut self.rng)
    }

    pub fn last_name(&mut self) -> String {
        LastName().fake_with_rng(&mut self.rng)
    }

    pub fn email(&mut self) -> String {
        SafeEmail().fake_with_rng(&mut self.rng)
    }

    pub fn phone(&mut self) -> String {
        self.digits(10)
    }

    pub fn street_address(&mut self) -> String {
        let number: String = BuildingNumber().fake_with_rng(&mut self.rng);
        let street: String = StreetName().fake_with_rng(&mut self.rng);
        format!("{number} {street}")
    }

    pub fn city(&mut self) -> String {
        CityName().fake_with_rng(&mut self.rng)
    }

    pub fn state_abbr(&mut self) -> String {
        StateAbbr().fake_with_rng(&mut self.rng)
    }

    pub fn province(&mut self) -> String {
        StateName().fake_with_rng(&mut self.rng)
    }

    pub fn zip_code(&mut self) -> String {
        ZipCode().fake_with_rng(&mut self.rng)
    }

    pub fn postal_code(&mut self) -> String {
        PostCode().fake_with_rng(&mut self.rng)
    }

    pub fn country_alpha3(&mut self) -> &'static str {
        let index = self.rng.random_range(0..COUNTRY_ALPHA3.len());
        COUNTRY_ALPHA3[index]
    }

    pub fn language_code(&mut self) -> &'static str {
        let index = self.rng.random_range(0..LANGUAGE_CODES.len());
        LANGUAGE_CODES[index]
    }

    pub fn sentence(&mut self) -> String {
        Sentence(4..10).fake_with_rng(&mut self.rng)
    }

    /// Body weight in kilograms.
    pub fn weight_kg(&mut self) -> i64 {
        self.rng.random_range(38..=90)
    }

    /// Height in metres with two decimals.
    pub fn height_m(&mut self) -> String {
        let centimetres: u32 = self.rng.random_range(150..=200);
        format!("{}.{:02}", centimetres / 100, centimetres % 100)
    }

    /// Fraction in `(0, 1)` with the leading zero dropped, e.g. `.57`.
    pub fn percentage(&mut self) -> String {
        let hundredths: u32 = self.rng.random_range(1..100);
        let rendered = (f64::from(hundredths) / 100.0).to_string();
        rendered.chars().skip(1).collect()
    }

    /// Random string matching a regular expression.
    pub fn pattern(&mut self, pattern: &'static str) -> Result<String, GenerationError> {
        if !self.patterns.contains_key(pattern) {
            let compiled = RandRegex::compile(pattern, MAX_PATTERN_REPEAT).map_err(|err| {
                GenerationError::InvalidPattern(format!("'{pattern}': {err}"))
            })?;
            self.patterns.insert(pattern, compiled);
        }
        let regex = self
            .patterns
            .get(pattern)
            .ok_or_else(|| GenerationError::InvalidPattern(pattern.to_string()))?;
        Ok(self.rng.sample::<String, _>(regex))
    }

    fn draw_from(&mut self, alphabet: &[u8], len: usize) -> String {
        (0..len)
            .map(|_| alphabet[self.rng.random_range(0..alphabet.len())] as char)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_providers_agree() {
        let mut left = ValueProvider::seeded(7);
        let mut right = ValueProvider::seeded(7);
        assert_eq!(left.alphanumeric(10), right.alphanumeric(10));
        assert_eq!(left.first_name(), right.first_name());
        assert_eq!(left.date_in_years(1930, 2019), right.date_in_years(1930, 2019));
    }

    #[test]
    fn alphanumeric_and_digits_have_requested_length() {
        let mut provider = ValueProvider::seeded(1);
        let id = provider.alphanumeric(10);
        assert_eq!(id.len(), 10);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
        let phone = provider.phone();
        assert_eq!(phone.len(), 10);
        assert!(phone.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn dates_stay_inside_year_bounds() {
        let mut provider = ValueProvider::seeded(3);
        for _ in 0..200 {
            let date = provider.date_in_years(2010, 2015);
            assert!((2010..=2015).contains(&date.year()));
        }
    }

    #[test]
    fn percentage_drops_leading_zero() {
        let mut provider = ValueProvider::seeded(11);
        for _ in 0..200 {
            let value = provider.percentage();
            assert!(value.starts_with('.'), "unexpected percentage {value}");
            assert!(value.len() <= 3);
        }
    }

    #[test]
    fn policy_pattern_has_letters_around_digits() {
        let mut provider = ValueProvider::seeded(5);
        let value = provider
            .pattern("[A-Za-z]{2}[0-9]{5}[A-Za-z]{2}")
            .expect("pattern compiles");
        assert_eq!(value.len(), 9);
        assert!(value[2..7].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn int_in_respects_half_open_range() {
        let mut provider = ValueProvider::seeded(9);
        for _ in 0..500 {
            let value = provider.int_in(1..10);
            assert!((1..10).contains(&value));
        }
        assert_eq!(provider.int_in(5..5), 5);
    }
}
