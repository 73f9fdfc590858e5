use crate::model::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// Parse a date string down to its calendar day. Accepts plain
/// `YYYY-MM-DD` as well as values carrying a time component separated by
/// a space or a `T`; the time-of-day is discarded, so two timestamps on
/// the same day collapse to one bucket.
pub fn parse_day(value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();
    let day = trimmed
        .split(|c| c == ' ' || c == 'T')
        .next()
        .unwrap_or(trimmed);
    NaiveDate::parse_from_str(day, "%Y-%m-%d")
        .map_err(|e| format!("Not a valid date: '{value}' ({e})").into())
}

pub fn day_from_string<'de, D>(deserializer: D) -> std::result::Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_day(&raw).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_to_the_same_day() {
        let expected = NaiveDate::from_ymd_opt(2017, 3, 6).unwrap();
        assert_eq!(parse_day("2017-03-06").unwrap(), expected);
        assert_eq!(parse_day("2017-03-06 14:22:01").unwrap(), expected);
        assert_eq!(parse_day("2017-03-06T14:22:01Z").unwrap(), expected);
        assert_eq!(parse_day("  2017-03-06 ").unwrap(), expected);
    }

    #[test]
    fn truncation_is_idempotent() {
        let once = parse_day("2017-03-06T23:59:59Z").unwrap();
        let twice = parse_day(&once.to_string()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_day("not-a-date").is_err());
        assert!(parse_day("").is_err());
    }
}
