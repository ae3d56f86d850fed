//! Parsing of textual date/time inputs, plus the `validator` rules built on it.

use chrono::{NaiveDate, NaiveTime};
use validator::ValidationError;

use crate::config::{DATE_FORMAT, TIME_FORMATS};

/// Parse a `YYYY-MM-DD` date, naming the field in the error message.
pub fn parse_date(field: &str, raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| format!("{} deve estar no formato AAAA-MM-DD", field))
}

/// Check a `HH:MM` or `HH:MM:SS` time of day, returning it trimmed.
pub fn parse_time(field: &str, raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    TIME_FORMATS
        .iter()
        .find(|format| NaiveTime::parse_from_str(trimmed, format).is_ok())
        .map(|_| trimmed.to_string())
        .ok_or_else(|| format!("{} deve estar no formato HH:MM", field))
}

/// Rejects empty and whitespace-only text.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

pub fn iso_date(value: &str) -> Result<(), ValidationError> {
    parse_date("", value)
        .map(|_| ())
        .map_err(|_| ValidationError::new("date_format"))
}

pub fn time_of_day(value: &str) -> Result<(), ValidationError> {
    parse_time("", value)
        .map(|_| ())
        .map_err(|_| ValidationError::new("time_format"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("data", "1990-05-12").unwrap(),
            NaiveDate::from_ymd_opt(1990, 5, 12).unwrap()
        );
    }

    #[test]
    fn test_parse_date_rejects_other_layouts() {
        assert!(parse_date("data", "12/05/1990").is_err());
        assert!(parse_date("data", "1990-02-30").is_err());
        let message = parse_date("data_nascimento", "ontem").unwrap_err();
        assert!(message.starts_with("data_nascimento"));
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time("hora", "14:30").unwrap(), "14:30");
        assert_eq!(parse_time("hora", " 08:05:10 ").unwrap(), "08:05:10");
        assert!(parse_time("hora", "25:00").is_err());
        assert!(parse_time("hora", "tarde").is_err());
    }

    #[test]
    fn test_not_blank() {
        assert!(not_blank("Maria").is_ok());
        assert!(not_blank("").is_err());
        assert!(not_blank("   \t").is_err());
    }

    #[test]
    fn test_format_rules_follow_parsers() {
        assert!(iso_date(" 2024-03-01 ").is_ok());
        assert!(iso_date("").is_err());
        assert!(time_of_day("09:00:00").is_ok());
        assert!(time_of_day("9h").is_err());
    }
}
