//! Parsers and formatters for field values, keyed by value kind
//!
//! Text forms are fixed and locale-independent:
//!
//! | kind | text |
//! |---|---|
//! | `boolean` | `true` / `false` |
//! | `int16`, `int32`, `int64` | `-42` |
//! | `decimal` | `-123.45` (`.` separator, scale of the value, no exponent, no `-0`) |
//! | `double` | shortest text that parses back to the same `f64` |
//! | `date_time` | `2024-03-15T14:02:26`, `2024-03-15T14:02:26.250` |
//! | `guid` | `2f1b7c5e-3a0d-11ee-be56-0242ac120002` |
//!
//! `format` is the exact inverse of `parse` for every text `parse` accepts
//! in the canonical form above.

use chrono::NaiveDateTime;
use contracts::shared::filter::{FilterValue, DATE_TIME_FORMAT};
use contracts::shared::metadata::FieldType;
use rust_decimal::Decimal;
use thiserror::Error;

/// Text is not a valid literal of the expected kind
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected}: {reason}")]
pub struct ValueParseError {
    pub expected: FieldType,
    pub reason: String,
}

impl ValueParseError {
    fn new(expected: FieldType, reason: impl Into<String>) -> Self {
        Self {
            expected,
            reason: reason.into(),
        }
    }
}

/// Parse text as a literal of `kind`
pub fn parse(kind: FieldType, text: &str) -> Result<FilterValue, ValueParseError> {
    match kind {
        FieldType::String => Ok(FilterValue::String(text.to_string())),
        FieldType::Boolean => match text {
            "true" => Ok(FilterValue::Boolean(true)),
            "false" => Ok(FilterValue::Boolean(false)),
            _ => Err(ValueParseError::new(kind, "expected 'true' or 'false'")),
        },
        FieldType::Int16 => text
            .parse::<i16>()
            .map(|v| FilterValue::Integer(v.into()))
            .map_err(|e| ValueParseError::new(kind, e.to_string())),
        FieldType::Int32 => text
            .parse::<i32>()
            .map(|v| FilterValue::Integer(v.into()))
            .map_err(|e| ValueParseError::new(kind, e.to_string())),
        FieldType::Int64 => text
            .parse::<i64>()
            .map(FilterValue::Integer)
            .map_err(|e| ValueParseError::new(kind, e.to_string())),
        FieldType::Decimal => parse_decimal(text).map(FilterValue::Decimal),
        FieldType::Double => match text.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(FilterValue::Double(v)),
            Ok(_) => Err(ValueParseError::new(kind, "value is not finite")),
            Err(e) => Err(ValueParseError::new(kind, e.to_string())),
        },
        FieldType::DateTime => NaiveDateTime::parse_from_str(text, DATE_TIME_FORMAT)
            .map(FilterValue::DateTime)
            .map_err(|e| ValueParseError::new(kind, e.to_string())),
        FieldType::Guid => parse_guid(text).map(FilterValue::Guid),
    }
}

/// Format a value in the fixed text form of its kind
pub fn format(value: &FilterValue) -> String {
    match value {
        FilterValue::DateTime(dt) => dt.format(DATE_TIME_FORMAT).to_string(),
        FilterValue::Decimal(d) => d.to_string(),
        FilterValue::Double(d) => format!("{}", d),
        FilterValue::Boolean(true) => "true".to_string(),
        FilterValue::Boolean(false) => "false".to_string(),
        other => other.to_string(),
    }
}

/// Plain decimal: optional minus, digits, optional fraction. No exponent,
/// no grouping, no leading plus. Text that does not fit a `Decimal` without
/// rounding is rejected, and so is a signed zero, which formats back
/// without its sign.
fn parse_decimal(text: &str) -> Result<Decimal, ValueParseError> {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !frac_part.map_or(true, all_digits) {
        return Err(ValueParseError::new(
            FieldType::Decimal,
            "expected digits with an optional '.' fraction",
        ));
    }

    let value = Decimal::from_str_exact(text)
        .map_err(|e| ValueParseError::new(FieldType::Decimal, e.to_string()))?;
    if value.is_zero() && text.starts_with('-') {
        return Err(ValueParseError::new(FieldType::Decimal, "signed zero"));
    }
    Ok(value)
}

/// Only the hyphenated form is accepted, the one the service publishes
fn parse_guid(text: &str) -> Result<uuid::Uuid, ValueParseError> {
    if text.len() != 36 {
        return Err(ValueParseError::new(
            FieldType::Guid,
            "expected hyphenated form xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx",
        ));
    }
    uuid::Uuid::parse_str(text).map_err(|e| ValueParseError::new(FieldType::Guid, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_boolean_is_strict() {
        assert_eq!(parse(FieldType::Boolean, "true"), Ok(FilterValue::Boolean(true)));
        assert_eq!(parse(FieldType::Boolean, "false"), Ok(FilterValue::Boolean(false)));
        assert!(parse(FieldType::Boolean, "Истина").is_err());
        assert!(parse(FieldType::Boolean, "TRUE").is_err());
        assert_eq!(format(&FilterValue::Boolean(true)), "true");
    }

    #[test]
    fn test_integer_ranges() {
        assert_eq!(parse(FieldType::Int16, "-32768"), Ok(FilterValue::Integer(-32768)));
        assert!(parse(FieldType::Int16, "32768").is_err());
        assert_eq!(
            parse(FieldType::Int32, "2147483647"),
            Ok(FilterValue::Integer(2_147_483_647))
        );
        assert!(parse(FieldType::Int32, "2147483648").is_err());
        assert!(parse(FieldType::Int64, "12.5").is_err());
    }

    #[test]
    fn test_decimal_exact() {
        let value = parse(FieldType::Decimal, "123.45").unwrap();
        assert_eq!(value, FilterValue::Decimal(Decimal::new(12345, 2)));
        assert_eq!(format(&value), "123.45");

        // scale is kept, trailing zeros included
        let value = parse(FieldType::Decimal, "100.00").unwrap();
        assert_eq!(format(&value), "100.00");

        assert_eq!(format(&parse(FieldType::Decimal, "-0.5").unwrap()), "-0.5");
    }

    #[test]
    fn test_decimal_rejects_non_plain_text() {
        for text in ["abc", "", "1e5", "1,5", "1 000.00", "+1", ".5", "5.", "--1", "1.2.3"] {
            assert!(parse(FieldType::Decimal, text).is_err(), "accepted {:?}", text);
        }
    }

    #[test]
    fn test_decimal_rejects_rounding() {
        for text in [
            "0.00000000000000000000000000001",
            "1.2345678901234567890123456789012",
            "99999999999999999999999999999999",
        ] {
            assert!(parse(FieldType::Decimal, text).is_err(), "accepted {:?}", text);
        }

        // 28 fraction digits still fit
        let text = "0.0000000000000000000000000001";
        assert_eq!(format(&parse(FieldType::Decimal, text).unwrap()), text);
    }

    #[test]
    fn test_decimal_signed_zero() {
        for text in ["-0", "-0.00"] {
            match parse(FieldType::Decimal, text) {
                Err(e) => assert_eq!(e.expected, FieldType::Decimal),
                Ok(v) => panic!("{:?} parsed as {:?}", text, v),
            }
        }
        assert_eq!(format(&parse(FieldType::Decimal, "0.00").unwrap()), "0.00");
    }

    #[test]
    fn test_double() {
        let value = parse(FieldType::Double, "0.1").unwrap();
        assert_eq!(value, FilterValue::Double(0.1));
        assert_eq!(format(&value), "0.1");
        assert!(parse(FieldType::Double, "NaN").is_err());
        assert!(parse(FieldType::Double, "inf").is_err());
    }

    #[test]
    fn test_date_time_whole_seconds() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 31)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        let value = parse(FieldType::DateTime, "2024-01-31T23:59:59").unwrap();
        assert_eq!(value, FilterValue::DateTime(expected));
        assert_eq!(format(&value), "2024-01-31T23:59:59");

        assert!(parse(FieldType::DateTime, "2024-01-31").is_err());
        assert!(parse(FieldType::DateTime, "2024-01-31T23:59:59.").is_err());
        assert!(parse(FieldType::DateTime, "31.01.2024 23:59:59").is_err());
        assert!(parse(FieldType::DateTime, "2024-01-31T23:59:59Z").is_err());
    }

    #[test]
    fn test_date_time_keeps_fraction() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_milli_opt(10, 0, 0, 123)
            .unwrap();
        let text = format(&FilterValue::DateTime(expected));
        assert_eq!(text, "2024-01-01T10:00:00.123");
        assert_eq!(parse(FieldType::DateTime, &text), Ok(FilterValue::DateTime(expected)));

        let micros = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_micro_opt(10, 0, 0, 250_001)
            .unwrap();
        let text = format(&FilterValue::DateTime(micros));
        assert_eq!(text, "2024-01-01T10:00:00.250001");
        assert_eq!(parse(FieldType::DateTime, &text), Ok(FilterValue::DateTime(micros)));
    }

    #[test]
    fn test_guid_hyphenated_only() {
        let text = "2f1b7c5e-3a0d-11ee-be56-0242ac120002";
        let value = parse(FieldType::Guid, text).unwrap();
        assert_eq!(format(&value), text);
        assert!(parse(FieldType::Guid, "2f1b7c5e3a0d11eebe560242ac120002").is_err());
    }

    #[test]
    fn test_string_verbatim() {
        let value = parse(FieldType::String, "  Товар 'А'  ").unwrap();
        assert_eq!(format(&value), "  Товар 'А'  ");
    }
}
