use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Text format of date-time values, no offset.
///
/// The service publishes `Edm.DateTime` in local time of the infobase
/// without a zone designator, so values are naive on both sides. The
/// fraction is written only when the value has one (`.123`, `.123456`,
/// `.123456789`) and is optional when parsing.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Right-hand side of a relational expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FilterValue {
    String(String),
    Boolean(bool),
    Integer(i64),
    Decimal(Decimal),
    Double(f64),
    DateTime(NaiveDateTime),
    Guid(uuid::Uuid),
    /// Unresolved reference to a parameter supplied at run time, kept as
    /// written (`&Период`)
    Parameter(String),
}

impl FilterValue {
    pub fn is_parameter(&self) -> bool {
        matches!(self, FilterValue::Parameter(_))
    }
}

impl std::fmt::Display for FilterValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterValue::String(s) => f.write_str(s),
            FilterValue::Boolean(b) => write!(f, "{}", b),
            FilterValue::Integer(i) => write!(f, "{}", i),
            FilterValue::Decimal(d) => write!(f, "{}", d),
            FilterValue::Double(d) => write!(f, "{}", d),
            FilterValue::DateTime(dt) => write!(f, "{}", dt.format(DATE_TIME_FORMAT)),
            FilterValue::Guid(g) => write!(f, "{}", g.hyphenated()),
            FilterValue::Parameter(raw) => f.write_str(raw),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::String(value.to_string())
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Boolean(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Integer(value)
    }
}

impl From<Decimal> for FilterValue {
    fn from(value: Decimal) -> Self {
        FilterValue::Decimal(value)
    }
}

impl From<NaiveDateTime> for FilterValue {
    fn from(value: NaiveDateTime) -> Self {
        FilterValue::DateTime(value)
    }
}

impl From<uuid::Uuid> for FilterValue {
    fn from(value: uuid::Uuid) -> Self {
        FilterValue::Guid(value)
    }
}

/// Values for run-time parameters, keyed by name without the sigil
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameters {
    values: HashMap<String, FilterValue>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FilterValue>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&FilterValue> {
        self.values.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    #[test]
    fn test_display() {
        let dt = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(14, 2, 26)
            .unwrap();
        assert_eq!(FilterValue::DateTime(dt).to_string(), "2024-03-15T14:02:26");
        assert_eq!(
            FilterValue::Decimal(Decimal::from_str("123.45").unwrap()).to_string(),
            "123.45"
        );
        assert_eq!(FilterValue::Boolean(false).to_string(), "false");
        assert_eq!(FilterValue::Parameter("&Период".into()).to_string(), "&Период");
    }

    #[test]
    fn test_parameters() {
        let params = Parameters::new().with("Период", true);
        assert_eq!(params.get("Период"), Some(&FilterValue::Boolean(true)));
        assert_eq!(params.get("Организация"), None);
    }
}
