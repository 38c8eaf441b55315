use contracts::shared::filter::{FilterValue, FlatRelationalExpression, RelationalExpression};
use contracts::shared::metadata::FieldDescriptor;

use super::Adapter;
use crate::error::CodecError;
use crate::shared::config::Config;
use crate::shared::placeholder::{PlaceholderMatcher, SigilPlaceholder};
use crate::shared::value_format;

/// Converts the value of a relational expression to text and back.
///
/// A value matching the placeholder pattern is kept as raw text whatever
/// the field's kind; the check runs before any parsing.
#[derive(Debug, Clone, Default)]
pub struct FilterValueCodec<M = SigilPlaceholder> {
    placeholders: M,
}

impl FilterValueCodec<SigilPlaceholder> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(Self::with_matcher(SigilPlaceholder::from_config(config)?))
    }
}

impl<M: PlaceholderMatcher> FilterValueCodec<M> {
    pub fn with_matcher(placeholders: M) -> Self {
        Self { placeholders }
    }

    pub fn placeholders(&self) -> &M {
        &self.placeholders
    }

    pub fn decode(&self, flat: FlatRelationalExpression) -> Result<RelationalExpression, CodecError> {
        let field = flat.field.ok_or(CodecError::NullEntity { what: "field" })?;
        let operator = flat.operator.ok_or(CodecError::NullEntity { what: "operator" })?;
        let raw = flat.value.ok_or(CodecError::NullEntity { what: "value" })?;

        let value = self.decode_value(&field, raw)?;

        Ok(RelationalExpression {
            field,
            operator,
            value,
            comment: flat.comment,
        })
    }

    /// Decode raw text compared against `field`
    pub fn decode_value(&self, field: &FieldDescriptor, raw: String) -> Result<FilterValue, CodecError> {
        if self.placeholders.is_placeholder(&raw) {
            tracing::debug!(field = %field.name, parameter = %raw, "filter value is a parameter");
            return Ok(FilterValue::Parameter(raw));
        }

        let parsed = value_format::parse(field.field_type, &raw);
        parsed.map_err(|e| CodecError::ValueFormatError {
            raw,
            expected: field.field_type,
            field: field.name.clone(),
            reason: e.reason,
        })
    }

    pub fn encode(&self, expression: RelationalExpression) -> FlatRelationalExpression {
        FlatRelationalExpression {
            value: Some(value_format::format(&expression.value)),
            field: Some(expression.field),
            operator: Some(expression.operator),
            comment: expression.comment,
        }
    }
}

impl<M: PlaceholderMatcher> Adapter for FilterValueCodec<M> {
    type Flat = FlatRelationalExpression;
    type Live = RelationalExpression;

    fn unmarshal(&self, flat: Option<FlatRelationalExpression>) -> Result<RelationalExpression, CodecError> {
        self.decode(flat.ok_or(CodecError::NullEntity { what: "expression" })?)
    }

    fn marshal(&self, live: Option<RelationalExpression>) -> Result<FlatRelationalExpression, CodecError> {
        live.map(|e| self.encode(e))
            .ok_or(CodecError::NullEntity { what: "expression" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::filter::ComparisonOperator;
    use contracts::shared::metadata::FieldType;

    fn flat(field_type: FieldType, value: &str) -> FlatRelationalExpression {
        FlatRelationalExpression::new(
            FieldDescriptor::new("Поле", field_type),
            ComparisonOperator::Equal,
            value,
        )
    }

    #[test]
    fn test_placeholder_wins_for_every_kind() {
        let codec = FilterValueCodec::new();
        for kind in FieldType::all() {
            let expr = codec.decode(flat(*kind, "&Period")).unwrap();
            assert_eq!(expr.value, FilterValue::Parameter("&Period".into()), "kind {}", kind);
        }
    }

    #[test]
    fn test_placeholder_wins_over_string_parse() {
        // a string field would accept the text as a literal too
        let codec = FilterValueCodec::new();
        let expr = codec.decode(flat(FieldType::String, "&Склад")).unwrap();
        assert!(expr.is_parameterized());
    }

    #[test]
    fn test_malformed_decimal() {
        let codec = FilterValueCodec::new();
        match codec.decode(flat(FieldType::Decimal, "abc")) {
            Err(CodecError::ValueFormatError { raw, expected, field, .. }) => {
                assert_eq!(raw, "abc");
                assert_eq!(expected, FieldType::Decimal);
                assert_eq!(field, "Поле");
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_missing_parts() {
        let codec = FilterValueCodec::new();
        let mut incomplete = flat(FieldType::String, "x");
        incomplete.field = None;
        assert!(matches!(
            codec.decode(incomplete),
            Err(CodecError::NullEntity { what: "field" })
        ));

        let mut incomplete = flat(FieldType::String, "x");
        incomplete.value = None;
        assert!(matches!(
            codec.decode(incomplete),
            Err(CodecError::NullEntity { what: "value" })
        ));

        let mut incomplete = flat(FieldType::String, "x");
        incomplete.operator = None;
        assert!(matches!(
            codec.decode(incomplete),
            Err(CodecError::NullEntity { what: "operator" })
        ));

        assert!(matches!(
            codec.unmarshal(None),
            Err(CodecError::NullEntity { what: "expression" })
        ));
        assert!(matches!(
            codec.marshal(None),
            Err(CodecError::NullEntity { what: "expression" })
        ));
    }

    #[test]
    fn test_comment_carried() {
        let codec = FilterValueCodec::new();
        let source = flat(FieldType::Int32, "7").with_comment("неделя");
        let expr = codec.decode(source.clone()).unwrap();
        assert_eq!(expr.comment.as_deref(), Some("неделя"));
        assert_eq!(codec.encode(expr), source);
    }

    #[test]
    fn test_process_config() {
        let codec = FilterValueCodec::from_config(&crate::shared::config::CONFIG).unwrap();
        assert_eq!(codec.placeholders().sigil(), "&");
    }

    #[test]
    fn test_configured_sigil() {
        let mut config = Config::default();
        config.placeholder.sigil = "$".into();
        let codec = FilterValueCodec::from_config(&config).unwrap();

        let expr = codec.decode(flat(FieldType::String, "$Period")).unwrap();
        assert!(expr.is_parameterized());
        let expr = codec.decode(flat(FieldType::String, "&Period")).unwrap();
        assert_eq!(expr.value, FilterValue::String("&Period".into()));
    }
}
