//! JSON binding of flat records
//!
//! Checks the `kind` tag before handing a record to serde, so that an
//! unknown kind is reported by name instead of as a generic parse error.
//! Batches are decoded record by record: one bad record does not spoil the
//! others.

use contracts::domain::data_service::{DataServiceEntity, EntityKind, FlatEntity};
use contracts::shared::filter::{FlatRelationalExpression, RelationalExpression};
use serde_json::Value;

use crate::codecs::{EntityVariantCodec, FilterValueCodec};
use crate::error::CodecError;
use crate::shared::placeholder::PlaceholderMatcher;

/// Read a flat entity record, validating its tag
pub fn flat_entity_from_json(value: Value) -> Result<FlatEntity, CodecError> {
    let tag = match value.get("kind") {
        Some(Value::String(tag)) => tag.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    };
    if EntityKind::from_tag(&tag).is_none() {
        return Err(CodecError::UnknownEntityVariant { tag });
    }
    Ok(serde_json::from_value(value)?)
}

/// JSON record → live entity. `null` is rejected as a null entity.
pub fn entity_from_json(value: Value) -> Result<DataServiceEntity, CodecError> {
    let flat = match value {
        Value::Null => None,
        other => Some(flat_entity_from_json(other)?),
    };
    EntityVariantCodec.reconstruct(flat)
}

/// Live entity → JSON record
pub fn entity_to_json(entity: DataServiceEntity) -> Result<Value, CodecError> {
    let flat = EntityVariantCodec.flatten(Some(entity))?;
    Ok(serde_json::to_value(flat)?)
}

/// Decode a JSON array of entity records, one result per record
pub fn decode_entities(json: &str) -> Result<Vec<Result<DataServiceEntity, CodecError>>, CodecError> {
    decode_each(json, entity_from_json)
}

/// Decode a JSON array of flat filter expressions, one result per record
pub fn decode_expressions<M: PlaceholderMatcher>(
    codec: &FilterValueCodec<M>,
    json: &str,
) -> Result<Vec<Result<RelationalExpression, CodecError>>, CodecError> {
    decode_each(json, |value| match value {
        Value::Null => Err(CodecError::NullEntity { what: "expression" }),
        other => {
            let flat: FlatRelationalExpression = serde_json::from_value(other)?;
            codec.decode(flat)
        }
    })
}

/// Encode expressions into a JSON array of flat records
pub fn encode_expressions<M: PlaceholderMatcher>(
    codec: &FilterValueCodec<M>,
    expressions: Vec<RelationalExpression>,
) -> Result<Value, CodecError> {
    let flat: Vec<FlatRelationalExpression> =
        expressions.into_iter().map(|e| codec.encode(e)).collect();
    Ok(serde_json::to_value(flat)?)
}

fn decode_each<T>(
    json: &str,
    decode: impl Fn(Value) -> Result<T, CodecError>,
) -> Result<Vec<Result<T, CodecError>>, CodecError> {
    let records: Vec<Value> = serde_json::from_str(json)?;

    let results: Vec<Result<T, CodecError>> = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let result = decode(record);
            if let Err(e) = &result {
                tracing::warn!("record {} rejected: {}", index, e);
            }
            result
        })
        .collect();

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_tag_is_named() {
        let err = entity_from_json(json!({ "kind": "Report", "name": "Продажи" })).unwrap_err();
        match err {
            CodecError::UnknownEntityVariant { tag } => assert_eq!(tag, "Report"),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_missing_tag() {
        let err = entity_from_json(json!({ "name": "Продажи" })).unwrap_err();
        assert!(matches!(err, CodecError::UnknownEntityVariant { tag } if tag.is_empty()));
    }

    #[test]
    fn test_null_record() {
        assert!(matches!(
            entity_from_json(Value::Null),
            Err(CodecError::NullEntity { .. })
        ));
    }

    #[test]
    fn test_structural_error_is_binding_error() {
        let err = entity_from_json(json!({ "kind": "CalculationRegisterRecalculation", "name": "Начисления" }))
            .unwrap_err();
        assert!(matches!(err, CodecError::Binding(_)));
    }

    #[test]
    fn test_batch_keeps_going() {
        let json = r#"[
            { "kind": "Catalog", "name": "Номенклатура" },
            { "kind": "Report", "name": "Валовая прибыль" },
            null,
            { "kind": "TabularSection", "parent": "Document_ЗаказКлиента", "name": "Товары" }
        ]"#;

        let results = decode_entities(json).unwrap();
        assert_eq!(results.len(), 4);
        assert_eq!(results[0].as_ref().unwrap().kind(), EntityKind::Catalog);
        assert!(matches!(results[1], Err(CodecError::UnknownEntityVariant { .. })));
        assert!(matches!(results[2], Err(CodecError::NullEntity { .. })));
        assert_eq!(results[3].as_ref().unwrap().name(), "Товары");
    }

    #[test]
    fn test_batch_must_be_array() {
        assert!(matches!(
            decode_entities(r#"{ "kind": "Catalog" }"#),
            Err(CodecError::Binding(_))
        ));
    }
}
