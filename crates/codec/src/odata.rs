//! OData naming of entities and `$filter` rendering of expressions
//!
//! Collection names follow the service convention:
//! `Catalog_Номенклатура`, `InformationRegister_Цены_SliceLast`,
//! `Document_ЗаказКлиента_Товары`.

use contracts::domain::data_service::DataServiceEntity;
use contracts::shared::filter::{FilterValue, Parameters, RelationalExpression};

use crate::error::CodecError;
use crate::shared::placeholder::PlaceholderMatcher;
use crate::shared::value_format;

/// Collection name of the entity on the service
pub fn resource_name(entity: &DataServiceEntity) -> String {
    let kind = entity.kind();
    let prefix = kind.resource_prefix().unwrap_or_default();

    match entity {
        DataServiceEntity::TabularSection(t) => format!("{}_{}", t.parent, t.name),
        DataServiceEntity::CalculationRegisterRecalculation(r) => {
            format!("{}_{}_{}", prefix, r.name, r.recalculation_name)
        }
        DataServiceEntity::CalculationRegisterBaseRegister(b) => {
            format!("{}_{}_Base{}", prefix, b.name, b.base_register_name)
        }
        other => match kind.resource_suffix() {
            Some(suffix) => format!("{}_{}_{}", prefix, other.name(), suffix),
            None => format!("{}_{}", prefix, other.name()),
        },
    }
}

/// Render one expression as a `$filter` clause: `Сумма ge 100.00`.
///
/// Parameter placeholders are replaced by values from `params`.
pub fn filter_clause(
    expression: &RelationalExpression,
    params: &Parameters,
    matcher: &impl PlaceholderMatcher,
) -> Result<String, CodecError> {
    let value = match &expression.value {
        FilterValue::Parameter(raw) => {
            let name = matcher.parameter_name(raw).unwrap_or(raw.as_str());
            params
                .get(name)
                .ok_or_else(|| CodecError::UnresolvedParameter {
                    name: name.to_string(),
                })?
        }
        other => other,
    };

    Ok(format!(
        "{} {} {}",
        expression.field.name,
        expression.operator.odata(),
        literal(value)?
    ))
}

/// Render expressions joined with `and`
pub fn filter_expression(
    expressions: &[RelationalExpression],
    params: &Parameters,
    matcher: &impl PlaceholderMatcher,
) -> Result<String, CodecError> {
    let clauses = expressions
        .iter()
        .map(|e| filter_clause(e, params, matcher))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(clauses.join(" and "))
}

fn literal(value: &FilterValue) -> Result<String, CodecError> {
    let text = match value {
        FilterValue::String(s) => format!("'{}'", s.replace('\'', "''")),
        FilterValue::DateTime(_) => format!("datetime'{}'", value_format::format(value)),
        FilterValue::Guid(_) => format!("guid'{}'", value_format::format(value)),
        FilterValue::Boolean(_)
        | FilterValue::Integer(_)
        | FilterValue::Decimal(_)
        | FilterValue::Double(_) => value_format::format(value),
        // a parameter bound to another parameter
        FilterValue::Parameter(raw) => {
            return Err(CodecError::UnresolvedParameter { name: raw.clone() })
        }
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::placeholder::SigilPlaceholder;
    use chrono::NaiveDate;
    use contracts::domain::data_service::{
        BaseRegister, MetadataObject, Recalculation, RegisterSlice, TabularSection,
    };
    use contracts::shared::filter::ComparisonOperator;
    use contracts::shared::metadata::{FieldDescriptor, FieldType};
    use rust_decimal::Decimal;

    #[test]
    fn test_resource_names() {
        let catalog = DataServiceEntity::Catalog(MetadataObject::new("Номенклатура"));
        assert_eq!(resource_name(&catalog), "Catalog_Номенклатура");

        let slice = DataServiceEntity::InformationRegisterSliceLast(RegisterSlice {
            name: "ЦеныНоменклатуры".into(),
            fields: vec![],
        });
        assert_eq!(resource_name(&slice), "InformationRegister_ЦеныНоменклатуры_SliceLast");

        let section = DataServiceEntity::TabularSection(TabularSection::new(
            "Document_ЗаказКлиента",
            "Товары",
        ));
        assert_eq!(resource_name(&section), "Document_ЗаказКлиента_Товары");

        let recalculation = DataServiceEntity::CalculationRegisterRecalculation(Recalculation {
            name: "Начисления".into(),
            recalculation_name: "Перерасчет".into(),
            virtual_table_fields: vec![],
        });
        assert_eq!(
            resource_name(&recalculation),
            "CalculationRegister_Начисления_Перерасчет"
        );

        let base = DataServiceEntity::CalculationRegisterBaseRegister(BaseRegister {
            name: "Начисления".into(),
            base_register_name: "Основные".into(),
            virtual_table_fields: vec![],
        });
        assert_eq!(resource_name(&base), "CalculationRegister_Начисления_BaseОсновные");
    }

    #[test]
    fn test_filter_literals() {
        let matcher = SigilPlaceholder::default();
        let params = Parameters::new();

        let text = RelationalExpression::new(
            FieldDescriptor::new("Description", FieldType::String),
            ComparisonOperator::Equal,
            FilterValue::String("Д'Артаньян".into()),
        );
        assert_eq!(
            filter_clause(&text, &params, &matcher).unwrap(),
            "Description eq 'Д''Артаньян'"
        );

        let amount = RelationalExpression::new(
            FieldDescriptor::new("Сумма", FieldType::Decimal),
            ComparisonOperator::GreaterOrEqual,
            FilterValue::Decimal(Decimal::new(10000, 2)),
        );
        assert_eq!(
            filter_clause(&amount, &params, &matcher).unwrap(),
            "Сумма ge 100.00"
        );
    }

    #[test]
    fn test_parameters_substituted() {
        let matcher = SigilPlaceholder::default();
        let date = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let params = Parameters::new().with("НачалоПериода", date);

        let expressions = vec![
            RelationalExpression::new(
                FieldDescriptor::new("Date", FieldType::DateTime),
                ComparisonOperator::GreaterOrEqual,
                FilterValue::Parameter("&НачалоПериода".into()),
            ),
            RelationalExpression::new(
                FieldDescriptor::new("Posted", FieldType::Boolean),
                ComparisonOperator::Equal,
                FilterValue::Boolean(true),
            ),
        ];

        assert_eq!(
            filter_expression(&expressions, &params, &matcher).unwrap(),
            "Date ge datetime'2024-01-01T00:00:00' and Posted eq true"
        );
    }

    #[test]
    fn test_missing_parameter() {
        let matcher = SigilPlaceholder::default();
        let expression = RelationalExpression::new(
            FieldDescriptor::new("Организация_Key", FieldType::Guid),
            ComparisonOperator::Equal,
            FilterValue::Parameter("&Организация".into()),
        );
        match filter_clause(&expression, &Parameters::new(), &matcher) {
            Err(CodecError::UnresolvedParameter { name }) => assert_eq!(name, "Организация"),
            other => panic!("unexpected result {:?}", other),
        }
    }
}
