use serde::{Deserialize, Serialize};

use super::operator::ComparisonOperator;
use super::value::FilterValue;
use crate::shared::metadata::FieldDescriptor;

/// Filter predicate `field operator value`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationalExpression {
    /// Field the value is compared against
    pub field: FieldDescriptor,
    pub operator: ComparisonOperator,
    /// Literal of the field's kind, or an unresolved parameter
    pub value: FilterValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl RelationalExpression {
    pub fn new(field: FieldDescriptor, operator: ComparisonOperator, value: FilterValue) -> Self {
        Self {
            field,
            operator,
            value,
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Value still waits for a run-time parameter
    pub fn is_parameterized(&self) -> bool {
        self.value.is_parameter()
    }

    /// Human-readable text, e.g. `Сумма ≥ 100.00`
    pub fn display_text(&self) -> String {
        format!("{} {} {}", self.field.name, self.operator.symbol(), self.value)
    }
}

/// Stored form of a [`RelationalExpression`]: the value is text.
///
/// Every part is optional because the binding layer hands over whatever it
/// found in the document; completeness is checked when decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatRelationalExpression {
    #[serde(default)]
    pub field: Option<FieldDescriptor>,
    #[serde(default)]
    pub operator: Option<ComparisonOperator>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl FlatRelationalExpression {
    pub fn new(
        field: FieldDescriptor,
        operator: ComparisonOperator,
        value: impl Into<String>,
    ) -> Self {
        Self {
            field: Some(field),
            operator: Some(operator),
            value: Some(value.into()),
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}
