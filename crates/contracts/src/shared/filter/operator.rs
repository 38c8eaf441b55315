use serde::{Deserialize, Serialize};

/// Comparison operator of a relational expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonOperator {
    /// Equal (eq)
    #[serde(rename = "eq")]
    Equal,
    /// Not equal (ne)
    #[serde(rename = "ne")]
    NotEqual,
    /// Greater than (gt)
    #[serde(rename = "gt")]
    Greater,
    /// Greater than or equal (ge)
    #[serde(rename = "ge")]
    GreaterOrEqual,
    /// Less than (lt)
    #[serde(rename = "lt")]
    Less,
    /// Less than or equal (le)
    #[serde(rename = "le")]
    LessOrEqual,
}

impl ComparisonOperator {
    /// Get `$filter` operator keyword
    pub fn odata(&self) -> &'static str {
        match self {
            ComparisonOperator::Equal => "eq",
            ComparisonOperator::NotEqual => "ne",
            ComparisonOperator::Greater => "gt",
            ComparisonOperator::GreaterOrEqual => "ge",
            ComparisonOperator::Less => "lt",
            ComparisonOperator::LessOrEqual => "le",
        }
    }

    /// Get display symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            ComparisonOperator::Equal => "=",
            ComparisonOperator::NotEqual => "≠",
            ComparisonOperator::Greater => ">",
            ComparisonOperator::GreaterOrEqual => "≥",
            ComparisonOperator::Less => "<",
            ComparisonOperator::LessOrEqual => "≤",
        }
    }

    pub fn from_odata(keyword: &str) -> Option<Self> {
        Self::all().iter().copied().find(|op| op.odata() == keyword)
    }

    pub fn all() -> &'static [ComparisonOperator] {
        &[
            ComparisonOperator::Equal,
            ComparisonOperator::NotEqual,
            ComparisonOperator::Greater,
            ComparisonOperator::GreaterOrEqual,
            ComparisonOperator::Less,
            ComparisonOperator::LessOrEqual,
        ]
    }
}
