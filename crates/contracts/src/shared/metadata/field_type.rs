//! Value kinds of data-service fields

use serde::{Deserialize, Serialize};

/// Kind of value a field holds.
///
/// Mirrors the EDM primitive types a 1C OData endpoint publishes in its
/// `$metadata` document. References to other objects are published as
/// `Edm.Guid` keys (`Номенклатура_Key`) and use [`FieldType::Guid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    #[default]
    String,
    Boolean,
    Int16,
    Int32,
    Int64,
    Double,
    Decimal,
    DateTime,
    Guid,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Double => "double",
            Self::Decimal => "decimal",
            Self::DateTime => "date_time",
            Self::Guid => "guid",
        }
    }

    /// Name of the type in the `$metadata` document
    pub fn edm_name(&self) -> &'static str {
        match self {
            Self::String => "Edm.String",
            Self::Boolean => "Edm.Boolean",
            Self::Int16 => "Edm.Int16",
            Self::Int32 => "Edm.Int32",
            Self::Int64 => "Edm.Int64",
            Self::Double => "Edm.Double",
            Self::Decimal => "Edm.Decimal",
            Self::DateTime => "Edm.DateTime",
            Self::Guid => "Edm.Guid",
        }
    }

    /// Parse an `Edm.*` type name. Unknown names yield `None`.
    pub fn from_edm_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|t| t.edm_name() == name)
    }

    pub fn all() -> &'static [FieldType] {
        &[
            FieldType::String,
            FieldType::Boolean,
            FieldType::Int16,
            FieldType::Int32,
            FieldType::Int64,
            FieldType::Double,
            FieldType::Decimal,
            FieldType::DateTime,
            FieldType::Guid,
        ]
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
