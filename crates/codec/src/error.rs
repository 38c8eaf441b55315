use contracts::shared::metadata::FieldType;
use thiserror::Error;

/// Ошибки кодеков метаданных
#[derive(Debug, Error)]
pub enum CodecError {
    /// A required entity, expression or part of it is absent
    #[error("Null entity: {what} is absent")]
    NullEntity { what: &'static str },

    /// The flat record's tag names no known entity kind
    #[error("Unknown entity variant: '{tag}'")]
    UnknownEntityVariant { tag: String },

    #[error("Value format error: '{raw}' is not a valid {expected} value for field '{field}': {reason}")]
    ValueFormatError {
        raw: String,
        expected: FieldType,
        field: String,
        reason: String,
    },

    #[error("Unresolved parameter: '{name}'")]
    UnresolvedParameter { name: String },

    #[error("Binding error: {0}")]
    Binding(#[from] serde_json::Error),
}
