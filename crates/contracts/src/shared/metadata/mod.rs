//! Field metadata shared by entities, virtual tables and filters
//!
//! ## Usage
//!
//! ```rust
//! use contracts::shared::metadata::{FieldDescriptor, FieldSet, FieldType};
//!
//! let mut fields = FieldSet::new();
//! fields.insert(FieldDescriptor::new("Ref_Key", FieldType::Guid));
//! assert!(!fields.insert(FieldDescriptor::new("Ref_Key", FieldType::Guid)));
//! ```

mod field_type;
mod types;

pub use field_type::FieldType;
pub use types::{FieldDescriptor, FieldSet};
