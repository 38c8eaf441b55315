//! Codecs between the metadata model of a 1C OData service and its flat form
//!
//! * [`EntityVariantCodec`] maps [`DataServiceEntity`] to [`FlatEntity`] and back.
//! * [`FilterValueCodec`] maps [`RelationalExpression`] to
//!   [`FlatRelationalExpression`] and back, keeping parameter placeholders raw.
//!
//! ```rust
//! use contracts::shared::filter::{ComparisonOperator, FilterValue, FlatRelationalExpression};
//! use contracts::shared::metadata::{FieldDescriptor, FieldType};
//! use metadata_codec::FilterValueCodec;
//!
//! let codec = FilterValueCodec::new();
//! let flat = FlatRelationalExpression::new(
//!     FieldDescriptor::new("Date", FieldType::DateTime),
//!     ComparisonOperator::GreaterOrEqual,
//!     "&НачалоПериода",
//! );
//! let expression = codec.decode(flat).unwrap();
//! assert_eq!(expression.value, FilterValue::Parameter("&НачалоПериода".into()));
//! ```
//!
//! [`DataServiceEntity`]: contracts::domain::data_service::DataServiceEntity
//! [`FlatEntity`]: contracts::domain::data_service::FlatEntity
//! [`RelationalExpression`]: contracts::shared::filter::RelationalExpression
//! [`FlatRelationalExpression`]: contracts::shared::filter::FlatRelationalExpression

pub mod binding;
pub mod codecs;
pub mod error;
pub mod odata;
pub mod shared;
pub mod system;

pub use codecs::{Adapter, EntityVariantCodec, FilterValueCodec};
pub use error::CodecError;
