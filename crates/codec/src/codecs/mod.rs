//! Codecs between live values and their flat, storable form

mod entity_variant;
mod filter_value;

pub use entity_variant::EntityVariantCodec;
pub use filter_value::FilterValueCodec;

use crate::error::CodecError;

/// Two-way mapping used by the binding layer.
///
/// `None` stands for an absent value in the document and is rejected with
/// [`CodecError::NullEntity`] in both directions.
pub trait Adapter {
    type Flat;
    type Live;

    fn unmarshal(&self, flat: Option<Self::Flat>) -> Result<Self::Live, CodecError>;

    fn marshal(&self, live: Option<Self::Live>) -> Result<Self::Flat, CodecError>;
}
