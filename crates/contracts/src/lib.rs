//! Shared data types of the metadata codec: entity model, flat records,
//! field descriptors and filter expressions.

pub mod domain;
pub mod shared;
