//! Metadata objects of a 1C OData data service
//!
//! [`DataServiceEntity`] is the live model, [`FlatEntity`] its stored form.
//! Both are closed enums over [`EntityKind`].

mod entity;
mod flat;
mod kind;

pub use entity::{
    BaseRegister, DataServiceEntity, DimensionResourceTable, MetadataObject,
    PropertyResourceTable, Recalculation, RegisterSlice, TabularSection, VirtualTable,
};
pub use flat::{
    BaseRegisterRecord, DimensionResourceRecord, FlatEntity, NamedRecord,
    PropertyResourceRecord, RecalculationRecord, SliceRecord, TabularSectionRecord,
    VirtualTableRecord,
};
pub use kind::{EntityFamily, EntityKind};
