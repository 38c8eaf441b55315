use contracts::domain::data_service::{
    BaseRegister, BaseRegisterRecord, DataServiceEntity, DimensionResourceRecord,
    DimensionResourceTable, FlatEntity, MetadataObject, NamedRecord, PropertyResourceRecord,
    PropertyResourceTable, Recalculation, RecalculationRecord, RegisterSlice, SliceRecord,
    TabularSection, TabularSectionRecord, VirtualTable, VirtualTableRecord,
};

use super::Adapter;
use crate::error::CodecError;

/// Maps entities to flat records and back, kind by kind.
///
/// Simple kinds travel by name only: their field set is not written and
/// comes back empty, to be filled by whoever reads the service schema.
/// Descriptor lists of virtual tables are moved through untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityVariantCodec;

impl EntityVariantCodec {
    pub fn new() -> Self {
        Self
    }

    pub fn reconstruct(&self, flat: Option<FlatEntity>) -> Result<DataServiceEntity, CodecError> {
        let flat = flat.ok_or(CodecError::NullEntity { what: "entity" })?;
        tracing::trace!(kind = %flat.kind(), name = flat.name(), "reconstruct entity");

        let entity = match flat {
            FlatEntity::Constant(r) => DataServiceEntity::Constant(object(r)),
            FlatEntity::Catalog(r) => DataServiceEntity::Catalog(object(r)),
            FlatEntity::Document(r) => DataServiceEntity::Document(object(r)),
            FlatEntity::DocumentJournal(r) => DataServiceEntity::DocumentJournal(object(r)),
            FlatEntity::ChartOfCharacteristicTypes(r) => {
                DataServiceEntity::ChartOfCharacteristicTypes(object(r))
            }
            FlatEntity::ChartOfAccounts(r) => DataServiceEntity::ChartOfAccounts(object(r)),
            FlatEntity::ChartOfCalculationTypes(r) => {
                DataServiceEntity::ChartOfCalculationTypes(object(r))
            }
            FlatEntity::InformationRegister(r) => DataServiceEntity::InformationRegister(object(r)),
            FlatEntity::AccumulationRegister(r) => {
                DataServiceEntity::AccumulationRegister(object(r))
            }
            FlatEntity::AccountingRegister(r) => DataServiceEntity::AccountingRegister(object(r)),
            FlatEntity::CalculationRegister(r) => DataServiceEntity::CalculationRegister(object(r)),
            FlatEntity::ExchangePlan(r) => DataServiceEntity::ExchangePlan(object(r)),
            FlatEntity::BusinessProcess(r) => DataServiceEntity::BusinessProcess(object(r)),
            FlatEntity::Task(r) => DataServiceEntity::Task(object(r)),
            FlatEntity::InformationRegisterSliceLast(r) => {
                DataServiceEntity::InformationRegisterSliceLast(slice(r))
            }
            FlatEntity::InformationRegisterSliceFirst(r) => {
                DataServiceEntity::InformationRegisterSliceFirst(slice(r))
            }
            FlatEntity::AccumulationRegisterBalance(r) => {
                DataServiceEntity::AccumulationRegisterBalance(dimension_table(r))
            }
            FlatEntity::AccumulationRegisterTurnovers(r) => {
                DataServiceEntity::AccumulationRegisterTurnovers(dimension_table(r))
            }
            FlatEntity::AccumulationRegisterBalanceAndTurnovers(r) => {
                DataServiceEntity::AccumulationRegisterBalanceAndTurnovers(dimension_table(r))
            }
            FlatEntity::AccountingRegisterBalance(r) => {
                DataServiceEntity::AccountingRegisterBalance(property_table(r))
            }
            FlatEntity::AccountingRegisterTurnovers(r) => {
                DataServiceEntity::AccountingRegisterTurnovers(property_table(r))
            }
            FlatEntity::AccountingRegisterBalanceAndTurnovers(r) => {
                DataServiceEntity::AccountingRegisterBalanceAndTurnovers(property_table(r))
            }
            FlatEntity::AccountingRegisterDrCrTurnovers(r) => {
                DataServiceEntity::AccountingRegisterDrCrTurnovers(property_table(r))
            }
            FlatEntity::AccountingRegisterExtDimensions(r) => {
                DataServiceEntity::AccountingRegisterExtDimensions(virtual_table(r))
            }
            FlatEntity::AccountingRegisterRecordsWithExtDimensions(r) => {
                DataServiceEntity::AccountingRegisterRecordsWithExtDimensions(virtual_table(r))
            }
            FlatEntity::CalculationRegisterScheduleData(r) => {
                DataServiceEntity::CalculationRegisterScheduleData(virtual_table(r))
            }
            FlatEntity::CalculationRegisterActualActionPeriod(r) => {
                DataServiceEntity::CalculationRegisterActualActionPeriod(virtual_table(r))
            }
            FlatEntity::CalculationRegisterRecalculation(r) => {
                DataServiceEntity::CalculationRegisterRecalculation(Recalculation {
                    name: r.name,
                    recalculation_name: r.recalculation_name,
                    virtual_table_fields: r.virtual_table_fields,
                })
            }
            FlatEntity::CalculationRegisterBaseRegister(r) => {
                DataServiceEntity::CalculationRegisterBaseRegister(BaseRegister {
                    name: r.name,
                    base_register_name: r.base_register_name,
                    virtual_table_fields: r.virtual_table_fields,
                })
            }
            FlatEntity::TabularSection(r) => {
                DataServiceEntity::TabularSection(TabularSection::new(r.parent, r.name))
            }
        };

        Ok(entity)
    }

    pub fn flatten(&self, entity: Option<DataServiceEntity>) -> Result<FlatEntity, CodecError> {
        let entity = entity.ok_or(CodecError::NullEntity { what: "entity" })?;
        tracing::trace!(kind = %entity.kind(), name = entity.name(), "flatten entity");

        let flat = match entity {
            DataServiceEntity::Constant(o) => FlatEntity::Constant(named(o)),
            DataServiceEntity::Catalog(o) => FlatEntity::Catalog(named(o)),
            DataServiceEntity::Document(o) => FlatEntity::Document(named(o)),
            DataServiceEntity::DocumentJournal(o) => FlatEntity::DocumentJournal(named(o)),
            DataServiceEntity::ChartOfCharacteristicTypes(o) => {
                FlatEntity::ChartOfCharacteristicTypes(named(o))
            }
            DataServiceEntity::ChartOfAccounts(o) => FlatEntity::ChartOfAccounts(named(o)),
            DataServiceEntity::ChartOfCalculationTypes(o) => {
                FlatEntity::ChartOfCalculationTypes(named(o))
            }
            DataServiceEntity::InformationRegister(o) => FlatEntity::InformationRegister(named(o)),
            DataServiceEntity::AccumulationRegister(o) => {
                FlatEntity::AccumulationRegister(named(o))
            }
            DataServiceEntity::AccountingRegister(o) => FlatEntity::AccountingRegister(named(o)),
            DataServiceEntity::CalculationRegister(o) => FlatEntity::CalculationRegister(named(o)),
            DataServiceEntity::ExchangePlan(o) => FlatEntity::ExchangePlan(named(o)),
            DataServiceEntity::BusinessProcess(o) => FlatEntity::BusinessProcess(named(o)),
            DataServiceEntity::Task(o) => FlatEntity::Task(named(o)),
            DataServiceEntity::InformationRegisterSliceLast(s) => {
                FlatEntity::InformationRegisterSliceLast(slice_record(s))
            }
            DataServiceEntity::InformationRegisterSliceFirst(s) => {
                FlatEntity::InformationRegisterSliceFirst(slice_record(s))
            }
            DataServiceEntity::AccumulationRegisterBalance(t) => {
                FlatEntity::AccumulationRegisterBalance(dimension_record(t))
            }
            DataServiceEntity::AccumulationRegisterTurnovers(t) => {
                FlatEntity::AccumulationRegisterTurnovers(dimension_record(t))
            }
            DataServiceEntity::AccumulationRegisterBalanceAndTurnovers(t) => {
                FlatEntity::AccumulationRegisterBalanceAndTurnovers(dimension_record(t))
            }
            DataServiceEntity::AccountingRegisterBalance(t) => {
                FlatEntity::AccountingRegisterBalance(property_record(t))
            }
            DataServiceEntity::AccountingRegisterTurnovers(t) => {
                FlatEntity::AccountingRegisterTurnovers(property_record(t))
            }
            DataServiceEntity::AccountingRegisterBalanceAndTurnovers(t) => {
                FlatEntity::AccountingRegisterBalanceAndTurnovers(property_record(t))
            }
            DataServiceEntity::AccountingRegisterDrCrTurnovers(t) => {
                FlatEntity::AccountingRegisterDrCrTurnovers(property_record(t))
            }
            DataServiceEntity::AccountingRegisterExtDimensions(t) => {
                FlatEntity::AccountingRegisterExtDimensions(virtual_table_record(t))
            }
            DataServiceEntity::AccountingRegisterRecordsWithExtDimensions(t) => {
                FlatEntity::AccountingRegisterRecordsWithExtDimensions(virtual_table_record(t))
            }
            DataServiceEntity::CalculationRegisterScheduleData(t) => {
                FlatEntity::CalculationRegisterScheduleData(virtual_table_record(t))
            }
            DataServiceEntity::CalculationRegisterActualActionPeriod(t) => {
                FlatEntity::CalculationRegisterActualActionPeriod(virtual_table_record(t))
            }
            DataServiceEntity::CalculationRegisterRecalculation(r) => {
                FlatEntity::CalculationRegisterRecalculation(RecalculationRecord {
                    name: r.name,
                    recalculation_name: r.recalculation_name,
                    virtual_table_fields: r.virtual_table_fields,
                })
            }
            DataServiceEntity::CalculationRegisterBaseRegister(b) => {
                FlatEntity::CalculationRegisterBaseRegister(BaseRegisterRecord {
                    name: b.name,
                    base_register_name: b.base_register_name,
                    virtual_table_fields: b.virtual_table_fields,
                })
            }
            DataServiceEntity::TabularSection(t) => {
                FlatEntity::TabularSection(TabularSectionRecord {
                    parent: t.parent,
                    name: t.name,
                })
            }
        };

        Ok(flat)
    }
}

impl Adapter for EntityVariantCodec {
    type Flat = FlatEntity;
    type Live = DataServiceEntity;

    fn unmarshal(&self, flat: Option<FlatEntity>) -> Result<DataServiceEntity, CodecError> {
        self.reconstruct(flat)
    }

    fn marshal(&self, live: Option<DataServiceEntity>) -> Result<FlatEntity, CodecError> {
        self.flatten(live)
    }
}

// ============================================================================
// Payload conversions
// ============================================================================

fn object(r: NamedRecord) -> MetadataObject {
    MetadataObject::new(r.name)
}

fn named(o: MetadataObject) -> NamedRecord {
    NamedRecord { name: o.name }
}

fn slice(r: SliceRecord) -> RegisterSlice {
    RegisterSlice {
        name: r.name,
        fields: r.fields,
    }
}

fn slice_record(s: RegisterSlice) -> SliceRecord {
    SliceRecord {
        name: s.name,
        fields: s.fields,
    }
}

fn dimension_table(r: DimensionResourceRecord) -> DimensionResourceTable {
    DimensionResourceTable {
        name: r.name,
        dimensions: r.dimensions,
        resources: r.resources,
    }
}

fn dimension_record(t: DimensionResourceTable) -> DimensionResourceRecord {
    DimensionResourceRecord {
        name: t.name,
        dimensions: t.dimensions,
        resources: t.resources,
    }
}

fn property_table(r: PropertyResourceRecord) -> PropertyResourceTable {
    PropertyResourceTable {
        name: r.name,
        properties: r.properties,
        resources: r.resources,
    }
}

fn property_record(t: PropertyResourceTable) -> PropertyResourceRecord {
    PropertyResourceRecord {
        name: t.name,
        properties: t.properties,
        resources: t.resources,
    }
}

fn virtual_table(r: VirtualTableRecord) -> VirtualTable {
    VirtualTable {
        name: r.name,
        virtual_table_fields: r.virtual_table_fields,
    }
}

fn virtual_table_record(t: VirtualTable) -> VirtualTableRecord {
    VirtualTableRecord {
        name: t.name,
        virtual_table_fields: t.virtual_table_fields,
    }
}
