use crate::shared::metadata::{FieldDescriptor, FieldSet};

use super::kind::EntityKind;

// ============================================================================
// Payloads
// ============================================================================

/// Top-level metadata object known by name only.
///
/// `fields` is filled by whoever reads the service schema after the object
/// has been reconstructed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataObject {
    pub name: String,
    pub fields: FieldSet,
}

impl MetadataObject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: FieldSet::new(),
        }
    }
}

/// Slice of an information register (first or last values on a date)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterSlice {
    pub name: String,
    pub fields: Vec<FieldDescriptor>,
}

/// Accumulation register virtual table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DimensionResourceTable {
    pub name: String,
    pub dimensions: Vec<FieldDescriptor>,
    pub resources: Vec<FieldDescriptor>,
}

/// Accounting register totals table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyResourceTable {
    pub name: String,
    pub properties: Vec<FieldDescriptor>,
    pub resources: Vec<FieldDescriptor>,
}

/// Register virtual table described by its own field list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VirtualTable {
    pub name: String,
    pub virtual_table_fields: Vec<FieldDescriptor>,
}

/// Recalculation of a calculation register
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recalculation {
    pub name: String,
    pub recalculation_name: String,
    pub virtual_table_fields: Vec<FieldDescriptor>,
}

/// Base register of a calculation register
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseRegister {
    pub name: String,
    pub base_register_name: String,
    pub virtual_table_fields: Vec<FieldDescriptor>,
}

/// Табличная часть объекта (например, `Товары` документа)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabularSection {
    /// Resource name of the owning object (`Document_ЗаказКлиента`)
    pub parent: String,
    pub name: String,
    pub fields: FieldSet,
}

impl TabularSection {
    pub fn new(parent: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            parent: parent.into(),
            name: name.into(),
            fields: FieldSet::new(),
        }
    }
}

// ============================================================================
// Entity
// ============================================================================

/// Metadata object exposed by the data service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataServiceEntity {
    Constant(MetadataObject),
    Catalog(MetadataObject),
    Document(MetadataObject),
    DocumentJournal(MetadataObject),
    ChartOfCharacteristicTypes(MetadataObject),
    ChartOfAccounts(MetadataObject),
    ChartOfCalculationTypes(MetadataObject),
    InformationRegister(MetadataObject),
    AccumulationRegister(MetadataObject),
    AccountingRegister(MetadataObject),
    CalculationRegister(MetadataObject),
    ExchangePlan(MetadataObject),
    BusinessProcess(MetadataObject),
    Task(MetadataObject),
    InformationRegisterSliceLast(RegisterSlice),
    InformationRegisterSliceFirst(RegisterSlice),
    AccumulationRegisterBalance(DimensionResourceTable),
    AccumulationRegisterTurnovers(DimensionResourceTable),
    AccumulationRegisterBalanceAndTurnovers(DimensionResourceTable),
    AccountingRegisterBalance(PropertyResourceTable),
    AccountingRegisterTurnovers(PropertyResourceTable),
    AccountingRegisterBalanceAndTurnovers(PropertyResourceTable),
    AccountingRegisterDrCrTurnovers(PropertyResourceTable),
    AccountingRegisterExtDimensions(VirtualTable),
    AccountingRegisterRecordsWithExtDimensions(VirtualTable),
    CalculationRegisterScheduleData(VirtualTable),
    CalculationRegisterActualActionPeriod(VirtualTable),
    CalculationRegisterRecalculation(Recalculation),
    CalculationRegisterBaseRegister(BaseRegister),
    TabularSection(TabularSection),
}

impl DataServiceEntity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Constant(_) => EntityKind::Constant,
            Self::Catalog(_) => EntityKind::Catalog,
            Self::Document(_) => EntityKind::Document,
            Self::DocumentJournal(_) => EntityKind::DocumentJournal,
            Self::ChartOfCharacteristicTypes(_) => EntityKind::ChartOfCharacteristicTypes,
            Self::ChartOfAccounts(_) => EntityKind::ChartOfAccounts,
            Self::ChartOfCalculationTypes(_) => EntityKind::ChartOfCalculationTypes,
            Self::InformationRegister(_) => EntityKind::InformationRegister,
            Self::AccumulationRegister(_) => EntityKind::AccumulationRegister,
            Self::AccountingRegister(_) => EntityKind::AccountingRegister,
            Self::CalculationRegister(_) => EntityKind::CalculationRegister,
            Self::ExchangePlan(_) => EntityKind::ExchangePlan,
            Self::BusinessProcess(_) => EntityKind::BusinessProcess,
            Self::Task(_) => EntityKind::Task,
            Self::InformationRegisterSliceLast(_) => EntityKind::InformationRegisterSliceLast,
            Self::InformationRegisterSliceFirst(_) => EntityKind::InformationRegisterSliceFirst,
            Self::AccumulationRegisterBalance(_) => EntityKind::AccumulationRegisterBalance,
            Self::AccumulationRegisterTurnovers(_) => EntityKind::AccumulationRegisterTurnovers,
            Self::AccumulationRegisterBalanceAndTurnovers(_) => {
                EntityKind::AccumulationRegisterBalanceAndTurnovers
            }
            Self::AccountingRegisterBalance(_) => EntityKind::AccountingRegisterBalance,
            Self::AccountingRegisterTurnovers(_) => EntityKind::AccountingRegisterTurnovers,
            Self::AccountingRegisterBalanceAndTurnovers(_) => {
                EntityKind::AccountingRegisterBalanceAndTurnovers
            }
            Self::AccountingRegisterDrCrTurnovers(_) => EntityKind::AccountingRegisterDrCrTurnovers,
            Self::AccountingRegisterExtDimensions(_) => EntityKind::AccountingRegisterExtDimensions,
            Self::AccountingRegisterRecordsWithExtDimensions(_) => {
                EntityKind::AccountingRegisterRecordsWithExtDimensions
            }
            Self::CalculationRegisterScheduleData(_) => EntityKind::CalculationRegisterScheduleData,
            Self::CalculationRegisterActualActionPeriod(_) => {
                EntityKind::CalculationRegisterActualActionPeriod
            }
            Self::CalculationRegisterRecalculation(_) => {
                EntityKind::CalculationRegisterRecalculation
            }
            Self::CalculationRegisterBaseRegister(_) => EntityKind::CalculationRegisterBaseRegister,
            Self::TabularSection(_) => EntityKind::TabularSection,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Constant(o)
            | Self::Catalog(o)
            | Self::Document(o)
            | Self::DocumentJournal(o)
            | Self::ChartOfCharacteristicTypes(o)
            | Self::ChartOfAccounts(o)
            | Self::ChartOfCalculationTypes(o)
            | Self::InformationRegister(o)
            | Self::AccumulationRegister(o)
            | Self::AccountingRegister(o)
            | Self::CalculationRegister(o)
            | Self::ExchangePlan(o)
            | Self::BusinessProcess(o)
            | Self::Task(o) => &o.name,
            Self::InformationRegisterSliceLast(s) | Self::InformationRegisterSliceFirst(s) => &s.name,
            Self::AccumulationRegisterBalance(t)
            | Self::AccumulationRegisterTurnovers(t)
            | Self::AccumulationRegisterBalanceAndTurnovers(t) => &t.name,
            Self::AccountingRegisterBalance(t)
            | Self::AccountingRegisterTurnovers(t)
            | Self::AccountingRegisterBalanceAndTurnovers(t)
            | Self::AccountingRegisterDrCrTurnovers(t) => &t.name,
            Self::AccountingRegisterExtDimensions(t)
            | Self::AccountingRegisterRecordsWithExtDimensions(t)
            | Self::CalculationRegisterScheduleData(t)
            | Self::CalculationRegisterActualActionPeriod(t) => &t.name,
            Self::CalculationRegisterRecalculation(r) => &r.name,
            Self::CalculationRegisterBaseRegister(b) => &b.name,
            Self::TabularSection(t) => &t.name,
        }
    }

    /// Children attached after reconstruction, for kinds that own a field set
    pub fn fields(&self) -> Option<&FieldSet> {
        match self {
            Self::Constant(o)
            | Self::Catalog(o)
            | Self::Document(o)
            | Self::DocumentJournal(o)
            | Self::ChartOfCharacteristicTypes(o)
            | Self::ChartOfAccounts(o)
            | Self::ChartOfCalculationTypes(o)
            | Self::InformationRegister(o)
            | Self::AccumulationRegister(o)
            | Self::AccountingRegister(o)
            | Self::CalculationRegister(o)
            | Self::ExchangePlan(o)
            | Self::BusinessProcess(o)
            | Self::Task(o) => Some(&o.fields),
            Self::TabularSection(t) => Some(&t.fields),
            _ => None,
        }
    }

    pub fn fields_mut(&mut self) -> Option<&mut FieldSet> {
        match self {
            Self::Constant(o)
            | Self::Catalog(o)
            | Self::Document(o)
            | Self::DocumentJournal(o)
            | Self::ChartOfCharacteristicTypes(o)
            | Self::ChartOfAccounts(o)
            | Self::ChartOfCalculationTypes(o)
            | Self::InformationRegister(o)
            | Self::AccumulationRegister(o)
            | Self::AccountingRegister(o)
            | Self::CalculationRegister(o)
            | Self::ExchangePlan(o)
            | Self::BusinessProcess(o)
            | Self::Task(o) => Some(&mut o.fields),
            Self::TabularSection(t) => Some(&mut t.fields),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metadata::FieldType;

    #[test]
    fn test_kind_and_name() {
        let entity = DataServiceEntity::Catalog(MetadataObject::new("Номенклатура"));
        assert_eq!(entity.kind(), EntityKind::Catalog);
        assert_eq!(entity.name(), "Номенклатура");

        let section = DataServiceEntity::TabularSection(TabularSection::new(
            "Document_ЗаказКлиента",
            "Товары",
        ));
        assert_eq!(section.kind(), EntityKind::TabularSection);
        assert_eq!(section.name(), "Товары");
    }

    #[test]
    fn test_attach_children() {
        let mut entity = DataServiceEntity::Document(MetadataObject::new("ЗаказКлиента"));
        let fields = entity.fields_mut().unwrap();
        assert!(fields.insert(FieldDescriptor::new("Ref_Key", FieldType::Guid)));
        assert_eq!(entity.fields().unwrap().len(), 1);

        let mut slice = DataServiceEntity::InformationRegisterSliceLast(RegisterSlice {
            name: "ЦеныНоменклатуры".into(),
            fields: vec![],
        });
        assert!(slice.fields_mut().is_none());
    }
}
