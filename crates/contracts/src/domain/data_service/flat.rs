//! Flat, tag-carrying records of data-service entities
//!
//! This is the form stored and exchanged. Every record carries its `kind`
//! explicitly: many kinds have the same attributes and would be
//! indistinguishable otherwise.

use serde::{Deserialize, Serialize};

use crate::shared::metadata::FieldDescriptor;

use super::kind::EntityKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRecord {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliceRecord {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionResourceRecord {
    pub name: String,
    #[serde(default)]
    pub dimensions: Vec<FieldDescriptor>,
    #[serde(default)]
    pub resources: Vec<FieldDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyResourceRecord {
    pub name: String,
    #[serde(default)]
    pub properties: Vec<FieldDescriptor>,
    #[serde(default)]
    pub resources: Vec<FieldDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualTableRecord {
    pub name: String,
    #[serde(default)]
    pub virtual_table_fields: Vec<FieldDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecalculationRecord {
    pub name: String,
    pub recalculation_name: String,
    #[serde(default)]
    pub virtual_table_fields: Vec<FieldDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseRegisterRecord {
    pub name: String,
    pub base_register_name: String,
    #[serde(default)]
    pub virtual_table_fields: Vec<FieldDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabularSectionRecord {
    pub parent: String,
    pub name: String,
}

/// Flat record, one variant per entity kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum FlatEntity {
    Constant(NamedRecord),
    Catalog(NamedRecord),
    Document(NamedRecord),
    DocumentJournal(NamedRecord),
    ChartOfCharacteristicTypes(NamedRecord),
    ChartOfAccounts(NamedRecord),
    ChartOfCalculationTypes(NamedRecord),
    InformationRegister(NamedRecord),
    AccumulationRegister(NamedRecord),
    AccountingRegister(NamedRecord),
    CalculationRegister(NamedRecord),
    ExchangePlan(NamedRecord),
    BusinessProcess(NamedRecord),
    Task(NamedRecord),
    InformationRegisterSliceLast(SliceRecord),
    InformationRegisterSliceFirst(SliceRecord),
    AccumulationRegisterBalance(DimensionResourceRecord),
    AccumulationRegisterTurnovers(DimensionResourceRecord),
    AccumulationRegisterBalanceAndTurnovers(DimensionResourceRecord),
    AccountingRegisterBalance(PropertyResourceRecord),
    AccountingRegisterTurnovers(PropertyResourceRecord),
    AccountingRegisterBalanceAndTurnovers(PropertyResourceRecord),
    AccountingRegisterDrCrTurnovers(PropertyResourceRecord),
    AccountingRegisterExtDimensions(VirtualTableRecord),
    AccountingRegisterRecordsWithExtDimensions(VirtualTableRecord),
    CalculationRegisterScheduleData(VirtualTableRecord),
    CalculationRegisterActualActionPeriod(VirtualTableRecord),
    CalculationRegisterRecalculation(RecalculationRecord),
    CalculationRegisterBaseRegister(BaseRegisterRecord),
    TabularSection(TabularSectionRecord),
}

impl FlatEntity {
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
            Self::Constant(r)
            | Self::Catalog(r)
            | Self::Document(r)
            | Self::DocumentJournal(r)
            | Self::ChartOfCharacteristicTypes(r)
            | Self::ChartOfAccounts(r)
            | Self::ChartOfCalculationTypes(r)
            | Self::InformationRegister(r)
            | Self::AccumulationRegister(r)
            | Self::AccountingRegister(r)
            | Self::CalculationRegister(r)
            | Self::ExchangePlan(r)
            | Self::BusinessProcess(r)
            | Self::Task(r) => &r.name,
            Self::InformationRegisterSliceLast(r) | Self::InformationRegisterSliceFirst(r) => {
                &r.name
            }
            Self::AccumulationRegisterBalance(r)
            | Self::AccumulationRegisterTurnovers(r)
            | Self::AccumulationRegisterBalanceAndTurnovers(r) => &r.name,
            Self::AccountingRegisterBalance(r)
            | Self::AccountingRegisterTurnovers(r)
            | Self::AccountingRegisterBalanceAndTurnovers(r)
            | Self::AccountingRegisterDrCrTurnovers(r) => &r.name,
            Self::AccountingRegisterExtDimensions(r)
            | Self::AccountingRegisterRecordsWithExtDimensions(r)
            | Self::CalculationRegisterScheduleData(r)
            | Self::CalculationRegisterActualActionPeriod(r) => &r.name,
            Self::CalculationRegisterRecalculation(r) => &r.name,
            Self::CalculationRegisterBaseRegister(r) => &r.name,
            Self::TabularSection(r) => &r.name,
        }
    }
}
