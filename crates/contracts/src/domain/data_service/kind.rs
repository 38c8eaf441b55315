use serde::de::value::{Error as ValueError, StrDeserializer};
use serde::de::IntoDeserializer;
use serde::{Deserialize, Serialize};

/// Shape family of an entity kind: which attributes travel with it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityFamily {
    /// Name only; children are attached later
    Simple,
    /// Name + register fields
    Slice,
    /// Name + dimensions + resources
    DimensionResource,
    /// Name + properties + resources
    PropertyResource,
    /// Name + virtual table fields
    VirtualTable,
    /// Name + recalculation name + virtual table fields
    Recalculation,
    /// Name + base register name + virtual table fields
    BaseRegister,
    /// Parent + name
    TabularSection,
}

/// Tag of a data-service entity.
///
/// The tag is what tells two structurally identical flat records apart
/// (a `Catalog` and a `Document` both carry just a name).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Constant,
    Catalog,
    Document,
    DocumentJournal,
    ChartOfCharacteristicTypes,
    ChartOfAccounts,
    ChartOfCalculationTypes,
    InformationRegister,
    AccumulationRegister,
    AccountingRegister,
    CalculationRegister,
    ExchangePlan,
    BusinessProcess,
    Task,
    InformationRegisterSliceLast,
    InformationRegisterSliceFirst,
    AccumulationRegisterBalance,
    AccumulationRegisterTurnovers,
    AccumulationRegisterBalanceAndTurnovers,
    AccountingRegisterBalance,
    AccountingRegisterTurnovers,
    AccountingRegisterBalanceAndTurnovers,
    AccountingRegisterDrCrTurnovers,
    AccountingRegisterExtDimensions,
    AccountingRegisterRecordsWithExtDimensions,
    CalculationRegisterScheduleData,
    CalculationRegisterActualActionPeriod,
    CalculationRegisterRecalculation,
    CalculationRegisterBaseRegister,
    TabularSection,
}

impl EntityKind {
    /// Discriminator written into the flat form
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Constant => "Constant",
            Self::Catalog => "Catalog",
            Self::Document => "Document",
            Self::DocumentJournal => "DocumentJournal",
            Self::ChartOfCharacteristicTypes => "ChartOfCharacteristicTypes",
            Self::ChartOfAccounts => "ChartOfAccounts",
            Self::ChartOfCalculationTypes => "ChartOfCalculationTypes",
            Self::InformationRegister => "InformationRegister",
            Self::AccumulationRegister => "AccumulationRegister",
            Self::AccountingRegister => "AccountingRegister",
            Self::CalculationRegister => "CalculationRegister",
            Self::ExchangePlan => "ExchangePlan",
            Self::BusinessProcess => "BusinessProcess",
            Self::Task => "Task",
            Self::InformationRegisterSliceLast => "InformationRegisterSliceLast",
            Self::InformationRegisterSliceFirst => "InformationRegisterSliceFirst",
            Self::AccumulationRegisterBalance => "AccumulationRegisterBalance",
            Self::AccumulationRegisterTurnovers => "AccumulationRegisterTurnovers",
            Self::AccumulationRegisterBalanceAndTurnovers => {
                "AccumulationRegisterBalanceAndTurnovers"
            }
            Self::AccountingRegisterBalance => "AccountingRegisterBalance",
            Self::AccountingRegisterTurnovers => "AccountingRegisterTurnovers",
            Self::AccountingRegisterBalanceAndTurnovers => "AccountingRegisterBalanceAndTurnovers",
            Self::AccountingRegisterDrCrTurnovers => "AccountingRegisterDrCrTurnovers",
            Self::AccountingRegisterExtDimensions => "AccountingRegisterExtDimensions",
            Self::AccountingRegisterRecordsWithExtDimensions => {
                "AccountingRegisterRecordsWithExtDimensions"
            }
            Self::CalculationRegisterScheduleData => "CalculationRegisterScheduleData",
            Self::CalculationRegisterActualActionPeriod => "CalculationRegisterActualActionPeriod",
            Self::CalculationRegisterRecalculation => "CalculationRegisterRecalculation",
            Self::CalculationRegisterBaseRegister => "CalculationRegisterBaseRegister",
            Self::TabularSection => "TabularSection",
        }
    }

    /// Kind named by a flat-form tag. Resolved through the derived
    /// `Deserialize`, so every variant is accepted without a lookup table.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let de: StrDeserializer<'_, ValueError> = tag.into_deserializer();
        Self::deserialize(de).ok()
    }

    pub fn family(&self) -> EntityFamily {
        match self {
            Self::Constant
            | Self::Catalog
            | Self::Document
            | Self::DocumentJournal
            | Self::ChartOfCharacteristicTypes
            | Self::ChartOfAccounts
            | Self::ChartOfCalculationTypes
            | Self::InformationRegister
            | Self::AccumulationRegister
            | Self::AccountingRegister
            | Self::CalculationRegister
            | Self::ExchangePlan
            | Self::BusinessProcess
            | Self::Task => EntityFamily::Simple,
            Self::InformationRegisterSliceLast | Self::InformationRegisterSliceFirst => {
                EntityFamily::Slice
            }
            Self::AccumulationRegisterBalance
            | Self::AccumulationRegisterTurnovers
            | Self::AccumulationRegisterBalanceAndTurnovers => EntityFamily::DimensionResource,
            Self::AccountingRegisterBalance
            | Self::AccountingRegisterTurnovers
            | Self::AccountingRegisterBalanceAndTurnovers
            | Self::AccountingRegisterDrCrTurnovers => EntityFamily::PropertyResource,
            Self::AccountingRegisterExtDimensions
            | Self::AccountingRegisterRecordsWithExtDimensions
            | Self::CalculationRegisterScheduleData
            | Self::CalculationRegisterActualActionPeriod => EntityFamily::VirtualTable,
            Self::CalculationRegisterRecalculation => EntityFamily::Recalculation,
            Self::CalculationRegisterBaseRegister => EntityFamily::BaseRegister,
            Self::TabularSection => EntityFamily::TabularSection,
        }
    }

    /// Prefix of the OData collection name (`Catalog_Номенклатура`).
    /// Tabular sections have none: they hang off their parent's name.
    pub fn resource_prefix(&self) -> Option<&'static str> {
        match self {
            Self::Constant => Some("Constant"),
            Self::Catalog => Some("Catalog"),
            Self::Document => Some("Document"),
            Self::DocumentJournal => Some("DocumentJournal"),
            Self::ChartOfCharacteristicTypes => Some("ChartOfCharacteristicTypes"),
            Self::ChartOfAccounts => Some("ChartOfAccounts"),
            Self::ChartOfCalculationTypes => Some("ChartOfCalculationTypes"),
            Self::InformationRegister
            | Self::InformationRegisterSliceLast
            | Self::InformationRegisterSliceFirst => Some("InformationRegister"),
            Self::AccumulationRegister
            | Self::AccumulationRegisterBalance
            | Self::AccumulationRegisterTurnovers
            | Self::AccumulationRegisterBalanceAndTurnovers => Some("AccumulationRegister"),
            Self::AccountingRegister
            | Self::AccountingRegisterBalance
            | Self::AccountingRegisterTurnovers
            | Self::AccountingRegisterBalanceAndTurnovers
            | Self::AccountingRegisterDrCrTurnovers
            | Self::AccountingRegisterExtDimensions
            | Self::AccountingRegisterRecordsWithExtDimensions => Some("AccountingRegister"),
            Self::CalculationRegister
            | Self::CalculationRegisterScheduleData
            | Self::CalculationRegisterActualActionPeriod
            | Self::CalculationRegisterRecalculation
            | Self::CalculationRegisterBaseRegister => Some("CalculationRegister"),
            Self::ExchangePlan => Some("ExchangePlan"),
            Self::BusinessProcess => Some("BusinessProcess"),
            Self::Task => Some("Task"),
            Self::TabularSection => None,
        }
    }

    /// Fixed suffix of a virtual table collection (`..._SliceLast`)
    pub fn resource_suffix(&self) -> Option<&'static str> {
        match self {
            Self::InformationRegisterSliceLast => Some("SliceLast"),
            Self::InformationRegisterSliceFirst => Some("SliceFirst"),
            Self::AccumulationRegisterBalance | Self::AccountingRegisterBalance => Some("Balance"),
            Self::AccumulationRegisterTurnovers | Self::AccountingRegisterTurnovers => {
                Some("Turnovers")
            }
            Self::AccumulationRegisterBalanceAndTurnovers
            | Self::AccountingRegisterBalanceAndTurnovers => Some("BalanceAndTurnovers"),
            Self::AccountingRegisterDrCrTurnovers => Some("DrCrTurnovers"),
            Self::AccountingRegisterExtDimensions => Some("ExtDimensions"),
            Self::AccountingRegisterRecordsWithExtDimensions => Some("RecordsWithExtDimensions"),
            Self::CalculationRegisterScheduleData => Some("ScheduleData"),
            Self::CalculationRegisterActualActionPeriod => Some("ActualActionPeriod"),
            _ => None,
        }
    }

    /// Every kind, in declaration order
    pub fn all() -> &'static [EntityKind] {
        &[
            EntityKind::Constant,
            EntityKind::Catalog,
            EntityKind::Document,
            EntityKind::DocumentJournal,
            EntityKind::ChartOfCharacteristicTypes,
            EntityKind::ChartOfAccounts,
            EntityKind::ChartOfCalculationTypes,
            EntityKind::InformationRegister,
            EntityKind::AccumulationRegister,
            EntityKind::AccountingRegister,
            EntityKind::CalculationRegister,
            EntityKind::ExchangePlan,
            EntityKind::BusinessProcess,
            EntityKind::Task,
            EntityKind::InformationRegisterSliceLast,
            EntityKind::InformationRegisterSliceFirst,
            EntityKind::AccumulationRegisterBalance,
            EntityKind::AccumulationRegisterTurnovers,
            EntityKind::AccumulationRegisterBalanceAndTurnovers,
            EntityKind::AccountingRegisterBalance,
            EntityKind::AccountingRegisterTurnovers,
            EntityKind::AccountingRegisterBalanceAndTurnovers,
            EntityKind::AccountingRegisterDrCrTurnovers,
            EntityKind::AccountingRegisterExtDimensions,
            EntityKind::AccountingRegisterRecordsWithExtDimensions,
            EntityKind::CalculationRegisterScheduleData,
            EntityKind::CalculationRegisterActualActionPeriod,
            EntityKind::CalculationRegisterRecalculation,
            EntityKind::CalculationRegisterBaseRegister,
            EntityKind::TabularSection,
        ]
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
