use super::code_table::code_enum;
use super::CodeTable;

/// Status flag of a record that can be soft-disabled.
///
/// Anything but the active code is read as inactive, so a row carrying a
/// foreign code still loads.
pub trait StatusFlag: CodeTable + serde::Serialize + Send + Sync {
    /// Code written by the disable/toggle-status operation
    const INACTIVE: Self;

    fn is_active(self) -> bool;
}

code_enum! {
    /// `indicadorEstado` of groups, entities and elements
    pub enum RecordStatus {
        Active => ("A", "Activo"),
        Disabled => ("E", "Inactivo"),
    }
    unknown => Disabled;
}

impl StatusFlag for RecordStatus {
    const INACTIVE: Self = RecordStatus::Disabled;

    fn is_active(self) -> bool {
        self == RecordStatus::Active
    }
}

code_enum! {
    /// `indicadorEstado` of system parameters
    pub enum ParameterStatus {
        Active => ("A", "Activo"),
        Inactive => ("I", "Inactivo"),
    }
    unknown => Inactive;
}

impl StatusFlag for ParameterStatus {
    const INACTIVE: Self = ParameterStatus::Inactive;

    fn is_active(self) -> bool {
        self == ParameterStatus::Active
    }
}
