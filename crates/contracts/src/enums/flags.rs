use super::code_table::code_enum;

code_enum! {
    /// `visible` flag of an entity element
    pub enum Visibility {
        Visible => ("1", "Visible"),
        Hidden => ("0", "Oculto"),
    }
}

code_enum! {
    /// `editable` flag of an entity element
    pub enum Editability {
        Editable => ("1", "Editable"),
        ReadOnly => ("0", "Solo lectura"),
    }
}

code_enum! {
    /// `estadoImportacion` of a system entity
    pub enum ImportState {
        Disabled => ("0", "Deshabilitado"),
        Enabled => ("1", "Habilitado"),
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Visibility::Visible
    }
}

impl Default for Editability {
    fn default() -> Self {
        Editability::Editable
    }
}

impl Default for ImportState {
    fn default() -> Self {
        ImportState::Disabled
    }
}
