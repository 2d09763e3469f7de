use contracts::domain::a001_system_parameter::aggregate::SystemParameter;

use super::form::SystemParameterForm;
use crate::shared::crud::form::LookupKind;
use crate::shared::crud::view::{audit_rows, Cell, CrudResource};

fn group_cell(id: Option<i64>) -> Cell {
    match id {
        Some(id) => Cell::text(id.to_string()),
        None => Cell::text("Sin grupo"),
    }
}

impl CrudResource for SystemParameter {
    type Form = SystemParameterForm;

    fn page_id() -> &'static str {
        "a001_system_parameter--list"
    }

    fn columns() -> Vec<&'static str> {
        vec!["ID", "Nombre", "Valor", "Grupo", "Entidad", "Estado", "Sincronización"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(self.id_parametro_sistema.to_string()),
            Cell::Strong(self.nombre_parametro_sistema.clone()),
            Cell::text(self.valor_parametro_sistema.clone()),
            group_cell(self.id_grupo_parametro),
            Cell::text(self.id_entidad_sistema.to_string()),
            Cell::status(self.indicador_estado),
            Cell::optional(Some(&self.estado_sincronizacion)),
        ]
    }

    fn detail_rows(&self) -> Vec<(&'static str, Cell)> {
        let mut rows = vec![
            ("ID", Cell::text(self.id_parametro_sistema.to_string())),
            ("Nombre", Cell::Strong(self.nombre_parametro_sistema.clone())),
            ("Valor", Cell::text(self.valor_parametro_sistema.clone())),
            ("Grupo de Parámetro", group_cell(self.id_grupo_parametro)),
            ("ID Entidad Sistema", Cell::text(self.id_entidad_sistema.to_string())),
            ("Estado", Cell::status(self.indicador_estado)),
            (
                "Estado de Sincronización",
                Cell::optional(Some(&self.estado_sincronizacion)),
            ),
        ];
        rows.extend(audit_rows(self));
        rows
    }

    fn lookups() -> Vec<LookupKind> {
        vec![LookupKind::ParameterGroups]
    }
}
