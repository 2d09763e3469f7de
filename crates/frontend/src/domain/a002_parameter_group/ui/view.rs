use contracts::domain::a002_parameter_group::aggregate::ParameterGroup;
use contracts::enums::{CodeTable, RecordStatus};

use super::form::ParameterGroupForm;
use crate::shared::crud::view::{audit_rows, Cell, CrudResource, Tone};

/// Groups show a disabled row as deleted
fn group_status(status: RecordStatus) -> Cell {
    match status {
        RecordStatus::Active => Cell::status(status),
        RecordStatus::Disabled => Cell::Badge {
            label: "Eliminado".to_string(),
            tone: Tone::Error,
        },
    }
}

impl CrudResource for ParameterGroup {
    type Form = ParameterGroupForm;

    fn page_id() -> &'static str {
        "a002_parameter_group--list"
    }

    fn columns() -> Vec<&'static str> {
        vec!["ID", "Nombre", "Estado", "Usuario Registro", "Fecha Registro"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(self.id_grupo_parametro.to_string()),
            Cell::Strong(self.nombre_grupo_parametro.clone()),
            group_status(self.indicador_estado),
            Cell::optional(Some(&self.audit.usuario_registro)),
            Cell::datetime(Some(&self.audit.fecha_registro)),
        ]
    }

    fn detail_rows(&self) -> Vec<(&'static str, Cell)> {
        let mut rows = vec![
            ("ID", Cell::text(self.id_grupo_parametro.to_string())),
            ("Nombre", Cell::Strong(self.nombre_grupo_parametro.clone())),
            ("Estado", group_status(self.indicador_estado)),
        ];
        rows.extend(audit_rows(self));
        rows
    }

    fn disable_summary(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ID", self.id_grupo_parametro.to_string()),
            ("Nombre", self.nombre_grupo_parametro.clone()),
            ("Estado", self.indicador_estado.label().to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::group_json;

    #[test]
    fn test_disabled_group_reads_deleted() {
        let group: ParameterGroup = serde_json::from_value(group_json(4, "Compras", "E")).unwrap();
        assert_eq!(group.cells()[2].plain(), "Eliminado");
        assert!(!group.can_disable());
    }

    #[test]
    fn test_detail_has_no_child_section() {
        let group: ParameterGroup = serde_json::from_value(group_json(3, "Ventas", "A")).unwrap();
        assert!(group.detail_children().is_none());
    }

    #[test]
    fn test_row_cells() {
        let group: ParameterGroup = serde_json::from_value(group_json(3, "Ventas", "A")).unwrap();
        let cells: Vec<String> = group.cells().iter().map(Cell::plain).collect();
        assert_eq!(
            cells,
            vec!["3", "Ventas", "Activo", "admin", "15/03/2024 14:02"]
        );
    }
}
