use contracts::domain::a004_entity_element::aggregate::EntityElement;
use contracts::enums::{CodeTable, Editability, Visibility};

use super::form::EntityElementForm;
use crate::shared::crud::form::LookupKind;
use crate::shared::crud::view::{audit_rows, Cell, CrudResource, Tone};

fn visible_cell(visible: Visibility) -> Cell {
    Cell::Badge {
        label: visible.label().to_string(),
        tone: match visible {
            Visibility::Visible => Tone::Primary,
            Visibility::Hidden => Tone::Neutral,
        },
    }
}

fn editable_cell(editable: Editability) -> Cell {
    Cell::Badge {
        label: editable.label().to_string(),
        tone: match editable {
            Editability::Editable => Tone::Primary,
            Editability::ReadOnly => Tone::Neutral,
        },
    }
}

impl CrudResource for EntityElement {
    type Form = EntityElementForm;

    fn page_id() -> &'static str {
        "a004_entity_element--list"
    }

    fn columns() -> Vec<&'static str> {
        vec!["ID", "Entidad", "Nombre", "Visible", "Editable", "Estado"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(self.id.to_string()),
            Cell::text(self.entity_label()),
            Cell::Strong(self.nombre_elemento.clone()),
            visible_cell(self.visible),
            editable_cell(self.editable),
            Cell::status(self.indicador_estado),
        ]
    }

    fn detail_rows(&self) -> Vec<(&'static str, Cell)> {
        let mut rows = vec![
            ("ID", Cell::text(self.id.to_string())),
            ("Entidad", Cell::text(self.entity_label())),
            ("ID Entidad", Cell::text(self.id_entidad.to_string())),
            ("Nombre", Cell::Strong(self.nombre_elemento.clone())),
            ("Visible", visible_cell(self.visible)),
            ("Editable", editable_cell(self.editable)),
            ("Estado", Cell::status(self.indicador_estado)),
        ];
        rows.extend(audit_rows(self));
        rows
    }

    fn lookups() -> Vec<LookupKind> {
        vec![LookupKind::Entities]
    }
}
