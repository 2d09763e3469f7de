use contracts::domain::a003_system_entity::aggregate::SystemEntity;
use contracts::domain::a004_entity_element::aggregate::EntityElement;
use contracts::domain::common::Resource;
use contracts::enums::{CodeTable, Editability, ImportState, StatusFlag, Visibility};

use super::form::SystemEntityForm;
use crate::shared::crud::view::{audit_rows, Cell, ChildCard, CrudResource, Tone};

fn elements_badge(count: usize) -> Cell {
    Cell::Badge {
        label: count.to_string(),
        tone: if count > 0 { Tone::Primary } else { Tone::Neutral },
    }
}

fn status_badge<S: StatusFlag>(status: S) -> (String, Tone) {
    let tone = if status.is_active() {
        Tone::Success
    } else {
        Tone::Error
    };
    (status.label().to_string(), tone)
}

fn element_card(element: &EntityElement) -> ChildCard {
    let visible = match element.visible {
        Visibility::Visible => Tone::Primary,
        Visibility::Hidden => Tone::Neutral,
    };
    let editable = match element.editable {
        Editability::Editable => Tone::Primary,
        Editability::ReadOnly => Tone::Neutral,
    };
    ChildCard {
        id: element.id,
        title: element.nombre_elemento.clone(),
        badges: vec![
            (element.visible.label().to_string(), visible),
            (element.editable.label().to_string(), editable),
            status_badge(element.indicador_estado),
        ],
    }
}

impl CrudResource for SystemEntity {
    type Form = SystemEntityForm;

    fn page_id() -> &'static str {
        "a003_system_entity--list"
    }

    fn columns() -> Vec<&'static str> {
        vec![
            "ID",
            "Nombre",
            "Módulo",
            "Elementos",
            "Sincronización",
            "Estado",
            "Usuario Registro",
        ]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(self.id_entidad_sistema.to_string()),
            Cell::Strong(self.nombre_entidad_sistema.clone()),
            Cell::text(self.id_modulo_sistema.to_string()),
            elements_badge(self.element_count()),
            Cell::Lines(vec![
                format!(
                    "Pendientes: {}",
                    self.numero_registros_pendientes_sincronizacion
                ),
                format!("Modo: {}", self.modo_sincronizacion.label()),
            ]),
            Cell::status(self.indicador_estado),
            Cell::optional(Some(&self.audit.usuario_registro)),
        ]
    }

    fn detail_rows(&self) -> Vec<(&'static str, Cell)> {
        let import_tone = match self.estado_importacion {
            ImportState::Enabled => Tone::Primary,
            ImportState::Disabled => Tone::Neutral,
        };
        let mut rows = vec![
            ("ID", Cell::text(self.id_entidad_sistema.to_string())),
            ("Nombre", Cell::Strong(self.nombre_entidad_sistema.clone())),
            ("Módulo Sistema", Cell::text(self.id_modulo_sistema.to_string())),
            ("Estado", Cell::status(self.indicador_estado)),
            (
                "Modo Sincronización",
                Cell::Badge {
                    label: self.modo_sincronizacion.label().to_string(),
                    tone: Tone::Neutral,
                },
            ),
            (
                "Filas por Página",
                Cell::text(self.numero_filas_por_pagina.to_string()),
            ),
            (
                "Estado Importación",
                Cell::Badge {
                    label: self.estado_importacion.label().to_string(),
                    tone: import_tone,
                },
            ),
            (
                "Plantilla de Importación",
                Cell::optional(self.nombre_plantilla_importacion.as_deref()),
            ),
            (
                "Registros Pendientes (Iteración)",
                Cell::text(self.numero_registros_pendientes_iteracion.to_string()),
            ),
            (
                "Registros Pendientes (Sincronización)",
                Cell::text(self.numero_registros_pendientes_sincronizacion.to_string()),
            ),
            (
                "Última Descarga",
                Cell::datetime(self.ultima_fecha_descarga.as_deref()),
            ),
            (
                "Última Subida",
                Cell::datetime(self.ultima_fecha_subida.as_deref()),
            ),
            ("Elementos", elements_badge(self.element_count())),
        ];
        rows.extend(audit_rows(self));
        rows
    }

    fn disable_summary(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ID", self.id().to_string()),
            ("Nombre", self.name().to_string()),
            ("Módulo Sistema", self.id_modulo_sistema.to_string()),
            ("Elementos Asociados", self.element_count().to_string()),
            ("Estado", self.indicador_estado.label().to_string()),
        ]
    }

    fn disable_warning(&self) -> Option<String> {
        let count = self.element_count();
        (count > 0).then(|| {
            format!(
                "Esta entidad tiene {} elemento(s) asociado(s). Al deshabilitarla, podrían verse afectados.",
                count
            )
        })
    }

    fn expandable() -> bool {
        true
    }

    fn children(&self) -> Vec<ChildCard> {
        self.elementos.iter().map(element_card).collect()
    }
}
