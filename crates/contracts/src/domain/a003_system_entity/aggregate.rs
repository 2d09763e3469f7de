use serde::{Deserialize, Serialize};

use crate::domain::a004_entity_element::aggregate::EntityElement;
use crate::domain::common::serde_utils::null_as_default;
use crate::domain::common::{AuditTrail, Resource};
use crate::enums::{ImportState, RecordStatus, SyncMode};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Entidad del sistema. Owns its elements (one-to-many).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemEntity {
    pub id_entidad_sistema: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nombre_entidad_sistema: String,
    pub indicador_estado: RecordStatus,
    pub id_modulo_sistema: i64,
    #[serde(flatten)]
    pub audit: AuditTrail,
    #[serde(default)]
    pub ultima_fecha_descarga: Option<String>,
    #[serde(default)]
    pub ultima_fecha_subida: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub numero_registros_pendientes_iteracion: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub numero_registros_pendientes_sincronizacion: i64,
    #[serde(default)]
    pub modo_sincronizacion: SyncMode,
    #[serde(default, deserialize_with = "null_as_default")]
    pub numero_filas_por_pagina: i64,
    #[serde(default)]
    pub estado_importacion: ImportState,
    #[serde(default)]
    pub nombre_plantilla_importacion: Option<String>,
    /// Present when the list is requested with `?elements=true`
    #[serde(default, deserialize_with = "null_as_default")]
    pub elementos: Vec<EntityElement>,
}

impl SystemEntity {
    pub fn element_count(&self) -> usize {
        self.elementos.len()
    }
}

impl Resource for SystemEntity {
    type Create = CreateSystemEntityDto;
    type Update = UpdateSystemEntityDto;
    type Status = RecordStatus;

    fn resource_index() -> &'static str {
        "a003"
    }

    fn path() -> &'static str {
        "entidad-sistema"
    }

    fn element_name() -> &'static str {
        "Entidad"
    }

    fn list_name() -> &'static str {
        "Entidades del Sistema"
    }

    fn feminine() -> bool {
        true
    }

    fn embed_param() -> Option<&'static str> {
        Some("elements")
    }

    fn id(&self) -> i64 {
        self.id_entidad_sistema
    }

    fn name(&self) -> &str {
        &self.nombre_entidad_sistema
    }

    fn status(&self) -> RecordStatus {
        self.indicador_estado
    }

    fn audit(&self) -> &AuditTrail {
        &self.audit
    }
}

// ============================================================================
// DTOs
// ============================================================================

/// Create payload. The server assigns the id, status `A` and the pending
/// counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSystemEntityDto {
    pub nombre_entidad_sistema: String,
    pub id_modulo_sistema: i64,
    pub usuario_registro: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modo_sincronizacion: Option<SyncMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numero_filas_por_pagina: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estado_importacion: Option<ImportState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre_plantilla_importacion: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSystemEntityDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre_entidad_sistema: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indicador_estado: Option<RecordStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_modulo_sistema: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modo_sincronizacion: Option<SyncMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numero_filas_por_pagina: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estado_importacion: Option<ImportState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre_plantilla_importacion: Option<String>,
    pub usuario_modificacion: String,
}
