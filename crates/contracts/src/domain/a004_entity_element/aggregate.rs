use serde::{Deserialize, Serialize};

use crate::domain::a003_system_entity::aggregate::SystemEntity;
use crate::domain::common::serde_utils::null_as_default;
use crate::domain::common::{AuditTrail, Resource};
use crate::enums::{Editability, RecordStatus, Visibility};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Elemento de una entidad del sistema
///
/// `entidad` is a read-only copy of the owning entity that the server fills
/// in when listing with `?relations=true`; ownership is `id_entidad`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityElement {
    pub id: i64,
    pub id_entidad: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nombre_elemento: String,
    pub visible: Visibility,
    pub editable: Editability,
    pub indicador_estado: RecordStatus,
    #[serde(flatten)]
    pub audit: AuditTrail,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entidad: Option<Box<SystemEntity>>,
}

impl EntityElement {
    /// Name of the owning entity, or its id when the relation was not embedded
    pub fn entity_label(&self) -> String {
        match &self.entidad {
            Some(entity) => entity.nombre_entidad_sistema.clone(),
            None => format!("#{}", self.id_entidad),
        }
    }
}

impl Resource for EntityElement {
    type Create = CreateEntityElementDto;
    type Update = UpdateEntityElementDto;
    type Status = RecordStatus;

    fn resource_index() -> &'static str {
        "a004"
    }

    fn path() -> &'static str {
        "elemento-entidad"
    }

    fn element_name() -> &'static str {
        "Elemento"
    }

    fn list_name() -> &'static str {
        "Elementos de Entidad"
    }

    fn embed_param() -> Option<&'static str> {
        Some("relations")
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.nombre_elemento
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEntityElementDto {
    pub id_entidad: i64,
    pub nombre_elemento: String,
    pub visible: Visibility,
    pub editable: Editability,
    pub usuario_registro: String,
}

/// Partial update. The owning entity is not part of it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEntityElementDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre_elemento: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<Visibility>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editable: Option<Editability>,
    pub usuario_modificacion: String,
}
