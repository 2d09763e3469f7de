use serde::{Deserialize, Serialize};

use crate::domain::common::serde_utils::null_as_default;
use crate::domain::common::{AuditTrail, Resource};
use crate::enums::ParameterStatus;

// ============================================================================
// Aggregate Root
// ============================================================================

/// Parámetro del sistema
///
/// `id_entidad_sistema` names the owning entity and cannot change after
/// creation: it exists on the create payload only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemParameter {
    pub id_parametro_sistema: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nombre_parametro_sistema: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub valor_parametro_sistema: String,
    #[serde(default)]
    pub id_grupo_parametro: Option<i64>,
    pub id_entidad_sistema: i64,
    pub indicador_estado: ParameterStatus,
    #[serde(flatten)]
    pub audit: AuditTrail,
    /// Sync-status marker maintained by the server
    #[serde(default, deserialize_with = "null_as_default")]
    pub estado_sincronizacion: String,
}

impl Resource for SystemParameter {
    type Create = CreateSystemParameterDto;
    type Update = UpdateSystemParameterDto;
    type Status = ParameterStatus;

    fn resource_index() -> &'static str {
        "a001"
    }

    fn path() -> &'static str {
        "parametros-sistema"
    }

    fn element_name() -> &'static str {
        "Parámetro"
    }

    fn list_name() -> &'static str {
        "Parámetros del Sistema"
    }

    fn id(&self) -> i64 {
        self.id_parametro_sistema
    }

    fn name(&self) -> &str {
        &self.nombre_parametro_sistema
    }

    fn status(&self) -> ParameterStatus {
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
pub struct CreateSystemParameterDto {
    pub nombre_parametro_sistema: String,
    pub valor_parametro_sistema: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_grupo_parametro: Option<i64>,
    pub id_entidad_sistema: i64,
    pub usuario_registro: String,
}

/// Partial update. `id_grupo_parametro: Some(None)` clears the group and is
/// sent as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSystemParameterDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre_parametro_sistema: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valor_parametro_sistema: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_grupo_parametro: Option<Option<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indicador_estado: Option<ParameterStatus>,
    pub usuario_modificacion: String,
}
