use serde::{Deserialize, Serialize};

use crate::domain::common::serde_utils::null_as_default;
use crate::domain::common::{AuditTrail, Resource};
use crate::enums::RecordStatus;

// ============================================================================
// Aggregate Root
// ============================================================================

/// Grupo de parámetros (lookup used to classify system parameters)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterGroup {
    pub id_grupo_parametro: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nombre_grupo_parametro: String,
    pub indicador_estado: RecordStatus,
    #[serde(flatten)]
    pub audit: AuditTrail,
}

impl Resource for ParameterGroup {
    type Create = CreateParameterGroupDto;
    type Update = UpdateParameterGroupDto;
    type Status = RecordStatus;

    fn resource_index() -> &'static str {
        "a002"
    }

    fn path() -> &'static str {
        "grupo-parametro"
    }

    fn element_name() -> &'static str {
        "Grupo de parámetro"
    }

    fn list_name() -> &'static str {
        "Grupos de Parámetros del Sistema"
    }

    fn id(&self) -> i64 {
        self.id_grupo_parametro
    }

    fn name(&self) -> &str {
        &self.nombre_grupo_parametro
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
pub struct CreateParameterGroupDto {
    pub nombre_grupo_parametro: String,
    pub usuario_registro: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateParameterGroupDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre_grupo_parametro: Option<String>,
    pub usuario_modificacion: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_group() {
        let group: ParameterGroup = serde_json::from_value(json!({
            "idGrupoParametro": 3,
            "nombreGrupoParametro": "GENERAL",
            "indicadorEstado": "A",
            "usuarioRegistro": "admin",
            "fechaRegistro": "2024-03-15T14:02:26.123Z",
            "usuarioModificacion": null,
            "fechaModificacion": null
        }))
        .unwrap();

        assert_eq!(group.id(), 3);
        assert_eq!(group.name(), "GENERAL");
        assert_eq!(group.status(), RecordStatus::Active);
        assert_eq!(group.audit.usuario_registro, "admin");
        assert!(group.audit.usuario_modificacion.is_none());
    }

    #[test]
    fn test_disable_payload_shape() {
        let payload = ParameterGroup::disable_payload("admin".to_string());
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({ "indicadorEstado": "E", "usuarioModificacion": "admin" })
        );
    }

    #[test]
    fn test_update_skips_unchanged_name() {
        let dto = UpdateParameterGroupDto {
            nombre_grupo_parametro: None,
            usuario_modificacion: "jdoe".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({ "usuarioModificacion": "jdoe" })
        );
    }
}
