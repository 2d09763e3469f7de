use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::enums::StatusFlag;

/// Operations a resource page offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub creatable: bool,
    pub editable: bool,
    pub disableable: bool,
}

impl Capabilities {
    pub const ALL: Capabilities = Capabilities {
        creatable: true,
        editable: true,
        disableable: true,
    };
}

/// Body of the toggle-status endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChange<S> {
    pub indicador_estado: S,
    pub usuario_modificacion: String,
}

/// A REST collection of the admin API.
///
/// Describes the wire side of a resource: where it lives, what the create
/// and update payloads look like and how it is soft-disabled.
pub trait Resource:
    Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Payload of `POST /{path}`. Never carries a status.
    type Create: Serialize + Debug + Send + Sync;

    /// Payload of `PATCH /{path}/{id}`. Only changed fields plus the
    /// modifying user.
    type Update: Serialize + Debug + Send + Sync;

    /// Status code of the `indicadorEstado` field
    type Status: StatusFlag;

    // ============================================================================
    // Static metadata
    // ============================================================================

    /// Index in the system (e.g. "a001")
    fn resource_index() -> &'static str;

    /// Collection segment of the REST path (e.g. "grupo-parametro")
    fn path() -> &'static str;

    /// UI name of one record (e.g. "Grupo de parámetro")
    fn element_name() -> &'static str;

    /// UI name of the collection (e.g. "Grupos de Parámetros")
    fn list_name() -> &'static str;

    /// Whether `element_name` takes feminine agreement in messages
    fn feminine() -> bool {
        false
    }

    fn capabilities() -> Capabilities {
        Capabilities::ALL
    }

    /// Query flag asking the list endpoint to embed related rows
    fn embed_param() -> Option<&'static str> {
        None
    }

    // ============================================================================
    // Record accessors
    // ============================================================================

    fn id(&self) -> i64;

    fn name(&self) -> &str;

    fn status(&self) -> Self::Status;

    fn audit(&self) -> &super::AuditTrail;

    /// Payload that soft-disables the record
    fn disable_payload(usuario_modificacion: String) -> StatusChange<Self::Status> {
        StatusChange {
            indicador_estado: Self::Status::INACTIVE,
            usuario_modificacion,
        }
    }

    /// Full system name (e.g. "a001_parametros-sistema")
    fn full_name() -> String {
        format!("{}_{}", Self::resource_index(), Self::path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_system_parameter::aggregate::SystemParameter;
    use crate::domain::a004_entity_element::aggregate::EntityElement;

    #[test]
    fn test_resources_offer_every_action() {
        assert_eq!(SystemParameter::capabilities(), Capabilities::ALL);
        assert_eq!(
            EntityElement::capabilities(),
            Capabilities {
                creatable: true,
                editable: true,
                disableable: true,
            }
        );
    }
}
