use serde::{Deserialize, Serialize};

use super::serde_utils::null_as_default;

/// Audit fields carried by every persisted row.
///
/// Timestamps are kept as the server's ISO strings; the UI formats them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditTrail {
    #[serde(default, deserialize_with = "null_as_default")]
    pub usuario_registro: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fecha_registro: String,
    #[serde(default)]
    pub usuario_modificacion: Option<String>,
    #[serde(default)]
    pub fecha_modificacion: Option<String>,
}
