//! Errors of the admin REST API as seen by the pages.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// No tenant identifier stored; nothing was sent.
    #[error("No se encontró el RUC. Inicie sesión nuevamente.")]
    MissingTenant,

    /// HTTP 400 concerning the tenant identifier.
    #[error("{message}")]
    InvalidTenant { message: String },

    /// HTTP 404
    #[error("Registro no encontrado")]
    NotFound,

    #[error("{}", .message.as_deref().unwrap_or("Error en la solicitud"))]
    RequestFailed { status: u16, message: Option<String> },

    #[error("Error de conexión: {0}")]
    Transport(String),

    #[error("Respuesta inesperada del servidor: {0}")]
    Decode(String),
}

/// Fallback message for a tenant rejection without a body
pub const INVALID_TENANT_MESSAGE: &str = "RUC no válido";

/// Error body of the API (`{ "message": "..." }` or a list of messages)
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<MessageField>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MessageField {
    One(String),
    Many(Vec<String>),
}

/// Server-supplied message of an error body, if any
pub fn server_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    let message = match parsed.message? {
        MessageField::One(text) => text,
        MessageField::Many(list) => list.join(", "),
    };
    let message = message.trim().to_string();
    (!message.is_empty()).then_some(message)
}

fn mentions_tenant(message: &str) -> bool {
    let lower = message.to_lowercase();
    lower.contains("ruc") || lower.contains("tenant") || lower.contains("válido")
}

/// Map a non-2xx response to the error the pages react to
pub fn translate_status(status: u16, body: &str) -> ApiError {
    let message = server_message(body);
    match status {
        400 => match message {
            None => ApiError::InvalidTenant {
                message: INVALID_TENANT_MESSAGE.to_string(),
            },
            Some(message) if mentions_tenant(&message) => ApiError::InvalidTenant { message },
            Some(message) => ApiError::RequestFailed {
                status,
                message: Some(message),
            },
        },
        404 => ApiError::NotFound,
        _ => ApiError::RequestFailed { status, message },
    }
}

impl ApiError {
    /// Text for the blocking notification, `fallback` when the server said nothing
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::RequestFailed { message: None, .. } => fallback.to_string(),
            ApiError::Transport(_) | ApiError::Decode(_) => fallback.to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_without_message_is_invalid_tenant() {
        assert_eq!(
            translate_status(400, ""),
            ApiError::InvalidTenant {
                message: "RUC no válido".to_string()
            }
        );
    }

    #[test]
    fn test_bad_request_about_tenant() {
        let err = translate_status(400, r#"{"message":"El RUC 123 no es válido"}"#);
        assert_eq!(
            err,
            ApiError::InvalidTenant {
                message: "El RUC 123 no es válido".to_string()
            }
        );
    }

    #[test]
    fn test_bad_request_validation_list_is_request_failed() {
        let err = translate_status(
            400,
            r#"{"message":["nombreElemento should not be empty","visible must be a string"],"statusCode":400}"#,
        );
        assert_eq!(
            err,
            ApiError::RequestFailed {
                status: 400,
                message: Some(
                    "nombreElemento should not be empty, visible must be a string".to_string()
                ),
            }
        );
    }

    #[test]
    fn test_not_found_and_others() {
        assert_eq!(translate_status(404, "{}"), ApiError::NotFound);
        assert_eq!(
            translate_status(500, r#"{"message":"boom"}"#),
            ApiError::RequestFailed {
                status: 500,
                message: Some("boom".to_string())
            }
        );
        assert_eq!(
            translate_status(502, "<html>"),
            ApiError::RequestFailed {
                status: 502,
                message: None
            }
        );
    }

    #[test]
    fn test_user_message_fallback() {
        let err = ApiError::RequestFailed {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message("Error al guardar"), "Error al guardar");
        assert_eq!(
            ApiError::Transport("offline".into()).user_message("Error al guardar"),
            "Error al guardar"
        );
        assert_eq!(ApiError::NotFound.user_message("x"), "Registro no encontrado");
    }
}
