use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// A single failed input constraint, keyed by the offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Submission failed")]
    Submission,
    #[error("Validation failed")]
    Validation(Vec<FieldError>),
    #[error("Authentication failed")]
    AuthError,
    #[error("Access denied")]
    Forbidden,
    #[error("Not found")]
    NotFound,
    #[error("Internal server error")]
    Internal,
}

pub type Result<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::Database(e) => {
                tracing::error!(error = %e, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": "Erro interno do servidor" }))
            }
            Self::Submission => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Erro ao enviar mensagem. Tente novamente mais tarde." }),
            ),
            Self::Validation(errors) => {
                tracing::debug!(count = errors.len(), "Validation failed");
                let fields: serde_json::Map<String, serde_json::Value> =
                    errors.iter().map(|e| (e.field.to_string(), json!(e.message))).collect();
                (StatusCode::UNPROCESSABLE_ENTITY, json!({ "error": "Dados inválidos", "fields": fields }))
            }
            Self::AuthError => {
                tracing::debug!("Authentication failed");
                (StatusCode::UNAUTHORIZED, json!({ "error": "Não autenticado" }))
            }
            Self::Forbidden => {
                tracing::debug!("Access denied");
                (StatusCode::FORBIDDEN, json!({ "error": "Acesso negado" }))
            }
            Self::NotFound => {
                tracing::debug!("Resource not found");
                (StatusCode::NOT_FOUND, json!({ "error": "Não encontrado" }))
            }
            Self::Internal => {
                tracing::error!("Internal server error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": "Erro interno do servidor" }))
            }
        };

        (status, Json(body)).into_response()
    }
}
