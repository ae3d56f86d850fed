//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Access guard
    #[error("Token não fornecido")]
    MissingToken,

    #[error("Token inválido")]
    InvalidToken,

    #[error("Token expirado")]
    ExpiredToken,

    /// Token was valid but its user no longer resolves
    #[error("Acesso não autorizado")]
    Unauthorized,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    // Resource errors
    #[error("{0}")]
    NotFound(&'static str),

    #[error("Usuário já existe")]
    DuplicateUser,

    #[error("{0}")]
    DuplicateRecord(&'static str),

    // Validation
    #[error("Dados inválidos: {}", .0.join(", "))]
    Validation(Vec<String>),

    // External service errors
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorBody {
    erro: String,
    codigo: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    detalhes: Vec<String>,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::MissingToken => "MISSING_TOKEN",
            AppError::InvalidToken => "INVALID_TOKEN",
            AppError::ExpiredToken => "EXPIRED_TOKEN",
            AppError::Unauthorized => "UNAUTHORIZED",
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::DuplicateUser => "DUPLICATE_USER",
            AppError::DuplicateRecord(_) => "DUPLICATE_RECORD",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Database(_) | AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingToken
            | AppError::InvalidToken
            | AppError::ExpiredToken
            | AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::Unauthorized => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DuplicateUser | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::DuplicateRecord(_) => StatusCode::CONFLICT,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            AppError::Validation(_) => "Dados inválidos".to_string(),

            // Hide details for internal errors
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "Erro interno do servidor".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Erro interno do servidor".to_string()
            }

            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.user_message();
        let code = self.code();
        let detalhes = match self {
            AppError::Validation(details) => details,
            _ => Vec::new(),
        };

        let body = ErrorBody {
            erro: message,
            codigo: code,
            detalhes,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, message: &'static str) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, message: &'static str) -> AppResult<T> {
        self.ok_or(AppError::NotFound(message))
    }
}

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(vec![msg.into()])
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
