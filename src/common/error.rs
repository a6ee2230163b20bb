use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::middleware::i18n::Locale;

// Erros de domínio. A camada HTTP converte em `ApiError` com o idioma do cliente.
#[derive(Debug, Error)]
pub enum AppError {
    // Equivale ao "erro de formato": lista todos os campos que falharam.
    #[error("Erro de validação: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("{entidade} '{chave}' já cadastrada")]
    AlreadyExists { entidade: &'static str, chave: String },

    #[error("{entidade} '{chave}' não encontrada")]
    NotFound { entidade: &'static str, chave: String },

    #[error("Erro de banco de dados: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Erro interno do servidor: {0}")]
    InternalServerError(#[from] anyhow::Error),
}

/// Erro pronto para virar resposta HTTP.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: Value,
}

impl AppError {
    /// Campos inválidos -> códigos de erro, em ordem alfabética de campo.
    pub fn field_codes(&self) -> BTreeMap<String, Vec<String>> {
        let mut details = BTreeMap::new();
        if let AppError::ValidationError(errors) = self {
            for (field, field_errors) in errors.field_errors() {
                let codes = field_errors.iter().map(|e| e.code.to_string()).collect();
                details.insert(field.to_string(), codes);
            }
        }
        details
    }

    pub fn to_api_error(&self, locale: &Locale) -> ApiError {
        let en = locale.is_english();

        match self {
            AppError::ValidationError(_) => {
                let message = if en {
                    "One or more fields are invalid."
                } else {
                    "Um ou mais campos são inválidos."
                };
                ApiError {
                    status: StatusCode::BAD_REQUEST,
                    body: json!({ "error": message, "details": self.field_codes() }),
                }
            }
            AppError::AlreadyExists { entidade, chave } => {
                let message = if en {
                    format!("{entidade} '{chave}' is already registered.")
                } else {
                    format!("{entidade} '{chave}' já está cadastrada.")
                };
                ApiError { status: StatusCode::CONFLICT, body: json!({ "error": message }) }
            }
            AppError::NotFound { entidade, chave } => {
                let message = if en {
                    format!("{entidade} '{chave}' not found.")
                } else {
                    format!("{entidade} '{chave}' não encontrada.")
                };
                ApiError { status: StatusCode::NOT_FOUND, body: json!({ "error": message }) }
            }
            // DatabaseError e InternalServerError viram 500; o detalhe só vai para o log.
            e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                let message = if en {
                    "An unexpected error occurred."
                } else {
                    "Ocorreu um erro inesperado."
                };
                ApiError {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    body: json!({ "error": message }),
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
