//! Error body returned by every failing endpoint.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `{"message": "..."}` - the only error shape the API produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable explanation.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    // Common error constructors
    pub fn not_found() -> Self {
        Self::new("não encontrado.")
    }

    pub fn missing_field(field: &str) -> Self {
        Self::new(format!("campo obrigatório ausente: {field}."))
    }

    pub fn invalid_form() -> Self {
        Self::new("dados inválidos fornecidos.")
    }

    pub fn internal_error() -> Self {
        Self::new("erro interno.")
    }
}
