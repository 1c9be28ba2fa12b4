// ============================================================================
// ERRORES - Errores de servicios (API + almacenamiento)
// ============================================================================

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("unauthorized")]
    Unauthorized,

    #[error("parse error: {0}")]
    Parse(String),

    #[error("storage error: {0}")]
    Storage(String),
}

impl ApiError {
    /// Convierte un status HTTP no exitoso en el error correspondiente
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        match status {
            401 | 403 => Self::Unauthorized,
            _ => Self::Http {
                status,
                message: message.into(),
            },
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
