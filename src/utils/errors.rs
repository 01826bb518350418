//! Sistema de manejo de errores
//!
//! Este módulo define los errores de la aplicación y su conversión a
//! respuestas HTTP. El detalle de cada falla se registra en el log y
//! nunca se muestra al usuario: el cliente sólo recibe la página genérica.

use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

use crate::views::error_page::{generic_error_response, not_found_response};

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(path) => {
                warn!("🔍 Recurso no encontrado: {}", path);
                not_found_response()
            }

            AppError::Render(e) => {
                error!("❌ Error renderizando la página: {:?}", e);
                generic_error_response()
            }

            AppError::Catalog(msg) => {
                error!("❌ Error de catálogo: {}", msg);
                generic_error_response()
            }
        }
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;
