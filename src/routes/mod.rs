pub mod health_routes;
pub mod vehicle_routes;

use axum::http::Uri;

use crate::utils::errors::AppError;

/// Fallback para rutas desconocidas
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
