//! Listado de automóviles
//!
//! Página server-rendered que filtra un catálogo fijo de vehículos por
//! marca/modelo y precio máximo, y lo ordena por precio.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod logging;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
pub mod views;

use axum::Router;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use middleware::error_masking::handle_panic;
use state::AppState;

/// Crear el router completo de la aplicación
pub fn create_app(state: AppState) -> Router {
    let router = Router::new()
        .merge(routes::vehicle_routes::create_vehicle_router())
        .merge(routes::health_routes::create_health_router())
        .fallback(routes::not_found);

    with_layers(router, state)
}

/// Capas comunes: `TraceLayer` por fuera de `CatchPanicLayer`, así el 500
/// generado por un pánico también queda trazado
pub fn with_layers(routes: Router<AppState>, state: AppState) -> Router {
    routes
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
