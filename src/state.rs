//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Es de sólo lectura: cada request resuelve
//! sus propios filtros sobre el mismo catálogo.

use crate::config::environment::EnvironmentConfig;
use crate::repositories::vehicle_repository::VehicleRepository;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub repository: VehicleRepository,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, repository: VehicleRepository) -> Self {
        Self { config, repository }
    }
}
