use std::collections::HashMap;

use tracing::debug;

use crate::models::filter::VehicleFilters;
use crate::models::vehicle::Vehicle;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::{filter_vehicles, resolve_filters, sort_vehicles};

/// Resultado del pipeline para un request: filtros resueltos y vehículos
/// ya filtrados y ordenados
#[derive(Debug)]
pub struct ListingPage<'a> {
    pub filters: VehicleFilters,
    pub vehicles: Vec<&'a Vehicle>,
}

impl ListingPage<'_> {
    pub fn total(&self) -> usize {
        self.vehicles.len()
    }
}

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(repository: VehicleRepository) -> Self {
        Self { repository }
    }

    /// query crudo → filtros → filtrado → orden
    pub fn list(&self, query: &HashMap<String, String>) -> ListingPage<'_> {
        let filters = resolve_filters(query);
        let filtered = filter_vehicles(self.repository.find_all(), &filters);
        let vehicles = sort_vehicles(&filtered, filters.sort_order);

        debug!(
            "🔍 Filtros: marca_modelo='{}', precio_maximo={:?}, orden={} → {} vehículos",
            filters.brand_model,
            filters.max_price,
            filters.sort_order.as_token(),
            vehicles.len()
        );

        ListingPage { filters, vehicles }
    }
}
