use serde::Serialize;

use crate::controllers::vehicle_controller::ListingPage;
use crate::models::filter::VehicleFilters;
use crate::models::vehicle::Vehicle;
use crate::utils::currency::format_money_ars;

// Vehículo en la respuesta JSON
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub brand: String,
    pub model: String,
    pub price: u64,
    pub formatted_price: String,
}

impl From<&Vehicle> for VehicleResponse {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            brand: vehicle.brand.clone(),
            model: vehicle.model.clone(),
            price: vehicle.price,
            formatted_price: format_money_ars(vehicle.price),
        }
    }
}

// Response del listado: filtros resueltos + resultados ordenados
#[derive(Debug, Serialize)]
pub struct VehicleListingResponse {
    pub filters: VehicleFilters,
    pub total: usize,
    pub vehicles: Vec<VehicleResponse>,
}

impl From<&ListingPage<'_>> for VehicleListingResponse {
    fn from(page: &ListingPage<'_>) -> Self {
        Self {
            filters: page.filters.clone(),
            total: page.total(),
            vehicles: page.vehicles.iter().map(|v| VehicleResponse::from(*v)).collect(),
        }
    }
}
