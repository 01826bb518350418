//! Filtrado y ordenamiento del catálogo

use crate::models::filter::{SortOrder, VehicleFilters};
use crate::models::vehicle::Vehicle;
use crate::utils::text::normalize;

/// Seleccionar los vehículos que cumplen marca/modelo Y precio máximo.
/// Conserva el orden del catálogo.
pub fn filter_vehicles<'a>(vehicles: &'a [Vehicle], filters: &VehicleFilters) -> Vec<&'a Vehicle> {
    let query = normalize(&filters.brand_model);

    vehicles
        .iter()
        .filter(|vehicle| matches_brand_model(vehicle, &query))
        .filter(|vehicle| matches_max_price(vehicle, filters.max_price))
        .collect()
}

/// Ordenar por precio sin modificar la entrada. El sort es estable:
/// los empates mantienen el orden del filtrado.
pub fn sort_vehicles<'a>(vehicles: &[&'a Vehicle], order: SortOrder) -> Vec<&'a Vehicle> {
    let mut sorted = vehicles.to_vec();
    match order {
        SortOrder::PriceAscending => sorted.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOrder::PriceDescending => sorted.sort_by(|a, b| b.price.cmp(&a.price)),
    }
    sorted
}

/// `normalized_query` ya viene normalizado
fn matches_brand_model(vehicle: &Vehicle, normalized_query: &str) -> bool {
    normalized_query.is_empty()
        || normalize(&vehicle.brand).contains(normalized_query)
        || normalize(&vehicle.model).contains(normalized_query)
}

fn matches_max_price(vehicle: &Vehicle, max_price: Option<u64>) -> bool {
    max_price.map_or(true, |max| vehicle.price <= max)
}
