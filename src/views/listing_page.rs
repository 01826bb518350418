//! Página de listado
//!
//! Formulario con los filtros resueltos, contador de resultados y la tabla
//! de vehículos. El texto del request se escapa en `templates/listing.html`.

use askama::Template;

use crate::controllers::vehicle_controller::ListingPage;
use crate::models::filter::SortOrder;
use crate::utils::currency::format_money_ars;

pub const NO_RESULTS_NOTICE: &str = "No se han encontrado automóviles con los filtros aplicados.";

/// Fila de la tabla con el precio ya formateado
pub struct VehicleRow<'a> {
    pub brand: &'a str,
    pub model: &'a str,
    pub price: String,
}

#[derive(Template)]
#[template(path = "listing.html")]
pub struct ListingTemplate<'a> {
    pub brand_model: &'a str,
    pub visible_price: String,
    pub hidden_price: String,
    pub sort_descending: bool,
    pub total: usize,
    pub count_label: &'static str,
    pub rows: Vec<VehicleRow<'a>>,
}

impl<'a> From<&'a ListingPage<'a>> for ListingTemplate<'a> {
    fn from(page: &'a ListingPage<'a>) -> Self {
        let filters = &page.filters;
        let (visible_price, hidden_price) = match filters.max_price {
            Some(price) => (format_money_ars(price), price.to_string()),
            None => (String::new(), String::new()),
        };

        Self {
            brand_model: &filters.brand_model,
            visible_price,
            hidden_price,
            sort_descending: filters.sort_order == SortOrder::PriceDescending,
            total: page.total(),
            count_label: count_label(page.total()),
            rows: page
                .vehicles
                .iter()
                .map(|vehicle| VehicleRow {
                    brand: &vehicle.brand,
                    model: &vehicle.model,
                    price: format_money_ars(vehicle.price),
                })
                .collect(),
        }
    }
}

/// "1 automóvil está siendo mostrado" / "N automóviles están siendo mostrados"
pub fn count_label(total: usize) -> &'static str {
    if total == 1 {
        "automóvil está siendo mostrado"
    } else {
        "automóviles están siendo mostrados"
    }
}

/// Renderizar el documento completo
pub fn render_listing(page: &ListingPage<'_>) -> askama::Result<String> {
    ListingTemplate::from(page).render()
}
