use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Json, Router,
};

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::VehicleListingResponse;
use crate::state::AppState;
use crate::utils::errors::AppResult;
use crate::views::listing_page::render_listing;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(listing_page))
        .route("/api/vehicles", get(list_vehicles))
}

// Los query params llegan como texto crudo; una clave repetida queda con su último valor
async fn listing_page(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> AppResult<Html<String>> {
    let controller = VehicleController::new(state.repository.clone());
    let page = controller.list(&query);
    let html = render_listing(&page)?;
    Ok(Html(html))
}

async fn list_vehicles(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> AppResult<Json<VehicleListingResponse>> {
    let controller = VehicleController::new(state.repository.clone());
    let page = controller.list(&query);
    Ok(Json(VehicleListingResponse::from(&page)))
}
