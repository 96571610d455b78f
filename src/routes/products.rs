use axum::{Json, extract::State};

use crate::{AppState, models::Product, services::catalog_service};

pub async fn list_public_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(catalog_service::list_public_products(&state.db).await)
}
