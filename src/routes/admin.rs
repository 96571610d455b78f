use axum::{
    Json,
    extract::{Path, State},
};
use http::StatusCode;

use crate::{
    AppState,
    error::Result,
    models::{
        ContactInfo, ContactInfoUpdate, DashboardSummary, NewProduct, Product, ProductUpdate,
        SuccessResponse,
    },
    queries::{contact_queries, product_queries},
    services::{catalog_service, contact_service},
    utils::extractors::AdminSession,
};

pub async fn dashboard(
    State(state): State<AppState>,
    _session: AdminSession,
) -> Result<Json<DashboardSummary>> {
    let product_count = product_queries::count(&state.db).await?;
    let contact_configured = contact_queries::find_first(&state.db).await?.is_some();

    Ok(Json(DashboardSummary {
        product_count,
        contact_configured,
    }))
}

//PRODUCT ROUTES
pub async fn list_products(
    State(state): State<AppState>,
    session: AdminSession,
) -> Result<Json<Vec<Product>>> {
    let products = catalog_service::list_products(&state.db, &session).await?;

    Ok(Json(products))
}

pub async fn create_product(
    State(state): State<AppState>,
    session: AdminSession,
    Json(payload): Json<NewProduct>,
) -> Result<(StatusCode, Json<Product>)> {
    let product = catalog_service::add_product(&state.db, &session, payload).await?;

    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn update_product(
    State(state): State<AppState>,
    session: AdminSession,
    Path(id): Path<i32>,
    Json(payload): Json<ProductUpdate>,
) -> Result<Json<Product>> {
    let product = catalog_service::update_product(&state.db, &session, id, payload).await?;

    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    session: AdminSession,
    Path(id): Path<i32>,
) -> Result<Json<SuccessResponse>> {
    catalog_service::delete_product(&state.db, &session, id).await?;

    Ok(Json(SuccessResponse { success: true }))
}

//CONTACT ROUTES
pub async fn get_contact(
    State(state): State<AppState>,
    _session: AdminSession,
) -> Json<Option<ContactInfo>> {
    Json(contact_service::get_contact_info(&state.db).await)
}

pub async fn update_contact(
    State(state): State<AppState>,
    session: AdminSession,
    Json(payload): Json<ContactInfoUpdate>,
) -> Result<Json<ContactInfo>> {
    let info = contact_service::update_contact_info(&state.db, &session, payload).await?;

    Ok(Json(info))
}
