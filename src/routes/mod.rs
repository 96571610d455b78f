mod admin;
mod auth;
mod contact;
mod health;
mod products;
mod upload;

use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/api/products", get(products::list_public_products))
        .route("/api/contact", get(contact::get_contact_info))
        .route("/api/admin/login", post(auth::login))
        .route("/api/admin/logout", post(auth::logout))
        .route("/api/admin/check", get(auth::check_session))
        .route("/api/upload", post(upload::upload_image))
        .route("/admin/login", get(auth::login_page))
        .route("/admin/dashboard", get(admin::dashboard))
        .route(
            "/admin/products",
            get(admin::list_products).post(admin::create_product),
        )
        .route(
            "/admin/products/{id}",
            patch(admin::update_product).delete(admin::delete_product),
        )
        .route(
            "/admin/contact",
            get(admin::get_contact).put(admin::update_contact),
        )
}
