use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    middleware,
};
use sqlx::PgPool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::{AppConfig, load_cloudinary_client},
    database,
    error::{AppError, Result},
    middleware::admin_guard,
    routes,
    services::cloudinary_service::CloudinaryClient,
    utils::jwt::SessionKeys,
};

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub sessions: Arc<SessionKeys>,
    pub admin_password: Arc<str>,
    pub secure_cookies: bool,
    pub uploader: CloudinaryClient,
}

impl AppState {
    pub fn new(db: PgPool, config: &AppConfig, uploader: CloudinaryClient) -> Self {
        Self {
            db,
            sessions: Arc::new(SessionKeys::new(&config.session.secret)),
            admin_password: Arc::from(config.session.admin_password.as_str()),
            secure_cookies: config.is_production(),
            uploader,
        }
    }
}

pub async fn build(config: &AppConfig) -> Result<Router> {
    let pool = database::create_pool(&config.database).await?;
    build_with_pool(config, pool)
}

/// Assembles the router around an existing pool.
pub fn build_with_pool(config: &AppConfig, pool: PgPool) -> Result<Router> {
    let uploader = load_cloudinary_client(&config.cloudinary)?;
    let state = AppState::new(pool, config, uploader);

    let allowed_origins: Vec<HeaderValue> = config
        .cors
        .allowed_origins
        .iter()
        .map(|origin| {
            origin.parse::<HeaderValue>().map_err(|_| {
                AppError::ConfigError(format!("Invalid CORS origin: {}", origin))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([http::header::CONTENT_TYPE])
        .allow_credentials(true)
        .allow_origin(allowed_origins);

    let app = routes::create_router()
        .layer(middleware::from_fn_with_state(state.clone(), admin_guard))
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}
