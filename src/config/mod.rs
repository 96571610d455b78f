mod app_config;
mod cloudinary_config;

pub use app_config::{
    AppConfig, CloudinaryConfig, CorsConfig, DatabaseConfig, Environment, ServerConfig,
    SessionConfig,
};
pub use cloudinary_config::load_cloudinary_client;
