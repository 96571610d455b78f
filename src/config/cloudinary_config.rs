use std::time::Duration;

use crate::{
    config::CloudinaryConfig,
    error::{AppError, Result},
    services::cloudinary_service::CloudinaryClient,
};

pub fn load_cloudinary_client(config: &CloudinaryConfig) -> Result<CloudinaryClient> {
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|e| AppError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

    tracing::info!(
        "Cloudinary client initialized for cloud {}",
        config.cloud_name
    );

    Ok(CloudinaryClient::new(http, config.clone()))
}
