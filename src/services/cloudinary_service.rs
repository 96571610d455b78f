use std::{collections::BTreeMap, sync::Arc};

use reqwest::{
    StatusCode,
    multipart::{Form, Part},
};
use sha1::{Digest, Sha1};

use crate::{
    config::CloudinaryConfig,
    error::{AppError, Result},
};

const UPLOAD_FOLDER: &str = "gallery";
pub const GENERIC_UPLOAD_ERROR: &str = "فشل رفع الصورة";

#[derive(Debug)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    pub bytes: Vec<u8>,
}

/// Relays uploads to Cloudinary's signed upload API.
#[derive(Clone)]
pub struct CloudinaryClient {
    http: reqwest::Client,
    config: Arc<CloudinaryConfig>,
}

/// Signature for a signed upload: SHA-1 over the sorted `key=value` pairs joined
/// with `&`, followed directly by the API secret.
pub fn generate_signature(api_secret: &str, params: &BTreeMap<&str, String>) -> String {
    let joined = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha1::new();
    hasher.update(joined.as_bytes());
    hasher.update(api_secret.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Extracts `secure_url` from a Cloudinary response, or the provider's error message.
pub fn parse_upload_response(status: StatusCode, body: &serde_json::Value) -> Result<String> {
    let secure_url = body.get("secure_url").and_then(|v| v.as_str());

    match secure_url {
        Some(url) if status.is_success() => Ok(url.to_string()),
        _ => {
            let message = body
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|v| v.as_str())
                .unwrap_or(GENERIC_UPLOAD_ERROR);

            tracing::error!("Cloudinary upload failed ({}): {}", status, message);
            Err(AppError::UploadFailed(message.to_string()))
        }
    }
}

impl CloudinaryClient {
    pub fn new(http: reqwest::Client, config: CloudinaryConfig) -> Self {
        Self {
            http,
            config: Arc::new(config),
        }
    }

    pub fn upload_url(&self) -> String {
        format!("{}/{}/auto/upload", self.config.api_url, self.config.cloud_name)
    }

    pub async fn upload(&self, file: UploadedFile) -> Result<String> {
        let mut params = BTreeMap::new();
        params.insert("folder", UPLOAD_FOLDER.to_string());
        params.insert("timestamp", chrono::Utc::now().timestamp().to_string());

        let signature = generate_signature(&self.config.api_secret, &params);

        let part = Part::bytes(file.bytes)
            .file_name(file.file_name.unwrap_or_else(|| "upload".to_string()));

        let mut form = Form::new()
            .part("file", part)
            .text("api_key", self.config.api_key.clone())
            .text("signature", signature);

        for (key, value) in params {
            form = form.text(key, value);
        }

        let response = self
            .http
            .post(self.upload_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Cloudinary request failed: {}", e);
                AppError::UploadFailed(GENERIC_UPLOAD_ERROR.to_string())
            })?;

        let status = response.status();
        let body: serde_json::Value = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Cloudinary response: {}", e);
            AppError::UploadFailed(GENERIC_UPLOAD_ERROR.to_string())
        })?;

        let url = parse_upload_response(status, &body)?;
        tracing::info!("Image uploaded to {}", url);

        Ok(url)
    }
}
