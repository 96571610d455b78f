use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    DatabaseError(sqlx::Error),
    ConfigError(String),
    InternalError(String),
    StorageFailure(String),
    UploadFailed(String),
    NotFound(String),
    BadRequest(String),
    Unauthorized(String),
}

impl AppError {
    /// Logs a storage failure and replaces it with a message safe to show the client.
    pub fn storage_failure(source: AppError, message: &str) -> Self {
        tracing::error!("{}: {}", message, source);
        AppError::StorageFailure(message.to_string())
    }

    pub fn unauthorized() -> Self {
        AppError::Unauthorized("غير مصرح".to_string())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DatabaseError(e) => write!(f, "خطأ في قاعدة البيانات: {}", e),
            AppError::ConfigError(msg) => write!(f, "خطأ في الإعدادات: {}", msg),
            AppError::InternalError(msg) => write!(f, "خطأ داخلي: {}", msg),
            AppError::StorageFailure(msg) => write!(f, "{}", msg),
            AppError::UploadFailed(msg) => write!(f, "فشل رفع الصورة: {}", msg),
            AppError::NotFound(msg) => write!(f, "غير موجود: {}", msg),
            AppError::BadRequest(msg) => write!(f, "طلب غير صالح: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "غير مصرح: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::DatabaseError(err)
    }
}

impl From<sqlx::migrate::MigrateError> for AppError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        AppError::DatabaseError(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::DatabaseError(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "خطأ في قاعدة البيانات")
            }
            AppError::ConfigError(ref msg) => {
                tracing::error!("Configuration error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "خطأ في إعدادات الخادم")
            }
            AppError::InternalError(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "خطأ داخلي")
            }
            AppError::StorageFailure(ref msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.as_str()),
            AppError::UploadFailed(ref msg) => (StatusCode::BAD_GATEWAY, msg.as_str()),
            AppError::NotFound(ref msg) => (StatusCode::NOT_FOUND, msg.as_str()),
            AppError::BadRequest(ref msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
            AppError::Unauthorized(ref msg) => (StatusCode::UNAUTHORIZED, msg.as_str()),
        };

        let body = Json(json!({
            "message": error_message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn storage_failure_hides_the_cause() {
        let source = AppError::DatabaseError(sqlx::Error::RowNotFound);
        let response = AppError::storage_failure(source, "فشل في حذف المنتج").into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["message"], "فشل في حذف المنتج");
    }

    #[test]
    fn unauthorized_maps_to_401() {
        let response = AppError::unauthorized().into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
