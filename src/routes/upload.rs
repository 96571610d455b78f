use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{
    AppState,
    error::AppError,
    models::UploadResponse,
    services::cloudinary_service::{GENERIC_UPLOAD_ERROR, UploadedFile},
};

/// Upload failures are rendered as `{"error": ...}`, the shape upload clients read.
#[derive(Debug)]
pub struct UploadError(AppError);

impl From<AppError> for UploadError {
    fn from(err: AppError) -> Self {
        UploadError(err)
    }
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::UploadFailed(msg) => (StatusCode::BAD_GATEWAY, msg),
            other => {
                tracing::error!("Upload error: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERIC_UPLOAD_ERROR.to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, UploadError> {
    let mut file = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("بيانات النموذج غير صالحة: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("تعذرت قراءة الملف: {}", e)))?;

        file = Some(UploadedFile {
            file_name,
            bytes: bytes.to_vec(),
        });
        break;
    }

    let file = file.ok_or_else(|| AppError::BadRequest("لم يتم رفع أي ملف".to_string()))?;
    let url = state.uploader.upload(file).await?;

    Ok(Json(UploadResponse { url }))
}
