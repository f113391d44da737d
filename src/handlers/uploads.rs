//! POST /upload: attachment upload to object storage
use actix_web::{web, HttpResponse};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::Config;
use crate::error::AppError;
use crate::services::storage;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UploadRequest {
    pub file_base64: Option<String>,
    pub file_name: Option<String>,
    pub file_type: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    pub url: String,
    pub file_name: String,
    pub file_type: String,
}

/// Decode the payload and store it under a timestamp-prefixed key.
#[utoipa::path(
    post,
    path = "/upload",
    request_body = UploadRequest,
    responses(
        (status = 200, description = "Public URL of the stored attachment", body = UploadResponse),
        (status = 400, description = "file_base64 missing or not valid base64")
    )
)]
pub async fn upload_file(
    s3: web::Data<aws_sdk_s3::Client>,
    config: web::Data<Config>,
    body: web::Json<UploadRequest>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();

    let file_base64 = req
        .file_base64
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest("file_base64 required".into()))?;
    let file_name = req.file_name.unwrap_or_else(|| "file".to_string());
    let file_type = req
        .file_type
        .unwrap_or_else(|| "application/octet-stream".to_string());

    // Decode before any storage call; malformed input never reaches S3.
    let bytes = STANDARD.decode(file_base64.trim())?;

    let key = storage::object_key(Utc::now(), &file_name);
    storage::put_object(s3.get_ref(), &config.s3, &key, bytes, &file_type).await?;

    let url = storage::object_url(&config.s3, &key);

    Ok(HttpResponse::Ok().json(UploadResponse {
        url,
        file_name,
        file_type,
    }))
}
