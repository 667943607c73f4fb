// src/tools/attachments.rs

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use reqwest::Method;
use serde_json::{Value, json};

use crate::api::{ApiClient, ApiError};
use crate::server::requests::{
    DeleteAttachmentRequest, DownloadAttachmentRequest, GetAttachmentRequest,
    ListAttachmentsRequest, UpdateAttachmentRequest, UploadAttachmentRequest,
};

pub async fn list_attachments(
    api: &ApiClient,
    req: ListAttachmentsRequest,
) -> Result<Value, ApiError> {
    api.request(Method::GET, &format!("/items/{}/attachments", req.item_id), None)
        .await
}

pub async fn get_attachment(api: &ApiClient, req: GetAttachmentRequest) -> Result<Value, ApiError> {
    api.request(Method::GET, &format!("/attachments/{}", req.attachment_id), None)
        .await
}

pub async fn update_attachment(
    api: &ApiClient,
    req: UpdateAttachmentRequest,
) -> Result<Value, ApiError> {
    let body = json!({ "name": req.name });
    api.request(
        Method::PUT,
        &format!("/attachments/{}", req.attachment_id),
        Some(&body),
    )
    .await
}

pub async fn delete_attachment(
    api: &ApiClient,
    req: DeleteAttachmentRequest,
) -> Result<Value, ApiError> {
    api.request(
        Method::DELETE,
        &format!("/attachments/{}", req.attachment_id),
        None,
    )
    .await
}

/// Content arrives base64-encoded and is decoded to raw bytes before the
/// multipart upload.
pub async fn upload_attachment(
    api: &ApiClient,
    req: UploadAttachmentRequest,
) -> Result<Value, ApiError> {
    let content = BASE64.decode(req.content.as_bytes())?;
    api.upload_attachment(&req.item_id, &req.name, content).await
}

pub async fn download_attachment(
    api: &ApiClient,
    req: DownloadAttachmentRequest,
) -> Result<String, ApiError> {
    api.download(&format!("/attachments/{}/content", req.attachment_id))
        .await
}
