// src/tools/templates.rs

use reqwest::Method;
use serde_json::Value;

use crate::api::{ApiClient, ApiError};

pub async fn list_workspace_templates(api: &ApiClient) -> Result<Value, ApiError> {
    api.request(Method::GET, "/templates/workspace", None).await
}

pub async fn list_board_templates(api: &ApiClient) -> Result<Value, ApiError> {
    api.request(Method::GET, "/templates/board", None).await
}
