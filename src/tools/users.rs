// src/tools/users.rs

use reqwest::Method;
use serde_json::Value;

use crate::api::{ApiClient, ApiError};

pub async fn list_users(api: &ApiClient) -> Result<Value, ApiError> {
    api.request(Method::GET, "/users", None).await
}
