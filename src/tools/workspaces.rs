// src/tools/workspaces.rs

use reqwest::Method;
use serde_json::{Map, Value, json};

use super::put_opt;
use crate::api::{ApiClient, ApiError};
use crate::server::requests::{AddWorkspaceUserRequest, CreateWorkspaceRequest, GetWorkspaceRequest};

pub async fn list_workspaces(api: &ApiClient) -> Result<Value, ApiError> {
    api.request(Method::GET, "/workspaces", None).await
}

pub async fn get_workspace(api: &ApiClient, req: GetWorkspaceRequest) -> Result<Value, ApiError> {
    api.request(Method::GET, &format!("/workspaces/{}", req.workspace_id), None)
        .await
}

pub async fn create_workspace(
    api: &ApiClient,
    req: CreateWorkspaceRequest,
) -> Result<Value, ApiError> {
    let mut body = Map::new();
    body.insert("title".to_string(), json!(req.title));
    put_opt(&mut body, "displayId", req.display_id);
    put_opt(&mut body, "icon", req.icon);
    put_opt(&mut body, "color", req.color);
    put_opt(&mut body, "template", req.template);
    put_opt(&mut body, "owner", req.owner);

    api.request(Method::POST, "/workspaces", Some(&Value::Object(body)))
        .await
}

pub async fn add_workspace_user(
    api: &ApiClient,
    req: AddWorkspaceUserRequest,
) -> Result<Value, ApiError> {
    let path = format!("/workspaces/{}/users/{}", req.workspace_id, req.user_id);
    api.request(Method::PUT, &path, None).await
}
