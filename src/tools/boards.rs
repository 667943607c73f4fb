// src/tools/boards.rs

use reqwest::Method;
use serde_json::{Map, Value, json};

use super::put_opt;
use crate::api::{ApiClient, ApiError};
use crate::server::requests::{
    CreateBoardRequest, CreateRowRequest, GetBoardRequest, ListBoardsRequest, ListRowsRequest,
    ListStatusesRequest,
};

pub async fn list_boards(api: &ApiClient, req: ListBoardsRequest) -> Result<Value, ApiError> {
    api.request(Method::GET, &format!("/workspaces/{}/boards", req.workspace_id), None)
        .await
}

/// The backend has no single-board endpoint, so this lists the workspace's
/// boards and searches locally for the requested id.
pub async fn get_board(api: &ApiClient, req: GetBoardRequest) -> Result<Value, ApiError> {
    let boards = api
        .request(Method::GET, &format!("/workspaces/{}/boards", req.workspace_id), None)
        .await?;

    boards
        .as_array()
        .and_then(|list| list.iter().find(|board| id_matches(board, &req.board_id)))
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("Board {}", req.board_id)))
}

fn id_matches(board: &Value, board_id: &str) -> bool {
    match board.get("id") {
        Some(Value::String(id)) => id == board_id,
        Some(other) => other.to_string() == board_id,
        None => false,
    }
}

pub async fn create_board(api: &ApiClient, req: CreateBoardRequest) -> Result<Value, ApiError> {
    let mut body = Map::new();
    body.insert("workspaceId".to_string(), json!(req.workspace_id));
    body.insert("title".to_string(), json!(req.title));
    put_opt(&mut body, "displayId", req.display_id);
    put_opt(&mut body, "template", req.template);
    put_opt(&mut body, "viewType", req.view_type);

    api.request(Method::POST, "/boards", Some(&Value::Object(body)))
        .await
}

pub async fn list_rows(api: &ApiClient, req: ListRowsRequest) -> Result<Value, ApiError> {
    api.request(Method::GET, &format!("/boards/{}/rows", req.board_id), None)
        .await
}

pub async fn list_statuses(api: &ApiClient, req: ListStatusesRequest) -> Result<Value, ApiError> {
    api.request(Method::GET, &format!("/boards/{}/statuses", req.board_id), None)
        .await
}

pub async fn create_row(api: &ApiClient, req: CreateRowRequest) -> Result<Value, ApiError> {
    let mut body = Map::new();
    body.insert("boardId".to_string(), json!(req.board_id));
    body.insert("title".to_string(), json!(req.title));
    put_opt(&mut body, "startDate", req.start_date);
    put_opt(&mut body, "endDate", req.end_date);

    api.request(Method::POST, "/rows", Some(&Value::Object(body)))
        .await
}
