// src/tools/items.rs
// Item tooling carries the backend's field-name quirks: the assignee is
// `assignedUserId` on create but `userId` on update, and every mutation other
// than create is a `{data: {...}}` patch.

use reqwest::Method;
use serde_json::{Map, Value, json};

use super::put_opt;
use crate::api::{ApiClient, ApiError, QueryString};
use crate::server::requests::{
    ArchiveItemRequest, CreateItemRequest, DeleteItemRequest, GetItemRequest, ListItemsRequest,
    MoveItemRequest, UpdateItemRequest,
};

pub async fn list_items(api: &ApiClient, req: ListItemsRequest) -> Result<Value, ApiError> {
    let mut query = QueryString::new();
    query.push_opt("WorkspaceId", req.workspace_id);
    query.push_opt("BoardId", req.board_id);
    query.push_opt("RowId", req.row_id);
    query.push_opt("StatusId", req.status_id);
    query.push_opt("UserId", req.assignee_id);
    query.push_opt("ParentId", req.parent_id);
    query.push_opt("Archived", req.archived);
    query.push_opt("Milestone", req.milestone);
    query.push_repeated("Tags", req.tags.as_deref());
    query.push_repeated("CustomFields", req.custom_fields.as_deref());
    query.push_opt("Skip", req.skip);
    query.push_opt("Take", req.take);

    api.request(Method::GET, &query.append_to("/items"), None)
        .await
}

pub async fn get_item(api: &ApiClient, req: GetItemRequest) -> Result<Value, ApiError> {
    api.request(Method::GET, &format!("/items/{}", req.item_id), None)
        .await
}

pub async fn create_item(api: &ApiClient, req: CreateItemRequest) -> Result<Value, ApiError> {
    let body = create_item_body(req);
    api.request(Method::POST, "/items", Some(&Value::Object(body)))
        .await
}

fn create_item_body(req: CreateItemRequest) -> Map<String, Value> {
    let mut body = Map::new();
    body.insert("boardId".to_string(), json!(req.board_id));
    body.insert("title".to_string(), json!(req.title));
    put_opt(&mut body, "description", req.description);
    put_opt(&mut body, "statusId", req.status_id);
    put_opt(&mut body, "rowId", req.row_id);
    // Create-side rename; update uses `userId` instead.
    put_opt(&mut body, "assignedUserId", req.assignee_id);
    put_opt(&mut body, "startDate", req.start_date);
    put_opt(&mut body, "endDate", req.end_date);
    put_opt(&mut body, "color", req.color);
    put_opt(&mut body, "parentId", req.parent_id);
    put_opt(&mut body, "progress", req.progress);
    body.insert("tags".to_string(), json!(req.tags.unwrap_or_default()));
    body.insert(
        "customFields".to_string(),
        json!(req.custom_fields.unwrap_or_default()),
    );
    body.insert("blocking".to_string(), json!(req.blocking.unwrap_or_default()));
    body.insert("waiting".to_string(), json!(req.waiting.unwrap_or_default()));
    // Not caller-settable through this tool; the backend expects them on create.
    body.insert("milestone".to_string(), json!(false));
    body.insert("isSuspended".to_string(), json!(false));
    body.insert("suspendReason".to_string(), json!(""));
    body
}

pub async fn update_item(api: &ApiClient, req: UpdateItemRequest) -> Result<Value, ApiError> {
    let path = format!("/items/{}", req.item_id);
    let body = json!({ "data": update_item_data(req) });
    api.request(Method::PUT, &path, Some(&body)).await
}

fn update_item_data(req: UpdateItemRequest) -> Map<String, Value> {
    let mut data = Map::new();
    put_opt(&mut data, "title", req.title);
    put_opt(&mut data, "description", req.description);
    put_opt(&mut data, "boardId", req.board_id);
    put_opt(&mut data, "statusId", req.status_id);
    put_opt(&mut data, "rowId", req.row_id);
    put_opt(&mut data, "userId", req.assignee_id);
    put_opt(&mut data, "startDate", req.start_date);
    put_opt(&mut data, "endDate", req.end_date);
    put_opt(&mut data, "color", req.color);
    put_opt(&mut data, "parentId", req.parent_id);
    put_opt(&mut data, "progress", req.progress);
    put_opt(&mut data, "milestone", req.milestone);
    put_opt(&mut data, "tags", req.tags);
    put_opt(&mut data, "customFields", req.custom_fields);
    put_opt(&mut data, "blocking", req.blocking);
    put_opt(&mut data, "waiting", req.waiting);
    data
}

pub async fn delete_item(api: &ApiClient, req: DeleteItemRequest) -> Result<Value, ApiError> {
    api.request(Method::DELETE, &format!("/items/{}", req.item_id), None)
        .await
}

/// Moving is an update patch of the three placement fields. Targets the
/// caller leaves out are omitted from the patch rather than sent as null.
pub async fn move_item(api: &ApiClient, req: MoveItemRequest) -> Result<Value, ApiError> {
    let path = format!("/items/{}", req.item_id);
    let mut data = Map::new();
    put_opt(&mut data, "boardId", req.board_id);
    put_opt(&mut data, "statusId", req.status_id);
    put_opt(&mut data, "rowId", req.row_id);

    let body = json!({ "data": data });
    api.request(Method::PUT, &path, Some(&body)).await
}

pub async fn archive_item(api: &ApiClient, req: ArchiveItemRequest) -> Result<Value, ApiError> {
    let path = format!("/items/{}", req.item_id);
    let body = json!({ "data": { "archived": req.archived.unwrap_or(true) } });
    api.request(Method::PUT, &path, Some(&body)).await
}
