// src/server/requests.rs
// Request types for the tool catalog. The derived schemas are what
// list_tools advertises, so argument names here are the public contract;
// upstream field renames happen in the dispatch handlers, not here.

use serde::{Deserialize, Serialize};

/// Dependency-ordering relation between two items' start/finish events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
pub enum DependencyType {
    FinishToStart,
    StartToStart,
    FinishToFinish,
    StartToFinish,
}

/// One dependency edge attached to an item.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DependencyInput {
    #[schemars(description = "ID of the other item in the dependency")]
    pub item_id: String,
    #[schemars(description = "Precedence relation: FinishToStart/StartToStart/FinishToFinish/StartToFinish")]
    #[serde(rename = "type")]
    pub dependency_type: DependencyType,
}

/// A custom field value on an item.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldInput {
    #[schemars(description = "Custom field ID")]
    pub field_id: String,
    #[schemars(description = "Value to set")]
    pub value: serde_json::Value,
}

// === Workspaces ===

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetWorkspaceRequest {
    #[schemars(description = "Workspace ID")]
    pub workspace_id: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkspaceRequest {
    #[schemars(description = "Workspace title")]
    pub title: String,
    #[schemars(description = "Short display identifier")]
    pub display_id: Option<String>,
    #[schemars(description = "Icon name")]
    pub icon: Option<String>,
    #[schemars(description = "Color name or hex value")]
    pub color: Option<String>,
    #[schemars(description = "Workspace template ID (see list_workspace_templates)")]
    pub template: Option<String>,
    #[schemars(description = "Owner user ID")]
    pub owner: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddWorkspaceUserRequest {
    #[schemars(description = "Workspace ID")]
    pub workspace_id: String,
    #[schemars(description = "User ID to add")]
    pub user_id: String,
}

// === Boards ===

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListBoardsRequest {
    #[schemars(description = "Workspace ID")]
    pub workspace_id: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetBoardRequest {
    #[schemars(description = "Workspace ID the board belongs to")]
    pub workspace_id: String,
    #[schemars(description = "Board ID")]
    pub board_id: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBoardRequest {
    #[schemars(description = "Workspace ID")]
    pub workspace_id: String,
    #[schemars(description = "Board title")]
    pub title: String,
    #[schemars(description = "Short display identifier")]
    pub display_id: Option<String>,
    #[schemars(description = "Board template ID (see list_board_templates)")]
    pub template: Option<String>,
    #[schemars(description = "View type, e.g. kanban or timeline")]
    pub view_type: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListRowsRequest {
    #[schemars(description = "Board ID")]
    pub board_id: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListStatusesRequest {
    #[schemars(description = "Board ID")]
    pub board_id: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRowRequest {
    #[schemars(description = "Board ID")]
    pub board_id: String,
    #[schemars(description = "Row title")]
    pub title: String,
    #[schemars(description = "Start date (ISO 8601)")]
    pub start_date: Option<String>,
    #[schemars(description = "End date (ISO 8601)")]
    pub end_date: Option<String>,
}

// === Items ===

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListItemsRequest {
    #[schemars(description = "Filter by workspace ID")]
    pub workspace_id: Option<String>,
    #[schemars(description = "Filter by board ID")]
    pub board_id: Option<String>,
    #[schemars(description = "Filter by row ID")]
    pub row_id: Option<String>,
    #[schemars(description = "Filter by status ID")]
    pub status_id: Option<String>,
    #[schemars(description = "Filter by assigned user ID")]
    pub assignee_id: Option<String>,
    #[schemars(description = "Filter by parent item ID")]
    pub parent_id: Option<String>,
    #[schemars(description = "Filter by archived flag")]
    pub archived: Option<bool>,
    #[schemars(description = "Filter by milestone flag")]
    pub milestone: Option<bool>,
    #[schemars(description = "Filter by tags (items matching any listed tag)")]
    pub tags: Option<Vec<String>>,
    #[schemars(description = "Filter by custom field values")]
    pub custom_fields: Option<Vec<String>>,
    #[schemars(description = "Number of items to skip (paging)")]
    pub skip: Option<u32>,
    #[schemars(description = "Number of items to return (paging)")]
    pub take: Option<u32>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetItemRequest {
    #[schemars(description = "Item ID")]
    pub item_id: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    #[schemars(description = "Board ID the item is created on")]
    pub board_id: String,
    #[schemars(description = "Item title")]
    pub title: String,
    #[schemars(description = "Item description")]
    pub description: Option<String>,
    #[schemars(description = "Status (workflow column) ID")]
    pub status_id: Option<String>,
    #[schemars(description = "Row (swimlane) ID")]
    pub row_id: Option<String>,
    #[schemars(description = "User ID to assign the item to")]
    pub assignee_id: Option<String>,
    #[schemars(description = "Start date (ISO 8601)")]
    pub start_date: Option<String>,
    #[schemars(description = "End date (ISO 8601)")]
    pub end_date: Option<String>,
    #[schemars(description = "Card color")]
    pub color: Option<String>,
    #[schemars(description = "Parent item ID")]
    pub parent_id: Option<String>,
    #[schemars(description = "Progress percent (0-100)")]
    pub progress: Option<u32>,
    #[schemars(description = "Tags to attach")]
    pub tags: Option<Vec<String>>,
    #[schemars(description = "Custom field values")]
    pub custom_fields: Option<Vec<CustomFieldInput>>,
    #[schemars(description = "Items this item blocks")]
    pub blocking: Option<Vec<DependencyInput>>,
    #[schemars(description = "Items this item waits for")]
    pub waiting: Option<Vec<DependencyInput>>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    #[schemars(description = "Item ID")]
    pub item_id: String,
    #[schemars(description = "New title")]
    pub title: Option<String>,
    #[schemars(description = "New description")]
    pub description: Option<String>,
    #[schemars(description = "Target board ID")]
    pub board_id: Option<String>,
    #[schemars(description = "Target status ID")]
    pub status_id: Option<String>,
    #[schemars(description = "Target row ID")]
    pub row_id: Option<String>,
    #[schemars(description = "User ID to reassign the item to")]
    pub assignee_id: Option<String>,
    #[schemars(description = "Start date (ISO 8601)")]
    pub start_date: Option<String>,
    #[schemars(description = "End date (ISO 8601)")]
    pub end_date: Option<String>,
    #[schemars(description = "Card color")]
    pub color: Option<String>,
    #[schemars(description = "Parent item ID")]
    pub parent_id: Option<String>,
    #[schemars(description = "Progress percent (0-100)")]
    pub progress: Option<u32>,
    #[schemars(description = "Milestone flag")]
    pub milestone: Option<bool>,
    #[schemars(description = "Replacement tag list")]
    pub tags: Option<Vec<String>>,
    #[schemars(description = "Replacement custom field values")]
    pub custom_fields: Option<Vec<CustomFieldInput>>,
    #[schemars(description = "Replacement blocking dependencies")]
    pub blocking: Option<Vec<DependencyInput>>,
    #[schemars(description = "Replacement waiting dependencies")]
    pub waiting: Option<Vec<DependencyInput>>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteItemRequest {
    #[schemars(description = "Item ID")]
    pub item_id: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoveItemRequest {
    #[schemars(description = "Item ID")]
    pub item_id: String,
    #[schemars(description = "Target board ID")]
    pub board_id: Option<String>,
    #[schemars(description = "Target status ID")]
    pub status_id: Option<String>,
    #[schemars(description = "Target row ID")]
    pub row_id: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveItemRequest {
    #[schemars(description = "Item ID")]
    pub item_id: String,
    #[schemars(description = "Archived flag; defaults to true")]
    pub archived: Option<bool>,
}

// === Attachments ===

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListAttachmentsRequest {
    #[schemars(description = "Item ID")]
    pub item_id: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetAttachmentRequest {
    #[schemars(description = "Attachment ID")]
    pub attachment_id: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAttachmentRequest {
    #[schemars(description = "Attachment ID")]
    pub attachment_id: String,
    #[schemars(description = "New attachment name")]
    pub name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAttachmentRequest {
    #[schemars(description = "Attachment ID")]
    pub attachment_id: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadAttachmentRequest {
    #[schemars(description = "Item ID to attach the file to")]
    pub item_id: String,
    #[schemars(description = "File name")]
    pub name: String,
    #[schemars(description = "File content, base64-encoded")]
    pub content: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DownloadAttachmentRequest {
    #[schemars(description = "Attachment ID")]
    pub attachment_id: String,
}

// === Time logs / activities / logs ===

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetTimeLogsRequest {
    #[schemars(description = "Range start date (ISO 8601)")]
    pub start_date: String,
    #[schemars(description = "Range end date (ISO 8601)")]
    pub end_date: String,
    #[schemars(description = "Filter by board ID")]
    pub board_id: Option<String>,
    #[schemars(description = "Filter by row ID")]
    pub row_id: Option<String>,
    #[schemars(description = "Filter by user ID")]
    pub user_id: Option<String>,
    #[schemars(description = "Filter by tag")]
    pub tag: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListActivitiesRequest {
    #[schemars(description = "Board ID")]
    pub board_id: String,
    #[schemars(description = "Range start date (ISO 8601)")]
    pub start_date: String,
    #[schemars(description = "Range end date (ISO 8601)")]
    pub end_date: String,
    #[schemars(description = "Number of records to skip (paging)")]
    pub skip: Option<u32>,
    #[schemars(description = "Number of records to return (paging)")]
    pub take: Option<u32>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetLogsRequest {
    #[schemars(description = "Range start date (ISO 8601)")]
    pub start_date: Option<String>,
    #[schemars(description = "Range end date (ISO 8601)")]
    pub end_date: Option<String>,
    #[schemars(description = "Number of records to skip (paging)")]
    pub skip: Option<u32>,
    #[schemars(description = "Number of records to return (paging)")]
    pub take: Option<u32>,
}
