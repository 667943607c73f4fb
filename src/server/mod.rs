//! Taskdeck MCP server.
//!
//! The `#[tool_router]` block below is both the tool catalog (names,
//! descriptions, schemas derived from the request types) and the dispatch
//! table: each method hands its typed request to the matching handler in
//! `crate::tools`. Tool-call failures are always folded into an error-flagged
//! result; nothing a caller sends can take the server down.

pub mod requests;

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, tool::ToolCallContext, wrapper::Parameters},
    model::{
        CallToolRequestParam, CallToolResult, Content, Implementation, ListToolsResult,
        PaginatedRequestParam, ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_router,
};
use serde_json::Value;
use tracing::{debug, info};

use crate::api::{ApiClient, ApiError};
use crate::tools;
use requests::*;

#[derive(Clone)]
pub struct TaskdeckServer {
    api: ApiClient,
    tool_router: ToolRouter<Self>,
}

impl TaskdeckServer {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            tool_router: Self::tool_router(),
        }
    }

    /// Public wrapper for the macro-generated router constructor.
    pub fn get_tool_router() -> ToolRouter<Self> {
        Self::tool_router()
    }
}

/// Pretty-print a backend payload for the response envelope.
fn render_json(value: &Value) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

fn error_message(e: impl std::fmt::Display) -> String {
    format!("Error: {}", e)
}

fn unknown_tool_message(name: &str) -> String {
    format!("Error: Unknown tool: {}", name)
}

/// Wrap a dispatch result in the protocol envelope: pretty-printed JSON on
/// success, a recovered error-flagged text block on failure.
fn tool_result(result: Result<Value, ApiError>) -> CallToolResult {
    match result {
        Ok(value) => match render_json(&value) {
            Ok(text) => CallToolResult::success(vec![Content::text(text)]),
            Err(e) => CallToolResult::error(vec![Content::text(error_message(e))]),
        },
        Err(e) => CallToolResult::error(vec![Content::text(error_message(e))]),
    }
}

/// Same envelope for handlers that return raw text (attachment downloads).
fn text_result(result: Result<String, ApiError>) -> CallToolResult {
    match result {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(e) => CallToolResult::error(vec![Content::text(error_message(e))]),
    }
}

#[tool_router]
impl TaskdeckServer {
    // === Workspaces ===

    #[tool(description = "List all workspaces in the organization.")]
    async fn list_workspaces(&self) -> Result<CallToolResult, McpError> {
        Ok(tool_result(tools::workspaces::list_workspaces(&self.api).await))
    }

    #[tool(description = "Get a workspace by ID.")]
    async fn get_workspace(
        &self,
        Parameters(req): Parameters<GetWorkspaceRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(tool_result(tools::workspaces::get_workspace(&self.api, req).await))
    }

    #[tool(description = "Create a workspace. Optionally set display ID, icon, color, template and owner.")]
    async fn create_workspace(
        &self,
        Parameters(req): Parameters<CreateWorkspaceRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(tool_result(tools::workspaces::create_workspace(&self.api, req).await))
    }

    #[tool(description = "Add an organization user to a workspace.")]
    async fn add_workspace_user(
        &self,
        Parameters(req): Parameters<AddWorkspaceUserRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(tool_result(tools::workspaces::add_workspace_user(&self.api, req).await))
    }

    // === Boards ===

    #[tool(description = "List the boards of a workspace.")]
    async fn list_boards(
        &self,
        Parameters(req): Parameters<ListBoardsRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(tool_result(tools::boards::list_boards(&self.api, req).await))
    }

    #[tool(description = "Get a single board by ID from a workspace's board list.")]
    async fn get_board(
        &self,
        Parameters(req): Parameters<GetBoardRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(tool_result(tools::boards::get_board(&self.api, req).await))
    }

    #[tool(description = "Create a board in a workspace.")]
    async fn create_board(
        &self,
        Parameters(req): Parameters<CreateBoardRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(tool_result(tools::boards::create_board(&self.api, req).await))
    }

    #[tool(description = "List the rows (swimlanes) of a board.")]
    async fn list_rows(
        &self,
        Parameters(req): Parameters<ListRowsRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(tool_result(tools::boards::list_rows(&self.api, req).await))
    }

    #[tool(description = "List the statuses (workflow columns) of a board.")]
    async fn list_statuses(
        &self,
        Parameters(req): Parameters<ListStatusesRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(tool_result(tools::boards::list_statuses(&self.api, req).await))
    }

    #[tool(description = "Create a row (swimlane) on a board.")]
    async fn create_row(
        &self,
        Parameters(req): Parameters<CreateRowRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(tool_result(tools::boards::create_row(&self.api, req).await))
    }

    // === Items ===

    #[tool(description = "List items with optional filters: workspace, board, row, status, assignee, parent, archived, milestone, tags, custom fields, and skip/take paging.")]
    async fn list_items(
        &self,
        Parameters(req): Parameters<ListItemsRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(tool_result(tools::items::list_items(&self.api, req).await))
    }

    #[tool(description = "Get an item by ID.")]
    async fn get_item(
        &self,
        Parameters(req): Parameters<GetItemRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(tool_result(tools::items::get_item(&self.api, req).await))
    }

    #[tool(description = "Create an item (task/card) on a board. Supports description, status, row, assignee, dates, color, parent, progress, tags, custom fields and blocking/waiting dependencies.")]
    async fn create_item(
        &self,
        Parameters(req): Parameters<CreateItemRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(tool_result(tools::items::create_item(&self.api, req).await))
    }

    #[tool(description = "Update an item. Only the supplied fields are changed.")]
    async fn update_item(
        &self,
        Parameters(req): Parameters<UpdateItemRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(tool_result(tools::items::update_item(&self.api, req).await))
    }

    #[tool(description = "Delete an item.")]
    async fn delete_item(
        &self,
        Parameters(req): Parameters<DeleteItemRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(tool_result(tools::items::delete_item(&self.api, req).await))
    }

    #[tool(description = "Move an item to another board, status and/or row.")]
    async fn move_item(
        &self,
        Parameters(req): Parameters<MoveItemRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(tool_result(tools::items::move_item(&self.api, req).await))
    }

    #[tool(description = "Archive an item (or unarchive with archived=false).")]
    async fn archive_item(
        &self,
        Parameters(req): Parameters<ArchiveItemRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(tool_result(tools::items::archive_item(&self.api, req).await))
    }

    // === Attachments ===

    #[tool(description = "List the attachments of an item.")]
    async fn list_attachments(
        &self,
        Parameters(req): Parameters<ListAttachmentsRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(tool_result(tools::attachments::list_attachments(&self.api, req).await))
    }

    #[tool(description = "Get attachment metadata by ID.")]
    async fn get_attachment(
        &self,
        Parameters(req): Parameters<GetAttachmentRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(tool_result(tools::attachments::get_attachment(&self.api, req).await))
    }

    #[tool(description = "Rename an attachment.")]
    async fn update_attachment(
        &self,
        Parameters(req): Parameters<UpdateAttachmentRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(tool_result(tools::attachments::update_attachment(&self.api, req).await))
    }

    #[tool(description = "Delete an attachment.")]
    async fn delete_attachment(
        &self,
        Parameters(req): Parameters<DeleteAttachmentRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(tool_result(tools::attachments::delete_attachment(&self.api, req).await))
    }

    #[tool(description = "Upload a file attachment to an item. Content must be base64-encoded.")]
    async fn upload_attachment(
        &self,
        Parameters(req): Parameters<UploadAttachmentRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(tool_result(tools::attachments::upload_attachment(&self.api, req).await))
    }

    #[tool(description = "Download an attachment's raw content.")]
    async fn download_attachment(
        &self,
        Parameters(req): Parameters<DownloadAttachmentRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(text_result(tools::attachments::download_attachment(&self.api, req).await))
    }

    // === Users, time logs, templates, activities, logs ===

    #[tool(description = "List the organization's users.")]
    async fn list_users(&self) -> Result<CallToolResult, McpError> {
        Ok(tool_result(tools::users::list_users(&self.api).await))
    }

    #[tool(description = "Query recorded time logs for a date range, optionally filtered by board, row, user or tag. Time logs are read-only.")]
    async fn get_time_logs(
        &self,
        Parameters(req): Parameters<GetTimeLogsRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(tool_result(tools::timelogs::get_time_logs(&self.api, req).await))
    }

    #[tool(description = "List available workspace templates.")]
    async fn list_workspace_templates(&self) -> Result<CallToolResult, McpError> {
        Ok(tool_result(tools::templates::list_workspace_templates(&self.api).await))
    }

    #[tool(description = "List available board templates.")]
    async fn list_board_templates(&self) -> Result<CallToolResult, McpError> {
        Ok(tool_result(tools::templates::list_board_templates(&self.api).await))
    }

    #[tool(description = "Query item activity (audit) records for a board over a date range.")]
    async fn list_activities(
        &self,
        Parameters(req): Parameters<ListActivitiesRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(tool_result(tools::activities::list_activities(&self.api, req).await))
    }

    #[tool(description = "Query server log records, time-ranged and paged.")]
    async fn get_logs(
        &self,
        Parameters(req): Parameters<GetLogsRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(tool_result(tools::logs::get_logs(&self.api, req).await))
    }
}

impl ServerHandler for TaskdeckServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "taskdeck-mcp".into(),
                title: Some("Taskdeck project-management tools".into()),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Tools for the Taskdeck project-management API: workspaces, boards, rows, \
                 items, attachments, users, time logs, templates, activities and server logs. \
                 Results are the backend's JSON responses, pretty-printed."
                    .into(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tool_router.list_all(),
            next_cursor: None,
            meta: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        if !self.tool_router.has_route(request.name.as_ref()) {
            return Ok(CallToolResult::error(vec![Content::text(
                unknown_tool_message(&request.name),
            )]));
        }

        debug!(tool = %request.name, "dispatching tool call");
        let context = ToolCallContext::new(self, request, context);
        self.tool_router.call(context).await
    }
}

/// Serve the MCP protocol over stdio until the client disconnects.
pub async fn run_stdio_server(api: ApiClient) -> anyhow::Result<()> {
    info!("Starting Taskdeck MCP server via stdio");

    let server = TaskdeckServer::new(api);
    let transport = rmcp::transport::io::stdio();
    let service = rmcp::serve_server(server, transport).await?;

    let quit_reason = service.waiting().await?;
    info!("MCP server stopped: {:?}", quit_reason);

    Ok(())
}
