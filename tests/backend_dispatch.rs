// tests/backend_dispatch.rs
// Dispatch behavior against a mock backend: field renames, patch wrapping,
// query construction, defaults, error surfacing, multipart round-trip.

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use taskdeck_mcp::api::ApiClient;
use taskdeck_mcp::config::Config;
use taskdeck_mcp::tools::{activities, attachments, boards, items, timelogs, users, workspaces};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&Config::new("test-key", server.uri())).expect("client")
}

fn req<T: serde::de::DeserializeOwned>(value: Value) -> T {
    serde_json::from_value(value).expect("valid request")
}

async fn only_request(server: &MockServer) -> wiremock::Request {
    let mut requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    requests.remove(0)
}

#[tokio::test]
async fn create_item_renames_assignee_and_forces_flags() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "I1"})))
        .mount(&server)
        .await;

    let result = items::create_item(
        &client_for(&server),
        req(json!({"boardId": "B1", "title": "Ship it", "assigneeId": "U1"})),
    )
    .await
    .expect("create succeeds");
    assert_eq!(result, json!({"id": "I1"}));

    let request = only_request(&server).await;
    let body: Value = request.body_json().expect("json body");

    assert_eq!(body["assignedUserId"], json!("U1"));
    assert!(body.get("assigneeId").is_none());
    assert_eq!(body["milestone"], json!(false));
    assert_eq!(body["isSuspended"], json!(false));
    assert_eq!(body["suspendReason"], json!(""));
    assert_eq!(body["tags"], json!([]));
    assert_eq!(body["blocking"], json!([]));
    assert_eq!(body["waiting"], json!([]));

    // Every outbound request carries the raw key, not a bearer token.
    assert_eq!(request.headers.get("Authorization").unwrap(), "test-key");
    assert_eq!(request.headers.get("Content-Type").unwrap(), "application/json");
}

#[tokio::test]
async fn update_item_wraps_only_present_fields_in_data() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/items/I1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;
    let api = client_for(&server);

    items::update_item(&api, req(json!({"itemId": "I1", "assigneeId": "U1"})))
        .await
        .expect("update succeeds");
    items::update_item(&api, req(json!({"itemId": "I1"})))
        .await
        .expect("empty update succeeds");

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 2);

    let first: Value = requests[0].body_json().expect("json body");
    assert_eq!(first, json!({"data": {"userId": "U1"}}));

    let second: Value = requests[1].body_json().expect("json body");
    assert_eq!(second, json!({"data": {}}));
}

#[tokio::test]
async fn move_item_omits_absent_targets() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/items/I1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    items::move_item(
        &client_for(&server),
        req(json!({"itemId": "I1", "boardId": "B2"})),
    )
    .await
    .expect("move succeeds");

    let body: Value = only_request(&server).await.body_json().expect("json body");
    assert_eq!(body, json!({"data": {"boardId": "B2"}}));
}

#[tokio::test]
async fn archive_item_defaults_to_true() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/items/I1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;
    let api = client_for(&server);

    items::archive_item(&api, req(json!({"itemId": "I1"})))
        .await
        .expect("archive succeeds");
    items::archive_item(&api, req(json!({"itemId": "I1", "archived": false})))
        .await
        .expect("unarchive succeeds");

    let requests = server.received_requests().await.expect("recording enabled");
    let first: Value = requests[0].body_json().expect("json body");
    assert_eq!(first, json!({"data": {"archived": true}}));
    let second: Value = requests[1].body_json().expect("json body");
    assert_eq!(second, json!({"data": {"archived": false}}));
}

#[tokio::test]
async fn list_items_builds_capitalized_query_with_repeated_tags() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    items::list_items(
        &client_for(&server),
        req(json!({"boardId": "B1", "tags": ["a", "b"], "archived": false, "take": 50})),
    )
    .await
    .expect("list succeeds");

    let request = only_request(&server).await;
    let query = request.url.query().expect("query string");

    assert!(query.contains("Tags=a&Tags=b"), "repeated keys, got {query}");
    assert!(query.contains("BoardId=B1"));
    assert!(query.contains("Archived=false"));
    assert!(query.contains("Take=50"));
    assert!(!query.contains("boardId"), "argument names must be renamed");
}

#[tokio::test]
async fn get_board_searches_the_workspace_board_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/workspaces/W1/boards"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "B1", "title": "Sprint"},
            {"id": "B2", "title": "Backlog"}
        ])))
        .mount(&server)
        .await;
    let api = client_for(&server);

    let found = boards::get_board(&api, req(json!({"workspaceId": "W1", "boardId": "B2"})))
        .await
        .expect("board exists");
    assert_eq!(found, json!({"id": "B2", "title": "Backlog"}));

    let missing = boards::get_board(&api, req(json!({"workspaceId": "W1", "boardId": "B9"})))
        .await
        .expect_err("board is absent");
    assert!(missing.to_string().contains("not found"));
}

#[tokio::test]
async fn backend_errors_surface_status_and_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items/I404"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
        .mount(&server)
        .await;

    let err = items::get_item(&client_for(&server), req(json!({"itemId": "I404"})))
        .await
        .expect_err("404 is an error");

    let message = err.to_string();
    assert!(message.contains("API Error 404"), "got {message}");
    assert!(message.contains("Not found"), "got {message}");
}

#[tokio::test]
async fn empty_success_body_becomes_empty_object() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/items/I1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let result = items::delete_item(&client_for(&server), req(json!({"itemId": "I1"})))
        .await
        .expect("delete succeeds");
    assert_eq!(result, json!({}));
}

#[tokio::test]
async fn upload_attachment_decodes_base64_into_multipart_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/attachments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "A1"})))
        .mount(&server)
        .await;

    // "AQI=" is the base64 encoding of the bytes [0x01, 0x02].
    attachments::upload_attachment(
        &client_for(&server),
        req(json!({"itemId": "I1", "name": "trace.bin", "content": "AQI="})),
    )
    .await
    .expect("upload succeeds");

    let request = only_request(&server).await;

    let content_type = request
        .headers
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .expect("content type");
    assert!(
        content_type.starts_with("multipart/form-data; boundary="),
        "boundary must come from the multipart encoder, got {content_type}"
    );

    let body_text = String::from_utf8_lossy(&request.body);
    assert!(body_text.contains("name=\"ItemId\""));
    assert!(body_text.contains("name=\"Name\""));
    assert!(body_text.contains("name=\"Content\""));
    assert!(
        request.body.windows(2).any(|w| w == [0x01, 0x02]),
        "decoded bytes must round-trip into the Content part"
    );
}

#[tokio::test]
async fn timelog_and_activity_reads_are_posts_with_json_bodies() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/timelogs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/boards/B1/item-activities"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    let api = client_for(&server);

    timelogs::get_time_logs(
        &api,
        req(json!({"startDate": "2026-01-01", "endDate": "2026-01-31", "userId": "U1"})),
    )
    .await
    .expect("timelogs query succeeds");

    activities::list_activities(
        &api,
        req(json!({"boardId": "B1", "startDate": "2026-01-01", "endDate": "2026-01-31"})),
    )
    .await
    .expect("activities query succeeds");

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 2);

    let timelog_body: Value = requests[0].body_json().expect("json body");
    assert_eq!(timelog_body["startDate"], json!("2026-01-01"));
    assert_eq!(timelog_body["userId"], json!("U1"));
    assert!(requests[0].url.query().is_none(), "filters go in the body");

    let activity_body: Value = requests[1].body_json().expect("json body");
    assert_eq!(activity_body["endDate"], json!("2026-01-31"));
    assert!(activity_body.get("skip").is_none());
}

#[tokio::test]
async fn download_attachment_returns_raw_content() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/attachments/A1/content"))
        .respond_with(ResponseTemplate::new(200).set_body_string("raw file content"))
        .mount(&server)
        .await;

    let content = attachments::download_attachment(
        &client_for(&server),
        req(json!({"attachmentId": "A1"})),
    )
    .await
    .expect("download succeeds");
    assert_eq!(content, "raw file content");
}

#[tokio::test]
async fn membership_put_sends_no_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/workspaces/W1/users/U7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    workspaces::add_workspace_user(
        &client_for(&server),
        req(json!({"workspaceId": "W1", "userId": "U7"})),
    )
    .await
    .expect("membership update succeeds");

    let request = only_request(&server).await;
    assert!(request.body.is_empty());
    assert!(request.headers.get("Content-Type").is_none());
}

#[tokio::test]
async fn plain_listings_hit_their_paths() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"id": "U1", "name": "Dana"}])),
        )
        .mount(&server)
        .await;

    let result = users::list_users(&client_for(&server)).await.expect("list succeeds");
    assert_eq!(result, json!([{"id": "U1", "name": "Dana"}]));
}
