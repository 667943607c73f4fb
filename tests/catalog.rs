// tests/catalog.rs
// What the catalog advertises, independent of what dispatch actually sends.

use taskdeck_mcp::server::TaskdeckServer;

fn schema_of(name: &str) -> serde_json::Value {
    let tools = TaskdeckServer::get_tool_router().list_all();
    let tool = tools
        .iter()
        .find(|t| t.name == name)
        .unwrap_or_else(|| panic!("{name} not advertised"));
    serde_json::Value::Object((*tool.input_schema).clone())
}

fn required_of(schema: &serde_json::Value) -> Vec<String> {
    schema["required"]
        .as_array()
        .map(|list| {
            list.iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[test]
fn create_item_advertises_public_argument_names() {
    let schema = schema_of("create_item");
    let properties = schema["properties"].as_object().expect("object schema");

    // The caller-facing name is assigneeId; the upstream rename is private.
    assert!(properties.contains_key("assigneeId"));
    assert!(!properties.contains_key("assignedUserId"));
    assert!(properties.contains_key("blocking"));
    assert!(properties.contains_key("customFields"));

    let required = required_of(&schema);
    assert!(required.contains(&"boardId".to_string()));
    assert!(required.contains(&"title".to_string()));
    assert!(!required.contains(&"assigneeId".to_string()));
}

#[test]
fn update_item_requires_only_the_item_id() {
    let schema = schema_of("update_item");
    assert_eq!(required_of(&schema), vec!["itemId".to_string()]);
}

#[test]
fn list_items_advertises_twelve_filter_dimensions() {
    let schema = schema_of("list_items");
    let properties = schema["properties"].as_object().expect("object schema");
    assert_eq!(properties.len(), 12);
    assert!(required_of(&schema).is_empty(), "every filter is optional");
}

#[test]
fn time_log_queries_require_the_date_range() {
    let schema = schema_of("get_time_logs");
    let required = required_of(&schema);
    assert!(required.contains(&"startDate".to_string()));
    assert!(required.contains(&"endDate".to_string()));
    assert!(!required.contains(&"boardId".to_string()));
}
