// src/tools/timelogs.rs
// The backend models this read as a POST with the filters in the body; that
// quirk is preserved for compatibility.

use reqwest::Method;
use serde_json::{Map, Value, json};

use super::put_opt;
use crate::api::{ApiClient, ApiError};
use crate::server::requests::GetTimeLogsRequest;

pub async fn get_time_logs(api: &ApiClient, req: GetTimeLogsRequest) -> Result<Value, ApiError> {
    let mut body = Map::new();
    body.insert("startDate".to_string(), json!(req.start_date));
    body.insert("endDate".to_string(), json!(req.end_date));
    put_opt(&mut body, "boardId", req.board_id);
    put_opt(&mut body, "rowId", req.row_id);
    put_opt(&mut body, "userId", req.user_id);
    put_opt(&mut body, "tag", req.tag);

    api.request(Method::POST, "/timelogs", Some(&Value::Object(body)))
        .await
}
