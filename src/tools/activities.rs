// src/tools/activities.rs
// Same POST-as-read constraint as /timelogs.

use reqwest::Method;
use serde_json::{Map, Value, json};

use super::put_opt;
use crate::api::{ApiClient, ApiError};
use crate::server::requests::ListActivitiesRequest;

pub async fn list_activities(
    api: &ApiClient,
    req: ListActivitiesRequest,
) -> Result<Value, ApiError> {
    let path = format!("/boards/{}/item-activities", req.board_id);

    let mut body = Map::new();
    body.insert("startDate".to_string(), json!(req.start_date));
    body.insert("endDate".to_string(), json!(req.end_date));
    put_opt(&mut body, "skip", req.skip);
    put_opt(&mut body, "take", req.take);

    api.request(Method::POST, &path, Some(&Value::Object(body)))
        .await
}
