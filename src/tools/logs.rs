// src/tools/logs.rs

use reqwest::Method;
use serde_json::Value;

use crate::api::{ApiClient, ApiError, QueryString};
use crate::server::requests::GetLogsRequest;

pub async fn get_logs(api: &ApiClient, req: GetLogsRequest) -> Result<Value, ApiError> {
    let mut query = QueryString::new();
    query.push_opt("StartDate", req.start_date);
    query.push_opt("EndDate", req.end_date);
    query.push_opt("Skip", req.skip);
    query.push_opt("Take", req.take);

    api.request(Method::GET, &query.append_to("/logs"), None)
        .await
}
