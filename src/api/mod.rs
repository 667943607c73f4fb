//! HTTP transport for the Taskdeck REST backend.
//!
//! One JSON entry point (`request`) plus a multipart entry point for
//! attachment uploads. Every request carries the raw API key in the
//! Authorization header; non-2xx responses surface the raw body text so
//! upstream validation failures stay diagnosable.

pub mod query;

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder};
use serde_json::Value;

use crate::config::Config;

pub use query::QueryString;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("API Error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("{0} not found")]
    NotFound(String),

    #[error("Invalid attachment content: {0}")]
    InvalidContent(#[from] base64::DecodeError),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid JSON in response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn builder(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, self.url(path))
            // Raw key, not a bearer token; that is what the backend expects.
            .header("Authorization", &self.api_key)
    }

    /// Issue a JSON request. `body` is serialized for POST/PUT and must be
    /// `None` for GET/DELETE. An empty success body decodes to `{}`.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let mut req = self.builder(method, path);
        if let Some(body) = body {
            req = req.header("Content-Type", "application/json").json(body);
        }

        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Object(serde_json::Map::new()));
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// Fetch raw response content (attachment downloads). No decoding is
    /// applied locally.
    pub async fn download(&self, path: &str) -> Result<String, ApiError> {
        let response = self.builder(Method::GET, path).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::Api {
                status: status.as_u16(),
                body: text,
            });
        }
        Ok(text)
    }

    /// Multipart upload of an attachment. Content-Type is left to reqwest so
    /// the multipart boundary is set correctly.
    pub async fn upload_attachment(
        &self,
        item_id: &str,
        name: &str,
        content: Vec<u8>,
    ) -> Result<Value, ApiError> {
        let form = reqwest::multipart::Form::new()
            .text("ItemId", item_id.to_string())
            .text("Name", name.to_string())
            .part(
                "Content",
                reqwest::multipart::Part::bytes(content).file_name(name.to_string()),
            );

        let response = self
            .client
            .post(self.url("/attachments"))
            .header("Authorization", &self.api_key)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Object(serde_json::Map::new()));
        }
        Ok(serde_json::from_str(&text)?)
    }
}
