// src/api/query.rs
// Query-string assembly for GET endpoints. The backend expects capitalized
// parameter names; array filters repeat the key once per value.

use std::fmt::Display;

#[derive(Debug, Default)]
pub struct QueryString {
    pairs: Vec<(String, String)>,
}

impl QueryString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `key=value`, percent-encoding the value.
    pub fn push(&mut self, key: &str, value: impl Display) {
        self.pairs
            .push((key.to_string(), urlencoding::encode(&value.to_string()).into_owned()));
    }

    /// Append `key=value` only when the value is present.
    pub fn push_opt(&mut self, key: &str, value: Option<impl Display>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// Append the key once per value (`Tags=a&Tags=b`), never comma-joined.
    pub fn push_repeated(&mut self, key: &str, values: Option<&[String]>) {
        if let Some(values) = values {
            for value in values {
                self.push(key, value);
            }
        }
    }

    /// Render `path?k=v&...`, or just `path` when no pair was pushed.
    pub fn append_to(&self, path: &str) -> String {
        if self.pairs.is_empty() {
            return path.to_string();
        }
        let query = self
            .pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", path, query)
    }
}
