// src/tools/mod.rs
// Dispatch handlers: one module per backend domain. Each handler performs the
// fixed HTTP template for its tool (path substitution, field renames, default
// values) and returns the backend's JSON verbatim.

pub mod activities;
pub mod attachments;
pub mod boards;
pub mod items;
pub mod logs;
pub mod templates;
pub mod timelogs;
pub mod users;
pub mod workspaces;

use serde::Serialize;
use serde_json::{Map, Value, json};

/// Insert `key` only when a value was supplied. Absent arguments must be
/// omitted from outgoing bodies entirely, never sent as null.
pub(crate) fn put_opt<T: Serialize>(map: &mut Map<String, Value>, key: &str, value: Option<T>) {
    if let Some(value) = value {
        map.insert(key.to_string(), json!(value));
    }
}
