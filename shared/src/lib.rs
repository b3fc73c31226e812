use serde::{Deserialize, Serialize};

/// A single todo record as it travels over the wire and sits in the store.
///
/// `id` is assigned by the store; whatever a client sends in it on create is
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    #[serde(default)]
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub is_complete: bool,
}

/// Body of `POST /api/todos/{id}`. Clients usually send a whole `TodoItem`;
/// only the completion flag is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionUpdate {
    pub is_complete: bool,
}

impl TodoItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: 0,
            title: title.into(),
            is_complete: false,
        }
    }
}
