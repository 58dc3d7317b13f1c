// Data models for TodoStore

use serde::{Deserialize, Serialize};

/// One to-do entry
///
/// The serialized shape is the persisted wire format:
/// `{"id": <integer>, "text": <string>, "completed": <boolean>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identity key, immutable once created
    pub id: u64,
    /// Non-empty trimmed content
    pub text: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}
