use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Contact-form submission. Append-only, apart from the read flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Submission timestamp in milliseconds, doubling as the record id.
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

impl Message {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        let now = Utc::now();
        Self {
            id: now.timestamp_millis(),
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
            created_at: now,
            read: false,
        }
    }
}
