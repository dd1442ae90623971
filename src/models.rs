use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Upper bound on entry content, counted in Unicode scalar values.
pub const MAX_CONTENT_CHARS: usize = 140;

/// One persisted diary entry. At most one exists per calendar date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEntry {
    pub id: i64,
    pub date: NaiveDate,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for both write endpoints. `content` stays optional so the
/// handlers can answer missing fields with the documented 400 instead of a
/// deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct EntryPayload {
    pub content: Option<String>,
}
