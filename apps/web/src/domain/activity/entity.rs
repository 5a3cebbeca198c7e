use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

pub const SENT_MESSAGE: &str = "sent a message to";
pub const ADDED_COMMENT: &str = "added a comment";

/// One entry of the activity feed: `sender` did `activity_stream` to
/// `receiver`, about the record identified by `activity_key`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, sqlx::FromRow)]
#[ts(export)]
pub struct Activity {
    pub id: Uuid,
    pub activity_stream: String,
    pub activity_key: Uuid,
    pub sender: Uuid,
    pub receiver: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Activity {
    pub fn new(activity_stream: &str, activity_key: Uuid, sender: Uuid, receiver: Uuid) -> Self {
        Self {
            id: Uuid::now_v7(),
            activity_stream: activity_stream.to_string(),
            activity_key,
            sender,
            receiver,
            created_at: Utc::now(),
        }
    }
}
