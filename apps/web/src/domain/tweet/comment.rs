use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, sqlx::FromRow)]
#[ts(export)]
pub struct Comment {
    pub id: Uuid,
    pub tweet_id: Uuid,
    pub user_id: Uuid,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(tweet_id: Uuid, user_id: Uuid, body: String) -> Self {
        Self {
            id: Uuid::now_v7(),
            tweet_id,
            user_id,
            body,
            created_at: Utc::now(),
        }
    }
}
