use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A direct message from one user to another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, sqlx::FromRow)]
#[ts(export)]
pub struct Chat {
    pub id: Uuid,
    pub message: String,
    pub receiver: Uuid,
    pub sender: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Chat {
    /// The id is assigned up front so dependent records can reference the
    /// chat before it has been persisted.
    pub fn new(message: String, receiver: Uuid, sender: Uuid) -> Self {
        Self {
            id: Uuid::now_v7(),
            message,
            receiver,
            sender,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChatCriteria {
    pub receiver: Option<Uuid>,
}

impl ChatCriteria {
    pub fn received_by(receiver: Uuid) -> Self {
        Self {
            receiver: Some(receiver),
        }
    }
}
