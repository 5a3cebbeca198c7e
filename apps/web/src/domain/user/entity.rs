use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, sqlx::FromRow)]
#[ts(export)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub username: String,
    pub email: String,
    /// GitHub login, present only for accounts that signed in through GitHub.
    pub github: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Filter for user listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserCriteria {
    /// Only users that have a GitHub login attached.
    pub github_exists: bool,
}

impl UserCriteria {
    pub fn with_github() -> Self {
        Self {
            github_exists: true,
        }
    }
}
