use super::{comment::Comment, entity::Tweet};
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TweetRepository: Send + Sync {
    async fn load(&self, id: Uuid) -> Result<Option<Tweet>, DomainError>;
    async fn add_comment(&self, comment: &Comment) -> Result<(), DomainError>;
    /// Removes a comment of the given tweet. `NotFound` when the comment does
    /// not belong to that tweet.
    async fn remove_comment(&self, tweet_id: Uuid, comment_id: Uuid) -> Result<(), DomainError>;
}
