use super::entity::{Chat, ChatCriteria};
use crate::domain::shared::{errors::DomainError, list_options::ListOptions};
use async_trait::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatRepository: Send + Sync {
    async fn load(&self, id: Uuid) -> Result<Option<Chat>, DomainError>;
    async fn list(&self, options: &ListOptions<ChatCriteria>) -> Result<Vec<Chat>, DomainError>;
    async fn save(&self, chat: &Chat) -> Result<(), DomainError>;
}
