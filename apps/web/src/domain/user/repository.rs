use super::entity::{User, UserCriteria};
use crate::domain::shared::{errors::DomainError, list_options::ListOptions};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list(&self, options: &ListOptions<UserCriteria>) -> Result<Vec<User>, DomainError>;
    /// Counts every user, regardless of any listing criteria.
    async fn count(&self) -> Result<i64, DomainError>;
}
