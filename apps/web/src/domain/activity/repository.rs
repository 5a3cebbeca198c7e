use super::entity::Activity;
use crate::domain::shared::{errors::DomainError, list_options::ListOptions};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Newest first.
    async fn list(&self, options: &ListOptions<()>) -> Result<Vec<Activity>, DomainError>;
    async fn count(&self) -> Result<i64, DomainError>;
    async fn save(&self, activity: &Activity) -> Result<(), DomainError>;
}
