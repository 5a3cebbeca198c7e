use crate::application::list_page::{Page, compose_page};
use crate::domain::{
    activity::{entity::Activity, repository::ActivityRepository},
    shared::{errors::DomainError, list_options::ListOptions, pagination::PageRequest},
};
use std::sync::Arc;

pub struct ActivityFeedUseCase {
    activities: Arc<dyn ActivityRepository>,
}

impl ActivityFeedUseCase {
    pub fn new(activities: Arc<dyn ActivityRepository>) -> Self {
        Self { activities }
    }

    pub async fn feed(&self, request: PageRequest) -> Result<Page<Activity>, DomainError> {
        let options = ListOptions::paged((), &request);
        compose_page(
            request,
            self.activities.list(&options),
            self.activities.count(),
        )
        .await
    }
}
