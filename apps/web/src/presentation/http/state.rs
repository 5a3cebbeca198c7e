use crate::{
    application::{
        activity::use_case::ActivityFeedUseCase, chat::use_case::ChatUseCase,
        comments::use_case::CommentsUseCase,
    },
    config::Config,
    domain::{
        activity::repository::ActivityRepository, chat::repository::ChatRepository,
        tweet::repository::TweetRepository, user::repository::UserRepository,
    },
};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    pub users: Arc<dyn UserRepository>,
    pub chats: Arc<dyn ChatRepository>,
    pub activities: Arc<dyn ActivityRepository>,
    pub tweets: Arc<dyn TweetRepository>,
}

impl AppState {
    pub fn chat_use_case(&self) -> ChatUseCase {
        ChatUseCase::new(
            self.users.clone(),
            self.chats.clone(),
            self.activities.clone(),
        )
    }

    pub fn activity_feed(&self) -> ActivityFeedUseCase {
        ActivityFeedUseCase::new(self.activities.clone())
    }

    pub fn comments_use_case(&self) -> CommentsUseCase {
        CommentsUseCase::new(self.tweets.clone(), self.activities.clone())
    }
}
