use crate::domain::{
    activity::{
        entity::{ADDED_COMMENT, Activity},
        repository::ActivityRepository,
    },
    shared::errors::DomainError,
    tweet::{comment::Comment, entity::Tweet, repository::TweetRepository},
};
use std::sync::Arc;
use uuid::Uuid;

pub struct CommentsUseCase {
    tweets: Arc<dyn TweetRepository>,
    activities: Arc<dyn ActivityRepository>,
}

impl CommentsUseCase {
    pub fn new(tweets: Arc<dyn TweetRepository>, activities: Arc<dyn ActivityRepository>) -> Self {
        Self { tweets, activities }
    }

    pub async fn load_tweet(&self, id: Uuid) -> Result<Tweet, DomainError> {
        self.tweets
            .load(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Failed to load tweet {}", id)))
    }

    /// Adds a comment and tells the tweet's author about it through the
    /// activity feed. Failing to record the activity does not undo the
    /// comment.
    pub async fn add(&self, tweet: &Tweet, author: Uuid, body: String) -> Result<Comment, DomainError> {
        let comment = Comment::new(tweet.id, author, body);
        if let Err(e) = self.tweets.add_comment(&comment).await {
            tracing::error!(error = %e, tweet_id = %tweet.id, "Failed to add comment");
            return Err(e);
        }

        let activity = Activity::new(ADDED_COMMENT, tweet.id, author, tweet.user_id);
        tracing::info!(activity_id = %activity.id, tweet_id = %tweet.id, "comment activity");
        if let Err(e) = self.activities.save(&activity).await {
            tracing::error!(error = %e, tweet_id = %tweet.id, "Failed to record comment activity");
        }

        Ok(comment)
    }

    pub async fn remove(&self, tweet_id: Uuid, comment_id: Uuid) -> Result<(), DomainError> {
        self.tweets.remove_comment(tweet_id, comment_id).await
    }
}
