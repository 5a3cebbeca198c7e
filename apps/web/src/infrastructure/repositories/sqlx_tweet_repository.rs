use crate::domain::{
    shared::errors::DomainError,
    tweet::{comment::Comment, entity::Tweet, repository::TweetRepository},
};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

pub struct SqlxTweetRepository {
    pub pool: PgPool,
}

impl SqlxTweetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TweetRepository for SqlxTweetRepository {
    async fn load(&self, id: Uuid) -> Result<Option<Tweet>, DomainError> {
        let tweet = sqlx::query_as::<_, Tweet>(
            "SELECT id, body, user_id, created_at FROM tweets WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(tweet)
    }

    async fn add_comment(&self, comment: &Comment) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT INTO comments (id, tweet_id, user_id, body, created_at) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(comment.id)
        .bind(comment.tweet_id)
        .bind(comment.user_id)
        .bind(&comment.body)
        .bind(comment.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn remove_comment(&self, tweet_id: Uuid, comment_id: Uuid) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1 AND tweet_id = $2")
            .bind(comment_id)
            .bind(tweet_id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("Comment {} not found", comment_id)));
        }
        Ok(())
    }
}
