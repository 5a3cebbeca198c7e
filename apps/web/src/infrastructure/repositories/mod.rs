pub mod sqlx_activity_repository;
pub mod sqlx_chat_repository;
pub mod sqlx_tweet_repository;
pub mod sqlx_user_repository;
