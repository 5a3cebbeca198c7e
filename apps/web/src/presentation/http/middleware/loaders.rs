//! Route-layer loaders that resolve a path id into a typed request extension
//! before the handler runs.
//!
//! A malformed id or a failed lookup ends the request with an [`AppError`];
//! the handler behind the loader is never called in that case.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::{chat::entity::Chat, tweet::entity::Tweet};
use crate::presentation::http::{errors::AppError, extract::PathParams, state::AppState};

#[derive(Debug, Clone)]
pub struct LoadedChat(pub Chat);

#[derive(Debug, Clone)]
pub struct LoadedTweet(pub Tweet);

/// Only the tweet id matters here; nested segments such as a comment id are
/// left to the handler.
#[derive(Debug, Deserialize)]
pub struct TweetPath {
    id: Uuid,
}

pub async fn load_chat(
    State(state): State<AppState>,
    PathParams(id): PathParams<Uuid>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let chat = state.chat_use_case().load(id).await?;
    req.extensions_mut().insert(LoadedChat(chat));
    Ok(next.run(req).await)
}

pub async fn load_tweet(
    State(state): State<AppState>,
    PathParams(path): PathParams<TweetPath>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let tweet = state.comments_use_case().load_tweet(path.id).await?;
    req.extensions_mut().insert(LoadedTweet(tweet));
    Ok(next.run(req).await)
}
