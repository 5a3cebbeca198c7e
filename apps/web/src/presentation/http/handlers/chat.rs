use crate::{
    application::chat::dto::{SendChatForm, SendChatRequest},
    domain::{
        chat::entity::Chat,
        shared::pagination::{PageRequest, PaginationView},
        user::entity::User,
    },
    presentation::http::{
        errors::AppError,
        extract::PathParams,
        middleware::{loaders::LoadedChat, user::CurrentUser},
        state::AppState,
        views::{self, CHAT_CONVERSATION, CHAT_INDEX},
    },
};
use axum::{
    Extension, Form, Json,
    extract::{Query, State},
    http::{HeaderMap, header},
    response::{Html, Redirect},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;

/// Where to send the browser after a chat is posted without a referrer.
const DEFAULT_RETURN_PATH: &str = "/chat";

/// `page` is read as text so junk values fall back to the first page instead
/// of rejecting the request.
#[derive(Debug, Deserialize)]
pub struct ChatIndexQuery {
    page: Option<String>,
}

#[derive(Serialize)]
struct ChatIndexView<'a> {
    title: &'static str,
    users: &'a [User],
    page: i64,
    pagination: &'a PaginationView,
    pages: i64,
}

#[derive(Serialize)]
struct ConversationView<'a> {
    chats: &'a [Chat],
}

/// Lists the users that can be chatted with, ten per page.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ChatIndexQuery>,
) -> Result<Html<String>, AppError> {
    let request = PageRequest::from_query(query.page.as_deref());
    let contacts = state.chat_use_case().contacts(request).await?;

    views::render(
        CHAT_INDEX,
        &ChatIndexView {
            title: "Chat User List",
            users: &contacts.items,
            page: contacts.page,
            pagination: &contacts.pagination,
            pages: contacts.total_pages,
        },
    )
}

/// Dumps the chat resolved by the loader as JSON.
pub async fn show(Extension(LoadedChat(chat)): Extension<LoadedChat>) -> Json<Chat> {
    Json(chat)
}

#[instrument(skip(state))]
pub async fn get_chat(
    State(state): State<AppState>,
    PathParams(userid): PathParams<Uuid>,
) -> Result<Html<String>, AppError> {
    let chats = state.chat_use_case().conversation(userid).await?;
    views::render(CHAT_CONVERSATION, &ConversationView { chats: &chats })
}

pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    headers: HeaderMap,
    Form(form): Form<SendChatForm>,
) -> Result<Redirect, AppError> {
    let request = SendChatRequest::try_from(form)?;
    state.chat_use_case().send(user.id, request).await?;
    Ok(Redirect::to(referrer(&headers)))
}

fn referrer(headers: &HeaderMap) -> &str {
    headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_RETURN_PATH)
}
