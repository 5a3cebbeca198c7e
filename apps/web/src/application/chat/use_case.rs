use super::dto::SendChatRequest;
use crate::application::list_page::{Page, compose_page};
use crate::domain::{
    activity::{
        entity::{Activity, SENT_MESSAGE},
        repository::ActivityRepository,
    },
    chat::{
        entity::{Chat, ChatCriteria},
        repository::ChatRepository,
    },
    shared::{errors::DomainError, list_options::ListOptions, pagination::PageRequest},
    user::{
        entity::{User, UserCriteria},
        repository::UserRepository,
    },
};
use std::sync::Arc;
use uuid::Uuid;

pub struct ChatUseCase {
    users: Arc<dyn UserRepository>,
    chats: Arc<dyn ChatRepository>,
    activities: Arc<dyn ActivityRepository>,
}

impl ChatUseCase {
    pub fn new(
        users: Arc<dyn UserRepository>,
        chats: Arc<dyn ChatRepository>,
        activities: Arc<dyn ActivityRepository>,
    ) -> Self {
        Self {
            users,
            chats,
            activities,
        }
    }

    /// Users that can be chatted with: those with a GitHub login, one page
    /// at a time.
    ///
    /// The page count is derived from the total number of users, not only
    /// the ones matching the listing filter.
    pub async fn contacts(&self, request: PageRequest) -> Result<Page<User>, DomainError> {
        let options = ListOptions::paged(UserCriteria::with_github(), &request);
        compose_page(request, self.users.list(&options), self.users.count()).await
    }

    pub async fn load(&self, id: Uuid) -> Result<Chat, DomainError> {
        self.chats
            .load(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Failed to load chat {}", id)))
    }

    /// Every chat addressed to `receiver`, unpaged.
    pub async fn conversation(&self, receiver: Uuid) -> Result<Vec<Chat>, DomainError> {
        self.chats
            .list(&ListOptions::all(ChatCriteria::received_by(receiver)))
            .await
    }

    /// Stores a chat and its activity entry.
    ///
    /// The activity is written whatever happened to the chat. Only a failed
    /// chat save fails the call; a failed activity save is logged.
    pub async fn send(&self, sender: Uuid, request: SendChatRequest) -> Result<Chat, DomainError> {
        let chat = Chat::new(request.message, request.receiver, sender);
        tracing::info!(chat_id = %chat.id, sender = %sender, receiver = %chat.receiver, "chat instance");

        let saved = self.chats.save(&chat).await;

        let activity = Activity::new(SENT_MESSAGE, chat.id, sender, request.receiver);
        if let Err(e) = self.activities.save(&activity).await {
            tracing::error!(error = %e, activity_key = %chat.id, "Failed to record chat activity");
        }

        match saved {
            Ok(()) => Ok(chat),
            Err(e) => {
                tracing::error!(error = %e, chat_id = %chat.id, "Failed to save chat");
                Err(e)
            }
        }
    }
}
