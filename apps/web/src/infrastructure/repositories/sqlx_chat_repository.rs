use crate::domain::{
    chat::{
        entity::{Chat, ChatCriteria},
        repository::ChatRepository,
    },
    shared::{errors::DomainError, list_options::ListOptions},
};
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::{debug, error, instrument};
use uuid::Uuid;

pub struct SqlxChatRepository {
    pub pool: PgPool,
}

impl SqlxChatRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChatRepository for SqlxChatRepository {
    async fn load(&self, id: Uuid) -> Result<Option<Chat>, DomainError> {
        let chat = sqlx::query_as::<_, Chat>(
            "SELECT id, message, receiver, sender, created_at FROM chats WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(chat)
    }

    #[instrument(skip(self), fields(receiver = ?options.criteria.receiver))]
    async fn list(&self, options: &ListOptions<ChatCriteria>) -> Result<Vec<Chat>, DomainError> {
        let mut qb: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("SELECT id, message, receiver, sender, created_at FROM chats");
        if let Some(receiver) = options.criteria.receiver {
            qb.push(" WHERE receiver = ").push_bind(receiver);
        }
        qb.push(" ORDER BY created_at DESC, id DESC");
        if let Some(limit) = options.limit() {
            qb.push(" LIMIT ").push_bind(limit);
            qb.push(" OFFSET ").push_bind(options.offset());
        }

        let chats = qb
            .build_query_as::<Chat>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!("Chat listing failed: {}", e);
                DomainError::InfrastructureError(e.to_string())
            })?;
        debug!(found = chats.len(), "Listed chats");
        Ok(chats)
    }

    async fn save(&self, chat: &Chat) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT INTO chats (id, message, receiver, sender, created_at) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(chat.id)
        .bind(&chat.message)
        .bind(chat.receiver)
        .bind(chat.sender)
        .bind(chat.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
