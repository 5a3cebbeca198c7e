use crate::domain::{
    shared::{errors::DomainError, list_options::ListOptions},
    user::{
        entity::{User, UserCriteria},
        repository::UserRepository,
    },
};
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::{debug, error, instrument};

pub struct SqlxUserRepository {
    pub pool: PgPool,
}

impl SqlxUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn apply_user_criteria(qb: &mut QueryBuilder<'_, Postgres>, criteria: &UserCriteria) {
    if criteria.github_exists {
        qb.push(" WHERE github IS NOT NULL");
    }
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
    #[instrument(skip(self), fields(page = ?options.page, per_page = ?options.per_page))]
    async fn list(&self, options: &ListOptions<UserCriteria>) -> Result<Vec<User>, DomainError> {
        let mut qb: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("SELECT id, name, username, email, github, created_at FROM users");
        apply_user_criteria(&mut qb, &options.criteria);
        qb.push(" ORDER BY created_at DESC, id DESC");
        if let Some(limit) = options.limit() {
            qb.push(" LIMIT ").push_bind(limit);
            qb.push(" OFFSET ").push_bind(options.offset());
        }

        let users = qb
            .build_query_as::<User>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!("User listing failed: {}", e);
                DomainError::InfrastructureError(e.to_string())
            })?;
        debug!(found = users.len(), "Listed users");
        Ok(users)
    }

    async fn count(&self) -> Result<i64, DomainError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
