use crate::domain::{
    activity::{entity::Activity, repository::ActivityRepository},
    shared::{errors::DomainError, list_options::ListOptions},
};
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

pub struct SqlxActivityRepository {
    pub pool: PgPool,
}

impl SqlxActivityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivityRepository for SqlxActivityRepository {
    async fn list(&self, options: &ListOptions<()>) -> Result<Vec<Activity>, DomainError> {
        let mut qb: QueryBuilder<'_, Postgres> = QueryBuilder::new(
            "SELECT id, activity_stream, activity_key, sender, receiver, created_at \
             FROM activities ORDER BY created_at DESC, id DESC",
        );
        if let Some(limit) = options.limit() {
            qb.push(" LIMIT ").push_bind(limit);
            qb.push(" OFFSET ").push_bind(options.offset());
        }
        let rows = qb.build_query_as::<Activity>().fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn count(&self) -> Result<i64, DomainError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM activities")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn save(&self, activity: &Activity) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT INTO activities (id, activity_stream, activity_key, sender, receiver, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(activity.id)
        .bind(&activity.activity_stream)
        .bind(activity.activity_key)
        .bind(activity.sender)
        .bind(activity.receiver)
        .bind(activity.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
