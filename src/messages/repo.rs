use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::messages::dto::SubmitMessageRequest;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ContactMessage {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: Option<String>,
    pub project_type: Option<String>,
    pub message: String,
    pub status: String,
    pub created_at: OffsetDateTime,
}

impl ContactMessage {
    pub async fn insert(db: &PgPool, req: &SubmitMessageRequest) -> sqlx::Result<ContactMessage> {
        sqlx::query_as::<_, ContactMessage>(
            r#"
            INSERT INTO contact_messages (first_name, last_name, email, company, project_type, message)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, first_name, last_name, email, company, project_type, message,
                      status, created_at
            "#,
        )
        .bind(req.first_name.trim())
        .bind(req.last_name.trim())
        .bind(req.email.trim().to_lowercase())
        .bind(req.company.as_deref().map(str::trim).filter(|s| !s.is_empty()))
        .bind(req.project_type.as_deref().map(str::trim).filter(|s| !s.is_empty()))
        .bind(req.message.trim())
        .fetch_one(db)
        .await
    }

    pub async fn list(
        db: &PgPool,
        status: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> sqlx::Result<Vec<ContactMessage>> {
        sqlx::query_as::<_, ContactMessage>(
            r#"
            SELECT id, first_name, last_name, email, company, project_type, message,
                   status, created_at
            FROM contact_messages
            WHERE $1::text IS NULL OR status = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(status)
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await
    }

    /// Returns the number of rows updated (0 when the id does not exist).
    pub async fn set_status(db: &PgPool, id: Uuid, status: &str) -> sqlx::Result<u64> {
        let result = sqlx::query("UPDATE contact_messages SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(db)
            .await?;
        Ok(result.rows_affected())
    }
}
