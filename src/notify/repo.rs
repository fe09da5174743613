use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Audit row for an outbound notification: pending → sent | failed.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct EmailNotification {
    pub id: Uuid,
    pub recipient_email: String,
    pub template_type: String,
    pub status: String,
    pub sent_at: Option<OffsetDateTime>,
    pub created_at: OffsetDateTime,
}

impl EmailNotification {
    pub async fn insert_pending(
        db: &PgPool,
        recipient: &str,
        template_type: &str,
    ) -> sqlx::Result<Uuid> {
        let row: (Uuid,) = sqlx::query_as(
            "INSERT INTO email_notifications (recipient_email, template_type) \
             VALUES ($1, $2) RETURNING id",
        )
        .bind(recipient)
        .bind(template_type)
        .fetch_one(db)
        .await?;
        Ok(row.0)
    }

    pub async fn mark_sent(db: &PgPool, id: Uuid) -> sqlx::Result<()> {
        sqlx::query("UPDATE email_notifications SET status = 'sent', sent_at = now() WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(())
    }

    pub async fn mark_failed(db: &PgPool, id: Uuid) -> sqlx::Result<()> {
        sqlx::query("UPDATE email_notifications SET status = 'failed' WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(())
    }

    pub async fn list_all(db: &PgPool) -> sqlx::Result<Vec<EmailNotification>> {
        sqlx::query_as::<_, EmailNotification>(
            r#"
            SELECT id, recipient_email, template_type, status, sent_at, created_at
            FROM email_notifications
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(db)
        .await
    }
}
