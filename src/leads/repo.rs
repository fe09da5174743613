use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::leads::dto::SubmitLeadRequest;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct QuizLead {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub project_type: String,
    pub budget: String,
    pub timeline: String,
    pub features: String,
    pub status: String,
    pub created_at: OffsetDateTime,
}

impl QuizLead {
    pub async fn insert(db: &PgPool, req: &SubmitLeadRequest) -> sqlx::Result<QuizLead> {
        sqlx::query_as::<_, QuizLead>(
            r#"
            INSERT INTO quiz_leads (name, email, company, project_type, budget, timeline, features)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, email, company, project_type, budget, timeline, features,
                      status, created_at
            "#,
        )
        .bind(req.name.trim())
        .bind(req.email.trim().to_lowercase())
        .bind(req.company.as_deref().map(str::trim).filter(|s| !s.is_empty()))
        .bind(req.project_type.trim())
        .bind(req.budget.trim())
        .bind(req.timeline.trim())
        .bind(req.features.trim())
        .fetch_one(db)
        .await
    }

    pub async fn list(
        db: &PgPool,
        status: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> sqlx::Result<Vec<QuizLead>> {
        sqlx::query_as::<_, QuizLead>(
            r#"
            SELECT id, name, email, company, project_type, budget, timeline, features,
                   status, created_at
            FROM quiz_leads
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
        let result = sqlx::query("UPDATE quiz_leads SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(db)
            .await?;
        Ok(result.rows_affected())
    }
}
