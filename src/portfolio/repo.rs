use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::portfolio::dto::UpsertPortfolioRequest;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PortfolioItem {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
    pub technologies: Vec<String>,
    pub category: String,
    pub featured: bool,
    pub display_order: i32,
    pub enabled: bool,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl PortfolioItem {
    pub async fn insert(db: &PgPool, req: &UpsertPortfolioRequest) -> sqlx::Result<PortfolioItem> {
        sqlx::query_as::<_, PortfolioItem>(
            r#"
            INSERT INTO portfolios (title, description, image_url, project_url, github_url,
                                    technologies, category, featured, display_order)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, title, description, image_url, project_url, github_url,
                      technologies, category, featured, display_order, enabled,
                      created_at, updated_at
            "#,
        )
        .bind(req.title.trim())
        .bind(req.description.trim())
        .bind(req.image_url.trim())
        .bind(req.project_url.as_deref().map(str::trim).filter(|s| !s.is_empty()))
        .bind(req.github_url.as_deref().map(str::trim).filter(|s| !s.is_empty()))
        .bind(&req.technologies)
        .bind(req.category.trim())
        .bind(req.featured)
        .bind(req.display_order)
        .fetch_one(db)
        .await
    }

    pub async fn update(
        db: &PgPool,
        id: Uuid,
        req: &UpsertPortfolioRequest,
    ) -> sqlx::Result<Option<PortfolioItem>> {
        sqlx::query_as::<_, PortfolioItem>(
            r#"
            UPDATE portfolios
            SET title = $2, description = $3, image_url = $4, project_url = $5,
                github_url = $6, technologies = $7, category = $8, featured = $9,
                display_order = $10, updated_at = now()
            WHERE id = $1
            RETURNING id, title, description, image_url, project_url, github_url,
                      technologies, category, featured, display_order, enabled,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(req.title.trim())
        .bind(req.description.trim())
        .bind(req.image_url.trim())
        .bind(req.project_url.as_deref().map(str::trim).filter(|s| !s.is_empty()))
        .bind(req.github_url.as_deref().map(str::trim).filter(|s| !s.is_empty()))
        .bind(&req.technologies)
        .bind(req.category.trim())
        .bind(req.featured)
        .bind(req.display_order)
        .fetch_optional(db)
        .await
    }

    /// Items shown on the public site.
    pub async fn list_enabled(db: &PgPool) -> sqlx::Result<Vec<PortfolioItem>> {
        sqlx::query_as::<_, PortfolioItem>(
            r#"
            SELECT id, title, description, image_url, project_url, github_url,
                   technologies, category, featured, display_order, enabled,
                   created_at, updated_at
            FROM portfolios
            WHERE enabled = TRUE
            ORDER BY display_order ASC, created_at DESC
            "#,
        )
        .fetch_all(db)
        .await
    }

    pub async fn list_all(db: &PgPool) -> sqlx::Result<Vec<PortfolioItem>> {
        sqlx::query_as::<_, PortfolioItem>(
            r#"
            SELECT id, title, description, image_url, project_url, github_url,
                   technologies, category, featured, display_order, enabled,
                   created_at, updated_at
            FROM portfolios
            ORDER BY display_order ASC, created_at DESC
            "#,
        )
        .fetch_all(db)
        .await
    }

    /// Flip visibility, returning the new value (None when the id is gone).
    pub async fn toggle_enabled(db: &PgPool, id: Uuid) -> sqlx::Result<Option<bool>> {
        let row: Option<(bool,)> = sqlx::query_as(
            "UPDATE portfolios SET enabled = NOT enabled, updated_at = now() \
             WHERE id = $1 RETURNING enabled",
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(row.map(|(enabled,)| enabled))
    }

    /// Hard delete. Returns the number of rows removed.
    pub async fn delete(db: &PgPool, id: Uuid) -> sqlx::Result<u64> {
        let result = sqlx::query("DELETE FROM portfolios WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected())
    }
}
