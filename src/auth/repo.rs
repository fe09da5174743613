use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Admin account row as stored. Stays private to the auth module so the
/// hash cannot leak through a response type.
#[derive(Debug, Clone, FromRow)]
pub struct AdminUserRow {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub full_name: Option<String>,
    pub is_active: bool,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub last_login_at: Option<OffsetDateTime>,
}

/// Slim projection for the combined uniqueness pre-check.
#[derive(Debug, FromRow)]
pub struct UsernameEmail {
    pub username: String,
    pub email: String,
}

impl AdminUserRow {
    /// Case-sensitive lookup restricted to active accounts.
    pub async fn find_active_by_username(
        db: &PgPool,
        username: &str,
    ) -> sqlx::Result<Option<AdminUserRow>> {
        sqlx::query_as::<_, AdminUserRow>(
            r#"
            SELECT id, username, email, password_hash, full_name, is_active,
                   created_at, updated_at, last_login_at
            FROM admin_users
            WHERE username = $1 AND is_active = TRUE
            "#,
        )
        .bind(username)
        .fetch_optional(db)
        .await
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> sqlx::Result<Option<AdminUserRow>> {
        sqlx::query_as::<_, AdminUserRow>(
            r#"
            SELECT id, username, email, password_hash, full_name, is_active,
                   created_at, updated_at, last_login_at
            FROM admin_users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    /// One query answering "is either the username or the email taken?".
    pub async fn find_by_username_or_email(
        db: &PgPool,
        username: &str,
        email: &str,
    ) -> sqlx::Result<Vec<UsernameEmail>> {
        sqlx::query_as::<_, UsernameEmail>(
            r#"
            SELECT username, email
            FROM admin_users
            WHERE username = $1 OR email = $2
            LIMIT 2
            "#,
        )
        .bind(username)
        .bind(email)
        .fetch_all(db)
        .await
    }

    pub async fn insert(
        db: &PgPool,
        username: &str,
        email: &str,
        password_hash: &str,
        full_name: Option<&str>,
    ) -> sqlx::Result<AdminUserRow> {
        sqlx::query_as::<_, AdminUserRow>(
            r#"
            INSERT INTO admin_users (username, email, password_hash, full_name, is_active)
            VALUES ($1, $2, $3, $4, TRUE)
            RETURNING id, username, email, password_hash, full_name, is_active,
                      created_at, updated_at, last_login_at
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .bind(full_name)
        .fetch_one(db)
        .await
    }

    pub async fn list_all(db: &PgPool) -> sqlx::Result<Vec<AdminUserRow>> {
        sqlx::query_as::<_, AdminUserRow>(
            r#"
            SELECT id, username, email, password_hash, full_name, is_active,
                   created_at, updated_at, last_login_at
            FROM admin_users
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(db)
        .await
    }

    /// Best-effort login timestamp; the caller decides what a failure means.
    pub async fn touch_last_login(db: &PgPool, id: Uuid) -> sqlx::Result<()> {
        sqlx::query("UPDATE admin_users SET last_login_at = now() WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(())
    }

    /// Returns the number of rows updated (0 when the id does not exist).
    pub async fn set_active(db: &PgPool, id: Uuid, is_active: bool) -> sqlx::Result<u64> {
        let result =
            sqlx::query("UPDATE admin_users SET is_active = $2, updated_at = now() WHERE id = $1")
                .bind(id)
                .bind(is_active)
                .execute(db)
                .await?;
        Ok(result.rows_affected())
    }

    /// Hard delete. Returns the number of rows removed.
    pub async fn delete(db: &PgPool, id: Uuid) -> sqlx::Result<u64> {
        let result = sqlx::query("DELETE FROM admin_users WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected())
    }
}
