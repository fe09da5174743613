use axum::extract::FromRef;
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::dto::{AdminUser, CreateUserRequest, SessionTicket};
use crate::auth::error::AuthError;
use crate::auth::password::{hash_password, verify_password};
use crate::auth::repo::AdminUserRow;
use crate::auth::token::SessionKeys;
use crate::state::AppState;

/// Check credentials against the store.
///
/// `NotFound` (no active account under that username) and
/// `InvalidCredentials` (wrong password) are distinct here so callers can
/// log precisely; the HTTP layer collapses both into one 401 message so the
/// response never reveals which usernames exist.
pub async fn authenticate(
    db: &PgPool,
    username: &str,
    password: &str,
) -> Result<AdminUser, AuthError> {
    let row = AdminUserRow::find_active_by_username(db, username)
        .await?
        .ok_or(AuthError::NotFound)?;

    if !verify_password(password, &row.password_hash) {
        warn!(username, user_id = %row.id, "login with invalid password");
        return Err(AuthError::InvalidCredentials);
    }

    // Best-effort: a failed timestamp write must not fail the login.
    if let Err(e) = AdminUserRow::touch_last_login(db, row.id).await {
        warn!(error = %e, user_id = %row.id, "failed to update last_login_at");
    }

    info!(user_id = %row.id, username = %row.username, "admin logged in");
    Ok(row.into())
}

pub async fn create_user(db: &PgPool, req: CreateUserRequest) -> Result<AdminUser, AuthError> {
    let username = req.username.trim().to_string();
    let email = req.email.trim().to_lowercase();
    let full_name = req
        .full_name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from);

    if username.is_empty() || email.is_empty() || req.password.trim().is_empty() {
        return Err(AuthError::Validation("All fields are required".into()));
    }

    // Pre-check both uniqueness constraints in one query. Username wins when
    // both collide. A concurrent insert can still slip past this; the UNIQUE
    // constraints catch it and the sqlx error maps back to the same variants.
    let existing = AdminUserRow::find_by_username_or_email(db, &username, &email).await?;
    if existing.iter().any(|u| u.username == username) {
        return Err(AuthError::DuplicateUsername);
    }
    if existing.iter().any(|u| u.email == email) {
        return Err(AuthError::DuplicateEmail);
    }

    let password_hash = hash_password(&req.password).map_err(AuthError::Storage)?;

    let row = AdminUserRow::insert(db, &username, &email, &password_hash, full_name.as_deref())
        .await?;
    info!(user_id = %row.id, username = %row.username, "admin user created");
    Ok(row.into())
}

/// All admin accounts, newest first. An empty list is a valid result.
pub async fn get_all_users(db: &PgPool) -> Result<Vec<AdminUser>, AuthError> {
    let rows = AdminUserRow::list_all(db).await?;
    Ok(rows.into_iter().map(AdminUser::from).collect())
}

/// Idempotent activate/deactivate toggle.
pub async fn update_user_status(
    db: &PgPool,
    user_id: Uuid,
    is_active: bool,
) -> Result<(), AuthError> {
    let updated = AdminUserRow::set_active(db, user_id, is_active).await?;
    if updated == 0 {
        return Err(AuthError::NotFound);
    }
    info!(user_id = %user_id, is_active, "admin user status updated");
    Ok(())
}

pub async fn delete_user(db: &PgPool, user_id: Uuid) -> Result<(), AuthError> {
    let deleted = AdminUserRow::delete(db, user_id).await?;
    if deleted == 0 {
        return Err(AuthError::NotFound);
    }
    info!(user_id = %user_id, "admin user deleted");
    Ok(())
}

/// Confirm a previously issued session token still belongs to an existing,
/// active account, and hand back a refreshed ticket. This is the whole
/// revalidation contract: no password is stored or replayed.
pub async fn revalidate_session(state: &AppState, token: &str) -> Result<SessionTicket, AuthError> {
    let keys = SessionKeys::from_ref(state);
    let claims = keys.verify(token).map_err(|_| AuthError::InvalidCredentials)?;

    let row = AdminUserRow::find_by_id(&state.db, claims.sub)
        .await?
        .ok_or(AuthError::NotFound)?;

    if !row.is_active {
        warn!(user_id = %row.id, "session revalidation for deactivated account");
        return Err(AuthError::InvalidCredentials);
    }

    let token = keys.sign(row.id).map_err(AuthError::Storage)?;
    Ok(SessionTicket {
        token,
        user: row.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;

    // Validation runs before any query, so a lazily connecting pool that
    // would fail on first use proves the order of checks.

    #[tokio::test]
    async fn create_user_rejects_empty_username() {
        let state = AppState::fake();
        let err = create_user(
            &state.db,
            CreateUserRequest {
                username: "   ".into(),
                email: "alice@x.com".into(),
                password: "Secr3t!".into(),
                full_name: None,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
    }

    #[tokio::test]
    async fn create_user_rejects_empty_email() {
        let state = AppState::fake();
        let err = create_user(
            &state.db,
            CreateUserRequest {
                username: "alice".into(),
                email: "".into(),
                password: "Secr3t!".into(),
                full_name: None,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
    }

    #[tokio::test]
    async fn create_user_rejects_blank_password() {
        let state = AppState::fake();
        let err = create_user(
            &state.db,
            CreateUserRequest {
                username: "alice".into(),
                email: "alice@x.com".into(),
                password: "  ".into(),
                full_name: None,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
    }

    #[tokio::test]
    async fn revalidate_rejects_garbage_token() {
        let state = AppState::fake();
        let err = revalidate_session(&state, "not-a-token").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }
}
