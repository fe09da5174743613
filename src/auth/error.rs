use axum::http::StatusCode;
use thiserror::Error;

/// Failure modes of the admin auth service. Expected failures are returned
/// as variants; only unexpected backend errors end up in `Storage`.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("{0}")]
    Validation(String),

    #[error("Username already exists")]
    DuplicateUsername,

    #[error("Email already exists")]
    DuplicateEmail,

    #[error("User not found")]
    NotFound,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Database error occurred")]
    Storage(#[source] anyhow::Error),
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::DuplicateUsername | AuthError::DuplicateEmail => StatusCode::CONFLICT,
            AuthError::NotFound => StatusCode::NOT_FOUND,
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn into_http(self) -> (StatusCode, String) {
        (self.status(), self.to_string())
    }
}

impl From<sqlx::Error> for AuthError {
    fn from(e: sqlx::Error) -> Self {
        // The store's UNIQUE constraints are the authoritative uniqueness
        // guarantee; the service pre-check can lose a race to them.
        if let sqlx::Error::Database(db) = &e {
            if db.code().as_deref() == Some("23505") {
                match db.constraint() {
                    Some("admin_users_username_key") => return AuthError::DuplicateUsername,
                    Some("admin_users_email_key") => return AuthError::DuplicateEmail,
                    _ => {}
                }
            }
        }
        AuthError::Storage(anyhow::Error::new(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_variants() {
        assert_eq!(
            AuthError::Validation("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AuthError::DuplicateUsername.status(), StatusCode::CONFLICT);
        assert_eq!(AuthError::DuplicateEmail.status(), StatusCode::CONFLICT);
        assert_eq!(AuthError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AuthError::InvalidCredentials.status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn messages_do_not_leak_internals() {
        let (status, msg) = AuthError::Storage(anyhow::anyhow!("connection refused")).into_http();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(msg, "Database error occurred");
    }
}
