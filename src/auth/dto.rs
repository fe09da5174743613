use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::auth::repo::AdminUserRow;

/// Public view of an admin account. The password hash never leaves the
/// auth module; this type simply has no field for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub is_active: bool,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub last_login_at: Option<OffsetDateTime>,
}

impl From<AdminUserRow> for AdminUser {
    fn from(r: AdminUserRow) -> Self {
        Self {
            id: r.id,
            username: r.username,
            email: r.email,
            full_name: r.full_name,
            is_active: r.is_active,
            created_at: r.created_at,
            updated_at: r.updated_at,
            last_login_at: r.last_login_at,
        }
    }
}

/// Input for the create-user flow.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: Option<String>,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// What a logged-in client holds: the session token plus the public user.
/// Returned by login and by session revalidation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionTicket {
    pub token: String,
    pub user: AdminUser,
}

/// Request body for the status toggle.
#[derive(Debug, Deserialize)]
pub struct UpdateUserStatusRequest {
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> AdminUser {
        AdminUser {
            id: Uuid::new_v4(),
            username: "alice".into(),
            email: "alice@x.com".into(),
            full_name: None,
            is_active: true,
            created_at: OffsetDateTime::UNIX_EPOCH,
            updated_at: OffsetDateTime::UNIX_EPOCH,
            last_login_at: None,
        }
    }

    #[test]
    fn admin_user_serializes_public_fields_only() {
        let json = serde_json::to_string(&sample_user()).unwrap();
        assert!(json.contains("alice@x.com"));
        assert!(json.contains("is_active"));
        assert!(!json.contains("password"));
    }

    #[test]
    fn session_ticket_roundtrips() {
        let ticket = SessionTicket {
            token: "abc.def.ghi".into(),
            user: sample_user(),
        };
        let json = serde_json::to_string(&ticket).unwrap();
        let back: SessionTicket = serde_json::from_str(&json).unwrap();
        assert_eq!(back.token, "abc.def.ghi");
        assert_eq!(back.user.username, "alice");
    }
}
