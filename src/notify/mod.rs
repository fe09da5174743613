pub mod mailer;
pub mod repo;
pub mod service;
mod templates;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use tracing::{error, instrument};

use crate::auth::token::AuthUser;
use crate::notify::repo::EmailNotification;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/notifications", get(list_notifications))
}

#[instrument(skip(state))]
pub async fn list_notifications(
    State(state): State<AppState>,
    AuthUser(_admin_id): AuthUser,
) -> Result<Json<Vec<EmailNotification>>, (StatusCode, String)> {
    EmailNotification::list_all(&state.db)
        .await
        .map(Json)
        .map_err(|e| {
            error!(error = %e, "list notifications failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database error occurred".to_string(),
            )
        })
}
