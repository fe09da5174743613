use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch, post},
    Json, Router,
};
use tracing::{error, instrument, warn};
use uuid::Uuid;

use crate::{
    auth::token::AuthUser,
    messages::dto::{MessageFilter, SubmitMessageRequest, UpdateMessageStatusRequest},
    messages::repo::ContactMessage,
    notify,
    state::AppState,
    util::is_valid_email,
};

pub fn public_routes() -> Router<AppState> {
    Router::new().route("/messages", post(submit_message))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/messages", get(list_messages))
        .route("/messages/:id/status", patch(update_message_status))
}

#[instrument(skip(state, payload))]
pub async fn submit_message(
    State(state): State<AppState>,
    Json(payload): Json<SubmitMessageRequest>,
) -> Result<(StatusCode, Json<ContactMessage>), (StatusCode, String)> {
    if payload.first_name.trim().is_empty()
        || payload.last_name.trim().is_empty()
        || payload.message.trim().is_empty()
    {
        return Err((
            StatusCode::BAD_REQUEST,
            "Name and message are required".into(),
        ));
    }
    if !is_valid_email(payload.email.trim()) {
        warn!(email = %payload.email, "contact message with invalid email");
        return Err((StatusCode::BAD_REQUEST, "Invalid email".into()));
    }

    let message = ContactMessage::insert(&state.db, &payload).await.map_err(|e| {
        error!(error = %e, "contact message insert failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Database error occurred".to_string(),
        )
    })?;

    notify::service::spawn_contact_notification(state.clone(), message.clone());

    Ok((StatusCode::CREATED, Json(message)))
}

#[instrument(skip(state))]
pub async fn list_messages(
    State(state): State<AppState>,
    AuthUser(_admin_id): AuthUser,
    Query(filter): Query<MessageFilter>,
) -> Result<Json<Vec<ContactMessage>>, (StatusCode, String)> {
    let status = filter.status.map(|s| s.as_str());
    let messages = ContactMessage::list(&state.db, status, filter.limit, filter.offset)
        .await
        .map_err(|e| {
            error!(error = %e, "list messages failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database error occurred".to_string(),
            )
        })?;
    Ok(Json(messages))
}

#[instrument(skip(state))]
pub async fn update_message_status(
    State(state): State<AppState>,
    AuthUser(_admin_id): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateMessageStatusRequest>,
) -> Result<StatusCode, (StatusCode, String)> {
    let updated = ContactMessage::set_status(&state.db, id, payload.status.as_str())
        .await
        .map_err(|e| {
            error!(error = %e, %id, "message status update failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database error occurred".to_string(),
            )
        })?;
    if updated == 0 {
        return Err((StatusCode::NOT_FOUND, "Message not found".into()));
    }
    Ok(StatusCode::NO_CONTENT)
}
