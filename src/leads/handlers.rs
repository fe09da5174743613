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
    leads::dto::{LeadFilter, SubmitLeadRequest, UpdateLeadStatusRequest},
    leads::repo::QuizLead,
    notify,
    state::AppState,
    util::is_valid_email,
};

pub fn public_routes() -> Router<AppState> {
    Router::new().route("/leads", post(submit_lead))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/leads", get(list_leads))
        .route("/leads/:id/status", patch(update_lead_status))
}

#[instrument(skip(state, payload))]
pub async fn submit_lead(
    State(state): State<AppState>,
    Json(payload): Json<SubmitLeadRequest>,
) -> Result<(StatusCode, Json<QuizLead>), (StatusCode, String)> {
    if payload.name.trim().is_empty() || payload.email.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Name and email are required".into()));
    }
    if !is_valid_email(payload.email.trim()) {
        warn!(email = %payload.email, "lead with invalid email");
        return Err((StatusCode::BAD_REQUEST, "Invalid email".into()));
    }

    let lead = QuizLead::insert(&state.db, &payload).await.map_err(|e| {
        error!(error = %e, "lead insert failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Database error occurred".to_string(),
        )
    })?;

    // Notification is fire-and-forget; the submitter never waits on SMTP.
    notify::service::spawn_quiz_lead_notification(state.clone(), lead.clone());

    Ok((StatusCode::CREATED, Json(lead)))
}

#[instrument(skip(state))]
pub async fn list_leads(
    State(state): State<AppState>,
    AuthUser(_admin_id): AuthUser,
    Query(filter): Query<LeadFilter>,
) -> Result<Json<Vec<QuizLead>>, (StatusCode, String)> {
    let status = filter.status.map(|s| s.as_str());
    let leads = QuizLead::list(&state.db, status, filter.limit, filter.offset)
        .await
        .map_err(|e| {
            error!(error = %e, "list leads failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database error occurred".to_string(),
            )
        })?;
    Ok(Json(leads))
}

#[instrument(skip(state))]
pub async fn update_lead_status(
    State(state): State<AppState>,
    AuthUser(_admin_id): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateLeadStatusRequest>,
) -> Result<StatusCode, (StatusCode, String)> {
    let updated = QuizLead::set_status(&state.db, id, payload.status.as_str())
        .await
        .map_err(|e| {
            error!(error = %e, %id, "lead status update failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database error occurred".to_string(),
            )
        })?;
    if updated == 0 {
        return Err((StatusCode::NOT_FOUND, "Lead not found".into()));
    }
    Ok(StatusCode::NO_CONTENT)
}
