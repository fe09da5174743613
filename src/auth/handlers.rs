use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    routing::{delete, get, patch, post},
    Json, Router,
};
use tracing::{error, instrument, warn};
use uuid::Uuid;

use crate::{
    auth::{
        dto::{
            AdminUser, CreateUserRequest, LoginRequest, SessionTicket, UpdateUserStatusRequest,
        },
        error::AuthError,
        service,
        token::{AuthUser, BearerToken, SessionKeys},
    },
    state::AppState,
};

pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/session", get(session))
}

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/users", get(list_users).post(create_user))
        .route("/auth/users/:id/status", patch(update_user_status))
        .route("/auth/users/:id", delete(delete_user))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<SessionTicket>, (StatusCode, String)> {
    let user = match service::authenticate(&state.db, &payload.username, &payload.password).await {
        Ok(u) => u,
        // Unknown username and wrong password are indistinguishable from
        // the outside; a probe cannot enumerate accounts.
        Err(AuthError::NotFound | AuthError::InvalidCredentials) => {
            warn!(username = %payload.username, "login rejected");
            return Err((StatusCode::UNAUTHORIZED, "Invalid credentials".into()));
        }
        Err(e) => {
            error!(error = ?e, "authenticate failed");
            return Err(e.into_http());
        }
    };

    let keys = SessionKeys::from_ref(&state);
    let token = keys.sign(user.id).map_err(|e| {
        error!(error = %e, "session token signing failed");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    Ok(Json(SessionTicket { token, user }))
}

/// Revalidate the bearer token on application load and hand back a
/// refreshed ticket. Any failure is a plain 401 so the client clears its
/// stored session and falls back to the login form.
#[instrument(skip(state, token))]
pub async fn session(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Result<Json<SessionTicket>, (StatusCode, String)> {
    match service::revalidate_session(&state, &token).await {
        Ok(ticket) => Ok(Json(ticket)),
        Err(AuthError::Storage(e)) => {
            error!(error = %e, "session revalidation hit the store");
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Database error occurred".into()))
        }
        Err(e) => {
            warn!(error = %e, "session revalidation rejected");
            Err((StatusCode::UNAUTHORIZED, "Invalid credentials".into()))
        }
    }
}

#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
    AuthUser(_admin_id): AuthUser,
) -> Result<Json<Vec<AdminUser>>, (StatusCode, String)> {
    service::get_all_users(&state.db)
        .await
        .map(Json)
        .map_err(|e| {
            error!(error = ?e, "list users failed");
            e.into_http()
        })
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    AuthUser(_admin_id): AuthUser,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<AdminUser>), (StatusCode, String)> {
    match service::create_user(&state.db, payload).await {
        Ok(user) => Ok((StatusCode::CREATED, Json(user))),
        Err(e) => {
            warn!(error = ?e, "create user failed");
            Err(e.into_http())
        }
    }
}

#[instrument(skip(state))]
pub async fn update_user_status(
    State(state): State<AppState>,
    AuthUser(_admin_id): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserStatusRequest>,
) -> Result<StatusCode, (StatusCode, String)> {
    service::update_user_status(&state.db, id, payload.is_active)
        .await
        .map(|()| StatusCode::NO_CONTENT)
        .map_err(AuthError::into_http)
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    AuthUser(_admin_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    service::delete_user(&state.db, id)
        .await
        .map(|()| StatusCode::NO_CONTENT)
        .map_err(AuthError::into_http)
}
