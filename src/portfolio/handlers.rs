use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, patch, post, put},
    Json, Router,
};
use serde::Serialize;
use tracing::{error, instrument};
use uuid::Uuid;

use crate::{
    auth::token::AuthUser,
    portfolio::dto::UpsertPortfolioRequest,
    portfolio::repo::PortfolioItem,
    state::AppState,
};

pub fn public_routes() -> Router<AppState> {
    Router::new().route("/portfolio", get(list_public))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/portfolio/all", get(list_all))
        .route("/portfolio", post(create_item))
        .route("/portfolio/:id", put(update_item))
        .route("/portfolio/:id", delete(delete_item))
        .route("/portfolio/:id/enabled", patch(toggle_enabled))
}

fn internal(e: sqlx::Error) -> (StatusCode, String) {
    error!(error = %e, "portfolio query failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Database error occurred".to_string(),
    )
}

#[instrument(skip(state))]
pub async fn list_public(
    State(state): State<AppState>,
) -> Result<Json<Vec<PortfolioItem>>, (StatusCode, String)> {
    PortfolioItem::list_enabled(&state.db)
        .await
        .map(Json)
        .map_err(internal)
}

#[instrument(skip(state))]
pub async fn list_all(
    State(state): State<AppState>,
    AuthUser(_admin_id): AuthUser,
) -> Result<Json<Vec<PortfolioItem>>, (StatusCode, String)> {
    PortfolioItem::list_all(&state.db)
        .await
        .map(Json)
        .map_err(internal)
}

#[instrument(skip(state, payload))]
pub async fn create_item(
    State(state): State<AppState>,
    AuthUser(_admin_id): AuthUser,
    Json(payload): Json<UpsertPortfolioRequest>,
) -> Result<(StatusCode, Json<PortfolioItem>), (StatusCode, String)> {
    payload
        .validate()
        .map_err(|msg| (StatusCode::BAD_REQUEST, msg.to_string()))?;
    let item = PortfolioItem::insert(&state.db, &payload)
        .await
        .map_err(internal)?;
    Ok((StatusCode::CREATED, Json(item)))
}

#[instrument(skip(state, payload))]
pub async fn update_item(
    State(state): State<AppState>,
    AuthUser(_admin_id): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpsertPortfolioRequest>,
) -> Result<Json<PortfolioItem>, (StatusCode, String)> {
    payload
        .validate()
        .map_err(|msg| (StatusCode::BAD_REQUEST, msg.to_string()))?;
    match PortfolioItem::update(&state.db, id, &payload).await {
        Ok(Some(item)) => Ok(Json(item)),
        Ok(None) => Err((StatusCode::NOT_FOUND, "Portfolio item not found".into())),
        Err(e) => Err(internal(e)),
    }
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub enabled: bool,
}

#[instrument(skip(state))]
pub async fn toggle_enabled(
    State(state): State<AppState>,
    AuthUser(_admin_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ToggleResponse>, (StatusCode, String)> {
    match PortfolioItem::toggle_enabled(&state.db, id).await {
        Ok(Some(enabled)) => Ok(Json(ToggleResponse { enabled })),
        Ok(None) => Err((StatusCode::NOT_FOUND, "Portfolio item not found".into())),
        Err(e) => Err(internal(e)),
    }
}

#[instrument(skip(state))]
pub async fn delete_item(
    State(state): State<AppState>,
    AuthUser(_admin_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    let deleted = PortfolioItem::delete(&state.db, id).await.map_err(internal)?;
    if deleted == 0 {
        return Err((StatusCode::NOT_FOUND, "Portfolio item not found".into()));
    }
    Ok(StatusCode::NO_CONTENT)
}
