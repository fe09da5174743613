use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use tracing::{error, instrument};

use crate::auth::token::AuthUser;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub total_leads: i64,
    pub new_leads: i64,
    pub converted_leads: i64,
    pub conversion_rate: i64,
    pub total_messages: i64,
    pub unread_messages: i64,
    pub total_portfolio: i64,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/dashboard/stats", get(stats))
}

#[instrument(skip(state))]
pub async fn stats(
    State(state): State<AppState>,
    AuthUser(_admin_id): AuthUser,
) -> Result<Json<DashboardStats>, (StatusCode, String)> {
    fetch_stats(&state.db).await.map(Json).map_err(|e| {
        error!(error = %e, "dashboard stats query failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Database error occurred".to_string(),
        )
    })
}

async fn fetch_stats(db: &PgPool) -> sqlx::Result<DashboardStats> {
    let (total_leads, new_leads, converted_leads, total_messages, unread_messages, total_portfolio): (
        i64,
        i64,
        i64,
        i64,
        i64,
        i64,
    ) = sqlx::query_as(
        r#"
        SELECT
            (SELECT count(*) FROM quiz_leads),
            (SELECT count(*) FROM quiz_leads WHERE status = 'new'),
            (SELECT count(*) FROM quiz_leads WHERE status = 'converted'),
            (SELECT count(*) FROM contact_messages),
            (SELECT count(*) FROM contact_messages WHERE status = 'new'),
            (SELECT count(*) FROM portfolios)
        "#,
    )
    .fetch_one(db)
    .await?;

    Ok(DashboardStats {
        total_leads,
        new_leads,
        converted_leads,
        conversion_rate: conversion_rate(converted_leads, total_leads),
        total_messages,
        unread_messages,
        total_portfolio,
    })
}

/// Percent of quiz leads marked converted, rounded; zero leads means zero.
fn conversion_rate(converted: i64, total: i64) -> i64 {
    if total == 0 {
        return 0;
    }
    ((converted as f64 / total as f64) * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_rate_rounds() {
        assert_eq!(conversion_rate(0, 0), 0);
        assert_eq!(conversion_rate(0, 10), 0);
        assert_eq!(conversion_rate(1, 3), 33);
        assert_eq!(conversion_rate(2, 3), 67);
        assert_eq!(conversion_rate(10, 10), 100);
    }
}
