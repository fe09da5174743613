use crate::state::AppState;
use axum::Router;

mod dto;
mod error;
pub mod handlers;
mod password;
mod repo;
pub mod service;
pub mod session;
pub mod token;

pub use dto::{AdminUser, SessionTicket};
pub use error::AuthError;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::session_routes())
        .merge(handlers::user_routes())
}
