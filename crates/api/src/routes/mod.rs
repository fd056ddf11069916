//! Route definitions, one module per resource.

use axum::Router;

use crate::state::AppState;

pub mod bookings;
pub mod health;

/// All routes mounted under `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/bookings", bookings::router())
}
