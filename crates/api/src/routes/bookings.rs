//! Route definitions for the `/bookings` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::bookings;
use crate::state::AppState;

/// Routes mounted at `/bookings`.
///
/// ```text
/// POST   /create   -> create_booking
/// ```
///
/// Preflight `OPTIONS` is answered by the CORS layer with the same
/// allow-list policy as the POST itself.
pub fn router() -> Router<AppState> {
    Router::new().route("/create", post(bookings::create_booking))
}
