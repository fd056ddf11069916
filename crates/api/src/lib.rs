//! Auriva HTTP surface: router, middleware stack, configuration, and the
//! booking request handler.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;

pub use state::AppState;
