use std::sync::Arc;

use auriva_core::EventCatalog;
use auriva_notify::Mailer;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable; every field is behind `Arc`. The catalog and config
/// are immutable after startup, so requests share them read-only with no
/// locking.
#[derive(Clone)]
pub struct AppState {
    /// The bookable-event catalog.
    pub catalog: Arc<EventCatalog>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Notification dispatch seam (SMTP in production, a mock in tests).
    pub mailer: Arc<dyn Mailer>,
}
