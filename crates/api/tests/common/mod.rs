use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use auriva_api::config::{Environment, ServerConfig};
use auriva_api::router::build_app_router;
use auriva_api::state::AppState;
use auriva_core::catalog::{Event, EventBooking, EventCatalog, EventContact};
use auriva_notify::{Mailer, MonitoringEmail, NotifyError};

/// Operator inbox used by the test configuration.
pub const ADMIN_INBOX: &str = "reservations@auriva.travel";

/// CORS origin present in the test allow-list.
pub const ALLOWED_ORIGIN: &str = "https://auriva.travel";

// ---------------------------------------------------------------------------
// Recording mailer
// ---------------------------------------------------------------------------

/// Test double for the dispatch seam: records every message instead of
/// talking SMTP, and can be told to fail for specific recipients.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<MonitoringEmail>>,
    fail_for: Mutex<Vec<String>>,
}

impl RecordingMailer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Make sends to `recipient` fail with a simulated transport error.
    #[allow(dead_code)]
    pub fn fail_for(&self, recipient: &str) {
        self.fail_for.lock().unwrap().push(recipient.to_string());
    }

    /// Snapshot of successfully "sent" messages, in send order.
    #[allow(dead_code)]
    pub fn sent(&self) -> Vec<MonitoringEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &MonitoringEmail) -> Result<(), NotifyError> {
        let to = email.to.clone().unwrap_or_default();
        if self.fail_for.lock().unwrap().contains(&to) {
            return Err(NotifyError::Build(format!(
                "simulated transport failure for {to}"
            )));
        }
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Two-event fixture catalog: one priced, one contact-for-pricing.
pub fn fixture_catalog() -> EventCatalog {
    EventCatalog::new(vec![
        Event {
            id: "black-and-boundless".to_string(),
            title: "Black & Boundless".to_string(),
            date: "December 27, 2026".to_string(),
            location: "Eko Atlantic, Lagos".to_string(),
            hero_image: "/images/events/black-and-boundless.jpg".to_string(),
            booking: EventBooking {
                display_price: Some("₦200,000".to_string()),
                unit_price: Some(200_000.0),
            },
            contact: EventContact {
                whatsapp: None,
                email: Some("events@auriva.travel".to_string()),
            },
        },
        Event {
            id: "palm-grove-retreat".to_string(),
            title: "Palm Grove Retreat".to_string(),
            date: "April 12, 2027".to_string(),
            location: "Accra, Ghana".to_string(),
            hero_image: "/images/events/palm-grove-retreat.jpg".to_string(),
            booking: EventBooking::default(),
            contact: EventContact::default(),
        },
    ])
}

/// Build a test `ServerConfig` with the production CORS policy so the
/// allow-list behaviour is what integration tests exercise.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        environment: Environment::Production,
        base_url: "https://auriva.travel".to_string(),
        allowed_origins: vec![
            ALLOWED_ORIGIN.to_string(),
            "http://localhost:3000".to_string(),
        ],
        request_timeout_secs: 30,
        admin_email: ADMIN_INBOX.to_string(),
    }
}

/// Build the full application router with all middleware layers, the fixture
/// catalog, and the given mailer. Mirrors the router construction in
/// `main.rs` so integration tests exercise the same stack production uses.
pub fn build_test_app(mailer: Arc<RecordingMailer>) -> Router {
    let config = test_config();
    let state = AppState {
        catalog: Arc::new(fixture_catalog()),
        config: Arc::new(config.clone()),
        mailer,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

#[allow(dead_code)]
pub async fn get(app: Router, path: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(path)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
