//! Integration tests for the booking-to-notification pipeline.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json, RecordingMailer, ADMIN_INBOX};
use serde_json::json;

fn valid_body() -> serde_json::Value {
    json!({
        "eventId": "black-and-boundless",
        "guests": 2,
        "customer": {
            "name": "Jane Doe",
            "email": "jane@example.com",
            "phone": "+2348000000000"
        }
    })
}

// ---------------------------------------------------------------------------
// Scenario A: valid booking against a priced event
// ---------------------------------------------------------------------------

#[tokio::test]
async fn valid_booking_returns_payment_link() {
    let mailer = RecordingMailer::new();
    let app = common::build_test_app(mailer.clone());

    let response = post_json(app, "/api/bookings/create", valid_body()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert!(body["message"].is_string());

    let link = body["paymentLink"].as_str().unwrap();
    assert!(link.starts_with("/checkout?type=event"));
    assert!(link.contains("slug=black-and-boundless"));
    assert!(link.contains("guests=2"));
    assert!(link.contains("name=Jane%20Doe"));
    assert!(link.contains("orderId=ORD-"));
    assert!(link.contains("expires="));
}

#[tokio::test]
async fn valid_booking_sends_customer_then_admin_email() {
    let mailer = RecordingMailer::new();
    let app = common::build_test_app(mailer.clone());

    let response = post_json(app, "/api/bookings/create", valid_body()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let sent = mailer.sent();
    assert_eq!(sent.len(), 2, "exactly two emails must be sent");

    assert_eq!(sent[0].to.as_deref(), Some("jane@example.com"));
    assert_eq!(sent[1].to.as_deref(), Some(ADMIN_INBOX));
    assert_ne!(sent[0].content, sent[1].content, "bodies must be distinct");
}

#[tokio::test]
async fn customer_email_carries_total_and_absolute_link() {
    let mailer = RecordingMailer::new();
    let app = common::build_test_app(mailer.clone());

    post_json(app, "/api/bookings/create", valid_body()).await;

    let sent = mailer.sent();
    let customer = &sent[0].content;
    // ₦200,000 × 2 guests.
    assert!(customer.contains("Approx. ₦400,000"));
    // Email links must resolve outside the app context.
    assert!(customer.contains("https://auriva.travel/checkout?type=event"));
    assert!(customer.contains("expires in 24 hours"));
}

#[tokio::test]
async fn admin_email_lists_customer_contact() {
    let mailer = RecordingMailer::new();
    let app = common::build_test_app(mailer.clone());

    post_json(app, "/api/bookings/create", valid_body()).await;

    let sent = mailer.sent();
    let admin = &sent[1].content;
    assert!(admin.contains("jane@example.com"));
    assert!(admin.contains("+2348000000000"));
    assert!(admin.contains("Approx. ₦400,000"));
}

#[tokio::test]
async fn customer_name_is_escaped_in_email_bodies() {
    let mailer = RecordingMailer::new();
    let app = common::build_test_app(mailer.clone());

    let mut body = valid_body();
    body["customer"]["name"] = json!("<script>alert(1)</script>");
    let response = post_json(app, "/api/bookings/create", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    for email in mailer.sent() {
        assert!(!email.content.contains("<script>"));
    }
}

// ---------------------------------------------------------------------------
// Scenario B: unknown event
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_event_returns_404_and_sends_nothing() {
    let mailer = RecordingMailer::new();
    let app = common::build_test_app(mailer.clone());

    let mut body = valid_body();
    body["eventId"] = json!("unknown-event");
    let response = post_json(app, "/api/bookings/create", body).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Event not found");
    assert!(mailer.sent().is_empty());
}

// ---------------------------------------------------------------------------
// Scenario C: missing fields
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_guests_returns_400_and_sends_nothing() {
    let mailer = RecordingMailer::new();
    let app = common::build_test_app(mailer.clone());

    let mut body = valid_body();
    body.as_object_mut().unwrap().remove("guests");
    let response = post_json(app, "/api/bookings/create", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Missing required fields");
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn missing_event_id_returns_400() {
    let mailer = RecordingMailer::new();
    let app = common::build_test_app(mailer.clone());

    let mut body = valid_body();
    body.as_object_mut().unwrap().remove("eventId");
    let response = post_json(app, "/api/bookings/create", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_customer_returns_400() {
    let mailer = RecordingMailer::new();
    let app = common::build_test_app(mailer.clone());

    let mut body = valid_body();
    body.as_object_mut().unwrap().remove("customer");
    let response = post_json(app, "/api/bookings/create", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_customer_email_returns_400() {
    let mailer = RecordingMailer::new();
    let app = common::build_test_app(mailer.clone());

    let mut body = valid_body();
    body["customer"].as_object_mut().unwrap().remove("email");
    let response = post_json(app, "/api/bookings/create", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_customer_name_returns_400() {
    let mailer = RecordingMailer::new();
    let app = common::build_test_app(mailer.clone());

    let mut body = valid_body();
    body["customer"].as_object_mut().unwrap().remove("name");
    let response = post_json(app, "/api/bookings/create", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn phone_is_optional() {
    let mailer = RecordingMailer::new();
    let app = common::build_test_app(mailer.clone());

    let mut body = valid_body();
    body["customer"].as_object_mut().unwrap().remove("phone");
    let response = post_json(app, "/api/bookings/create", body).await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Scenario D: event without a display price
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unpriced_event_renders_contact_for_pricing() {
    let mailer = RecordingMailer::new();
    let app = common::build_test_app(mailer.clone());

    let mut body = valid_body();
    body["eventId"] = json!("palm-grove-retreat");
    let response = post_json(app, "/api/bookings/create", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let sent = mailer.sent();
    assert!(sent[0].content.contains("Contact for Pricing"));
    assert!(sent[1].content.contains("Contact for Pricing"));
}

// ---------------------------------------------------------------------------
// Partial notification failure policy
// ---------------------------------------------------------------------------

#[tokio::test]
async fn admin_send_failure_still_reports_success() {
    let mailer = RecordingMailer::new();
    mailer.fail_for(ADMIN_INBOX);
    let app = common::build_test_app(mailer.clone());

    let response = post_json(app, "/api/bookings/create", valid_body()).await;

    // Customer was notified; the admin copy failing is log-only.
    assert_eq!(response.status(), StatusCode::OK);
    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to.as_deref(), Some("jane@example.com"));
}

#[tokio::test]
async fn customer_send_failure_returns_500() {
    let mailer = RecordingMailer::new();
    mailer.fail_for("jane@example.com");
    let app = common::build_test_app(mailer.clone());

    let response = post_json(app, "/api/bookings/create", valid_body()).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Internal Server Error");
}

#[tokio::test]
async fn admin_copy_still_attempted_when_customer_send_fails() {
    let mailer = RecordingMailer::new();
    mailer.fail_for("jane@example.com");
    let app = common::build_test_app(mailer.clone());

    let response = post_json(app, "/api/bookings/create", valid_body()).await;

    // The failed receipt makes the request a 500, but the operator alert
    // must still go out so the booking is not silently lost.
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to.as_deref(), Some(ADMIN_INBOX));
}
