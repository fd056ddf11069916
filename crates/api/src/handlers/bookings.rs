//! Handler for `POST /api/bookings/create`.
//!
//! The full booking-to-notification pipeline lives here: validate the raw
//! body, resolve the event, compute pricing, issue an order id and payment
//! link, then dispatch the customer receipt and the operator alert.
//!
//! Failure policy for the two sends: both are attempted independently, and
//! the customer email decides the response. If it fails the request fails
//! (500), but the operator alert is still sent so the booking is not lost.
//! An admin-copy failure alone is logged at warn level only — the customer
//! has already been notified and the booking is recoverable from logs.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use auriva_core::booking::{BookingDetails, RawBookingRequest};
use auriva_core::order::generate_order_id;
use auriva_core::payment::{absolute_link, build_checkout_path, link_expiry};
use auriva_core::pricing::{booking_total, format_total};
use auriva_core::CoreError;
use auriva_notify::templates::{
    admin_subject, customer_subject, render_admin_email, render_customer_email,
};
use auriva_notify::{EventType, MonitoringEmail};

use crate::error::AppResult;
use crate::state::AppState;

/// Source tag attached to operator alerts.
const SOURCE_APPLICATION: &str = "auriva-web";

/// Success body returned to the browser. `payment_link` is the site-relative
/// checkout path for in-app redirect.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub success: bool,
    pub message: String,
    pub payment_link: String,
}

/// POST /api/bookings/create
///
/// Validation and event lookup short-circuit before any email is sent, so
/// 400/404 responses have zero side effects.
pub async fn create_booking(
    State(state): State<AppState>,
    Json(raw): Json<RawBookingRequest>,
) -> AppResult<Json<BookingResponse>> {
    let request = raw.into_request()?;

    let event = state
        .catalog
        .get(&request.event_id)
        .ok_or_else(|| CoreError::NotFound {
            entity: "Event",
            id: request.event_id.clone(),
        })?;

    let display_price = event.booking.display_price.as_deref();
    let total = booking_total(event.booking.unit_price, display_price, request.guests);
    let total_display = format_total(display_price, total);

    let order_id = generate_order_id();
    let expires_at = link_expiry(Utc::now());
    let checkout_path = build_checkout_path(&request, &order_id, expires_at);
    let payment_link = absolute_link(&state.config.base_url, &checkout_path);

    tracing::info!(
        order_id = %order_id,
        event_id = %event.id,
        guests = request.guests,
        total,
        "Booking request accepted"
    );

    let details = BookingDetails {
        event_id: event.id.clone(),
        event_title: event.title.clone(),
        event_date: event.date.clone(),
        event_location: event.location.clone(),
        hero_image: event.hero_image.clone(),
        customer_name: request.customer.name.clone(),
        customer_email: request.customer.email.clone(),
        customer_phone: request.customer.phone.clone(),
        guests: request.guests,
        total_display,
        payment_link,
        order_id: order_id.clone(),
    };

    // Customer receipt first; replies go to the event team when the event
    // has its own contact address.
    let mut customer_email = MonitoringEmail::new(
        details.customer_email.clone(),
        customer_subject(&details.event_title),
        render_customer_email(&details),
        EventType::Informational,
    );
    customer_email.reply_to = event.contact.email.clone();
    let customer_result = state.mailer.send(&customer_email).await;
    if let Err(err) = &customer_result {
        tracing::error!(
            error = %err,
            order_id = %order_id,
            "Customer booking receipt failed"
        );
    }

    // Operator alert, attempted regardless of the customer outcome so a
    // failed receipt still reaches the operations inbox. Log-only on
    // failure when the customer was already notified.
    let mut admin_email = MonitoringEmail::new(
        state.config.admin_email.clone(),
        admin_subject(&details.order_id),
        render_admin_email(&details),
        EventType::Informational,
    );
    admin_email.source_application = Some(SOURCE_APPLICATION.to_string());
    admin_email.metadata = vec![
        ("Order".to_string(), details.order_id.clone()),
        ("Event".to_string(), details.event_title.clone()),
        ("Guests".to_string(), details.guests.to_string()),
        ("Total".to_string(), details.total_display.clone()),
    ];
    if let Err(err) = state.mailer.send(&admin_email).await {
        tracing::warn!(
            error = %err,
            order_id = %order_id,
            "Admin booking alert failed"
        );
    }

    // The customer send decides the response.
    customer_result?;

    Ok(Json(BookingResponse {
        success: true,
        message: "Booking received. Redirecting to secure checkout.".to_string(),
        payment_link: checkout_path,
    }))
}
