//! Payment-link construction.
//!
//! Two forms of the same link exist: a site-relative checkout path returned
//! to the browser for in-app redirect, and an absolute URL embedded in
//! emails, which must resolve when opened from a third-party mail client.
//! The link carries the booking parameters and order id as query-string
//! values, plus an `expires` unix timestamp that the checkout page enforces
//! (this service holds no booking state to enforce it against).

use chrono::{DateTime, Duration, Utc};

use crate::booking::BookingRequest;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// How long a payment link stays valid. Matches the expiry notice in the
/// customer email.
pub const LINK_VALIDITY_HOURS: i64 = 24;

// ---------------------------------------------------------------------------
// Link building
// ---------------------------------------------------------------------------

/// Expiry instant for a link issued at `now`.
pub fn link_expiry(now: DateTime<Utc>) -> DateTime<Utc> {
    now + Duration::hours(LINK_VALIDITY_HOURS)
}

/// Build the site-relative checkout path for a validated booking.
///
/// Customer-supplied values are percent-encoded; a missing phone renders as
/// an empty parameter so the query shape is stable.
pub fn build_checkout_path(
    request: &BookingRequest,
    order_id: &str,
    expires_at: DateTime<Utc>,
) -> String {
    let phone = request.customer.phone.as_deref().unwrap_or("");
    format!(
        "/checkout?type=event&slug={}&guests={}&name={}&email={}&phone={}&orderId={}&expires={}",
        urlencoding::encode(&request.event_id),
        request.guests,
        urlencoding::encode(&request.customer.name),
        urlencoding::encode(&request.customer.email),
        urlencoding::encode(phone),
        urlencoding::encode(order_id),
        expires_at.timestamp(),
    )
}

/// Derive the absolute link by prefixing the configured site origin.
pub fn absolute_link(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
