//! Booking request parsing and validation.
//!
//! The inbound JSON body is loosely typed on the wire; [`RawBookingRequest`]
//! mirrors it with all-optional fields and [`RawBookingRequest::into_request`]
//! is the explicit parse/validate step that must succeed before any business
//! logic or side effect runs. Presence of `eventId`, `guests`,
//! `customer.name`, and `customer.email` is mandatory; no format validation
//! is applied to email or phone beyond presence.

use serde::Deserialize;
use validator::Validate;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// The booking body exactly as received, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBookingRequest {
    #[serde(default)]
    pub event_id: Option<String>,
    #[serde(default)]
    pub guests: Option<u32>,
    #[serde(default)]
    pub customer: Option<RawCustomer>,
}

/// Customer sub-record as received.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCustomer {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

// ---------------------------------------------------------------------------
// Validated types
// ---------------------------------------------------------------------------

/// A validated booking request. Construct via
/// [`RawBookingRequest::into_request`].
#[derive(Debug, Clone, Validate)]
pub struct BookingRequest {
    #[validate(length(min = 1))]
    pub event_id: String,
    #[validate(range(min = 1))]
    pub guests: u32,
    #[validate(nested)]
    pub customer: Customer,
}

#[derive(Debug, Clone, Validate)]
pub struct Customer {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub email: String,
    pub phone: Option<String>,
}

impl RawBookingRequest {
    /// Validate the raw body into a [`BookingRequest`].
    ///
    /// Missing or empty `event_id`, zero/missing `guests`, missing
    /// `customer`, or missing/empty `customer.name`/`customer.email` fail
    /// with [`CoreError::Validation`] before any side effect occurs.
    pub fn into_request(self) -> Result<BookingRequest, CoreError> {
        let customer = self
            .customer
            .ok_or_else(|| CoreError::validation("customer is required"))?;

        let request = BookingRequest {
            event_id: self.event_id.unwrap_or_default(),
            guests: self.guests.unwrap_or(0),
            customer: Customer {
                name: customer.name.unwrap_or_default(),
                email: customer.email.unwrap_or_default(),
                phone: customer.phone,
            },
        };

        request
            .validate()
            .map_err(|e| CoreError::Validation(e.to_string()))?;

        Ok(request)
    }
}

// ---------------------------------------------------------------------------
// Derived booking details
// ---------------------------------------------------------------------------

/// Everything the email templates and the dispatcher need about one booking.
///
/// Constructed once per valid request, passed by value, never persisted.
#[derive(Debug, Clone)]
pub struct BookingDetails {
    pub event_id: String,
    pub event_title: String,
    pub event_date: String,
    pub event_location: String,
    pub hero_image: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub guests: u32,
    /// Pre-formatted display total ("Approx. ₦400,000" or
    /// "Contact for Pricing").
    pub total_display: String,
    /// Absolute payment link; must resolve outside the app context since it
    /// is embedded in email bodies.
    pub payment_link: String,
    pub order_id: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
