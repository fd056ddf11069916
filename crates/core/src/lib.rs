//! Auriva domain logic: event catalog, booking validation, pricing,
//! order identifiers, and payment-link construction.
//!
//! This crate is pure — no I/O, no HTTP types — so the same logic can be
//! exercised from the API layer, tests, or future CLI tooling.

pub mod booking;
pub mod catalog;
pub mod error;
pub mod order;
pub mod payment;
pub mod pricing;

pub use booking::{BookingDetails, BookingRequest, Customer, RawBookingRequest};
pub use catalog::{Event, EventBooking, EventCatalog, EventContact};
pub use error::CoreError;
