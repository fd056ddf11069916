//! Auriva notification infrastructure.
//!
//! This crate owns everything between "the handler has a booking" and "an
//! email left the building":
//!
//! - [`SmtpConfig`] — SMTP transport configuration from the environment.
//! - [`Mailer`] — the dispatch seam; [`SmtpMailer`] is the lettre-backed
//!   production implementation, tests substitute a recording mock.
//! - [`MonitoringEmail`] — one outbound message, classified by
//!   [`EventType`] severity; fragment content is wrapped in a styled shell,
//!   complete documents go out as-is.
//! - [`templates`] — the customer-receipt and operator-alert HTML bodies.

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod smtp;
pub mod templates;

pub use config::SmtpConfig;
pub use dispatcher::{
    EmailAttachment, EventType, ImpactLevel, Mailer, MonitoringEmail, SmtpCredentials,
};
pub use error::NotifyError;
pub use smtp::SmtpMailer;
