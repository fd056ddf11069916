//! SMTP transport configuration.
//!
//! Loaded from environment variables; if `SMTP_HOST` is not set,
//! [`SmtpConfig::from_env`] returns `None` and no mailer should be
//! constructed.

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender address when `SMTP_FROM` is not set.
const DEFAULT_FROM_ADDRESS: &str = "bookings@auriva.travel";

/// Configuration for the SMTP notification transport.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// SMTP server hostname.
    pub host: String,
    /// SMTP server port (defaults to 587).
    pub port: u16,
    /// RFC 5322 "From" address.
    pub from_address: String,
    /// Optional SMTP username.
    pub username: Option<String>,
    /// Optional SMTP password.
    pub password: Option<String>,
    /// Fallback recipient when a message names no `to` address.
    pub default_recipient: Option<String>,
}

impl SmtpConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `SMTP_HOST` is not set, signalling that email
    /// delivery is not configured.
    ///
    /// | Variable          | Required | Default                   |
    /// |-------------------|----------|---------------------------|
    /// | `SMTP_HOST`       | yes      | —                         |
    /// | `SMTP_PORT`       | no       | `587`                     |
    /// | `SMTP_FROM`       | no       | `bookings@auriva.travel`  |
    /// | `SMTP_USER`       | no       | —                         |
    /// | `SMTP_PASSWORD`   | no       | —                         |
    /// | `SMTP_DEFAULT_TO` | no       | —                         |
    pub fn from_env() -> Option<Self> {
        let host = std::env::var("SMTP_HOST").ok()?;
        Some(Self {
            host,
            port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            from_address: std::env::var("SMTP_FROM")
                .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string()),
            username: std::env::var("SMTP_USER").ok(),
            password: std::env::var("SMTP_PASSWORD").ok(),
            default_recipient: std::env::var("SMTP_DEFAULT_TO").ok(),
        })
    }
}
