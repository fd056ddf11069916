/// Deployment environment. Controls CORS strictness and nothing else;
/// business logic never branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Parse from the `APP_ENV` value; anything other than `production`
    /// is treated as development.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables. Handlers receive this
/// as injected state; nothing reads the process environment after startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Deployment environment (default: development).
    pub environment: Environment,
    /// Public site origin used to build absolute payment links
    /// (default: `https://auriva.travel`).
    pub base_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub allowed_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Operator inbox that receives the admin copy of every booking.
    pub admin_email: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                          |
    /// |------------------------|--------------------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                                        |
    /// | `PORT`                 | `3000`                                           |
    /// | `APP_ENV`              | `development`                                    |
    /// | `BASE_URL`             | `https://auriva.travel`                          |
    /// | `CORS_ORIGINS`         | production + localhost front-end origins         |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                             |
    /// | `BOOKINGS_INBOX`       | `reservations@auriva.travel`                     |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let environment =
            Environment::parse(&std::env::var("APP_ENV").unwrap_or_else(|_| "development".into()));

        let base_url =
            std::env::var("BASE_URL").unwrap_or_else(|_| "https://auriva.travel".into());

        let allowed_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| {
                "https://auriva.travel,https://www.auriva.travel,http://localhost:3000".into()
            })
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let admin_email = std::env::var("BOOKINGS_INBOX")
            .unwrap_or_else(|_| "reservations@auriva.travel".into());

        Self {
            host,
            port,
            environment,
            base_url,
            allowed_origins,
            request_timeout_secs,
            admin_email,
        }
    }
}
