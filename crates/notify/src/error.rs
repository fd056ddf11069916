/// Error type for notification dispatch failures.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// Neither the payload nor the configuration named a recipient.
    #[error("No recipient: message has no `to` and no default recipient is configured")]
    NoRecipient,

    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_recipient_display() {
        let err = NotifyError::NoRecipient;
        assert!(err.to_string().contains("No recipient"));
    }

    #[test]
    fn build_display() {
        let err = NotifyError::Build("missing body".to_string());
        assert_eq!(err.to_string(), "Email build error: missing body");
    }

    #[test]
    fn address_display() {
        let addr_err: Result<lettre::Address, _> = "not-an-email".parse();
        let err = NotifyError::Address(addr_err.unwrap_err());
        assert!(err.to_string().contains("Email address parse error"));
    }
}
