//! Lettre-backed SMTP implementation of [`Mailer`].

use lettre::message::header::ContentType;
use lettre::message::{Attachment, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::SmtpConfig;
use crate::dispatcher::{prepare_body, resolve_recipient, Mailer, MonitoringEmail};
use crate::error::NotifyError;

/// Sends notification emails via SMTP (STARTTLS relay).
///
/// The transport is built per send; connections are cheap to create and are
/// deliberately not pooled across requests. A per-message credentials
/// override swaps in a one-off transport for that send only.
pub struct SmtpMailer {
    config: SmtpConfig,
}

impl SmtpMailer {
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    fn build_transport(
        &self,
        email: &MonitoringEmail,
    ) -> Result<AsyncSmtpTransport<Tokio1Executor>, NotifyError> {
        let mut builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.host)?
                .port(self.config.port);

        if let Some(creds) = &email.credentials_override {
            builder = builder.credentials(Credentials::new(
                creds.username.clone(),
                creds.password.clone(),
            ));
        } else if let (Some(user), Some(pass)) = (&self.config.username, &self.config.password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        Ok(builder.build())
    }

    fn build_message(&self, email: &MonitoringEmail, to: &str) -> Result<Message, NotifyError> {
        let html = prepare_body(email);

        let mut builder = Message::builder()
            .from(self.config.from_address.parse()?)
            .to(to.parse()?)
            .subject(&email.subject);

        if let Some(reply_to) = &email.reply_to {
            builder = builder.reply_to(reply_to.parse()?);
        }

        if email.attachments.is_empty() {
            builder
                .header(ContentType::TEXT_HTML)
                .body(html)
                .map_err(|e| NotifyError::Build(e.to_string()))
        } else {
            let mut parts = MultiPart::mixed().singlepart(
                SinglePart::builder()
                    .header(ContentType::TEXT_HTML)
                    .body(html),
            );
            for attachment in &email.attachments {
                let content_type = ContentType::parse(&attachment.content_type)
                    .map_err(|e| NotifyError::Build(e.to_string()))?;
                parts = parts.singlepart(
                    Attachment::new(attachment.filename.clone())
                        .body(attachment.content.clone(), content_type),
                );
            }
            builder
                .multipart(parts)
                .map_err(|e| NotifyError::Build(e.to_string()))
        }
    }
}

#[async_trait::async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &MonitoringEmail) -> Result<(), NotifyError> {
        let to = resolve_recipient(email, self.config.default_recipient.as_deref())?;

        let message = self.build_message(email, to)?;
        let transport = self.build_transport(email)?;
        transport.send(message).await?;

        tracing::info!(
            to,
            subject = %email.subject,
            event_type = ?email.event_type,
            "Notification email sent"
        );
        Ok(())
    }
}
