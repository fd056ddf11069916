//! Outbound message classification and the dispatch seam.
//!
//! A [`MonitoringEmail`] is one outbound message: arbitrary pre-rendered
//! HTML content, a severity classification, and optional impact/metadata
//! annotations. [`prepare_body`] produces the deliverable body: fragments
//! are wrapped by [`render_shell`] in a styled shell whose accent color and
//! label derive from the severity, while content that is already a complete
//! HTML document is sent as-is. [`Mailer`] is the trait the request handler
//! dispatches through; production uses the SMTP implementation, tests a
//! recording mock.

use crate::error::NotifyError;
use crate::templates::escape_html;

// ---------------------------------------------------------------------------
// Severity classification
// ---------------------------------------------------------------------------

/// Severity/event classification for an outbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Informational,
    Success,
    Warning,
    Error,
}

impl EventType {
    /// Accent color for the shell header.
    pub fn accent(self) -> &'static str {
        match self {
            Self::Informational => "#2563eb",
            Self::Success => "#16a34a",
            Self::Warning => "#d97706",
            Self::Error => "#dc2626",
        }
    }

    /// Human-readable label shown in the shell header.
    pub fn label(self) -> &'static str {
        match self {
            Self::Informational => "Notification",
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }
}

/// Optional impact severity rendered as a pill under the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl ImpactLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low impact",
            Self::Medium => "Medium impact",
            Self::High => "High impact",
            Self::Critical => "Critical impact",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Low => "#64748b",
            Self::Medium => "#d97706",
            Self::High => "#ea580c",
            Self::Critical => "#dc2626",
        }
    }
}

// ---------------------------------------------------------------------------
// Message payload
// ---------------------------------------------------------------------------

/// Per-call SMTP credential override.
///
/// Swapped in for the duration of one send only; the shared configuration is
/// never mutated. This is the narrow multi-tenancy hook modelled as an
/// explicit parameter.
#[derive(Debug, Clone)]
pub struct SmtpCredentials {
    pub username: String,
    pub password: String,
}

/// A file attached to an outbound message.
#[derive(Debug, Clone)]
pub struct EmailAttachment {
    pub filename: String,
    /// MIME type, e.g. `application/pdf`.
    pub content_type: String,
    pub content: Vec<u8>,
}

/// One outbound notification email.
#[derive(Debug, Clone)]
pub struct MonitoringEmail {
    /// Recipient; falls back to the configured default when `None`.
    pub to: Option<String>,
    pub subject: String,
    /// Pre-rendered HTML: a fragment to be wrapped by [`render_shell`], or a
    /// complete document delivered as-is. See [`prepare_body`].
    pub content: String,
    pub event_type: EventType,
    pub impact: Option<ImpactLevel>,
    /// Originating application, shown in the shell header.
    pub source_application: Option<String>,
    /// Key/value pairs rendered as a metadata panel under the content.
    pub metadata: Vec<(String, String)>,
    pub attachments: Vec<EmailAttachment>,
    pub reply_to: Option<String>,
    pub credentials_override: Option<SmtpCredentials>,
}

impl MonitoringEmail {
    /// A message with the given envelope basics and no annotations.
    pub fn new(
        to: impl Into<String>,
        subject: impl Into<String>,
        content: impl Into<String>,
        event_type: EventType,
    ) -> Self {
        Self {
            to: Some(to.into()),
            subject: subject.into(),
            content: content.into(),
            event_type,
            impact: None,
            source_application: None,
            metadata: Vec::new(),
            attachments: Vec::new(),
            reply_to: None,
            credentials_override: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Dispatch seam
// ---------------------------------------------------------------------------

/// The dispatch seam between the request handler and the SMTP transport.
///
/// Exactly one outbound send per call; no retry or queuing. A transport
/// failure is fatal for that call and propagates to the caller.
#[async_trait::async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &MonitoringEmail) -> Result<(), NotifyError>;
}

/// Resolve the effective recipient: the message's `to`, else the configured
/// default. Fails with [`NotifyError::NoRecipient`] before any transport
/// work when neither exists.
pub fn resolve_recipient<'a>(
    email: &'a MonitoringEmail,
    default_recipient: Option<&'a str>,
) -> Result<&'a str, NotifyError> {
    email
        .to
        .as_deref()
        .or(default_recipient)
        .ok_or(NotifyError::NoRecipient)
}

// ---------------------------------------------------------------------------
// Shell rendering
// ---------------------------------------------------------------------------

/// Whether `content` is already a complete HTML document rather than a
/// fragment. Checks for a leading `<!DOCTYPE` or `<html` marker,
/// case-insensitively.
pub fn is_complete_document(content: &str) -> bool {
    let trimmed = content.trim_start();
    trimmed
        .get(..9)
        .is_some_and(|p| p.eq_ignore_ascii_case("<!doctype"))
        || trimmed
            .get(..5)
            .is_some_and(|p| p.eq_ignore_ascii_case("<html"))
}

/// Produce the HTML body to deliver for a message.
///
/// Content that is already a complete document (a fully branded template,
/// say) goes out untouched; nesting it inside the shell would put one
/// `<html>` document inside another. Fragments get the styled shell via
/// [`render_shell`].
pub fn prepare_body(email: &MonitoringEmail) -> String {
    if is_complete_document(&email.content) {
        email.content.clone()
    } else {
        render_shell(email)
    }
}

/// Wrap a message's HTML content in the styled notification shell.
///
/// The shell is a self-contained HTML document with inline styles only: an
/// accent-colored header bar carrying the severity label and source
/// application, an optional impact pill, the content itself, an optional
/// metadata key/value panel, and a plain footer.
pub fn render_shell(email: &MonitoringEmail) -> String {
    let accent = email.event_type.accent();
    let label = email.event_type.label();

    let source = email
        .source_application
        .as_deref()
        .map(|s| {
            format!(
                "<span style=\"opacity:0.8;font-size:12px;\">&nbsp;&middot;&nbsp;{}</span>",
                escape_html(s)
            )
        })
        .unwrap_or_default();

    let impact = email
        .impact
        .map(|i| {
            format!(
                "<div style=\"margin:16px 24px 0;\"><span style=\"display:inline-block;\
                 padding:2px 10px;border-radius:999px;background:{};color:#ffffff;\
                 font-size:12px;\">{}</span></div>",
                i.color(),
                i.label()
            )
        })
        .unwrap_or_default();

    let metadata = if email.metadata.is_empty() {
        String::new()
    } else {
        let rows: String = email
            .metadata
            .iter()
            .map(|(key, value)| {
                format!(
                    "<tr><td style=\"padding:6px 12px;color:#64748b;font-size:13px;\
                     white-space:nowrap;\">{}</td>\
                     <td style=\"padding:6px 12px;font-size:13px;\">{}</td></tr>",
                    escape_html(key),
                    escape_html(value)
                )
            })
            .collect();
        format!(
            "<div style=\"margin:0 24px 24px;\"><table style=\"width:100%;\
             border-collapse:collapse;background:#f8fafc;border-radius:6px;\">{rows}</table></div>"
        )
    };

    format!(
        "<!DOCTYPE html>\
         <html><body style=\"margin:0;padding:0;background:#eef2f7;\
         font-family:Helvetica,Arial,sans-serif;color:#1e293b;\">\
         <div style=\"max-width:600px;margin:24px auto;background:#ffffff;\
         border-radius:8px;overflow:hidden;\">\
         <div style=\"background:{accent};color:#ffffff;padding:14px 24px;\
         font-size:14px;font-weight:bold;\">{label}{source}</div>\
         {impact}\
         <div style=\"padding:24px;\">{content}</div>\
         {metadata}\
         <div style=\"padding:16px 24px;border-top:1px solid #e2e8f0;color:#94a3b8;\
         font-size:12px;\">Automated notification &mdash; Auriva</div>\
         </div></body></html>",
        content = email.content,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
