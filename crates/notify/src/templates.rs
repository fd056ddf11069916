//! Booking email bodies.
//!
//! Two pure renderers with inline styles only, since these must render
//! consistently in third-party mail clients. The customer receipt is a
//! complete, branded HTML document delivered as-is; the operator alert is a
//! fragment that the dispatcher wraps in its notification shell.
//!
//! Every interpolated value goes through [`escape_html`]; customer-supplied
//! fields (name, email, phone) must never reach the document unescaped.

use auriva_core::booking::BookingDetails;
use auriva_core::payment::LINK_VALIDITY_HOURS;

// ---------------------------------------------------------------------------
// Brand constants
// ---------------------------------------------------------------------------

const BRAND_NAME: &str = "AURIVA";
const BRAND_ACCENT: &str = "#c9a227";
const BRAND_DARK: &str = "#14120b";
const CONCIERGE_EMAIL: &str = "concierge@auriva.travel";
const CONCIERGE_WHATSAPP: &str = "+234 800 000 0001";

// ---------------------------------------------------------------------------
// Escaping
// ---------------------------------------------------------------------------

/// Minimal HTML entity encoding for text interpolated into markup.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Subjects
// ---------------------------------------------------------------------------

pub fn customer_subject(event_title: &str) -> String {
    format!("Your reservation request — {event_title}")
}

pub fn admin_subject(order_id: &str) -> String {
    format!("New event booking {order_id}")
}

// ---------------------------------------------------------------------------
// Customer receipt
// ---------------------------------------------------------------------------

/// Render the customer-facing receipt.
///
/// Branded header, greeting naming the event, reservation-details block,
/// prominent payment call-to-action, expiry notice, and a contact footer.
pub fn render_customer_email(details: &BookingDetails) -> String {
    let name = escape_html(&details.customer_name);
    let title = escape_html(&details.event_title);
    let date = escape_html(&details.event_date);
    let location = escape_html(&details.event_location);
    let order_id = escape_html(&details.order_id);
    let total = escape_html(&details.total_display);
    let link = escape_html(&details.payment_link);

    format!(
        "<!DOCTYPE html>\
<html><body style=\"margin:0;padding:0;background:#f4f1ea;\
font-family:Georgia,'Times New Roman',serif;color:{BRAND_DARK};\">\
<div style=\"max-width:600px;margin:0 auto;background:#ffffff;\">\
<div style=\"background:{BRAND_DARK};padding:28px 32px;text-align:center;\">\
<span style=\"color:{BRAND_ACCENT};font-size:22px;letter-spacing:6px;\">{BRAND_NAME}</span>\
</div>\
<div style=\"padding:36px 32px 8px;\">\
<h1 style=\"margin:0 0 8px;font-size:24px;font-weight:normal;\">Dear {name},</h1>\
<p style=\"margin:0;font-size:15px;line-height:1.6;color:#4a4534;\">\
Thank you for reserving your place at <strong>{title}</strong>. Your booking is \
nearly complete &mdash; all that remains is payment.</p>\
</div>\
<div style=\"margin:28px 32px;border:1px solid #e6dfcf;\
border-radius:4px;padding:20px 24px;background:#faf8f2;\">\
<p style=\"margin:0 0 12px;font-size:11px;letter-spacing:2px;color:{BRAND_ACCENT};\
text-transform:uppercase;\">Reservation details</p>\
<table style=\"width:100%;border-collapse:collapse;font-size:14px;\">\
<tr><td style=\"padding:4px 0;color:#857f6a;\">Order</td>\
<td style=\"padding:4px 0;text-align:right;\">{order_id}</td></tr>\
<tr><td style=\"padding:4px 0;color:#857f6a;\">Event</td>\
<td style=\"padding:4px 0;text-align:right;\">{title}</td></tr>\
<tr><td style=\"padding:4px 0;color:#857f6a;\">Date</td>\
<td style=\"padding:4px 0;text-align:right;\">{date}</td></tr>\
<tr><td style=\"padding:4px 0;color:#857f6a;\">Location</td>\
<td style=\"padding:4px 0;text-align:right;\">{location}</td></tr>\
<tr><td style=\"padding:4px 0;color:#857f6a;\">Guests</td>\
<td style=\"padding:4px 0;text-align:right;\">{guests}</td></tr>\
<tr><td style=\"padding:4px 0;color:#857f6a;\">Total</td>\
<td style=\"padding:4px 0;text-align:right;font-weight:bold;\">{total}</td></tr>\
</table>\
</div>\
<div style=\"padding:0 32px 8px;text-align:center;\">\
<a href=\"{link}\" style=\"display:inline-block;background:{BRAND_ACCENT};\
color:#ffffff;text-decoration:none;padding:14px 40px;border-radius:2px;\
font-size:15px;letter-spacing:1px;\">Complete Payment</a>\
<p style=\"margin:16px 0 0;font-size:13px;color:#857f6a;\">\
This payment link expires in {LINK_VALIDITY_HOURS} hours.</p>\
</div>\
<div style=\"margin-top:32px;padding:24px 32px;border-top:1px solid #e6dfcf;\
font-size:13px;color:#857f6a;text-align:center;line-height:1.8;\">\
Questions? Write to {CONCIERGE_EMAIL} or message our concierge on WhatsApp \
{CONCIERGE_WHATSAPP}.<br>{BRAND_NAME} &mdash; curated travel &amp; living\
</div>\
</div></body></html>",
        guests = details.guests,
    )
}

// ---------------------------------------------------------------------------
// Operator alert
// ---------------------------------------------------------------------------

/// Render the internal operator alert: customer contact fields and the
/// event/guest/total summary, no call-to-action.
///
/// Returns a body fragment; the dispatcher's notification shell supplies
/// the document wrapper, header, and footer.
pub fn render_admin_email(details: &BookingDetails) -> String {
    let name = escape_html(&details.customer_name);
    let email = escape_html(&details.customer_email);
    let phone = escape_html(details.customer_phone.as_deref().unwrap_or("—"));
    let title = escape_html(&details.event_title);
    let event_id = escape_html(&details.event_id);
    let order_id = escape_html(&details.order_id);
    let total = escape_html(&details.total_display);

    format!(
        "<h2 style=\"margin:0 0 16px;font-size:18px;\">New event booking</h2>\
<table style=\"width:100%;border-collapse:collapse;font-size:14px;\">\
<tr><td style=\"padding:6px 12px 6px 0;color:#64748b;\">Order</td><td>{order_id}</td></tr>\
<tr><td style=\"padding:6px 12px 6px 0;color:#64748b;\">Event</td><td>{title} ({event_id})</td></tr>\
<tr><td style=\"padding:6px 12px 6px 0;color:#64748b;\">Guests</td><td>{guests}</td></tr>\
<tr><td style=\"padding:6px 12px 6px 0;color:#64748b;\">Total</td><td>{total}</td></tr>\
<tr><td style=\"padding:6px 12px 6px 0;color:#64748b;\">Customer</td><td>{name}</td></tr>\
<tr><td style=\"padding:6px 12px 6px 0;color:#64748b;\">Email</td><td>{email}</td></tr>\
<tr><td style=\"padding:6px 12px 6px 0;color:#64748b;\">Phone</td><td>{phone}</td></tr>\
</table>\
<p style=\"margin:20px 0 0;color:#64748b;\">Awaiting payment confirmation from \
the gateway.</p>",
        guests = details.guests,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
