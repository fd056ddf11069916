//! Best-effort price normalization.
//!
//! Display prices on the site are locale-formatted strings ("₦200,000 per
//! guest"). Checkout totals are computed by stripping everything that is not
//! a digit or decimal point and parsing the remainder as a unit price. This
//! deliberately discards currency identity; the cleaned number is assumed to
//! be a single unit price in the event's implied currency, and the rendered
//! total is labelled as an approximation rather than a final charge.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Display total used when no numeric price can be derived.
pub const CONTACT_FOR_PRICING: &str = "Contact for Pricing";

/// Prefix for numeric display totals, signalling the amount is indicative.
pub const APPROX_PREFIX: &str = "Approx. ";

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse a loosely-formatted display price into a numeric unit price.
///
/// Strips every character outside `[0-9.]` before parsing. Returns `None`
/// when nothing numeric remains or the remainder is not a valid float
/// (e.g. `"TBD"`, `""`, `"1.2.3"`).
pub fn normalize_price(display: &str) -> Option<f64> {
    let cleaned: String = display
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    cleaned.parse::<f64>().ok()
}

/// Compute the total for `guests` from an optional display price.
///
/// A missing or unparseable price yields a total of zero, which downstream
/// rendering turns into [`CONTACT_FOR_PRICING`].
pub fn compute_total(display_price: Option<&str>, guests: u32) -> f64 {
    display_price
        .and_then(normalize_price)
        .map(|unit| unit * f64::from(guests))
        .unwrap_or(0.0)
}

/// Compute a booking total from the catalog's pricing fields.
///
/// A numeric `unit_price` is authoritative when present; otherwise the
/// display price is normalized via [`compute_total`]. Events carrying
/// neither yield zero.
pub fn booking_total(unit_price: Option<f64>, display_price: Option<&str>, guests: u32) -> f64 {
    match unit_price {
        Some(unit) => unit * f64::from(guests),
        None => compute_total(display_price, guests),
    }
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// The leading currency symbol of a display price, if any.
///
/// Everything before the first ASCII digit, trimmed. `"₦200,000"` yields
/// `"₦"`; `"200000"` yields `""`.
pub fn currency_symbol(display: &str) -> &str {
    let end = display
        .find(|c: char| c.is_ascii_digit())
        .unwrap_or(display.len());
    display[..end].trim()
}

/// Group the integer part of a non-negative amount with thousands commas.
///
/// Whole amounts render without a fractional part; fractional amounts keep
/// two decimal places.
pub fn group_thousands(amount: f64) -> String {
    let cents = (amount * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if fraction == 0 {
        grouped
    } else {
        format!("{grouped}.{fraction:02}")
    }
}

/// Render the display total for a computed amount.
///
/// A positive total renders as `"Approx. <symbol><grouped>"`, reusing the
/// currency symbol of the source display price; a zero total renders as
/// [`CONTACT_FOR_PRICING`].
pub fn format_total(display_price: Option<&str>, total: f64) -> String {
    if total > 0.0 {
        let symbol = display_price.map(currency_symbol).unwrap_or("");
        format!("{APPROX_PREFIX}{symbol}{}", group_thousands(total))
    } else {
        CONTACT_FOR_PRICING.to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- normalize_price ---------------------------------------------------

    #[test]
    fn parses_currency_and_separators() {
        assert_eq!(normalize_price("₦200,000"), Some(200_000.0));
        assert_eq!(normalize_price("$1,250.50"), Some(1250.5));
    }

    #[test]
    fn parsing_is_idempotent_under_reformatting() {
        assert_eq!(normalize_price("₦200,000"), normalize_price("200000"));
    }

    #[test]
    fn ignores_unit_price_hints() {
        assert_eq!(normalize_price("₦200,000 per guest"), Some(200_000.0));
    }

    #[test]
    fn rejects_non_numeric_strings() {
        assert_eq!(normalize_price("Contact us"), None);
        assert_eq!(normalize_price(""), None);
    }

    #[test]
    fn rejects_multiple_decimal_points() {
        assert_eq!(normalize_price("1.2.3"), None);
    }

    // -- compute_total -----------------------------------------------------

    #[test]
    fn total_is_unit_price_times_guests() {
        let total = compute_total(Some("₦200,000"), 2);
        assert!((total - 400_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_price_yields_zero_total() {
        assert_eq!(compute_total(None, 4), 0.0);
    }

    #[test]
    fn unparseable_price_yields_zero_total() {
        assert_eq!(compute_total(Some("TBD"), 4), 0.0);
    }

    // -- booking_total -----------------------------------------------------

    #[test]
    fn numeric_unit_price_is_authoritative() {
        let total = booking_total(Some(180_000.0), Some("₦200,000 per guest"), 2);
        assert!((total - 360_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn falls_back_to_display_price() {
        let total = booking_total(None, Some("₦200,000 per guest"), 2);
        assert!((total - 400_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn no_pricing_fields_yields_zero() {
        assert_eq!(booking_total(None, None, 3), 0.0);
    }

    // -- formatting --------------------------------------------------------

    #[test]
    fn currency_symbol_is_leading_non_digits() {
        assert_eq!(currency_symbol("₦200,000"), "₦");
        assert_eq!(currency_symbol("$ 150"), "$");
        assert_eq!(currency_symbol("200000"), "");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(400_000.0), "400,000");
        assert_eq!(group_thousands(1_234_567.0), "1,234,567");
        assert_eq!(group_thousands(950.0), "950");
    }

    #[test]
    fn keeps_two_decimals_for_fractional_amounts() {
        assert_eq!(group_thousands(1250.5), "1,250.50");
    }

    #[test]
    fn formats_positive_total_with_approx_prefix() {
        let formatted = format_total(Some("₦200,000 per guest"), 400_000.0);
        assert_eq!(formatted, "Approx. ₦400,000");
    }

    #[test]
    fn formats_zero_total_as_contact_for_pricing() {
        assert_eq!(format_total(None, 0.0), CONTACT_FOR_PRICING);
        assert_eq!(format_total(Some("TBD"), 0.0), CONTACT_FOR_PRICING);
    }
}
