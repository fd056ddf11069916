//! Order identifier generation.
//!
//! Order ids are opaque, human-shareable correlation tokens embedded in both
//! confirmation emails and the payment link. Nothing verifies uniqueness
//! against a store; instead the token combines a millisecond clock component
//! with random entropy so that even two requests landing in the same instant
//! do not collide in practice.

use rand::Rng;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Prefix for all order identifiers.
pub const ORDER_ID_PREFIX: &str = "ORD";

/// Number of random characters appended after the clock component.
pub const ORDER_ID_SUFFIX_LEN: usize = 6;

/// Alphabet for the random suffix (uppercase alphanumerics, no ambiguity
/// handling needed since the token is copy-pasted, not typed).
const SUFFIX_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Generate a fresh order identifier: `ORD-<epoch millis><6 random chars>`.
pub fn generate_order_id() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let mut rng = rand::rng();
    let suffix: String = (0..ORDER_ID_SUFFIX_LEN)
        .map(|_| {
            let idx = rng.random_range(0..SUFFIX_ALPHABET.len());
            SUFFIX_ALPHABET[idx] as char
        })
        .collect();
    format!("{ORDER_ID_PREFIX}-{millis}{suffix}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
