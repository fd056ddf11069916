//! The bookable-event catalog.
//!
//! Events are defined at build time and never mutated at runtime. The
//! catalog is injected into the request handler as an immutable collection
//! rather than read from a module-level global, so tests can supply fixture
//! catalogs.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Event records
// ---------------------------------------------------------------------------

/// Pricing details attached to an event.
///
/// `display_price` is a locale-formatted string ("₦200,000 per guest");
/// when absent the event is "contact for pricing". `unit_price`, when
/// present, is the already-parsed numeric unit price.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventBooking {
    pub display_price: Option<String>,
    pub unit_price: Option<f64>,
}

/// Contact channels shown to customers in confirmation emails.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventContact {
    pub whatsapp: Option<String>,
    pub email: Option<String>,
}

/// A single bookable event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier within the catalog (URL slug).
    pub id: String,
    pub title: String,
    /// Human-readable date string as shown on the site.
    pub date: String,
    pub location: String,
    /// Hero image reference (site-relative path or absolute URL).
    pub hero_image: String,
    #[serde(default)]
    pub booking: EventBooking,
    #[serde(default)]
    pub contact: EventContact,
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Immutable, read-only collection of bookable events.
#[derive(Debug, Clone, Default)]
pub struct EventCatalog {
    events: Vec<Event>,
}

impl EventCatalog {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// Look up an event by exact identifier equality.
    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The production event catalog as published on the site.
    pub fn seeded() -> Self {
        Self::new(vec![
            Event {
                id: "black-and-boundless".to_string(),
                title: "Black & Boundless".to_string(),
                date: "December 27, 2026".to_string(),
                location: "Eko Atlantic, Lagos".to_string(),
                hero_image: "/images/events/black-and-boundless.jpg".to_string(),
                booking: EventBooking {
                    display_price: Some("₦200,000 per guest".to_string()),
                    unit_price: Some(200_000.0),
                },
                contact: EventContact {
                    whatsapp: Some("+2348000000001".to_string()),
                    email: Some("events@auriva.travel".to_string()),
                },
            },
            Event {
                id: "harmattan-supper-club".to_string(),
                title: "Harmattan Supper Club".to_string(),
                date: "January 17, 2027".to_string(),
                location: "Ikoyi, Lagos".to_string(),
                hero_image: "/images/events/harmattan-supper-club.jpg".to_string(),
                booking: EventBooking {
                    display_price: Some("₦350,000 per guest".to_string()),
                    unit_price: Some(350_000.0),
                },
                contact: EventContact {
                    whatsapp: Some("+2348000000001".to_string()),
                    email: Some("events@auriva.travel".to_string()),
                },
            },
            Event {
                id: "azure-coast-residency".to_string(),
                title: "Azure Coast Residency Preview".to_string(),
                date: "March 5, 2027".to_string(),
                location: "Zanzibar, Tanzania".to_string(),
                hero_image: "/images/events/azure-coast-residency.jpg".to_string(),
                // Invitation-only pricing; customers are asked to get in touch.
                booking: EventBooking::default(),
                contact: EventContact {
                    whatsapp: Some("+2348000000001".to_string()),
                    email: Some("residency@auriva.travel".to_string()),
                },
            },
        ])
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
