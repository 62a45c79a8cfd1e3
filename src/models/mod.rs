use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Travel category of a destination
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Category {
    Beach,
    Adventure,
    Cultural,
    Nature,
    Desert,
    City,
    Wine,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Core destination data model
///
/// Catalog entries are built once at startup and never mutated; every
/// consumer borrows them read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub location: String,
    pub image_url: String,
    /// Display string, e.g. "4 Days / 3 Nights"
    pub duration: String,
    pub price: i64,
    pub category: Category,
    pub ai_reason: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// What the user did with a recommendation card
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    Like,
    Skip,
}

/// A like/skip event forwarded to the observability sink
///
/// Interactions are recorded and nothing more; they do not feed back into
/// ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    pub destination_id: String,
    pub action: InteractionKind,
    pub recorded_at: DateTime<Utc>,
}
