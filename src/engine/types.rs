use serde::{Deserialize, Serialize};

use crate::models::Category;

/// Travel-style tag detected in a query
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Vibe {
    Romantic,
    Family,
    Solo,
    Adventure,
}

/// Coarse trip-length bucket detected in a query
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TripLength {
    Short,
    Long,
}

/// Structured travel intent extracted from a free-text query
///
/// Every field is optional; an absent field means the query carried no
/// signal in that dimension and the corresponding filter stage is skipped.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    /// Destination category, e.g. Beach or Desert
    pub category: Option<Category>,
    /// Price ceiling in whole rupees
    pub max_budget: Option<i64>,
    /// Travel-style tag
    pub vibe: Option<Vibe>,
    /// Short weekend trip vs. a full week
    pub trip_length: Option<TripLength>,
}

impl Intent {
    /// True when no signal was detected in any dimension
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.max_budget.is_none()
            && self.vibe.is_none()
            && self.trip_length.is_none()
    }
}
