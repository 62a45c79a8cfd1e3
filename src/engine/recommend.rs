use rand::seq::SliceRandom;
use rand::Rng;

use crate::engine::intent::DEFAULT_BUDGET_CAP;
use crate::engine::types::{Intent, TripLength, Vibe};
use crate::models::{Category, Destination};

/// How many destinations a recommendation pass surfaces at most
pub const DISPLAY_COUNT: usize = 6;

/// Narrow the catalog to the destinations matching an intent
///
/// Applies the filter stages in order (category, budget, vibe, trip length),
/// then shuffles the survivors and keeps the first [`DISPLAY_COUNT`]. The
/// catalog is only borrowed; entries are never copied or reordered in place.
pub fn filter_destinations<'a>(
    catalog: &'a [Destination],
    intent: &Intent,
) -> Vec<&'a Destination> {
    filter_destinations_with(catalog, intent, &mut rand::thread_rng())
}

/// [`filter_destinations`] with a caller-supplied RNG for the shuffle stage
pub fn filter_destinations_with<'a, R: Rng + ?Sized>(
    catalog: &'a [Destination],
    intent: &Intent,
    rng: &mut R,
) -> Vec<&'a Destination> {
    let mut picks = candidates(catalog, intent);
    picks.shuffle(rng);
    picks.truncate(DISPLAY_COUNT);
    picks
}

/// The deterministic candidate set: every destination surviving the filter
/// stages, in catalog order, before shuffle and truncation
///
/// Falls back to the whole catalog when the stages eliminate everything, so
/// the result is empty only for an empty catalog. The fallback is global,
/// applied once after all stages rather than per stage.
pub fn candidates<'a>(catalog: &'a [Destination], intent: &Intent) -> Vec<&'a Destination> {
    let mut working: Vec<&Destination> = catalog.iter().collect();

    if let Some(category) = intent.category {
        working.retain(|d| d.category == category);
    }

    if let Some(max_budget) = intent.max_budget {
        working.retain(|d| d.price <= max_budget);
    }

    match intent.vibe {
        Some(Vibe::Romantic) => {
            // Udaipur is categorized City but is the canonical romantic
            // destination, hence the name override.
            working.retain(|d| {
                matches!(d.category, Category::City | Category::Beach)
                    || d.name.contains("Udaipur")
            });
        }
        Some(Vibe::Adventure) => {
            working.retain(|d| matches!(d.category, Category::Adventure | Category::Desert));
        }
        Some(Vibe::Family) => {
            working.retain(|d| matches!(d.category, Category::Nature | Category::Cultural));
        }
        // Solo is a recognized parse output with no filter branch.
        Some(Vibe::Solo) | None => {}
    }

    match intent.trip_length {
        Some(TripLength::Short) => {
            working.retain(|d| d.duration.contains("2 Night") || d.duration.contains("1 Night"));
        }
        Some(TripLength::Long) => {
            working.retain(|d| d.duration.contains("4 Days") || d.duration.contains("5 Days"));
        }
        None => {}
    }

    if working.is_empty() {
        catalog.iter().collect()
    } else {
        working
    }
}

/// Reshuffle the full catalog, ignoring any intent
///
/// Backs the "generate new recommendations" action when no query has been
/// issued yet.
pub fn regenerate(catalog: &[Destination]) -> Vec<&Destination> {
    regenerate_with(catalog, &mut rand::thread_rng())
}

/// [`regenerate`] with a caller-supplied RNG
pub fn regenerate_with<'a, R: Rng + ?Sized>(
    catalog: &'a [Destination],
    rng: &mut R,
) -> Vec<&'a Destination> {
    let mut picks: Vec<&Destination> = catalog.iter().collect();
    picks.shuffle(rng);
    picks.truncate(DISPLAY_COUNT);
    picks
}

/// One-tap filter selection from the category badge row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickFilter {
    All,
    Category(Category),
    Budget,
}

/// Filter the catalog by a quick-filter badge, keeping catalog order
///
/// Unlike the intent pipeline there is no shuffle stage; the badges slice
/// the catalog as-is. An empty category selection falls back to the full
/// catalog like the intent pipeline does.
pub fn quick_filter<'a>(catalog: &'a [Destination], filter: QuickFilter) -> Vec<&'a Destination> {
    match filter {
        QuickFilter::All => catalog.iter().take(DISPLAY_COUNT).collect(),
        QuickFilter::Budget => catalog
            .iter()
            .filter(|d| d.price < DEFAULT_BUDGET_CAP)
            .take(DISPLAY_COUNT)
            .collect(),
        QuickFilter::Category(category) => {
            let picks: Vec<&Destination> = catalog
                .iter()
                .filter(|d| d.category == category)
                .take(DISPLAY_COUNT)
                .collect();
            if picks.is_empty() {
                catalog.iter().take(DISPLAY_COUNT).collect()
            } else {
                picks
            }
        }
    }
}
