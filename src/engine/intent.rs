use lazy_static::lazy_static;
use regex::Regex;

use crate::engine::types::{Intent, TripLength, Vibe};
use crate::models::Category;

/// Budget ceiling applied for generic "budget"/"cheap" queries (rupees)
pub const DEFAULT_BUDGET_CAP: i64 = 18_000;

/// Budget ceiling applied for "luxury"/"premium" queries (rupees)
pub const LUXURY_BUDGET_CAP: i64 = 50_000;

lazy_static! {
    // Qualifier word, optional currency marker, then the amount. A bare
    // number without a qualifier is not a budget signal.
    static ref BUDGET_RE: Regex =
        Regex::new(r"(?:under|below|less than|max|budget)\s*(?:₹|rs\.?|rupees?)?\s*(\d+)\s*k?")
            .unwrap();
}

// Keyword ladders, first match wins top to bottom.
const CATEGORY_RULES: &[(&[&str], Category)] = &[
    (&["beach", "coastal", "sea"], Category::Beach),
    (&["mountain", "hill", "trek"], Category::Adventure),
    (
        &["temple", "cultural", "heritage", "historical"],
        Category::Cultural,
    ),
    (&["nature", "forest", "wildlife"], Category::Nature),
    (&["desert", "sand"], Category::Desert),
    (&["city", "urban"], Category::City),
];

const VIBE_RULES: &[(&[&str], Vibe)] = &[
    (&["romantic", "couple"], Vibe::Romantic),
    (&["family"], Vibe::Family),
    (&["solo", "alone"], Vibe::Solo),
    (&["adventure", "thrill"], Vibe::Adventure),
];

const TRIP_LENGTH_RULES: &[(&[&str], TripLength)] = &[
    (&["weekend", "2 day", "short"], TripLength::Short),
    (&["week", "5 day", "6 day", "7 day"], TripLength::Long),
];

/// Classify a free-text query into a structured [`Intent`]
///
/// Total function: a query with no recognizable signal yields an intent with
/// every field unset, never an error. Matching is case-insensitive and the
/// four dimensions are detected independently, so one query can carry
/// category, budget, vibe and trip-length signals at once.
pub fn parse_intent(query: &str) -> Intent {
    let query = query.to_lowercase();

    Intent {
        category: first_match(CATEGORY_RULES, &query),
        max_budget: detect_budget(&query),
        vibe: first_match(VIBE_RULES, &query),
        trip_length: first_match(TRIP_LENGTH_RULES, &query),
    }
}

fn first_match<T: Copy>(rules: &[(&[&str], T)], query: &str) -> Option<T> {
    rules
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| query.contains(kw)))
        .map(|(_, value)| *value)
}

fn detect_budget(query: &str) -> Option<i64> {
    if let Some(captures) = BUDGET_RE.captures(query) {
        if let Ok(amount) = captures[1].parse::<i64>() {
            // Small figures are shorthand for thousands: "under 20k" and
            // "under 20" both mean 20 000.
            return Some(if amount <= 100 { amount * 1000 } else { amount });
        }
    }

    if ["budget", "cheap", "affordable"].iter().any(|kw| query.contains(kw)) {
        return Some(DEFAULT_BUDGET_CAP);
    }

    if ["luxury", "premium"].iter().any(|kw| query.contains(kw)) {
        return Some(LUXURY_BUDGET_CAP);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_yields_empty_intent() {
        let intent = parse_intent("");
        assert!(intent.is_empty());
    }

    #[test]
    fn nonsense_query_yields_empty_intent() {
        let intent = parse_intent("qwertyuiop 42 zxcvbnm");
        assert!(intent.is_empty());
    }

    #[test]
    fn beach_keywords_map_to_beach() {
        for query in ["beach getaway", "COASTAL escape", "by the sea"] {
            assert_eq!(parse_intent(query).category, Some(Category::Beach));
        }
    }

    #[test]
    fn category_ladder_is_ordered() {
        // "beach" outranks "mountain" even when both appear
        let intent = parse_intent("beach or mountain trip");
        assert_eq!(intent.category, Some(Category::Beach));

        let intent = parse_intent("mountain trek with temple visits");
        assert_eq!(intent.category, Some(Category::Adventure));
    }

    #[test]
    fn remaining_category_keywords() {
        assert_eq!(
            parse_intent("heritage walk").category,
            Some(Category::Cultural)
        );
        assert_eq!(
            parse_intent("wildlife safari").category,
            Some(Category::Nature)
        );
        assert_eq!(
            parse_intent("sand dunes").category,
            Some(Category::Desert)
        );
        assert_eq!(parse_intent("urban escape").category, Some(Category::City));
    }

    #[test]
    fn qualified_small_number_scales_to_thousands() {
        assert_eq!(parse_intent("beach trip under 20k").max_budget, Some(20_000));
        assert_eq!(parse_intent("under 20").max_budget, Some(20_000));
        assert_eq!(parse_intent("max ₹15k").max_budget, Some(15_000));
        assert_eq!(parse_intent("less than rs 25").max_budget, Some(25_000));
    }

    #[test]
    fn qualified_large_number_is_unscaled() {
        assert_eq!(parse_intent("under 15000").max_budget, Some(15_000));
        assert_eq!(parse_intent("below rupees 22000").max_budget, Some(22_000));
    }

    #[test]
    fn bare_number_is_not_a_budget() {
        assert_eq!(parse_intent("3 friends going to goa").max_budget, None);
        assert_eq!(parse_intent("20000").max_budget, None);
    }

    #[test]
    fn budget_keywords_fall_back_to_default_cap() {
        assert_eq!(parse_intent("cheap trip").max_budget, Some(DEFAULT_BUDGET_CAP));
        assert_eq!(
            parse_intent("affordable stay").max_budget,
            Some(DEFAULT_BUDGET_CAP)
        );
    }

    #[test]
    fn luxury_keywords_raise_the_cap() {
        assert_eq!(parse_intent("luxury escape").max_budget, Some(LUXURY_BUDGET_CAP));
        assert_eq!(
            parse_intent("premium resort").max_budget,
            Some(LUXURY_BUDGET_CAP)
        );
    }

    #[test]
    fn qualified_number_beats_keyword_default() {
        // "budget" doubles as a qualifier when a number follows it
        assert_eq!(parse_intent("budget 30k").max_budget, Some(30_000));
        assert_eq!(parse_intent("budget trip").max_budget, Some(DEFAULT_BUDGET_CAP));
    }

    #[test]
    fn vibe_ladder() {
        assert_eq!(parse_intent("couple retreat").vibe, Some(Vibe::Romantic));
        assert_eq!(parse_intent("family vacation").vibe, Some(Vibe::Family));
        assert_eq!(parse_intent("travelling alone").vibe, Some(Vibe::Solo));
        assert_eq!(parse_intent("thrill seeking").vibe, Some(Vibe::Adventure));
        // romantic outranks adventure
        assert_eq!(
            parse_intent("romantic adventure").vibe,
            Some(Vibe::Romantic)
        );
    }

    #[test]
    fn trip_length_ladder() {
        assert_eq!(
            parse_intent("weekend getaway").trip_length,
            Some(TripLength::Short)
        );
        assert_eq!(
            parse_intent("2 days off").trip_length,
            Some(TripLength::Short)
        );
        assert_eq!(
            parse_intent("a week in the hills").trip_length,
            Some(TripLength::Long)
        );
        assert_eq!(
            parse_intent("5 day tour").trip_length,
            Some(TripLength::Long)
        );
    }

    #[test]
    fn all_four_dimensions_detected_together() {
        let intent = parse_intent("Romantic beach trip under 20k for a weekend");
        assert_eq!(intent.category, Some(Category::Beach));
        assert_eq!(intent.max_budget, Some(20_000));
        assert_eq!(intent.vibe, Some(Vibe::Romantic));
        assert_eq!(intent.trip_length, Some(TripLength::Short));
    }
}
