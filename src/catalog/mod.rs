use std::collections::HashSet;

use anyhow::{Context, Result};
use tracing::info;

use crate::models::{Category, Destination};

/// Load a destination catalog from a JSON file
///
/// Rejects catalogs that break the invariants the filter relies on:
/// duplicate ids or negative prices.
pub async fn load_catalog(path: &str) -> Result<Vec<Destination>> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read catalog file {}", path))?;

    let destinations: Vec<Destination> =
        serde_json::from_str(&raw).context("Failed to parse catalog JSON")?;

    let mut seen = HashSet::new();
    for destination in &destinations {
        if destination.price < 0 {
            anyhow::bail!(
                "Destination {} has a negative price: {}",
                destination.id,
                destination.price
            );
        }
        if !seen.insert(destination.id.as_str()) {
            anyhow::bail!("Duplicate destination id: {}", destination.id);
        }
    }

    info!("Loaded {} destinations from {}", destinations.len(), path);

    Ok(destinations)
}

/// The built-in destination catalog
pub fn reference_catalog() -> Vec<Destination> {
    vec![
        Destination {
            id: "1".to_string(),
            name: "Varkala, Kerala".to_string(),
            location: "Kerala, India".to_string(),
            image_url: "assets/stock_images/beautiful_beach_dest.jpg".to_string(),
            duration: "4 Days / 3 Nights".to_string(),
            price: 18_000,
            category: Category::Beach,
            ai_reason: "Because you loved beaches and calm getaways".to_string(),
            description: Some(
                "Best for solo travelers seeking tranquility. Perfect 4-day trip ideal in winter months."
                    .to_string(),
            ),
        },
        Destination {
            id: "2".to_string(),
            name: "Bir Billing".to_string(),
            location: "Himachal Pradesh, India".to_string(),
            image_url: "assets/stock_images/mountain_landscape.jpg".to_string(),
            duration: "3 Days / 2 Nights".to_string(),
            price: 15_000,
            category: Category::Adventure,
            ai_reason: "Based on your love for adventure sports and mountains".to_string(),
            description: Some(
                "Perfect for adventure enthusiasts. Paragliding capital of India with stunning valley views."
                    .to_string(),
            ),
        },
        Destination {
            id: "3".to_string(),
            name: "Hampi".to_string(),
            location: "Karnataka, India".to_string(),
            image_url: "assets/stock_images/ancient_temple_archi.jpg".to_string(),
            duration: "3 Days / 2 Nights".to_string(),
            price: 12_000,
            category: Category::Cultural,
            ai_reason: "You enjoy historical sites and cultural experiences".to_string(),
            description: Some(
                "Ideal for history buffs. Ancient ruins and temples perfect for a 3-day cultural immersion."
                    .to_string(),
            ),
        },
        Destination {
            id: "4".to_string(),
            name: "Udaipur".to_string(),
            location: "Rajasthan, India".to_string(),
            image_url: "assets/stock_images/colorful_city_street.jpg".to_string(),
            duration: "4 Days / 3 Nights".to_string(),
            price: 22_000,
            category: Category::City,
            ai_reason: "Matches your preference for romantic city breaks".to_string(),
            description: Some(
                "City of lakes and palaces. Perfect for couples seeking luxury and culture.".to_string(),
            ),
        },
        Destination {
            id: "5".to_string(),
            name: "Coorg".to_string(),
            location: "Karnataka, India".to_string(),
            image_url: "assets/stock_images/serene_lake_with_for.jpg".to_string(),
            duration: "3 Days / 2 Nights".to_string(),
            price: 16_000,
            category: Category::Nature,
            ai_reason: "Because you loved nature escapes and budget-friendly trips".to_string(),
            description: Some(
                "Scotland of India. Coffee plantations and misty hills ideal for nature lovers.".to_string(),
            ),
        },
        Destination {
            id: "6".to_string(),
            name: "Jaisalmer".to_string(),
            location: "Rajasthan, India".to_string(),
            image_url: "assets/stock_images/desert_landscape_wit.jpg".to_string(),
            duration: "3 Days / 2 Nights".to_string(),
            price: 19_000,
            category: Category::Desert,
            ai_reason: "Based on your interest in unique landscapes and experiences".to_string(),
            description: Some(
                "Golden city with sand dunes. Camel safaris and desert camping under the stars.".to_string(),
            ),
        },
        Destination {
            id: "7".to_string(),
            name: "Nashik".to_string(),
            location: "Maharashtra, India".to_string(),
            image_url: "assets/stock_images/countryside_villa_wi.jpg".to_string(),
            duration: "2 Days / 1 Night".to_string(),
            price: 14_000,
            category: Category::Wine,
            ai_reason: "Matches your taste for wine regions and relaxation".to_string(),
            description: Some(
                "Wine capital of India. Vineyard tours and tastings in scenic countryside.".to_string(),
            ),
        },
        Destination {
            id: "8".to_string(),
            name: "Gokarna".to_string(),
            location: "Karnataka, India".to_string(),
            image_url: "assets/stock_images/coastal_cliff_villag.jpg".to_string(),
            duration: "4 Days / 3 Nights".to_string(),
            price: 17_000,
            category: Category::Beach,
            ai_reason: "Similar to beaches you loved but less crowded".to_string(),
            description: Some(
                "Peaceful alternative to Goa. Pristine beaches and cliff-top views.".to_string(),
            ),
        },
    ]
}
