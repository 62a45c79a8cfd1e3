mod catalog;
mod engine;
mod models;

use engine::RecommendationSession;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string())),
        )
        .init();

    info!("🌍 Travel Scout - AI Destination Discovery");
    info!("==========================================");
    info!("");

    // Catalog comes from a JSON file when configured, otherwise the
    // built-in reference set
    let destinations = match std::env::var("TRAVEL_SCOUT_CATALOG") {
        Ok(path) => catalog::load_catalog(&path).await?,
        Err(_) => catalog::reference_catalog(),
    };
    info!("Catalog holds {} destinations", destinations.len());

    let session = RecommendationSession::new(destinations);

    let query = std::env::args().skip(1).collect::<Vec<_>>().join(" ");

    let picks = if query.trim().is_empty() {
        // Blank input never reaches the parser; reshuffle the catalog instead
        info!("No query given - generating fresh recommendations");
        session.regenerate().await.unwrap_or_default()
    } else {
        info!("Query: {}", query);
        match session.search(&query).await {
            Some(recommendation) => {
                info!("Parsed intent: {:?}", recommendation.intent);
                recommendation.destinations
            }
            None => Vec::new(),
        }
    };

    // Display results
    info!("\n✅ {} recommendations\n", picks.len());

    for (i, destination) in picks.iter().enumerate() {
        println!("{}. {} ({})", i + 1, destination.name, destination.location);
        println!("   {} | ₹{}", destination.duration, destination.price);
        println!("   Category: {}", destination.category);
        println!("   Why: {}", destination.ai_reason);
        if let Some(description) = &destination.description {
            println!("   {}", description);
        }
        println!();
    }

    // Save to JSON file
    let json = serde_json::to_string_pretty(&picks)?;
    tokio::fs::write("recommendations.json", json).await?;
    info!("💾 Saved recommendations to recommendations.json");

    Ok(())
}
