use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use tracing::{debug, info};

use crate::engine::events::LogSink;
use crate::engine::intent::parse_intent;
use crate::engine::recommend::{filter_destinations, regenerate};
use crate::engine::traits::InteractionSink;
use crate::engine::types::Intent;
use crate::models::{Destination, Interaction, InteractionKind};

/// Delay simulating the "AI thinking" pause of the original experience
const DEFAULT_THINKING_DELAY: Duration = Duration::from_millis(800);

/// A search result handed to the presentation layer
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub intent: Intent,
    pub destinations: Vec<Destination>,
}

/// Stateful front door for the intent engine
///
/// Holds the shared read-only catalog and serializes competing queries:
/// whenever a new query arrives while an older one is still in its thinking
/// delay, the older one resolves to `None` instead of delivering a stale
/// result (last query wins).
pub struct RecommendationSession {
    catalog: Arc<Vec<Destination>>,
    sink: Arc<dyn InteractionSink>,
    thinking_delay: Duration,
    generation: AtomicU64,
}

impl RecommendationSession {
    /// Create a session over a catalog with the default delay and log sink
    pub fn new(catalog: Vec<Destination>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            sink: Arc::new(LogSink),
            thinking_delay: DEFAULT_THINKING_DELAY,
            generation: AtomicU64::new(0),
        }
    }

    /// Override the thinking delay (zero disables it)
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.thinking_delay = delay;
        self
    }

    /// Override the interaction sink
    pub fn with_sink(mut self, sink: Arc<dyn InteractionSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn catalog(&self) -> &[Destination] {
        &self.catalog
    }

    /// Run a query through the intent parser and recommendation filter
    ///
    /// Callers are expected to reject blank input before getting here.
    /// Returns `None` when a newer query superseded this one mid-flight.
    pub async fn search(&self, query: &str) -> Option<Recommendation> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let intent = parse_intent(query);
        debug!("Parsed intent from {:?}: {:?}", query, intent);

        tokio::time::sleep(self.thinking_delay).await;

        if self.generation.load(Ordering::SeqCst) != ticket {
            info!("Query {:?} superseded by a newer one, dropping result", query);
            return None;
        }

        let destinations: Vec<Destination> = filter_destinations(&self.catalog, &intent)
            .into_iter()
            .cloned()
            .collect();
        info!(
            "Query {:?} matched {} destinations",
            query,
            destinations.len()
        );

        Some(Recommendation {
            intent,
            destinations,
        })
    }

    /// Reshuffle the whole catalog without a query
    ///
    /// Same supersession rules as [`search`](Self::search).
    pub async fn regenerate(&self) -> Option<Vec<Destination>> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        tokio::time::sleep(self.thinking_delay).await;

        if self.generation.load(Ordering::SeqCst) != ticket {
            return None;
        }

        Some(regenerate(&self.catalog).into_iter().cloned().collect())
    }

    /// Record that the user liked a destination
    pub async fn like(&self, destination_id: &str) -> Result<()> {
        self.record(destination_id, InteractionKind::Like).await
    }

    /// Record that the user skipped a destination
    pub async fn skip(&self, destination_id: &str) -> Result<()> {
        self.record(destination_id, InteractionKind::Skip).await
    }

    async fn record(&self, destination_id: &str, action: InteractionKind) -> Result<()> {
        let interaction = Interaction {
            destination_id: destination_id.to_string(),
            action,
            recorded_at: Utc::now(),
        };
        self.sink.record(&interaction).await
    }
}
