use anyhow::Result;
use async_trait::async_trait;

use crate::models::Interaction;

/// Common trait for interaction sinks
/// This allows swapping the log sink for a real store (database, analytics
/// pipeline, etc) in the future
#[async_trait]
pub trait InteractionSink: Send + Sync {
    /// Record a like/skip event
    async fn record(&self, interaction: &Interaction) -> Result<()>;

    /// Get the name of the sink
    fn sink_name(&self) -> &'static str;
}
