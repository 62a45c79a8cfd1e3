use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use crate::engine::traits::InteractionSink;
use crate::models::{Interaction, InteractionKind};

/// Sink that writes interactions to the log and nothing else
///
/// The current product records likes and skips purely for observability;
/// they do not influence ranking.
#[derive(Debug, Default)]
pub struct LogSink;

#[async_trait]
impl InteractionSink for LogSink {
    async fn record(&self, interaction: &Interaction) -> Result<()> {
        match interaction.action {
            InteractionKind::Like => {
                info!("Liked destination: {}", interaction.destination_id);
            }
            InteractionKind::Skip => {
                info!("Skipped destination: {}", interaction.destination_id);
            }
        }
        Ok(())
    }

    fn sink_name(&self) -> &'static str {
        "log"
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[tokio::test]
    async fn log_sink_accepts_both_actions() {
        let sink = LogSink;
        for action in [InteractionKind::Like, InteractionKind::Skip] {
            let interaction = Interaction {
                destination_id: "4".to_string(),
                action,
                recorded_at: Utc::now(),
            };
            sink.record(&interaction).await.unwrap();
        }
        assert_eq!(sink.sink_name(), "log");
    }
}
