use crate::core::Pipeline;
use crate::domain::model::{CardOutcome, RunSummary};
use crate::utils::error::Result;

/// Drives the three pipeline stages for one run. Per-recipient failures live
/// inside the returned summary; only infrastructure errors (unreadable input
/// files, unwritable output directory) surface here.
pub struct BingoEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> BingoEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("Starting bingo card run");

        let input = self.pipeline.extract().await?;
        tracing::info!(
            "Read {} bingo entries and {} e-mail addresses",
            input.entries.len(),
            input.recipients.len()
        );

        let cards = self.pipeline.transform(input).await?;
        let prepared = cards
            .outcomes
            .iter()
            .filter(|o| matches!(o, CardOutcome::Prepared(_)))
            .count();
        tracing::info!(
            "Prepared {} of {} cards",
            prepared,
            cards.outcomes.len()
        );

        let summary = self.pipeline.load(cards).await?;
        tracing::info!(
            "Delivered {} cards, {} not delivered",
            summary.delivered(),
            summary.failed()
        );

        Ok(summary)
    }
}
