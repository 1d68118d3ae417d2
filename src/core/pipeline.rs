use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::{entries, renderer, sampler};
use crate::core::{ConfigProvider, Mailer, Pipeline, Storage};
use crate::domain::model::{
    BatchCards, BatchInput, CardOutcome, DeliveryOutcome, GridSpec, OutgoingCard, PreparedCard,
    Recipient, RecipientReport, RunSummary,
};
use crate::utils::error::{BingoError, Result};

/// The card-generation pipeline: extract reads and parses the two input
/// files, transform samples and renders one card per recipient, load persists
/// each artifact and hands it to the mailer. Recipients are independent
/// failure domains: a capacity or delivery failure becomes that recipient's
/// outcome and never aborts the batch.
pub struct BingoPipeline<S: Storage, C: ConfigProvider, M: Mailer> {
    storage: S,
    config: C,
    mailer: M,
}

impl<S: Storage, C: ConfigProvider, M: Mailer> BingoPipeline<S, C, M> {
    pub fn new(storage: S, config: C, mailer: M) -> Self {
        Self {
            storage,
            config,
            mailer,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, M: Mailer> Pipeline for BingoPipeline<S, C, M> {
    async fn extract(&self) -> Result<BatchInput> {
        tracing::debug!("Reading bingo entries from {}", self.config.entries_file());
        let raw_entries = self.storage.read_file(self.config.entries_file()).await?;
        let entries = entries::parse_bytes(&raw_entries)?;

        tracing::debug!(
            "Reading e-mail addresses from {}",
            self.config.emails_file()
        );
        let raw_emails = self.storage.read_file(self.config.emails_file()).await?;
        let recipients = entries::parse_bytes(&raw_emails)?
            .into_iter()
            .map(Recipient::new)
            .collect();

        Ok(BatchInput {
            entries,
            recipients,
        })
    }

    async fn transform(&self, input: BatchInput) -> Result<BatchCards> {
        let grid = GridSpec::new(self.config.rows(), self.config.cols())?;
        let mut rng = StdRng::from_os_rng();

        let mut outcomes = Vec::with_capacity(input.recipients.len());
        for recipient in &input.recipients {
            match sampler::sample(&input.entries, grid, &mut rng) {
                Ok(card) => {
                    let html = renderer::render_html(&card, recipient.name());
                    outcomes.push(CardOutcome::Prepared(PreparedCard {
                        recipient: recipient.clone(),
                        card,
                        html,
                    }));
                }
                Err(err @ BingoError::CapacityError { .. }) => {
                    tracing::warn!("No card for {}: {}", recipient.address(), err);
                    outcomes.push(CardOutcome::Skipped {
                        recipient: recipient.clone(),
                        reason: err.to_string(),
                    });
                }
                Err(other) => return Err(other),
            }
        }

        Ok(BatchCards {
            entries_read: input.entries.len(),
            emails_read: input.recipients.len(),
            outcomes,
        })
    }

    async fn load(&self, cards: BatchCards) -> Result<RunSummary> {
        let mut reports = Vec::with_capacity(cards.outcomes.len());

        for outcome in cards.outcomes {
            match outcome {
                CardOutcome::Skipped { recipient, reason } => {
                    reports.push(RecipientReport {
                        recipient,
                        outcome: DeliveryOutcome::Skipped { reason },
                        preview: None,
                    });
                }
                CardOutcome::Prepared(prepared) => {
                    let preview = renderer::preview_rows(&prepared.card);
                    let filename = prepared.recipient.artifact_filename();
                    self.storage
                        .write_file(&filename, prepared.html.as_bytes())
                        .await?;

                    let outgoing = OutgoingCard {
                        to: prepared.recipient.address().to_string(),
                        attachment_name: filename.clone(),
                        html: prepared.html.into_bytes(),
                    };

                    let outcome = match self.mailer.send(&outgoing).await {
                        Ok(()) => {
                            tracing::info!("Delivered card to {}", prepared.recipient.address());
                            DeliveryOutcome::Delivered { artifact: filename }
                        }
                        Err(err) => {
                            tracing::warn!(
                                "Delivery to {} failed: {}",
                                prepared.recipient.address(),
                                err
                            );
                            DeliveryOutcome::Failed {
                                reason: err.to_string(),
                            }
                        }
                    };

                    reports.push(RecipientReport {
                        recipient: prepared.recipient,
                        outcome,
                        preview: Some(preview),
                    });
                }
            }
        }

        Ok(RunSummary {
            entries_read: cards.entries_read,
            emails_read: cards.emails_read,
            completed_at: chrono::Utc::now(),
            reports,
        })
    }
}
