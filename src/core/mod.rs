pub mod engine;
pub mod entries;
pub mod pipeline;
pub mod renderer;
pub mod sampler;

pub use crate::domain::model::{
    BatchCards, BatchInput, Card, CardOutcome, DeliveryOutcome, GridSpec, OutgoingCard,
    PreparedCard, Recipient, RecipientReport, RunSummary,
};
pub use crate::domain::ports::{ConfigProvider, Mailer, Pipeline, Storage};
pub use crate::utils::error::Result;
