pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{DryRunMailer, LocalStorage, SmtpMailer};
pub use config::{CliConfig, SmtpConfig};
pub use core::{engine::BingoEngine, pipeline::BingoPipeline};
pub use domain::model::{Card, DeliveryOutcome, GridSpec, Recipient, RunSummary};
pub use utils::error::{BingoError, Result};
