use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::error::{BingoError, Result};

pub const MIN_DIMENSION: usize = 1;
pub const MAX_DIMENSION: usize = 15;

/// Requested card dimensions. Both sides are validated against
/// [`MIN_DIMENSION`]..=[`MAX_DIMENSION`] at construction, so a `GridSpec`
/// value is always usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    rows: usize,
    cols: usize,
}

impl GridSpec {
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        for (field, value) in [("rows", rows), ("cols", cols)] {
            if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&value) {
                return Err(BingoError::InvalidConfigValueError {
                    field: field.to_string(),
                    value: value.to_string(),
                    reason: format!(
                        "Value must be between {} and {}",
                        MIN_DIMENSION, MAX_DIMENSION
                    ),
                });
            }
        }
        Ok(Self { rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of entries one card consumes.
    pub fn capacity(&self) -> usize {
        self.rows * self.cols
    }
}

/// A sampled bingo card: `rows x cols` entry texts stored row-major.
/// Cells come from distinct pool positions; duplicate text is possible only
/// when the pool itself contains duplicate lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    grid: GridSpec,
    cells: Vec<String>,
}

impl Card {
    pub(crate) fn from_cells(grid: GridSpec, cells: Vec<String>) -> Self {
        debug_assert_eq!(cells.len(), grid.capacity());
        Self { grid, cells }
    }

    pub fn grid(&self) -> GridSpec {
        self.grid
    }

    pub fn cell(&self, row: usize, col: usize) -> &str {
        &self.cells[row * self.grid.cols() + col]
    }

    /// Iterates the card one row at a time, each row being `cols` cells.
    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.cells.chunks(self.grid.cols())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    address: String,
}

impl Recipient {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Display name: the local part before `@`, or the whole address when no
    /// `@` is present.
    pub fn name(&self) -> &str {
        self.address.split('@').next().unwrap_or(&self.address)
    }

    pub fn artifact_filename(&self) -> String {
        format!("{}.html", self.name())
    }
}

/// Parsed input files: the shared read-only entry pool plus the recipient list.
#[derive(Debug, Clone)]
pub struct BatchInput {
    pub entries: Vec<String>,
    pub recipients: Vec<Recipient>,
}

/// One recipient's card, sampled and rendered, ready for persistence and
/// delivery.
#[derive(Debug, Clone)]
pub struct PreparedCard {
    pub recipient: Recipient,
    pub card: Card,
    pub html: String,
}

#[derive(Debug, Clone)]
pub enum CardOutcome {
    Prepared(PreparedCard),
    Skipped { recipient: Recipient, reason: String },
}

#[derive(Debug, Clone)]
pub struct BatchCards {
    pub entries_read: usize,
    pub emails_read: usize,
    pub outcomes: Vec<CardOutcome>,
}

/// Message handed to a [`Mailer`](crate::domain::ports::Mailer). Subject,
/// body, and sender are the mailer's own configuration.
#[derive(Debug, Clone)]
pub struct OutgoingCard {
    pub to: String,
    pub attachment_name: String,
    pub html: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DeliveryOutcome {
    Delivered { artifact: String },
    Failed { reason: String },
    Skipped { reason: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipientReport {
    pub recipient: Recipient,
    pub outcome: DeliveryOutcome,
    /// The card as rows of cell texts, for display; `None` when no card could
    /// be sampled for this recipient.
    pub preview: Option<Vec<Vec<String>>>,
}

/// Aggregate result of one run. Partial completion is a valid terminal state:
/// some recipients delivered, some failed, each with its own reason.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub entries_read: usize,
    pub emails_read: usize,
    pub completed_at: DateTime<Utc>,
    pub reports: Vec<RecipientReport>,
}

impl RunSummary {
    pub fn delivered(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| matches!(r.outcome, DeliveryOutcome::Delivered { .. }))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| !matches!(r.outcome, DeliveryOutcome::Delivered { .. }))
            .count()
    }
}
