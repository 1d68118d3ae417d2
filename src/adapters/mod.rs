// Adapters layer: concrete implementations for external systems (filesystem
// storage, SMTP mail submission).

pub mod smtp;
pub mod storage;

pub use smtp::{DryRunMailer, SmtpMailer};
pub use storage::LocalStorage;
