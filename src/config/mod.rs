pub mod smtp;

pub use smtp::SmtpConfig;

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::domain::model::{MAX_DIMENSION, MIN_DIMENSION};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_range, Validate};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "meeting-bingo")]
#[command(about = "Generates randomized bingo cards and e-mails one to each recipient")]
pub struct CliConfig {
    #[arg(long, help = "Line-delimited file with one bingo entry per line")]
    pub entries_file: String,

    #[arg(long, help = "Line-delimited file with one recipient address per line")]
    pub emails_file: String,

    #[arg(long, default_value = "4")]
    pub rows: usize,

    #[arg(long, default_value = "4")]
    pub cols: usize,

    #[arg(long, default_value = ".", help = "Directory for the rendered card files")]
    pub output_path: String,

    #[arg(long, default_value = "smtp.toml", help = "TOML file with SMTP settings")]
    pub smtp_config: String,

    #[arg(long, help = "Run the full pipeline without sending any e-mail")]
    pub dry_run: bool,

    #[arg(long, help = "Print the run summary as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn entries_file(&self) -> &str {
        &self.entries_file
    }

    fn emails_file(&self) -> &str {
        &self.emails_file
    }

    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("entries_file", &self.entries_file)?;
        validate_path("emails_file", &self.emails_file)?;
        validate_range("rows", self.rows, MIN_DIMENSION, MAX_DIMENSION)?;
        validate_range("cols", self.cols, MIN_DIMENSION, MAX_DIMENSION)?;
        validate_path("output_path", &self.output_path)?;
        if !self.dry_run {
            validate_path("smtp_config", &self.smtp_config)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CliConfig {
        CliConfig {
            entries_file: "entries.txt".to_string(),
            emails_file: "emails.txt".to_string(),
            rows: 4,
            cols: 4,
            output_path: ".".to_string(),
            smtp_config: "smtp.toml".to_string(),
            dry_run: false,
            json: false,
            verbose: false,
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_grid_out_of_range_fails() {
        let mut too_small = config();
        too_small.rows = 0;
        assert!(too_small.validate().is_err());

        let mut too_big = config();
        too_big.cols = 16;
        assert!(too_big.validate().is_err());
    }

    #[test]
    fn test_empty_entries_file_fails() {
        let mut no_entries = config();
        no_entries.entries_file = String::new();
        assert!(no_entries.validate().is_err());
    }
}
