use serde::{Deserialize, Serialize};

use crate::utils::error::{BingoError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};

/// SMTP submission settings, loaded from a TOML file. The password may be
/// left out of the file and supplied through the `SMTP_PASSWORD` environment
/// variable instead; credentials are never compiled in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmtpConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    pub username: String,

    #[serde(default)]
    pub password: String,

    pub sender: String,

    #[serde(default = "default_subject")]
    pub subject: String,

    #[serde(default = "default_body")]
    pub body: String,

    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_host() -> String {
    "smtp.gmail.com".to_string()
}

fn default_port() -> u16 {
    587
}

fn default_subject() -> String {
    "Meeting Bingo Card".to_string()
}

fn default_body() -> String {
    "Please find your Meeting Bingo card attached!\nHave fun on those meetings!".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

impl SmtpConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| BingoError::ConfigError {
            message: format!("cannot read SMTP config {}: {}", path, e),
        })?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(raw)?;

        if let Ok(password) = std::env::var("SMTP_PASSWORD") {
            config.password = password;
        }

        config.validate()?;
        Ok(config)
    }
}

impl Validate for SmtpConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("host", &self.host)?;
        validate_non_empty_string("username", &self.username)?;
        validate_non_empty_string("sender", &self.sender)?;
        if self.password.is_empty() {
            return Err(BingoError::ConfigError {
                message: "SMTP password is not set; put it in the config file or SMTP_PASSWORD"
                    .to_string(),
            });
        }
        validate_range("timeout_seconds", self.timeout_seconds, 1, 600)?;
        Ok(())
    }
}
