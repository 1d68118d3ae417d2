use thiserror::Error;

#[derive(Error, Debug)]
pub enum BingoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("E-mail address error: {0}")]
    AddressError(#[from] lettre::address::AddressError),

    #[error("E-mail message error: {0}")]
    MessageError(#[from] lettre::error::Error),

    #[error("SMTP transport error: {0}")]
    SmtpError(#[from] lettre::transport::smtp::Error),

    #[error("Upload parse error: {message}")]
    ParseError { message: String },

    #[error("entry pool has {available} entries but the grid needs {needed}")]
    CapacityError { needed: usize, available: usize },

    #[error("Delivery error: {reason}")]
    DeliveryError { reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, BingoError>;
