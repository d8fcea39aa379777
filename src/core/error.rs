//! Error type shared by the whole crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RpsError {
    #[error("invalid choice: {0:?} (expected Rock, Paper or Scissors)")]
    InvalidChoice(String),

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("no rounds played yet")]
    EmptyHistory,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl RpsError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RpsError>;
