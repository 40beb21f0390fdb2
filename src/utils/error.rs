use crate::domain::model::Plant;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PollenError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("backend returned HTTP {status} for {plant}")]
    BackendStatus {
        plant: Plant,
        status: reqwest::StatusCode,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("malformed station record: {reason}")]
    MalformedStation { reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, PollenError>;
