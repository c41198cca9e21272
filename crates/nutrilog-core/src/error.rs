use thiserror::Error;

/// Top-level error type for the nutrilog system.
///
/// Covers startup concerns (configuration, loading the nutrition store).
/// Per-request outcomes such as "no date found" are not errors and are
/// modelled as explicit result variants in `nutrilog-chat`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NutrilogError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Invalid date key: {0:?}")]
    InvalidDateKey(String),

    #[error("Duplicate date key in store: {0}")]
    DuplicateDateKey(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for NutrilogError {
    fn from(err: toml::de::Error) -> Self {
        NutrilogError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for NutrilogError {
    fn from(err: toml::ser::Error) -> Self {
        NutrilogError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for NutrilogError {
    fn from(err: serde_json::Error) -> Self {
        NutrilogError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for nutrilog operations.
pub type Result<T> = std::result::Result<T, NutrilogError>;
