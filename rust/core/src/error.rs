use thiserror::Error;

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur around the configuration boundary
#[derive(Error, Debug)]
pub enum Error {
    #[error("Building name must not be empty")]
    EmptyName,

    #[error("No building named '{0}'")]
    UnknownBuilding(String),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
