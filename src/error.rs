use thiserror::Error;

/// Input rejected before it reaches storage.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ValidationError {
    #[error("Invalid latitude value: Latitude must be between -90 and 90 degrees (got {0})")]
    InvalidLatitude(f64),

    #[error("Invalid longitude value: Longitude must be between -180 and 180 degrees (got {0})")]
    InvalidLongitude(f64),

    #[error("Invalid distance value: Distance must be a non-negative number of kilometers (got {0})")]
    InvalidDistance(f64),
}

impl ValidationError {
    /// Name of the offending input field as it appears on the wire.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidLatitude(_) => "latitude",
            ValidationError::InvalidLongitude(_) => "longitude",
            ValidationError::InvalidDistance(_) => "distance",
        }
    }
}

#[derive(Error, Debug)]
pub enum AddressError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),
}

impl AddressError {
    pub fn storage(message: impl Into<String>) -> Self {
        AddressError::Storage {
            message: message.into(),
        }
    }
}

impl From<rusqlite::Error> for AddressError {
    fn from(err: rusqlite::Error) -> Self {
        AddressError::storage(err.to_string())
    }
}

impl From<tokio::task::JoinError> for AddressError {
    fn from(err: tokio::task::JoinError) -> Self {
        AddressError::storage(format!("storage task failed: {err}"))
    }
}

pub type Result<T> = std::result::Result<T, AddressError>;
