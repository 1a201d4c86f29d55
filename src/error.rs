use thiserror::Error;

#[derive(Debug, Error)]
pub enum NovaError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Input error: {0}")]
    InputError(String),
    #[error("Request error: {0}")]
    RequestError(String),
    #[error("Response error: {0}")]
    ResponseError(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("Encoding error: {0}")]
    EncodingError(String),
    #[error("AWS error: {0}")]
    AwsError(String),
    #[error("AWS service error: {0}")]
    AwsServiceError(String),
    #[error("Storage error: {0}")]
    StorageError(String),
    #[error("Polling cancelled")]
    Cancelled,
    #[error("Polling timed out after {0} checks")]
    TimedOut(u32),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl NovaError {
    /// Missing inputs the user can fix; everything else is unexpected.
    pub fn is_expected_absent(&self) -> bool {
        matches!(self, NovaError::InputError(_))
    }
}

impl From<serde_json::Error> for NovaError {
    fn from(e: serde_json::Error) -> Self {
        NovaError::SerializationError(e.to_string())
    }
}

impl From<base64::DecodeError> for NovaError {
    fn from(e: base64::DecodeError) -> Self {
        NovaError::EncodingError(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NovaError>;

/// Signals from the object store, split on whether the poller may retry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    Other(String),
}

impl From<StoreError> for NovaError {
    fn from(e: StoreError) -> Self {
        NovaError::StorageError(e.to_string())
    }
}
