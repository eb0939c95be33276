//! Error types for the geocoding and timeseries services.
use thiserror::Error;

/// The only message the user ever sees for a failed service call.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Failure of a geocoding search or a timeseries fetch.
///
/// The `Display` output carries the technical detail and is meant for logs.
/// The UI shows [`ServiceError::user_message`] instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    /// The service answered with a non-success HTTP status
    #[error("service returned HTTP status {0}")]
    Status(u16),

    /// The request never produced a response
    #[error("network request failed: {0}")]
    Network(String),

    /// The response body did not have the expected shape
    #[error("malformed response: {0}")]
    Malformed(String),

    /// A geocoding match carried coordinates that are not numbers
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),
}

impl ServiceError {
    /// The message shown in the error banner, identical for every variant.
    pub fn user_message(&self) -> &'static str {
        GENERIC_ERROR_MESSAGE
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(e: serde_json::Error) -> Self {
        ServiceError::Malformed(e.to_string())
    }
}

#[cfg(feature = "api")]
impl From<reqwest::Error> for ServiceError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => ServiceError::Status(status.as_u16()),
            None if e.is_decode() => ServiceError::Malformed(e.to_string()),
            None => ServiceError::Network(e.to_string()),
        }
    }
}

/// Type alias for Results using ServiceError
pub type Result<T> = std::result::Result<T, ServiceError>;
