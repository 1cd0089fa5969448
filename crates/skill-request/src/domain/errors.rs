//! # Request Errors
//!
//! Error types for request intake.
//!
//! Every variant is fatal to the parse call that produced it. Missing
//! optional data inside a variant or value object never surfaces here.

use thiserror::Error;

/// Errors that can occur while turning a raw request into a typed envelope.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RequestError {
    /// The body is not valid JSON, or its root is not an object.
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// The body exceeds the configured size limit.
    #[error("Request body too large: {size} bytes exceeds limit {limit}")]
    BodyTooLarge { size: usize, limit: usize },

    /// `request.type` is absent or is not a registered request type.
    #[error("Missing request data: request.type is absent or unsupported")]
    MissingRequestData,

    /// Registry lookup miss. The dispatcher reports this as `MissingRequestData`.
    #[error("Unknown request type: {0}")]
    UnknownRequestType(String),

    /// The request type demands signature headers and one of them is empty.
    #[error("Missing required header: {missing}")]
    MissingRequiredHeader { missing: &'static str },
}

impl RequestError {
    /// True for every failure caused by the inbound request itself.
    ///
    /// The hosting transport rejects such requests; retrying the same input
    /// can never succeed.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            RequestError::MalformedBody(_)
                | RequestError::BodyTooLarge { .. }
                | RequestError::MissingRequestData
                | RequestError::UnknownRequestType(_)
                | RequestError::MissingRequiredHeader { .. }
        )
    }
}

impl From<serde_json::Error> for RequestError {
    fn from(e: serde_json::Error) -> Self {
        RequestError::MalformedBody(e.to_string())
    }
}

/// Errors from parser configuration validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid limit: {0}")]
    InvalidLimit(String),
}
