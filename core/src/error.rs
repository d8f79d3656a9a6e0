//! Error types for the request helper.
//!
//! # Design
//! Only non-2xx responses are normalized: they all land in `Http` and render
//! as `HTTP error! Status: <code>`. Scenario suites match on substrings of
//! that message, so the wording is part of the public contract. Transport
//! failures are passed through from ureq untouched.

use thiserror::Error;

/// Errors returned by `ApiHelper` and the supporting types.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response was obtained (DNS, refused connection, broken socket).
    #[error(transparent)]
    Transport(#[from] ureq::Error),

    /// The server answered with a status outside 200..=299.
    #[error("HTTP error! Status: {status}")]
    Http { status: u16 },

    /// The server claimed success but the body is not valid JSON.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request payload could not be serialized to JSON.
    #[error("failed to encode request payload: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),

    /// A create response did not carry an integer `id`.
    #[error("response carries no integer id")]
    MissingId,

    /// A dependent step ran before the create step captured an identifier.
    #[error("{resource}Id is not set")]
    IdNotSet { resource: &'static str },

    #[error("failed to read {resource} view: {source}")]
    View {
        resource: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Status code carried by an `Http` error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status } => Some(*status),
            _ => None,
        }
    }
}
