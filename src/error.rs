//! Error Types
//!
//! Typed failures for the API client, response validation and page config.

use reqwest::Url;
use thiserror::Error;

/// The HTTP layer did not produce a response
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct TransportError(pub String);

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self(err.to_string())
    }
}

/// A response body did not match the expected shape
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate dare id {0}")]
    DuplicateId(u32),

    #[error("liked dare {expected} but response is for dare {got}")]
    IdMismatch { expected: u32, got: u32 },
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("cannot build endpoint `{path}`: {message}")]
    Endpoint { path: String, message: String },

    #[error("request to {url} failed: {source}")]
    Request {
        url: Url,
        #[source]
        source: TransportError,
    },

    #[error("response from {url} failed with status {status}")]
    Status { url: Url, status: u16 },

    #[error("malformed response from {url}: {source}")]
    Schema {
        url: Url,
        #[source]
        source: SchemaError,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid page URL `{value}`: {message}")]
    PageUrl { value: String, message: String },

    #[error("invalid api base `{value}`: {message}")]
    ApiBase { value: String, message: String },

    #[error("unknown session gate `{0}`, expected `observed` or `enforced`")]
    SessionGate(String),

    #[error("unknown log level `{0}`")]
    LogLevel(String),
}
