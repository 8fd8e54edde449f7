//! # Catalog Error Types Module
//!
//! Failure modes of a catalog query. An empty result list is not an error;
//! only a query that could not produce a trustworthy list ends up here.

use thiserror::Error;

/// Errors returned by a movie catalog lookup
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog answered with a non-success HTTP status
    #[error("Catalog returned status {status}: {body}")]
    Status { status: u16, body: String },
    /// The request did not complete within the configured timeout
    #[error("Catalog request timed out: {0}")]
    Timeout(String),
    /// Connection, TLS or other transport level failure
    #[error("Catalog transport error: {0}")]
    Transport(String),
    /// The response body was not the expected JSON document
    #[error("Malformed catalog payload: {0}")]
    MalformedPayload(String),
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CatalogError::Timeout(err.to_string())
        } else if err.is_decode() {
            CatalogError::MalformedPayload(err.to_string())
        } else {
            CatalogError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::MalformedPayload(err.to_string())
    }
}
