//! Custom error types for the application.
//!
//! - [`ContactError`] - Contact form delivery failures
//! - [`DomError`] - Missing or mistyped page elements

use thiserror::Error;

/// Contact form submission errors.
///
/// The user only ever sees a generic failure message; the variant is logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    /// Failed to build the request body
    #[error("failed to build form request: {0}")]
    RequestBuild(String),
    /// Network request failed (CORS, offline, DNS, ...)
    #[error("network error: {0}")]
    Network(String),
    /// Response body was not the expected JSON
    #[error("invalid relay response: {0}")]
    InvalidResponse(String),
    /// Relay answered with `success: false`
    #[error("relay rejected submission{}", .0.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Rejected(Option<String>),
}

/// DOM lookup errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// Browser window or document not available
    #[error("browser document not available")]
    NoDocument,
    /// Required element not present on the page
    #[error("element not found: {0}")]
    MissingElement(String),
    /// Element exists but has an unexpected type
    #[error("element {0} has an unexpected type")]
    WrongType(String),
}
