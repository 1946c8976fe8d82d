//! Error types for the Product Advertising API client.

use thiserror::Error;

/// Error type for client operations.
///
/// A response that parses cleanly but carries an `Errors` block is not
/// an error at this level; callers check
/// [`ResultDocument::error_codes`](crate::aws::document::ResultDocument::error_codes)
/// after every request.
#[derive(Error, Debug)]
pub enum PaapiError {
    /// Missing credentials, unknown search index, or unknown parameter
    /// name. Raised before any network activity.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A result accessor was used before any search or lookup completed.
    #[error("no search results available, perform a search or lookup first")]
    NotSearched,

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] wreq::Error),

    /// Server answered with a non-success status.
    #[error("request failed with status {0}")]
    Status(u16),

    /// Response body was not well-formed XML.
    #[error("failed to parse response XML: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Response XML parsed but its structure was unusable.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, PaapiError>;
