//! amz-paapi - Signed Amazon Product Advertising API search client
//!
//! Builds authenticated query URLs (HMAC-SHA256 over a canonical
//! query string), issues GET requests, and extracts typed fields from
//! the returned XML documents.

pub mod aws;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;

pub use aws::{
    Element, ImageSize, ItemSummary, MatchMode, RequestSigner, ResultDocument, SearchClient,
    SearchIndex, SearchParam, SignedRequest, Transport,
};
pub use config::{Config, Credentials};
pub use error::{PaapiError, Result};
