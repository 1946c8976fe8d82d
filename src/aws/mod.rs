//! Service-specific modules: request signing, HTTP client, response
//! document model, and extraction accessors.

pub mod client;
pub mod document;
pub mod extract;
pub mod indices;
pub mod models;
pub mod sign;

pub use client::{HttpTransport, SearchClient, Transport};
pub use document::{Element, ResultDocument};
pub use extract::{ImageSize, MatchMode};
pub use indices::{SearchIndex, SearchParam};
pub use models::ItemSummary;
pub use sign::{RequestSigner, SignedRequest};
