//! Serializable projections of result items.

use crate::aws::document::Element;
use crate::aws::extract::ImageSize;
use serde::{Deserialize, Serialize};

/// Flat snapshot of one result item, for output formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemSummary {
    /// Catalog identifier
    pub asin: Option<String>,
    /// Item title
    pub title: Option<String>,
    /// Product page URL
    pub detail_page_url: Option<String>,
    /// Product group (Book, Movie, ...)
    pub product_group: Option<String>,
    /// Binding (Paperback, DVD, ...)
    pub binding: Option<String>,
    /// Authors, for books
    pub authors: Vec<String>,
    /// Actors, for movies
    pub actors: Vec<String>,
    /// Directors, for movies
    pub directors: Vec<String>,
    /// Genres
    pub genres: Vec<String>,
    /// Release date (theatrical preferred) or publication date
    pub released: Option<String>,
    /// Medium image URL
    pub image_url: Option<String>,
}

impl ItemSummary {
    /// Builds a summary from one `Item` subtree.
    pub fn from_item(item: &Element) -> Self {
        Self {
            asin: item.asin(),
            title: item.title(),
            detail_page_url: item.detail_page_url(),
            product_group: item.product_group(),
            binding: item.binding(),
            authors: item.authors(),
            actors: item.actors(),
            directors: item.directors(),
            genres: item.genres(),
            released: item.release_date().or_else(|| item.publication_date()),
            image_url: item.image_url(ImageSize::Medium),
        }
    }
}
