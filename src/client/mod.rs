//! Photo search API clients.
//!
//! The carousel talks to the photo service only through [`PhotoSearchClient`]:
//! a search returning photo identifiers and a per-photo size lookup. Response
//! payloads are validated at this boundary into the typed results below.

pub mod flickr;
pub mod memory;

pub use flickr::FlickrClient;
pub use memory::InMemoryClient;

use crate::model::ClientError;
use async_trait::async_trait;

/// Identifier of a photo returned by a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoRef {
    pub id: String,
}

impl PhotoRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// One available rendition of a photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoSize {
    pub width: u32,
    pub height: u32,
    pub source_url: String,
}

/// Remote photo service consumed by the carousel.
#[async_trait]
pub trait PhotoSearchClient: Send + Sync {
    /// Search photos matching `term`, returning at most `page_size` identifiers.
    async fn search(&self, term: &str, page_size: usize) -> Result<Vec<PhotoRef>, ClientError>;

    /// Available sizes for `photo_id`, ordered smallest to largest.
    async fn get_sizes(&self, photo_id: &str) -> Result<Vec<PhotoSize>, ClientError>;
}

/// URL of the largest size, which the API lists last.
///
/// `None` when the photo has no sizes at all.
pub fn largest_source(sizes: Vec<PhotoSize>) -> Option<String> {
    sizes.into_iter().last().map(|size| size.source_url)
}
