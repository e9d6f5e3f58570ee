//! Canned in-memory photo client.
//!
//! Serves fixed search results and sizes without touching the network. Used by
//! the test harness and integration tests.

use crate::client::{PhotoRef, PhotoSearchClient, PhotoSize};
use crate::model::ClientError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// In-memory [`PhotoSearchClient`].
///
/// Unknown terms return no photos. Unknown photo ids return no sizes.
#[derive(Debug, Default)]
pub struct InMemoryClient {
    results: HashMap<String, Vec<String>>,
    sizes: HashMap<String, Vec<PhotoSize>>,
    failing_terms: Vec<String>,
    failing_photos: Vec<String>,
    delays: HashMap<String, Duration>,
    calls: Mutex<Vec<String>>,
}

impl InMemoryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the photo ids a search for `term` returns.
    pub fn with_results<I, S>(mut self, term: &str, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.results
            .insert(term.to_string(), ids.into_iter().map(Into::into).collect());
        self
    }

    /// Register a single size for `photo_id` whose source is `url`.
    pub fn with_photo(mut self, photo_id: &str, url: &str) -> Self {
        self.sizes.insert(
            photo_id.to_string(),
            vec![PhotoSize {
                width: 1024,
                height: 768,
                source_url: url.to_string(),
            }],
        );
        self
    }

    /// Register the full size list for `photo_id`.
    pub fn with_sizes(mut self, photo_id: &str, sizes: Vec<PhotoSize>) -> Self {
        self.sizes.insert(photo_id.to_string(), sizes);
        self
    }

    /// Make searches for `term` fail with an API error.
    pub fn failing_search(mut self, term: &str) -> Self {
        self.failing_terms.push(term.to_string());
        self
    }

    /// Make the size lookup for `photo_id` fail with an API error.
    pub fn failing_sizes(mut self, photo_id: &str) -> Self {
        self.failing_photos.push(photo_id.to_string());
        self
    }

    /// Delay the search for `term` by `delay` before answering.
    pub fn with_delay(mut self, term: &str, delay: Duration) -> Self {
        self.delays.insert(term.to_string(), delay);
        self
    }

    /// Terms searched so far, in call order.
    pub fn searched_terms(&self) -> Vec<String> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl PhotoSearchClient for InMemoryClient {
    async fn search(&self, term: &str, page_size: usize) -> Result<Vec<PhotoRef>, ClientError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(term.to_string());
        }
        if let Some(delay) = self.delays.get(term) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing_terms.iter().any(|t| t == term) {
            return Err(ClientError::Api {
                code: 100,
                message: "Invalid API Key".to_string(),
            });
        }

        Ok(self
            .results
            .get(term)
            .map(|ids| ids.iter().take(page_size).map(PhotoRef::new).collect())
            .unwrap_or_default())
    }

    async fn get_sizes(&self, photo_id: &str) -> Result<Vec<PhotoSize>, ClientError> {
        if self.failing_photos.iter().any(|id| id == photo_id) {
            return Err(ClientError::Api {
                code: 1,
                message: "Photo not found".to_string(),
            });
        }
        Ok(self.sizes.get(photo_id).cloned().unwrap_or_default())
    }
}
