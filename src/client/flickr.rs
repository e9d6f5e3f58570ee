//! Flickr REST client.
//!
//! Uses the JSON flavour of the REST endpoint (`format=json&nojsoncallback=1`).
//! Payloads are decoded into the schema types below and validated: an API-level
//! failure becomes [`ClientError::Api`], a missing photo or size list becomes an
//! empty list.

use crate::client::{PhotoRef, PhotoSearchClient, PhotoSize};
use crate::config::ResolvedConfig;
use crate::model::ClientError;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const METHOD_SEARCH: &str = "flickr.photos.search";
const METHOD_GET_SIZES: &str = "flickr.photos.getSizes";

/// [`PhotoSearchClient`] backed by the Flickr REST API.
#[derive(Clone)]
pub struct FlickrClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for FlickrClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlickrClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl FlickrClient {
    pub fn new(config: &ResolvedConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Call `method` and return the raw body of a successful response.
    async fn call(&self, method: &str, params: &[(&str, &str)]) -> Result<String, ClientError> {
        debug!(method, "calling Flickr");
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("method", method),
                ("api_key", self.api_key.as_str()),
                ("format", "json"),
                ("nojsoncallback", "1"),
            ])
            .query(params)
            .send()
            .await
            .map_err(redact_url)?;

        let status = response.status();
        let body = response.text().await.map_err(redact_url)?;
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}

/// The request URL carries the API key; keep it out of errors and logs.
fn redact_url(error: reqwest::Error) -> ClientError {
    ClientError::Http(error.without_url())
}

#[async_trait]
impl PhotoSearchClient for FlickrClient {
    async fn search(&self, term: &str, page_size: usize) -> Result<Vec<PhotoRef>, ClientError> {
        let per_page = page_size.to_string();
        let body = self
            .call(METHOD_SEARCH, &[("text", term), ("per_page", per_page.as_str())])
            .await?;
        let mut photos = parse_search_response(&body)?;
        photos.truncate(page_size);
        Ok(photos)
    }

    async fn get_sizes(&self, photo_id: &str) -> Result<Vec<PhotoSize>, ClientError> {
        let body = self
            .call(METHOD_GET_SIZES, &[("photo_id", photo_id)])
            .await?;
        parse_sizes_response(&body)
    }
}

// ===== Response schema =====

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum Stat {
    Ok,
    Fail,
}

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    stat: Stat,
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    photos: Option<PhotoPage>,
}

#[derive(Debug, Deserialize)]
struct PhotoPage {
    #[serde(default)]
    photo: Vec<RawPhoto>,
}

#[derive(Debug, Deserialize)]
struct RawPhoto {
    id: String,
}

#[derive(Debug, Deserialize)]
struct SizesEnvelope {
    stat: Stat,
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    sizes: Option<SizeList>,
}

#[derive(Debug, Deserialize)]
struct SizeList {
    #[serde(default)]
    size: Vec<RawSize>,
}

#[derive(Debug, Deserialize)]
struct RawSize {
    #[serde(default)]
    width: Dimension,
    #[serde(default)]
    height: Dimension,
    source: String,
}

/// Flickr reports dimensions as numbers in some payloads and strings in others.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Dimension {
    Number(u32),
    Text(String),
}

impl Default for Dimension {
    fn default() -> Self {
        Dimension::Number(0)
    }
}

impl Dimension {
    fn value(&self) -> u32 {
        match self {
            Dimension::Number(n) => *n,
            Dimension::Text(s) => s.parse().unwrap_or(0),
        }
    }
}

fn api_error(code: Option<i64>, message: Option<String>) -> ClientError {
    ClientError::Api {
        code: code.unwrap_or_default(),
        message: message.unwrap_or_else(|| "unknown error".to_string()),
    }
}

/// Decode a `flickr.photos.search` body.
pub fn parse_search_response(body: &str) -> Result<Vec<PhotoRef>, ClientError> {
    let envelope: SearchEnvelope = serde_json::from_str(body)?;
    if envelope.stat == Stat::Fail {
        return Err(api_error(envelope.code, envelope.message));
    }

    let photos = envelope.photos.map(|page| page.photo).unwrap_or_default();
    Ok(photos.into_iter().map(|raw| PhotoRef::new(raw.id)).collect())
}

/// Decode a `flickr.photos.getSizes` body.
pub fn parse_sizes_response(body: &str) -> Result<Vec<PhotoSize>, ClientError> {
    let envelope: SizesEnvelope = serde_json::from_str(body)?;
    if envelope.stat == Stat::Fail {
        return Err(api_error(envelope.code, envelope.message));
    }

    let sizes = envelope.sizes.map(|list| list.size).unwrap_or_default();
    Ok(sizes
        .into_iter()
        .map(|raw| PhotoSize {
            width: raw.width.value(),
            height: raw.height.value(),
            source_url: raw.source,
        })
        .collect())
}
