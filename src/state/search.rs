//! Search flow: query the photo service and resolve image URLs.
//!
//! One search is a term lookup followed by a concurrent size lookup per photo,
//! joined before returning. Every failure is absorbed here: the caller always
//! gets a (possibly empty) list of URLs, never an error.

use crate::client::{largest_source, PhotoSearchClient};
use crate::model::ClientError;
use futures_util::future::try_join_all;
use tracing::{debug, info, warn};

/// Photos requested per search.
pub const DEFAULT_PAGE_SIZE: usize = 15;

/// Resolve up to `page_size` image URLs for `term`.
///
/// Returns an empty list if the search or any size lookup fails; the error is
/// logged. Photos without any size are skipped.
pub async fn fetch_photo_urls<C>(client: &C, term: &str, page_size: usize) -> Vec<String>
where
    C: PhotoSearchClient + ?Sized,
{
    match try_fetch_photo_urls(client, term, page_size).await {
        Ok(urls) => {
            info!(term, count = urls.len(), "search completed");
            urls
        }
        Err(error) => {
            warn!(term, %error, "error fetching photos");
            Vec::new()
        }
    }
}

async fn try_fetch_photo_urls<C>(
    client: &C,
    term: &str,
    page_size: usize,
) -> Result<Vec<String>, ClientError>
where
    C: PhotoSearchClient + ?Sized,
{
    let photos = client.search(term, page_size).await?;
    debug!(term, found = photos.len(), "resolving photo sizes");

    let lookups = photos
        .iter()
        .take(page_size)
        .map(|photo| client.get_sizes(&photo.id));
    let sizes = try_join_all(lookups).await?;

    Ok(photos
        .iter()
        .zip(sizes)
        .filter_map(|(photo, sizes)| {
            let url = largest_source(sizes);
            if url.is_none() {
                debug!(photo_id = %photo.id, "photo has no sizes, skipping");
            }
            url
        })
        .collect())
}
