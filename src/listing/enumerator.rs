use crate::config::MirrorConfig;
use crate::constants::MARKER_QUERY_PARAM;
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use std::collections::HashSet;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Fetches one raw listing page body.
///
/// The enumeration loop only ever sees page bodies through this seam, so
/// tests can script an entire paginated bucket from literal fixtures and the
/// production path stays a thin reqwest wrapper.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(&self, url: &str) -> AppResult<String>;
}

/// [`PageFetcher`] over HTTP(S).
pub struct HttpPageFetcher {
    client: reqwest::Client,
}

impl HttpPageFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_page(&self, url: &str) -> AppResult<String> {
        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(body)
    }
}

/// Builds the listing request URL for the given pagination cursor.
fn page_url(bucket_url: &Url, marker: Option<&str>) -> String {
    match marker {
        None => bucket_url.to_string(),
        Some(marker) => {
            let mut url = bucket_url.clone();
            url.query_pairs_mut().append_pair(MARKER_QUERY_PARAM, marker);
            url.to_string()
        }
    }
}

/// Enumerates every downloadable object key in the bucket, in server order.
///
/// Drains the paginated listing completely before returning: each page is
/// fetched, parsed permissively, filtered, and appended; the continuation
/// marker from the page decides whether another request follows. Requests
/// are strictly sequential, paced by `config.page_delay_ms` between pages.
///
/// # Errors
///
/// A failed page fetch aborts the whole enumeration — there is no partial
/// result. A continuation marker that repeats an earlier one aborts with
/// [`AppError::PaginationStalled`] instead of looping forever.
pub async fn enumerate_keys(
    fetcher: &impl PageFetcher,
    config: &MirrorConfig,
) -> AppResult<Vec<String>> {
    let bucket_url = Url::parse(&config.bucket_url)?;

    let mut keys: Vec<String> = Vec::new();
    let mut marker: Option<String> = None;
    let mut seen_markers: HashSet<String> = HashSet::new();
    let mut page: usize = 0;

    loop {
        let url = page_url(&bucket_url, marker.as_deref());
        info!(page = page, "Fetching listing page");

        let body = fetcher.fetch_page(&url).await?;
        let listing = super::parse_listing_page(&body);
        debug!(
            page = page,
            keys = listing.keys.len(),
            has_marker = !listing.is_final(),
            "Parsed listing page"
        );
        keys.extend(listing.keys);

        match listing.next_marker {
            None => break,
            Some(next) => {
                if !seen_markers.insert(next.clone()) {
                    return Err(AppError::PaginationStalled { marker: next });
                }
                marker = Some(next);
                page += 1;
                // Pace the listing requests so the remote is not hammered.
                tokio::time::sleep(Duration::from_millis(config.page_delay_ms)).await;
            }
        }
    }

    info!(keys = keys.len(), pages = page + 1, "Index enumeration complete");
    Ok(keys)
}
