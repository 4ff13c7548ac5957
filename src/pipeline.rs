use crate::error::Result;
use crate::extractors;
use crate::fetch::{Fetcher, RawPage};
use crate::parsers;
use crate::resolver::normalize_input;
use crate::results::ExtractionResult;
use crate::stats::{Statistics, aggregate};
use tokio::sync::oneshot;

/// Outcome of one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scraped {
    /// Normalized URL the run was started with
    pub url: String,
    pub result: ExtractionResult,
    pub stats: Statistics,
}

/// Normalizes `raw_url`, fetches it and extracts everything from it.
///
/// Fetch failures are returned unchanged inside [`crate::ScrapeError::Fetch`].
pub async fn run_extraction<F: Fetcher>(fetcher: &F, raw_url: &str) -> Result<Scraped> {
    let url = normalize_input(raw_url)?;
    ::log::info!("Scraping {}", url);

    let page = fetcher.fetch(&url).await.inspect_err(|e| {
        ::log::warn!("Fetching {} failed: {}", url, e);
    })?;

    let mut scraped = extract_page(&page)?;
    scraped.url = url;
    Ok(scraped)
}

/// Parses an already fetched page and runs every extractor over it.
///
/// Relative references are resolved against the page's final URL.
pub fn extract_page(page: &RawPage) -> Result<Scraped> {
    let doc = parsers::parse_page(page)?;
    let result = extractors::extract(&doc, &page.url);
    let stats = aggregate(&result);

    Ok(Scraped {
        url: page.url.clone(),
        result,
        stats,
    })
}

/// Runs exactly one pipeline on a background task.
///
/// The caller stays free while the page is fetched and picks the outcome up
/// from the returned receiver.
pub fn spawn_extraction<F>(fetcher: F, raw_url: String) -> oneshot::Receiver<Result<Scraped>>
where
    F: Fetcher + Send + Sync + 'static,
{
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let outcome = run_extraction(&fetcher, &raw_url).await;
        if tx.send(outcome).is_err() {
            ::log::debug!("Extraction for {} finished after the receiver was dropped", raw_url);
        }
    });

    rx
}
