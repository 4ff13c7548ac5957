use std::path::PathBuf;
use thiserror::Error;

/// Failure reported by the fetch collaborator.
///
/// Passed through the pipeline unchanged inside [`ScrapeError::Fetch`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Connection, DNS, TLS or body-read failure
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status
    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// The request did not complete within the configured timeout
    #[error("request to {url} timed out after {secs} seconds")]
    Timeout { url: String, secs: u64 },
}

/// Every way a scrape can fail.
///
/// Extractors never produce these; only the input, fetch, parse and
/// persistence boundaries do.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Empty or unusable URL input, or an unusable configuration
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// Bytes that cannot be treated as an HTML document at all
    #[error("failed to parse document: {0}")]
    Parse(String),

    #[error("failed to write {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
