//! Single-page scraping: fetch one page and pull structured records out of it.
//!
//! The pipeline is `normalize -> fetch -> parse -> extract -> aggregate`.
//! Callers use three entry points:
//!
//! * [`run_extraction`] produces an [`ExtractionResult`] and its [`Statistics`]
//! * [`format_report`] renders them as text
//! * [`persist`] saves them as a JSON snapshot

pub mod config;
pub mod error;
pub mod extractors;
pub mod fetch;
pub mod parsers;
pub mod persist;
pub mod pipeline;
pub mod report;
pub mod resolver;
pub mod results;
pub mod stats;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::ScraperConfig;
pub use error::{FetchError, Result, ScrapeError};
pub use fetch::{Fetcher, HttpFetcher, RawPage};
pub use persist::{PersistedRecord, persist};
pub use pipeline::{Scraped, extract_page, run_extraction, spawn_extraction};
pub use report::format_report;
pub use results::ExtractionResult;
pub use stats::Statistics;
