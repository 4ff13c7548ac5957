use crate::error::{Result, ScrapeError};
use crate::resolver::host_of;
use crate::results::ExtractionResult;
use crate::utils::sanitize_host;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A snapshot as read back from disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedRecord {
    pub url: String,
    pub timestamp: String,
    pub data: ExtractionResult,
}

/// Same layout as [`PersistedRecord`], borrowing the result instead of cloning it
#[derive(Serialize)]
struct RecordRef<'a> {
    url: &'a str,
    timestamp: &'a str,
    data: &'a ExtractionResult,
}

/// `scraped_data_{host}_{timestamp}.json` with the host made filename-safe.
///
/// The host is taken in its ASCII form, so internationalized names appear
/// punycode-encoded (`bücher.de` becomes `xn--bcher-kva_de`).
pub fn snapshot_file_name(source_url: &str, timestamp: &str) -> String {
    format!(
        "scraped_data_{}_{}.json",
        sanitize_host(&host_of(source_url)),
        timestamp
    )
}

/// Writes `{ url, timestamp, data }` as pretty JSON into `output_dir`.
///
/// Returns the path of the written file. Any I/O failure is returned as
/// [`ScrapeError::Persistence`].
pub fn persist(
    result: &ExtractionResult,
    source_url: &str,
    timestamp: &str,
    output_dir: &Path,
) -> Result<PathBuf> {
    let path = output_dir.join(snapshot_file_name(source_url, timestamp));
    let failed = |source: io::Error| ScrapeError::Persistence {
        path: path.clone(),
        source,
    };

    let record = RecordRef {
        url: source_url,
        timestamp,
        data: result,
    };
    let json = serde_json::to_string_pretty(&record).map_err(|e| failed(io::Error::other(e)))?;

    fs::create_dir_all(output_dir).map_err(failed)?;
    fs::write(&path, json).map_err(failed)?;

    ::log::info!("Saved results to {}", path.display());
    Ok(path)
}

/// Reads a snapshot written by [`persist`]
pub fn load(path: &Path) -> Result<PersistedRecord> {
    let failed = |source: io::Error| ScrapeError::Persistence {
        path: path.to_path_buf(),
        source,
    };

    let contents = fs::read_to_string(path).map_err(failed)?;
    serde_json::from_str(&contents).map_err(|e| failed(io::Error::new(io::ErrorKind::InvalidData, e)))
}
