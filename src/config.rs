use crate::error::{Result, ScrapeError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings for fetching and saving a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// User-Agent header sent with the request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Directory the JSON snapshot is written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Whether to write a JSON snapshot at all
    #[serde(default = "default_save")]
    pub save: bool,
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_save() -> bool {
    true
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            output_dir: default_output_dir(),
            save: default_save(),
        }
    }
}

impl ScraperConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            ScrapeError::InvalidInput(format!("cannot read config {}: {}", path.display(), e))
        })?;
        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| ScrapeError::InvalidInput(format!("invalid config: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = ScraperConfig::from_json(r#"{ "timeout_secs": 5 }"#).unwrap();
        assert_eq!(config.timeout_secs, 5);
        assert!(config.save);
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert!(config.user_agent.starts_with("Mozilla/5.0"));

        assert_eq!(ScraperConfig::from_json("{}").unwrap(), ScraperConfig::default());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "output_dir": "/tmp/snapshots", "save": false }}"#).unwrap();

        let config = ScraperConfig::from_file(file.path()).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("/tmp/snapshots"));
        assert!(!config.save);
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            ScraperConfig::from_json("{ not json"),
            Err(ScrapeError::InvalidInput(_))
        ));
        assert!(matches!(
            ScraperConfig::from_file("/nonexistent/config.json"),
            Err(ScrapeError::InvalidInput(_))
        ));
    }
}
