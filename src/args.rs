use clap::Parser;
use page_harvest::ScraperConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "page-harvest")]
#[command(about = "Extracts metadata, headings, links, images, text and forms from a web page")]
#[command(version)]
pub struct Args {
    /// Page to scrape; `https://` is assumed when no scheme is given
    #[arg(default_value = "https://example.com")]
    pub url: String,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config_file: Option<PathBuf>,

    /// Directory the JSON snapshot is written to
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// User-Agent header to send
    #[arg(short, long)]
    pub user_agent: Option<String>,

    /// Do not write a JSON snapshot
    #[arg(long)]
    pub no_save: bool,

    /// Print the snapshot JSON instead of the text report
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Applies command-line overrides on top of a loaded configuration
    pub fn apply(&self, mut config: ScraperConfig) -> ScraperConfig {
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        if let Some(user_agent) = &self.user_agent {
            config.user_agent = user_agent.clone();
        }
        if self.no_save {
            config.save = false;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let args = Args::parse_from(["page-harvest", "example.org", "--timeout", "5", "--no-save"]);
        let config = args.apply(ScraperConfig::default());

        assert_eq!(args.url, "example.org");
        assert_eq!(config.timeout_secs, 5);
        assert!(!config.save);
        assert_eq!(config.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_default_url() {
        let args = Args::parse_from(["page-harvest"]);
        assert_eq!(args.url, "https://example.com");
        assert!(!args.json);
    }
}
