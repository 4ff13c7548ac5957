use crate::config::ScraperConfig;
use crate::error::FetchError;
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap};
use std::future::Future;
use std::time::Duration;

/// Undecoded response body with the charset the server declared
#[derive(Debug, Clone)]
pub struct RawPage {
    /// URL after redirects
    pub url: String,
    pub bytes: Vec<u8>,
    /// `charset` from `Content-Type`; `None` leaves detection to the parser
    pub encoding: Option<String>,
}

/// Source of raw pages.
///
/// The pipeline only depends on this trait, so it can run against a stub
/// in tests and against [`HttpFetcher`] everywhere else.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<RawPage, FetchError>> + Send;
}

/// Fetches pages over HTTP(S) with a fixed User-Agent and timeout
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout_secs: u64,
}

impl HttpFetcher {
    /// Builds a client from the configured User-Agent and timeout
    pub fn new(config: &ScraperConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self {
            client,
            timeout_secs: config.timeout_secs,
        })
    }

    fn classify(&self, url: &str, error: reqwest::Error) -> FetchError {
        if error.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
                secs: self.timeout_secs,
            }
        } else {
            FetchError::Network(error.to_string())
        }
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<RawPage, FetchError> {
        ::log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(
                ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .send()
            .await
            .map_err(|e| self.classify(url, e))?;

        let status = response.status();
        let final_url = response.url().to_string();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: final_url,
            });
        }

        let encoding = charset_of(response.headers());
        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.classify(url, e))?;

        ::log::debug!(
            "Fetched {} bytes from {} (charset {:?})",
            bytes.len(),
            final_url,
            encoding
        );

        Ok(RawPage {
            url: final_url,
            bytes: bytes.to_vec(),
            encoding,
        })
    }
}

/// The `charset` parameter of the `Content-Type` header, if declared
fn charset_of(headers: &HeaderMap) -> Option<String> {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(charset_param)
}

fn charset_param(content_type: &str) -> Option<String> {
    content_type.split(';').skip(1).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        if key.trim().eq_ignore_ascii_case("charset") {
            let value = value.trim().trim_matches('"');
            (!value.is_empty()).then(|| value.to_string())
        } else {
            None
        }
    })
}
