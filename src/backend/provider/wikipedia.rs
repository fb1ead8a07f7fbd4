/**
 * Wikipedia API Client
 *
 * Thin wrapper over the MediaWiki action API:
 *
 * - search: `action=query&list=search&srsearch=<term>`
 * - page:   `action=parse&page=<slug>`
 *
 * Requests are sent once. Non-2xx responses are errors; there are no
 * retries and no timeouts beyond reqwest's defaults.
 */

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};

/// Public English Wikipedia endpoint
pub const DEFAULT_WIKIPEDIA_API_URL: &str = "https://en.wikipedia.org/w/api.php";

const USER_AGENT: &str = concat!(
    "wikilytics/",
    env!("CARGO_PKG_VERSION"),
    " (search analytics proxy)"
);

/// Errors raised while talking to the provider
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Network failure, non-2xx status or undecodable body
    #[error("request to provider failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered 2xx but the payload lacks expected fields
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}

impl ProviderError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }
}

/// Outcome of a page read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageLookup {
    Found { title: String, html_content: String },
    Missing,
}

#[derive(Debug, Deserialize)]
struct ParseEnvelope {
    #[serde(default)]
    error: Option<serde_json::Value>,
    #[serde(default)]
    parse: Option<ParsedPage>,
}

#[derive(Debug, Deserialize)]
struct ParsedPage {
    title: String,
    text: ParsedText,
}

#[derive(Debug, Deserialize)]
struct ParsedText {
    #[serde(rename = "*")]
    html: String,
}

/// HTTP client for the Wikipedia action API
#[derive(Debug, Clone)]
pub struct WikipediaClient {
    client: Client,
    base_url: String,
}

impl WikipediaClient {
    /// Create a client for the given API endpoint
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Endpoint this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Run a full-text search and return the provider's JSON untouched
    #[instrument(skip(self), fields(endpoint = %self.base_url))]
    pub async fn search(&self, term: &str) -> Result<serde_json::Value, ProviderError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("action", "query"),
                ("format", "json"),
                ("list", "search"),
                ("srsearch", term),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body = response.json::<serde_json::Value>().await?;
        debug!("Search for {:?} returned", term);
        Ok(body)
    }

    /// Fetch the rendered HTML of a page
    ///
    /// A response carrying an `error` member means the page does not exist.
    #[instrument(skip(self), fields(endpoint = %self.base_url))]
    pub async fn read_page(&self, slug: &str) -> Result<PageLookup, ProviderError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("action", "parse"),
                ("format", "json"),
                ("page", slug),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body = response.json::<serde_json::Value>().await?;
        let envelope: ParseEnvelope = serde_json::from_value(body)
            .map_err(|e| ProviderError::malformed(e.to_string()))?;

        if envelope.error.is_some() {
            debug!("Provider reports page {:?} missing", slug);
            return Ok(PageLookup::Missing);
        }

        let page = envelope
            .parse
            .ok_or_else(|| ProviderError::malformed("response has neither `parse` nor `error`"))?;

        Ok(PageLookup::Found {
            title: page.title,
            html_content: page.text.html,
        })
    }
}
