//! Article content scraper.
//!
//! Fetches the source URL with a browser User-Agent, strips page chrome,
//! and extracts paragraph text. This is the one upstream step whose failure
//! is surfaced to the user: without article text there is nothing to
//! narrate.

use std::time::Duration;

use regex::Regex;
use reqwest::Client;
use tracing::{debug, info};
use url::Url;

use crate::error::{AiError, AiResult};

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Scraper configuration.
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum characters of extracted text kept.
    pub max_chars: usize,
    /// Minimum characters required to consider the page usable.
    pub min_chars: usize,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(20),
            max_chars: 15_000,
            min_chars: 100,
        }
    }
}

/// Fetches and extracts readable text from an article URL.
pub struct ArticleScraper {
    http: Client,
    config: ScraperConfig,
}

impl ArticleScraper {
    /// Create a new scraper.
    pub fn new(config: ScraperConfig) -> AiResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(AiError::Network)?;

        Ok(Self { http, config })
    }

    /// Fetch `url` and extract its paragraph text.
    pub async fn scrape(&self, url: &str) -> AiResult<String> {
        let parsed = Url::parse(url).map_err(|_| AiError::InvalidUrl(url.to_string()))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(AiError::InvalidUrl(url.to_string()));
        }

        info!(url = %url, "Scraping article");

        let response = self.http.get(parsed).send().await?;
        if !response.status().is_success() {
            return Err(AiError::request_failed(format!(
                "Failed to fetch page: {}",
                response.status()
            )));
        }

        let html = response.text().await?;
        let text = extract_text(&html);

        if text.len() < self.config.min_chars {
            return Err(AiError::InsufficientContent(text.len()));
        }

        debug!(chars = text.len(), "Extracted article text");

        if text.chars().count() > self.config.max_chars {
            Ok(text.chars().take(self.config.max_chars).collect())
        } else {
            Ok(text)
        }
    }
}

/// Extract readable paragraph text from raw HTML.
///
/// Removes script/style blocks and page chrome (nav, header, footer,
/// aside), then collects the text of `<p>` elements with inner tags
/// stripped and common entities decoded.
fn extract_text(html: &str) -> String {
    let paragraph = Regex::new(r"(?is)<p[^>]*>(.*?)</p>").unwrap();
    let tag = Regex::new(r"<[^>]+>").unwrap();

    let mut stripped = html.to_string();
    for chrome in ["script", "style", "nav", "header", "footer", "aside"] {
        let block = Regex::new(&format!(r"(?is)<{chrome}[^>]*>.*?</{chrome}>")).unwrap();
        stripped = block.replace_all(&stripped, "").into_owned();
    }

    let mut paragraphs = Vec::new();
    for caps in paragraph.captures_iter(&stripped) {
        let inner = tag.replace_all(&caps[1], "");
        let text = decode_entities(inner.trim());
        if !text.is_empty() {
            paragraphs.push(text);
        }
    }

    paragraphs.join("\n")
}

fn decode_entities(text: &str) -> String {
    text.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
}
