use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::HighlightRepository;
use crate::domain::{DomainError, Highlight};

pub const BASE_URL_ENV: &str = "SCORELINE_HIGHLIGHTS_URL";
pub const API_KEY_ENV: &str = "SCORELINE_HIGHLIGHTS_API_KEY";
const HIGHLIGHTS_PATH: &str = "/highlights";

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    highlights: Vec<Highlight>,
}

/// Highlights fetched from a remote provider.
///
/// Issues `GET {base_url}/highlights?q={query}` and expects a body of the form
/// `{"highlights": [...]}`. When an API key is configured it is sent in the
/// `x-api-key` header.
pub struct HttpHighlightRepository {
    client: reqwest::Client,
    /// Full endpoint URL (base + HIGHLIGHTS_PATH).
    url: String,
    api_key: Option<String>,
}

impl HttpHighlightRepository {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{HIGHLIGHTS_PATH}", base.trim_end_matches('/'));
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(15))
                .build()
                .unwrap_or_default(),
            url,
            api_key: api_key.filter(|k| !k.is_empty()),
        }
    }

    /// Construct from `SCORELINE_HIGHLIGHTS_URL` and, optionally,
    /// `SCORELINE_HIGHLIGHTS_API_KEY`. Returns `None` when no URL is set.
    pub fn from_env() -> Option<Self> {
        let base = std::env::var(BASE_URL_ENV).ok().filter(|u| !u.is_empty())?;
        let key = std::env::var(API_KEY_ENV).ok();
        Some(Self::new(base, key))
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl HighlightRepository for HttpHighlightRepository {
    async fn get_highlights(&self, query: &str) -> Result<Vec<Highlight>, DomainError> {
        let mut request = self.client.get(&self.url).query(&[("q", query)]);
        if let Some(key) = &self.api_key {
            request = request.header("x-api-key", key);
        }

        let response = request.send().await.map_err(|e| {
            DomainError::network(format!("Highlights request to {} failed: {e}", self.url))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("Highlights provider returned {status}: {body}");
            return Err(DomainError::network(format!(
                "Highlights provider returned {status}"
            )));
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            DomainError::parse(format!("Failed to parse highlights response: {e}"))
        })?;

        debug!(
            "Fetched {} highlights for query {:?}",
            api_response.highlights.len(),
            query
        );
        Ok(api_response.highlights)
    }
}
