use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::domain::asset::{SearchCriteria, SearchResultPage};
use crate::search::{SearchBackend, SearchError, SearchResult};

/// HTTP client for the asset-search API.
#[derive(Clone)]
pub struct HttpSearchClient {
    http: Client,
    base_url: Url,
    api_key: String,
}

impl HttpSearchClient {
    pub fn new(base_url: &str, api_key: impl Into<String>) -> SearchResult<Self> {
        // Url::join drops the last path segment without a trailing slash.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&normalized)
            .map_err(|e| SearchError::Transport(format!("invalid search API URL: {e}")))?;

        let http = Client::builder()
            .user_agent(concat!("asset-review/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url,
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl SearchBackend for HttpSearchClient {
    async fn search_assets(&self, criteria: &SearchCriteria) -> SearchResult<SearchResultPage> {
        let endpoint = self
            .base_url
            .join("search/metadata")
            .map_err(|e| SearchError::Transport(format!("invalid search endpoint: {e}")))?;

        let response = self
            .http
            .post(endpoint)
            .header("x-api-key", &self.api_key)
            .json(criteria)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let mut page: SearchResultPage = response.json().await?;

        // The page-size cap is the backend's contract; enforce it at the
        // boundary so callers never see an oversized page.
        if page.items.len() > criteria.size {
            log::warn!(
                "Search backend returned {} items for a page size of {}",
                page.items.len(),
                criteria.size
            );
            page.items.truncate(criteria.size);
        }

        Ok(page)
    }
}
