//! The remote asset-search collaborator.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::asset::{SearchCriteria, SearchResultPage};

pub mod http;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search request failed: {0}")]
    Transport(String),

    #[error("search backend returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode search response: {0}")]
    Decode(String),
}

pub type SearchResult<T> = Result<T, SearchError>;

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SearchError::Decode(err.to_string())
        } else {
            SearchError::Transport(err.to_string())
        }
    }
}

/// One paginated metadata query against the asset-search backend. The wire
/// format is owned by the backend; implementations only surface the decoded
/// page.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search_assets(&self, criteria: &SearchCriteria) -> SearchResult<SearchResultPage>;
}
