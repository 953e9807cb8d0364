use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Sort order applied by the search backend.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AssetOrder {
    Asc,
    #[default]
    Desc,
}

/// Lifecycle/visibility state an asset can be queried by.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AssetVisibility {
    /// Assets shown in the primary timeline view.
    #[default]
    Timeline,
    Archive,
    Hidden,
    Locked,
}

/// One search query against the asset backend. Built fresh per request and
/// immutable once handed to the backend.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct SearchCriteria {
    pub order: AssetOrder,
    pub page: usize,
    pub size: usize,
    pub visibility: AssetVisibility,
}

impl SearchCriteria {
    pub fn new(visibility: AssetVisibility) -> Self {
        Self {
            order: AssetOrder::default(),
            page: 1,
            size: 1,
            visibility,
        }
    }

    pub fn order(mut self, order: AssetOrder) -> Self {
        self.order = order;
        self
    }

    pub fn paginate(mut self, page: usize, size: usize) -> Self {
        self.page = page.max(1);
        self.size = size.max(1);
        self
    }
}

/// A single asset as returned by the search service. Only the envelope
/// fields are interpreted here; everything else the backend sends is kept
/// in `extra` and forwarded to the renderer untouched.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetSummary {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_date_time: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One page of search results in server-provided order.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchResultPage {
    pub items: Vec<AssetSummary>,
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub page: usize,
}
