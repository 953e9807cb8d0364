use serde::Serialize;

use crate::domain::asset::AssetSummary;

/// Request-scoped context the HTTP layer hands to the page loader. Read-only
/// to the loader.
#[derive(Clone, Debug, Default)]
pub struct PageRequestContext {
    /// Full URL of the incoming request, used as the post-login return
    /// target.
    pub url: String,
    /// Session token extracted from the cookie session, if any.
    pub token: Option<String>,
    /// Locale hint from the request (`Accept-Language`), if any.
    pub locale: Option<String>,
}

/// Page-level metadata consumed by the template.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct PageMeta {
    pub title: String,
}

/// Data required to render the quick-review template: the fetched assets in
/// server order plus the localized page title. Nothing else.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ReviewPageData {
    pub assets: Vec<AssetSummary>,
    pub meta: PageMeta,
}
