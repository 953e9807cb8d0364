//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub domain: String,
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    pub locales_dir: String,
    pub default_locale: String,
    pub secret: String,
    pub auth_service_url: String,
    pub search_api_url: String,
    pub search_api_key: String,
}
