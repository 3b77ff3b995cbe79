//! Remote manifest source
//!
//! Core abstraction for fetching manifest metadata and content, with the
//! Bungie platform client as the production implementation.

mod bungie;
mod mock;

use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

use crate::error::Result;

pub use bungie::BungieClient;
pub use mock::MockManifestSource;

/// Base URL for static content and icon paths
pub const BUNGIE_BASE_URL: &str = "https://www.bungie.net";

/// Base URL for platform API endpoints
pub const BUNGIE_API_BASE: &str = "https://www.bungie.net/Platform";

/// Header carrying the static API key
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Timeout applied to every request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Current manifest version and per-locale content paths
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ManifestMetadata {
    pub version: String,
    /// Locale code -> content path relative to the asset base URL
    #[serde(rename = "jsonWorldContentPaths", default)]
    pub content_paths: HashMap<String, String>,
}

impl ManifestMetadata {
    /// Content path for a locale, if the manifest publishes one
    pub fn content_path(&self, locale: &str) -> Option<&str> {
        self.content_paths.get(locale).map(String::as_str)
    }
}

/// Trait for fetching manifest data (Bungie API, mocks in tests)
pub trait ManifestSource: Send + Sync {
    /// Fetch the current manifest version and content paths
    fn fetch_manifest_metadata(&self) -> Result<ManifestMetadata>;

    /// Fetch the raw content blob at a path returned by the metadata
    fn fetch_content(&self, path: &str) -> Result<Vec<u8>>;

    /// Base URL that content and icon paths are relative to
    fn asset_base_url(&self) -> &str {
        BUNGIE_BASE_URL
    }
}
