//! Bungie platform API client

use serde::Deserialize;
use std::io::Read;

use super::{
    ManifestMetadata, ManifestSource, API_KEY_HEADER, BUNGIE_API_BASE, BUNGIE_BASE_URL,
    REQUEST_TIMEOUT,
};
use crate::error::{Error, Result};

/// `ErrorCode` the platform reports for a successful call
const PLATFORM_SUCCESS: i32 = 1;

/// Platform response envelope
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(rename = "Response")]
    response: Option<T>,
    #[serde(rename = "ErrorCode")]
    error_code: Option<i32>,
    #[serde(rename = "Message", default)]
    message: String,
}

/// Blocking client for the Bungie platform API
pub struct BungieClient {
    agent: ureq::Agent,
    api_key: String,
    api_base: String,
    asset_base: String,
}

impl std::fmt::Debug for BungieClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BungieClient")
            .field("api_base", &self.api_base)
            .field("asset_base", &self.asset_base)
            .finish_non_exhaustive()
    }
}

impl BungieClient {
    /// Create a client for the public Bungie endpoints
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_endpoints(api_key, BUNGIE_API_BASE, BUNGIE_BASE_URL)
    }

    /// Create a client against custom endpoints (mirrors, local stubs)
    pub fn with_endpoints(
        api_key: impl Into<String>,
        api_base: impl Into<String>,
        asset_base: impl Into<String>,
    ) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::Config("Bungie API key is empty".into()));
        }

        let agent = ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build();

        Ok(Self {
            agent,
            api_key,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            asset_base: asset_base.into().trim_end_matches('/').to_string(),
        })
    }

    fn manifest_url(&self) -> String {
        format!("{}/Destiny2/Manifest/", self.api_base)
    }

    fn content_url(&self, path: &str) -> String {
        format!("{}{}", self.asset_base, path)
    }

    /// GET a URL with the API key and return the whole body
    fn get(&self, url: &str) -> Result<Vec<u8>> {
        tracing::debug!("GET {}", url);

        let response = match self.agent.get(url).set(API_KEY_HEADER, &self.api_key).call() {
            Ok(resp) => resp,
            Err(ureq::Error::Status(code, _)) => {
                return Err(Error::remote(url, format!("status {}", code)));
            }
            Err(e) => return Err(Error::remote(url, e)),
        };

        let mut body = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut body)
            .map_err(|e| Error::remote(url, e))?;
        Ok(body)
    }
}

/// Decode the manifest metadata envelope
fn parse_metadata(url: &str, body: &[u8]) -> Result<ManifestMetadata> {
    let envelope: Envelope<ManifestMetadata> =
        serde_json::from_slice(body).map_err(|e| Error::remote(url, e))?;

    if let Some(code) = envelope.error_code {
        if code != PLATFORM_SUCCESS {
            return Err(Error::remote(
                url,
                format!("platform error {}: {}", code, envelope.message),
            ));
        }
    }

    envelope
        .response
        .ok_or_else(|| Error::remote(url, "response envelope has no manifest"))
}

impl ManifestSource for BungieClient {
    fn fetch_manifest_metadata(&self) -> Result<ManifestMetadata> {
        let url = self.manifest_url();
        let body = self.get(&url)?;
        parse_metadata(&url, &body)
    }

    fn fetch_content(&self, path: &str) -> Result<Vec<u8>> {
        self.get(&self.content_url(path))
    }

    fn asset_base_url(&self) -> &str {
        &self.asset_base
    }
}
