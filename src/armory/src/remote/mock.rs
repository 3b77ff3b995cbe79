//! Mock Manifest Source
//!
//! An in-memory manifest source that counts calls, for exercising the cache
//! and loader without a network.

use std::sync::atomic::{AtomicUsize, Ordering};

use super::{ManifestMetadata, ManifestSource};
use crate::error::{Error, Result};

/// Base URL the mock reports for icons
pub const MOCK_ASSET_BASE: &str = "https://assets.invalid";

/// A manifest source serving one fixed version and content blob
#[derive(Debug)]
pub struct MockManifestSource {
    pub metadata: ManifestMetadata,
    pub content: Vec<u8>,
    /// When set, every call fails with this reason
    pub failure: Option<String>,
    metadata_calls: AtomicUsize,
    content_calls: AtomicUsize,
}

impl MockManifestSource {
    /// Serve `content` as the `en` locale of manifest `version`
    pub fn new(version: &str, content: Vec<u8>) -> Self {
        let mut metadata = ManifestMetadata {
            version: version.to_string(),
            ..Default::default()
        };
        metadata
            .content_paths
            .insert("en".to_string(), format!("/content/{}/en.json", version));

        Self {
            metadata,
            content,
            failure: None,
            metadata_calls: AtomicUsize::new(0),
            content_calls: AtomicUsize::new(0),
        }
    }

    /// A source whose every call fails
    pub fn failing(reason: &str) -> Self {
        let mut source = Self::new("unreachable", Vec::new());
        source.failure = Some(reason.to_string());
        source
    }

    pub fn metadata_calls(&self) -> usize {
        self.metadata_calls.load(Ordering::SeqCst)
    }

    pub fn content_calls(&self) -> usize {
        self.content_calls.load(Ordering::SeqCst)
    }

    fn check(&self, what: &str) -> Result<()> {
        match &self.failure {
            Some(reason) => Err(Error::remote(format!("mock://{}", what), reason)),
            None => Ok(()),
        }
    }
}

impl ManifestSource for MockManifestSource {
    fn fetch_manifest_metadata(&self) -> Result<ManifestMetadata> {
        self.metadata_calls.fetch_add(1, Ordering::SeqCst);
        self.check("manifest")?;
        Ok(self.metadata.clone())
    }

    fn fetch_content(&self, path: &str) -> Result<Vec<u8>> {
        self.content_calls.fetch_add(1, Ordering::SeqCst);
        self.check(path)?;
        Ok(self.content.clone())
    }

    fn asset_base_url(&self) -> &str {
        MOCK_ASSET_BASE
    }
}
