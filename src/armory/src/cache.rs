//! Version-keyed disk cache for raw manifest content.
//!
//! One file per manifest version, holding the content blob verbatim. A cached
//! file is reused whenever the upstream version matches; otherwise the blob is
//! fetched and written through. Files are never evicted.

use std::fs;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::remote::ManifestSource;

/// File name for a manifest version.
///
/// Path separators in the version are replaced so the name never escapes the
/// cache directory.
pub fn cache_key(version: &str) -> String {
    let safe: String = version
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("manifest_{}.json", safe)
}

/// Manifest content cache rooted at a directory
#[derive(Debug, Clone)]
pub struct ContentCache {
    dir: PathBuf,
}

impl ContentCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the cache file for a version
    pub fn path_for(&self, version: &str) -> PathBuf {
        self.dir.join(cache_key(version))
    }

    /// Check whether content for a version is cached
    pub fn contains(&self, version: &str) -> bool {
        self.path_for(version).is_file()
    }

    /// Read cached content for a version, if present
    pub fn read(&self, version: &str) -> Result<Option<Vec<u8>>> {
        let path = self.path_for(version);
        if !path.is_file() {
            return Ok(None);
        }
        Ok(Some(fs::read(&path)?))
    }

    /// Persist content for a version, creating the cache directory if needed.
    ///
    /// The bytes go to a temporary sibling first and are renamed into place,
    /// so an interrupted write never leaves a file that looks like a hit.
    pub fn store(&self, version: &str, content: &[u8]) -> Result<PathBuf> {
        let path = self.path_for(version);
        let tmp_path = path.with_extension("json.partial");

        let write = || -> std::io::Result<()> {
            fs::create_dir_all(&self.dir)?;
            fs::write(&tmp_path, content)?;
            fs::rename(&tmp_path, &path)
        };

        write().map_err(|source| {
            let _ = fs::remove_file(&tmp_path);
            Error::CacheWrite {
                path: path.clone(),
                source,
            }
        })?;

        Ok(path)
    }

    /// Return content for `version`, from disk when cached, otherwise fetched
    /// from `source` at `content_path` and written through.
    ///
    /// Failing to write the cache is logged and does not fail the call.
    pub fn obtain_content(
        &self,
        source: &dyn ManifestSource,
        version: &str,
        content_path: &str,
    ) -> Result<Vec<u8>> {
        if let Some(content) = self.read(version)? {
            tracing::info!(
                "Loading manifest {} from cache ({})",
                version,
                self.path_for(version).display()
            );
            return Ok(content);
        }

        tracing::info!("Downloading manifest {} content...", version);
        let content = source.fetch_content(content_path)?;

        match self.store(version, &content) {
            Ok(path) => tracing::info!("Manifest cached to {}", path.display()),
            Err(e) => tracing::warn!("Failed to cache manifest: {}", e),
        }

        Ok(content)
    }
}
