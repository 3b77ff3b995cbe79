//! Configuration for manifest loading

use std::path::PathBuf;

use crate::error::{Error, Result};

/// Environment variable holding the Bungie API key
pub const API_KEY_ENV: &str = "BUNGIE_API_KEY";
/// Environment variable overriding the cache directory
pub const CACHE_DIR_ENV: &str = "CACHE_DIR";
/// Environment variable overriding the manifest locale
pub const LOCALE_ENV: &str = "MANIFEST_LOCALE";

/// Cache directory used when none is configured
pub const DEFAULT_CACHE_DIR: &str = "./cache";
/// Manifest locale used when none is configured
pub const DEFAULT_LOCALE: &str = "en";

/// Validated loader configuration
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub cache_dir: PathBuf,
    pub locale: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("cache_dir", &self.cache_dir)
            .field("locale", &self.locale)
            .finish()
    }
}

/// Treat unset and blank values the same
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl Config {
    /// Build a configuration, applying defaults.
    ///
    /// A missing or blank API key is an error; everything else has a default.
    pub fn new(
        api_key: Option<String>,
        cache_dir: Option<PathBuf>,
        locale: Option<String>,
    ) -> Result<Self> {
        let api_key = non_blank(api_key)
            .ok_or_else(|| Error::Config(format!("{} is required", API_KEY_ENV)))?;

        let cache_dir = cache_dir
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_DIR));

        let locale = non_blank(locale).unwrap_or_else(|| DEFAULT_LOCALE.to_string());

        Ok(Self {
            api_key,
            cache_dir,
            locale,
        })
    }

    /// Load configuration from `BUNGIE_API_KEY`, `CACHE_DIR` and
    /// `MANIFEST_LOCALE`
    pub fn from_env() -> Result<Self> {
        Self::new(
            std::env::var(API_KEY_ENV).ok(),
            std::env::var_os(CACHE_DIR_ENV).map(PathBuf::from),
            std::env::var(LOCALE_ENV).ok(),
        )
    }
}
