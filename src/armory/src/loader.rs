//! Manifest load pipeline
//!
//! Remote source -> content cache -> definition tables -> perk resolution ->
//! weapon index. A load either completes and swaps a new snapshot into the
//! index, or fails and leaves the index as it was.

use crate::cache::ContentCache;
use crate::config::Config;
use crate::definitions::parse_tables;
use crate::error::{Error, Result};
use crate::index::{build_weapons, WeaponIndex};
use crate::perks::PerkResolver;
use crate::remote::{BungieClient, ManifestSource};

/// Outcome of a completed load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    pub version: String,
    pub weapon_count: usize,
}

/// Load the current manifest for `locale` into `index`.
///
/// The weapon set is built completely before the index is touched.
pub fn load_manifest(
    source: &dyn ManifestSource,
    cache: &ContentCache,
    locale: &str,
    index: &WeaponIndex,
) -> Result<LoadSummary> {
    let metadata = source.fetch_manifest_metadata()?;
    let version = metadata.version.clone();

    let content_path = metadata
        .content_path(locale)
        .ok_or_else(|| Error::LocaleNotFound(locale.to_string()))?;

    let content = cache.obtain_content(source, &version, content_path)?;
    let tables = parse_tables(&content)?;
    drop(content);

    let asset_base = source.asset_base_url();
    let resolver = PerkResolver::new(&tables, asset_base);
    let weapons = build_weapons(&tables, &resolver, asset_base);
    let weapon_count = weapons.len();

    index.replace(version.clone(), weapons);
    tracing::info!(
        "Loaded {} weapons from manifest version {}",
        weapon_count,
        version
    );

    Ok(LoadSummary {
        version,
        weapon_count,
    })
}

/// Load using the Bungie platform client and cache described by `config`
pub fn load_from_config(config: &Config, index: &WeaponIndex) -> Result<LoadSummary> {
    let client = BungieClient::new(config.api_key.clone())?;
    let cache = ContentCache::new(&config.cache_dir);

    tracing::info!("Loading Destiny 2 manifest...");
    load_manifest(&client, &cache, &config.locale, index)
}
