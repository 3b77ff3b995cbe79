//! # armory
//!
//! Destiny 2 manifest ingestion and in-memory weapon search.
//!
//! This library provides functionality to:
//! - Fetch manifest metadata and content from the Bungie platform API
//! - Cache the raw manifest blob on disk, keyed by manifest version
//! - Decode the item, socket category and plug set definition tables
//! - Resolve each weapon's sockets into ordered, deduplicated perk groups
//! - Serve case-insensitive substring search over the loaded weapons
//!
//! ## Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = armory::Config::from_env()?;
//! let index = armory::WeaponIndex::new();
//!
//! // Fetch (or reuse the cached) manifest and build the index
//! let summary = armory::load_from_config(&config, &index)?;
//! println!("Loaded {} weapons ({})", summary.weapon_count, summary.version);
//!
//! for weapon in index.search("ace of") {
//!     println!("{} [{} {}]", weapon.name, weapon.rarity, weapon.element);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod config;
pub mod definitions;
pub mod error;
pub mod index;
pub mod loader;
pub mod perks;
pub mod reference;
pub mod remote;
pub mod weapon;

#[cfg(test)]
mod fixtures;

// Re-export commonly used items
#[doc(inline)]
pub use cache::{cache_key, ContentCache};
#[doc(inline)]
pub use config::{Config, DEFAULT_CACHE_DIR, DEFAULT_LOCALE};
#[doc(inline)]
pub use definitions::{parse_tables, DefinitionTables, ItemDefinition};
#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use index::{build_weapons, WeaponIndex, SEARCH_RESULT_LIMIT};
#[doc(inline)]
pub use loader::{load_from_config, load_manifest, LoadSummary};
#[doc(inline)]
pub use perks::PerkResolver;
#[doc(inline)]
pub use remote::{BungieClient, ManifestMetadata, ManifestSource, MockManifestSource};
#[doc(inline)]
pub use weapon::{Perk, PerkCategory, Weapon, WeaponStats};
