//! Reference data for Destiny 2 definitions
//!
//! Hardcoded lookup tables for the numeric codes the manifest uses:
//! damage types, tier types, item types and weapon stat hashes.

mod element;
mod rarity;
mod stats;

pub use element::{damage_type_name, DamageType, DAMAGE_TYPES};
pub use rarity::{tier_by_code, TierType, TIER_TYPES};
pub use stats::{StatKind, WeaponStat, WEAPON_STATS};

/// `itemType` code for weapons
pub const ITEM_TYPE_WEAPON: i32 = 3;

/// Socket category display names that never hold perks
pub const EXCLUDED_SOCKET_CATEGORIES: &[&str] = &["WEAPON MODS"];

/// Display name used when a socket category hash has no definition
pub const UNKNOWN_CATEGORY: &str = "Unknown";
