//! Weapon index
//!
//! Filters item definitions down to weapons, assembles weapon records, and
//! holds them behind a single reader/writer lock together with the manifest
//! version they were built from.

use parking_lot::RwLock;

use crate::definitions::{DefinitionTables, ItemDefinition};
use crate::perks::PerkResolver;
use crate::reference::{self, ITEM_TYPE_WEAPON, WEAPON_STATS};
use crate::weapon::{Weapon, WeaponStats};

/// Maximum number of weapons returned by one search
pub const SEARCH_RESULT_LIMIT: usize = 50;

/// Extract the fixed stat block. Stats are matched on their exact hash key;
/// every other entry is ignored.
pub fn weapon_stats(item: &ItemDefinition) -> WeaponStats {
    let mut stats = WeaponStats::default();
    for stat in WEAPON_STATS {
        if let Some(value) = item.stats.value(stat.hash) {
            stats.set(stat.kind, value);
        }
    }
    stats
}

/// Build a weapon record, or `None` when the item is not a listed weapon.
///
/// An item is listed when it is typed as a weapon, has a name and an icon,
/// and its damage type and tier are known. "Unknown" and "Currency" tiers are
/// never listed.
pub fn weapon_from_item(
    item: &ItemDefinition,
    resolver: &PerkResolver<'_>,
    asset_base: &str,
) -> Option<Weapon> {
    if item.item_type != ITEM_TYPE_WEAPON {
        return None;
    }

    let display = &item.display_properties;
    if display.name.is_empty() || display.icon.is_empty() {
        return None;
    }

    let element = reference::damage_type_name(item.default_damage_type)?;
    let tier = reference::tier_by_code(item.inventory.tier_type)?;
    if !tier.listed {
        return None;
    }

    Some(Weapon {
        hash: item.hash,
        name: display.name.clone(),
        icon: format!("{}{}", asset_base, display.icon),
        element: element.to_string(),
        rarity: tier.name.to_string(),
        stats: weapon_stats(item),
        perk_groups: resolver.resolve(item),
    })
}

/// Build all weapons in a load, in ascending item hash order
pub fn build_weapons(
    tables: &DefinitionTables,
    resolver: &PerkResolver<'_>,
    asset_base: &str,
) -> Vec<Weapon> {
    tables
        .items
        .values()
        .filter_map(|item| weapon_from_item(item, resolver, asset_base))
        .collect()
}

/// One manifest version's weapons with their lowercased search keys
#[derive(Debug, Default)]
struct Snapshot {
    version: String,
    weapons: Vec<Weapon>,
    search_keys: Vec<String>,
}

impl Snapshot {
    fn new(version: String, weapons: Vec<Weapon>) -> Self {
        let search_keys = weapons.iter().map(|w| w.name.to_lowercase()).collect();
        Self {
            version,
            weapons,
            search_keys,
        }
    }
}

/// Version-tagged weapon collection, safe to search from many threads.
///
/// Searches take a shared lock; [`WeaponIndex::replace`] takes the exclusive
/// lock and swaps version and weapons together, so a reader never sees a
/// version that does not match the weapons it searched.
#[derive(Debug, Default)]
pub struct WeaponIndex {
    snapshot: RwLock<Snapshot>,
}

impl WeaponIndex {
    /// Create an empty index with no version
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an index already holding `weapons`
    pub fn with_weapons(version: impl Into<String>, weapons: Vec<Weapon>) -> Self {
        Self {
            snapshot: RwLock::new(Snapshot::new(version.into(), weapons)),
        }
    }

    /// Atomically replace the version and weapon set
    pub fn replace(&self, version: impl Into<String>, weapons: Vec<Weapon>) {
        let next = Snapshot::new(version.into(), weapons);
        *self.snapshot.write() = next;
    }

    /// Case-insensitive substring search over weapon names.
    ///
    /// An empty query matches nothing. At most [`SEARCH_RESULT_LIMIT`]
    /// weapons are returned, in build order.
    pub fn search(&self, query: &str) -> Vec<Weapon> {
        if query.is_empty() {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        let snapshot = self.snapshot.read();

        snapshot
            .search_keys
            .iter()
            .zip(&snapshot.weapons)
            .filter(|(key, _)| key.contains(&needle))
            .take(SEARCH_RESULT_LIMIT)
            .map(|(_, weapon)| weapon.clone())
            .collect()
    }

    /// Manifest version of the loaded weapons (empty before the first load)
    pub fn current_version(&self) -> String {
        self.snapshot.read().version.clone()
    }

    /// Number of loaded weapons
    pub fn len(&self) -> usize {
        self.snapshot.read().weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::parse_tables;
    use crate::fixtures::{self, ManifestBuilder};
    use serde_json::json;
    use std::sync::Arc;

    const BASE: &str = "https://www.bungie.net";

    fn build(raw: &[u8]) -> Vec<Weapon> {
        let tables = parse_tables(raw).unwrap();
        let resolver = PerkResolver::new(&tables, BASE);
        build_weapons(&tables, &resolver, BASE)
    }

    fn weapon(hash: u32, name: &str) -> Weapon {
        Weapon {
            hash,
            name: name.to_string(),
            icon: format!("{}/icon.png", BASE),
            element: "Kinetic".into(),
            rarity: "Legendary".into(),
            stats: WeaponStats::default(),
            perk_groups: Vec::new(),
        }
    }

    #[test]
    fn test_single_weapon_scenario() {
        let raw = ManifestBuilder::new()
            .item(
                1,
                fixtures::weapon_row(1, "Test Rifle")
                    .icon("/icon.png")
                    .tier(5)
                    .damage_type(2)
                    .stat(4284893193, 450)
                    .build(),
            )
            .build();

        let weapons = build(&raw);

        assert_eq!(weapons.len(), 1);
        let rifle = &weapons[0];
        assert_eq!(rifle.name, "Test Rifle");
        assert_eq!(rifle.element, "Arc");
        assert_eq!(rifle.rarity, "Legendary");
        assert_eq!(rifle.icon, "https://www.bungie.net/icon.png");
        assert_eq!(
            rifle.stats,
            WeaponStats {
                rpm: 450,
                ..Default::default()
            }
        );
        assert!(rifle.perk_groups.is_empty());
    }

    #[test]
    fn test_filters_non_weapons() {
        let raw = ManifestBuilder::new()
            .item(1, fixtures::weapon_row(1, "Kept").build())
            .item(2, fixtures::weapon_row(2, "Armor").item_type(2).build())
            .item(3, fixtures::weapon_row(3, "").build())
            .item(4, fixtures::weapon_row(4, "No Icon").icon("").build())
            .item(5, fixtures::weapon_row(5, "Odd Element").damage_type(42).build())
            .item(6, fixtures::weapon_row(6, "Unknown Tier").tier(0).build())
            .item(7, fixtures::weapon_row(7, "Glimmer").tier(1).build())
            .item(8, fixtures::weapon_row(8, "Bad Tier").tier(9).build())
            .item(9, fixtures::weapon_row(9, "Exotic").tier(6).build())
            .build();

        let names: Vec<String> = build(&raw).into_iter().map(|w| w.name).collect();
        assert_eq!(names, vec!["Kept", "Exotic"]);
    }

    #[test]
    fn test_listed_weapon_invariants() {
        let mut builder = ManifestBuilder::new();
        for hash in 0..40u32 {
            let row = fixtures::weapon_row(hash, if hash % 5 == 0 { "" } else { "Gun" })
                .tier((hash % 8) as i32)
                .damage_type((hash % 9) as i32)
                .build();
            builder = builder.item(hash, row);
        }

        for weapon in build(&builder.build()) {
            assert!(!weapon.name.is_empty());
            assert!(!weapon.icon.is_empty());
            assert!(weapon.rarity != "Unknown" && weapon.rarity != "Currency");
        }
    }

    #[test]
    fn test_ignores_unknown_stats() {
        let raw = ManifestBuilder::new()
            .item(
                1,
                fixtures::weapon_row(1, "Rifle")
                    .stat(4043523819, 33)
                    .stat(3871231066, 42)
                    .stat(12345, 99)
                    .build(),
            )
            .build();

        let stats = build(&raw)[0].stats;
        assert_eq!(stats.impact, 33);
        assert_eq!(stats.magazine, 42);
        assert_eq!(stats.rpm, 0);
    }

    #[test]
    fn test_stats_ignore_near_miss_keys() {
        let raw = ManifestBuilder::new()
            .item(
                1,
                fixtures::weapon_row(1, "Rifle")
                    .stat(4284893193, 450)
                    .stat_entry("04284893193", json!({ "statHash": 4284893193u32, "value": 1 }))
                    .stat_entry("x", json!({ "statHash": 4284893193u32, "value": 2 }))
                    .stat_entry("y", json!({ "statHash": 4284893193u32, "value": 3 }))
                    .build(),
            )
            .build();

        for _ in 0..50 {
            assert_eq!(build(&raw)[0].stats.rpm, 450);
        }
    }

    #[test]
    fn test_build_is_deterministic() {
        let raw = ManifestBuilder::new()
            .socket_category(100, "WEAPON PERKS")
            .plug("Outlaw", 50)
            .plug("Rampage", 51)
            .plug_set(500, &[51, 50])
            .item(
                30,
                fixtures::weapon_row(30, "Gamma")
                    .with_sockets(
                        json!([{ "reusablePlugSetHash": 500, "randomizedPlugSetHash": 500 }]),
                        json!([{ "socketCategoryHash": 100, "socketIndexes": [0] }]),
                    )
                    .build(),
            )
            .item(10, fixtures::weapon_row(10, "Alpha").build())
            .item(20, fixtures::weapon_row(20, "Beta").build())
            .build();

        let first = build(&raw);
        let second = build(&raw);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );

        let hashes: Vec<u32> = first.iter().map(|w| w.hash).collect();
        assert_eq!(hashes, vec![10, 20, 30]);
    }

    #[test]
    fn test_search_case_insensitive() {
        let index = WeaponIndex::with_weapons(
            "v1",
            vec![
                weapon(1, "Ace of Spades"),
                weapon(2, "Fatebringer"),
                weapon(3, "SPADES OF ACE"),
            ],
        );

        let names: Vec<String> = index.search("sPaDeS").into_iter().map(|w| w.name).collect();
        assert_eq!(names, vec!["Ace of Spades", "SPADES OF ACE"]);
        assert!(index.search("gjallarhorn").is_empty());
    }

    #[test]
    fn test_empty_query_returns_nothing() {
        let index = WeaponIndex::with_weapons("v1", vec![weapon(1, "Ace of Spades")]);
        assert!(index.search("").is_empty());
    }

    #[test]
    fn test_search_limit() {
        let weapons = (0..120).map(|i| weapon(i, &format!("Rifle {}", i))).collect();
        let index = WeaponIndex::with_weapons("v1", weapons);

        let results = index.search("rifle");
        assert_eq!(results.len(), SEARCH_RESULT_LIMIT);
        assert!(results.iter().all(|w| w.name.to_lowercase().contains("rifle")));
        let hashes: Vec<u32> = results.iter().map(|w| w.hash).collect();
        assert_eq!(hashes, (0..50).collect::<Vec<u32>>());
    }

    #[test]
    fn test_replace_swaps_version_and_weapons() {
        let index = WeaponIndex::new();
        assert_eq!(index.current_version(), "");
        assert!(index.is_empty());

        index.replace("v1", vec![weapon(1, "Old Gun")]);
        assert_eq!(index.current_version(), "v1");
        assert_eq!(index.search("gun")[0].name, "Old Gun");

        index.replace("v2", vec![weapon(2, "New Gun"), weapon(3, "Newer Gun")]);
        assert_eq!(index.current_version(), "v2");
        assert_eq!(index.len(), 2);
        assert!(index.search("old").is_empty());
    }

    #[test]
    fn test_concurrent_readers_see_consistent_snapshots() {
        let index = Arc::new(WeaponIndex::with_weapons("v0", vec![weapon(0, "Gun v0")]));

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let index = Arc::clone(&index);
                std::thread::spawn(move || {
                    for _ in 0..500 {
                        let results = index.search("gun");
                        assert_eq!(results.len(), 1);
                        assert!(results[0].name.starts_with("Gun v"));
                    }
                })
            })
            .collect();

        for i in 1..50 {
            index.replace(format!("v{}", i), vec![weapon(i, &format!("Gun v{}", i))]);
        }

        for reader in readers {
            reader.join().unwrap();
        }
        assert_eq!(index.current_version(), "v49");
    }
}
