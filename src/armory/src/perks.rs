//! Perk resolution for weapon sockets.
//!
//! A weapon lists socket categories, each naming socket indexes. Every socket
//! entry contributes candidate plug items from up to three sources, in this
//! order:
//!
//! 1. its fixed `singleInitialItemHash`
//! 2. the items of its reusable plug set
//! 3. the items of its randomized plug set
//!
//! Candidates are looked up in the item table and grouped by the category's
//! display name. Within a category perks are deduplicated by name, keeping the
//! first occurrence. Categories are emitted in first-seen order and empty ones
//! are dropped.

use std::collections::{HashMap, HashSet};

use crate::definitions::{DefinitionTables, ItemDefinition, SocketEntry};
use crate::reference::{EXCLUDED_SOCKET_CATEGORIES, UNKNOWN_CATEGORY};
use crate::weapon::{Perk, PerkCategory};

/// Resolves a weapon's sockets against one load's definition tables
#[derive(Debug, Clone)]
pub struct PerkResolver<'a> {
    tables: &'a DefinitionTables,
    asset_base: &'a str,
    excluded: Vec<String>,
}

/// Category being filled, with the names already present in it
struct Bucket {
    category: String,
    perks: Vec<Perk>,
    seen: HashSet<String>,
}

impl<'a> PerkResolver<'a> {
    /// Create a resolver that prefixes perk icons with `asset_base` and skips
    /// the default non-perk categories.
    pub fn new(tables: &'a DefinitionTables, asset_base: &'a str) -> Self {
        Self {
            tables,
            asset_base,
            excluded: EXCLUDED_SOCKET_CATEGORIES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Replace the set of socket category names that are never listed
    pub fn with_excluded_categories<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded = names.into_iter().map(Into::into).collect();
        self
    }

    /// Display name of a socket category, or the "Unknown" sentinel
    fn category_name(&self, hash: u32) -> &'a str {
        self.tables
            .socket_category(hash)
            .map(|c| c.display_properties.name.as_str())
            .unwrap_or(UNKNOWN_CATEGORY)
    }

    fn is_listed_category(&self, name: &str) -> bool {
        !name.is_empty() && name != UNKNOWN_CATEGORY && !self.excluded.iter().any(|e| e == name)
    }

    /// Candidate plug item hashes for one socket, in priority order.
    ///
    /// Plug sets that do not resolve contribute nothing.
    pub fn plug_candidates(&self, entry: &SocketEntry) -> Vec<u32> {
        let mut hashes = Vec::new();

        if entry.single_initial_item_hash != 0 {
            hashes.push(entry.single_initial_item_hash);
        }

        for plug_set_hash in [entry.reusable_plug_set_hash, entry.randomized_plug_set_hash] {
            if plug_set_hash == 0 {
                continue;
            }
            if let Some(plug_set) = self.tables.plug_set(plug_set_hash) {
                hashes.extend(plug_set.reusable_plug_items.iter().map(|p| p.plug_item_hash));
            }
        }

        hashes
    }

    /// Build a perk from a plug item. Plugs without a name are internal rows
    /// and produce nothing.
    fn perk(&self, hash: u32) -> Option<Perk> {
        if hash == 0 {
            return None;
        }
        let plug = self.tables.item(hash)?;
        let display = &plug.display_properties;
        if display.name.is_empty() {
            return None;
        }

        let icon = if display.icon.is_empty() {
            String::new()
        } else {
            format!("{}{}", self.asset_base, display.icon)
        };

        Some(Perk {
            name: display.name.clone(),
            description: display.description.clone(),
            icon,
            item_type_display_name: plug.item_type_display_name.clone(),
            plug_category_identifier: plug.plug.plug_category_identifier.clone(),
        })
    }

    /// Resolve the ordered perk categories of a weapon
    pub fn resolve(&self, item: &ItemDefinition) -> Vec<PerkCategory> {
        let sockets = &item.sockets;
        let mut buckets: Vec<Bucket> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();

        for socket_category in &sockets.socket_categories {
            let name = self.category_name(socket_category.socket_category_hash);
            if !self.is_listed_category(name) {
                continue;
            }

            let position = *positions.entry(name).or_insert_with(|| {
                buckets.push(Bucket {
                    category: name.to_string(),
                    perks: Vec::new(),
                    seen: HashSet::new(),
                });
                buckets.len() - 1
            });
            let bucket = &mut buckets[position];

            for &index in &socket_category.socket_indexes {
                let Some(entry) = sockets.entry(index) else {
                    continue;
                };

                for hash in self.plug_candidates(entry) {
                    let Some(perk) = self.perk(hash) else {
                        continue;
                    };
                    if bucket.seen.insert(perk.name.clone()) {
                        bucket.perks.push(perk);
                    }
                }
            }
        }

        buckets
            .into_iter()
            .filter(|b| !b.perks.is_empty())
            .map(|b| PerkCategory {
                category: b.category,
                perks: b.perks,
            })
            .collect()
    }
}
