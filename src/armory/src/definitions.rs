//! Definition tables decoded from the raw manifest content.
//!
//! The content blob is a JSON object mapping table names to tables, and each
//! table maps an arbitrary string key to a row. Rows are re-keyed by their own
//! `hash` field; the string key is discarded.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::value::RawValue;
use std::collections::{BTreeMap, HashMap};

use crate::error::{Error, Result};

/// Item definitions (weapons, perks, everything else). Mandatory.
pub const ITEM_TABLE: &str = "DestinyInventoryItemDefinition";
/// Socket category display names. Optional.
pub const SOCKET_CATEGORY_TABLE: &str = "DestinySocketCategoryDefinition";
/// Reusable plug lists referenced by socket entries. Optional.
pub const PLUG_SET_TABLE: &str = "DestinyPlugSetDefinition";

/// Treat an explicit JSON `null` like an absent field
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A decoded definition row that carries its own identifier
pub trait Definition {
    fn hash(&self) -> u32;
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayProperties {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Path relative to the asset base URL
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inventory {
    #[serde(default)]
    pub tier_type: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatValue {
    #[serde(default)]
    pub value: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ItemStats {
    /// Keyed by the stat hash as text
    #[serde(default, deserialize_with = "null_as_default")]
    pub stats: HashMap<String, StatValue>,
}

impl ItemStats {
    /// Value of a stat whose key is exactly the decimal text of `hash`
    pub fn value(&self, hash: u32) -> Option<i32> {
        self.stats.get(&hash.to_string()).map(|stat| stat.value)
    }
}

/// One attachment point on an item. Zero hashes mean "absent".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocketEntry {
    #[serde(default)]
    pub single_initial_item_hash: u32,
    #[serde(default)]
    pub reusable_plug_set_hash: u32,
    #[serde(default)]
    pub randomized_plug_set_hash: u32,
}

/// Groups socket entries (by index) under a socket category definition
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocketCategory {
    #[serde(default)]
    pub socket_category_hash: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub socket_indexes: Vec<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sockets {
    #[serde(default, deserialize_with = "null_as_default")]
    pub socket_entries: Vec<SocketEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub socket_categories: Vec<SocketCategory>,
}

impl Sockets {
    /// Socket entry at a category's socket index, if in range
    pub fn entry(&self, index: i64) -> Option<&SocketEntry> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.socket_entries.get(i))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlugInfo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub plug_category_identifier: String,
}

/// Row of `DestinyInventoryItemDefinition`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDefinition {
    #[serde(default)]
    pub hash: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub display_properties: DisplayProperties,
    #[serde(default)]
    pub item_type: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub item_type_display_name: String,
    #[serde(default)]
    pub default_damage_type: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub inventory: Inventory,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stats: ItemStats,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sockets: Sockets,
    #[serde(default, deserialize_with = "null_as_default")]
    pub plug: PlugInfo,
}

impl Definition for ItemDefinition {
    fn hash(&self) -> u32 {
        self.hash
    }
}

/// Row of `DestinySocketCategoryDefinition`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocketCategoryDefinition {
    #[serde(default)]
    pub hash: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub display_properties: DisplayProperties,
}

impl Definition for SocketCategoryDefinition {
    fn hash(&self) -> u32 {
        self.hash
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlugSetItem {
    #[serde(default)]
    pub plug_item_hash: u32,
}

/// Row of `DestinyPlugSetDefinition`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlugSetDefinition {
    #[serde(default)]
    pub hash: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reusable_plug_items: Vec<PlugSetItem>,
}

impl Definition for PlugSetDefinition {
    fn hash(&self) -> u32 {
        self.hash
    }
}

/// Definition tables for one manifest load
#[derive(Debug, Clone, Default)]
pub struct DefinitionTables {
    /// Ordered by hash so that everything built from it is deterministic
    pub items: BTreeMap<u32, ItemDefinition>,
    pub socket_categories: HashMap<u32, SocketCategoryDefinition>,
    pub plug_sets: HashMap<u32, PlugSetDefinition>,
}

impl DefinitionTables {
    pub fn item(&self, hash: u32) -> Option<&ItemDefinition> {
        self.items.get(&hash)
    }

    pub fn socket_category(&self, hash: u32) -> Option<&SocketCategoryDefinition> {
        self.socket_categories.get(&hash)
    }

    pub fn plug_set(&self, hash: u32) -> Option<&PlugSetDefinition> {
        self.plug_sets.get(&hash)
    }
}

/// Decode one table and re-key it by row hash.
///
/// Rows are visited in string-key order, so a duplicated hash resolves to the
/// same row on every run.
fn decode_table<T, M>(raw: &RawValue) -> serde_json::Result<M>
where
    T: DeserializeOwned + Definition,
    M: FromIterator<(u32, T)>,
{
    let rows: BTreeMap<String, T> = serde_json::from_str(raw.get())?;
    Ok(rows.into_values().map(|row| (row.hash(), row)).collect())
}

/// Decode an optional table, degrading to an empty table on any problem
fn decode_optional<T>(tables: &HashMap<String, &RawValue>, name: &str) -> HashMap<u32, T>
where
    T: DeserializeOwned + Definition,
{
    let Some(raw) = tables.get(name) else {
        tracing::warn!("{} not found in manifest; continuing without it", name);
        return HashMap::new();
    };

    match decode_table::<T, _>(raw) {
        Ok(table) => table,
        Err(e) => {
            tracing::warn!("Failed to parse {}: {}; continuing without it", name, e);
            HashMap::new()
        }
    }
}

/// Parse the raw manifest content into definition tables.
///
/// The item table is mandatory. Socket categories and plug sets are optional:
/// when missing or malformed they come back empty and perk resolution simply
/// finds nothing to resolve.
pub fn parse_tables(raw: &[u8]) -> Result<DefinitionTables> {
    let tables: HashMap<String, &RawValue> =
        serde_json::from_slice(raw).map_err(|e| Error::parse("manifest content", e))?;

    let items_raw = tables
        .get(ITEM_TABLE)
        .ok_or_else(|| Error::parse(ITEM_TABLE, "table not found in manifest"))?;
    let items = decode_table::<ItemDefinition, _>(items_raw)
        .map_err(|e| Error::parse(ITEM_TABLE, e))?;

    let socket_categories = decode_optional(&tables, SOCKET_CATEGORY_TABLE);
    let plug_sets = decode_optional(&tables, PLUG_SET_TABLE);

    let parsed = DefinitionTables {
        items,
        socket_categories,
        plug_sets,
    };

    tracing::debug!(
        "Parsed {} items, {} socket categories, {} plug sets",
        parsed.items.len(),
        parsed.socket_categories.len(),
        parsed.plug_sets.len()
    );

    Ok(parsed)
}
