//! Manifest content builders for tests.

use serde_json::{json, Map, Value};

use crate::definitions::{ITEM_TABLE, PLUG_SET_TABLE, SOCKET_CATEGORY_TABLE};

/// Builds raw manifest content the way the content endpoint serves it
#[derive(Default)]
pub struct ManifestBuilder {
    items: Map<String, Value>,
    socket_categories: Map<String, Value>,
    plug_sets: Map<String, Value>,
    extra: Map<String, Value>,
}

impl ManifestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw_item(mut self, hash: u32, row: Value) -> Self {
        self.items.insert(format!("item-{}", hash), row);
        self
    }

    pub fn item(self, hash: u32, row: Value) -> Self {
        self.raw_item(hash, row)
    }

    /// A named plug item (perk) with no icon
    pub fn plug(self, name: &str, hash: u32) -> Self {
        self.raw_item(
            hash,
            json!({
                "hash": hash,
                "displayProperties": { "name": name, "description": "", "icon": "" },
                "itemType": 19,
                "itemTypeDisplayName": "Trait",
                "plug": { "plugCategoryIdentifier": "frames" }
            }),
        )
    }

    pub fn socket_category(mut self, hash: u32, name: &str) -> Self {
        self.socket_categories.insert(
            hash.to_string(),
            json!({ "hash": hash, "displayProperties": { "name": name } }),
        );
        self
    }

    pub fn plug_set(mut self, hash: u32, plug_items: &[u32]) -> Self {
        let items: Vec<Value> = plug_items
            .iter()
            .map(|h| json!({ "plugItemHash": h }))
            .collect();
        self.plug_sets.insert(
            hash.to_string(),
            json!({ "hash": hash, "reusablePlugItems": items }),
        );
        self
    }

    /// Insert or override a whole table
    pub fn table(mut self, name: &str, value: Value) -> Self {
        self.extra.insert(name.to_string(), value);
        self
    }

    pub fn to_value(&self) -> Value {
        let mut root = Map::new();
        root.insert(ITEM_TABLE.to_string(), Value::Object(self.items.clone()));
        if !self.socket_categories.is_empty() {
            root.insert(
                SOCKET_CATEGORY_TABLE.to_string(),
                Value::Object(self.socket_categories.clone()),
            );
        }
        if !self.plug_sets.is_empty() {
            root.insert(
                PLUG_SET_TABLE.to_string(),
                Value::Object(self.plug_sets.clone()),
            );
        }
        for (name, value) in &self.extra {
            root.insert(name.clone(), value.clone());
        }
        Value::Object(root)
    }

    pub fn build(&self) -> Vec<u8> {
        serde_json::to_vec(&self.to_value()).unwrap()
    }
}

/// Item row that passes the weapon filter unless changed
pub struct WeaponRow {
    row: Value,
}

pub fn weapon_row(hash: u32, name: &str) -> WeaponRow {
    WeaponRow {
        row: json!({
            "hash": hash,
            "displayProperties": { "name": name, "description": "", "icon": "/icon.png" },
            "itemType": 3,
            "itemTypeDisplayName": "Auto Rifle",
            "defaultDamageType": 1,
            "inventory": { "tierType": 5 },
            "stats": { "stats": {} }
        }),
    }
}

impl WeaponRow {
    pub fn set(mut self, pointer: &str, value: Value) -> Self {
        if let Some(slot) = self.row.pointer_mut(pointer) {
            *slot = value;
        }
        self
    }

    pub fn icon(self, icon: &str) -> Self {
        self.set("/displayProperties/icon", json!(icon))
    }

    pub fn tier(self, tier: i32) -> Self {
        self.set("/inventory/tierType", json!(tier))
    }

    pub fn damage_type(self, damage_type: i32) -> Self {
        self.set("/defaultDamageType", json!(damage_type))
    }

    pub fn item_type(self, item_type: i32) -> Self {
        self.set("/itemType", json!(item_type))
    }

    pub fn stat(self, hash: u32, value: i32) -> Self {
        self.stat_entry(&hash.to_string(), json!({ "statHash": hash, "value": value }))
    }

    /// Stat entry under an arbitrary key
    pub fn stat_entry(mut self, key: &str, entry: Value) -> Self {
        if let Some(stats) = self
            .row
            .pointer_mut("/stats/stats")
            .and_then(Value::as_object_mut)
        {
            stats.insert(key.to_string(), entry);
        }
        self
    }

    pub fn with_sockets(mut self, entries: Value, categories: Value) -> Self {
        if let Some(row) = self.row.as_object_mut() {
            row.insert(
                "sockets".to_string(),
                json!({ "socketEntries": entries, "socketCategories": categories }),
            );
        }
        self
    }

    pub fn build(self) -> Value {
        self.row
    }
}
