//! Weapon records served by the index.
//!
//! Field names serialize in camelCase, the shape the search front end reads.

use serde::{Deserialize, Serialize};

use crate::reference::StatKind;

/// Fixed stat block of a weapon. Stats the item does not carry stay zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct WeaponStats {
    pub impact: i32,
    pub range: i32,
    pub stability: i32,
    pub handling: i32,
    pub reload_speed: i32,
    pub rpm: i32,
    pub magazine: i32,
}

impl WeaponStats {
    /// Store a value in the slot for `kind`
    pub fn set(&mut self, kind: StatKind, value: i32) {
        let slot = match kind {
            StatKind::Rpm => &mut self.rpm,
            StatKind::Impact => &mut self.impact,
            StatKind::Range => &mut self.range,
            StatKind::Stability => &mut self.stability,
            StatKind::Handling => &mut self.handling,
            StatKind::ReloadSpeed => &mut self.reload_speed,
            StatKind::Magazine => &mut self.magazine,
        };
        *slot = value;
    }
}

/// A selectable plug, as displayed under a perk category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Perk {
    pub name: String,
    pub description: String,
    /// Absolute icon URL, or empty when the plug has no icon
    pub icon: String,
    pub item_type_display_name: String,
    pub plug_category_identifier: String,
}

/// Perks grouped under one socket category display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PerkCategory {
    pub category: String,
    pub perks: Vec<Perk>,
}

/// A weapon as listed by search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Weapon {
    pub hash: u32,
    pub name: String,
    pub icon: String,
    pub element: String,
    pub rarity: String,
    pub stats: WeaponStats,
    pub perk_groups: Vec<PerkCategory>,
}
