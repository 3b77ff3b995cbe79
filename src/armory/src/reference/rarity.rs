//! Tier type definitions

/// Tier type information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierType {
    pub code: i32,
    pub name: &'static str,
    /// Whether items of this tier belong in the weapon listing.
    /// "Unknown" and "Currency" rows are typed as weapons in a few
    /// places but are not real weapons.
    pub listed: bool,
}

/// All tier types in order
pub const TIER_TYPES: &[TierType] = &[
    TierType {
        code: 0,
        name: "Unknown",
        listed: false,
    },
    TierType {
        code: 1,
        name: "Currency",
        listed: false,
    },
    TierType {
        code: 2,
        name: "Common",
        listed: true,
    },
    TierType {
        code: 3,
        name: "Uncommon",
        listed: true,
    },
    TierType {
        code: 4,
        name: "Rare",
        listed: true,
    },
    TierType {
        code: 5,
        name: "Legendary",
        listed: true,
    },
    TierType {
        code: 6,
        name: "Exotic",
        listed: true,
    },
];

/// Get tier type by `inventory.tierType` code
pub fn tier_by_code(code: i32) -> Option<&'static TierType> {
    TIER_TYPES.iter().find(|t| t.code == code)
}
