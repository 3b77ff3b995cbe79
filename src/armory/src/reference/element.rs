//! Damage type definitions

/// Damage type information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DamageType {
    pub code: i32,
    pub name: &'static str,
}

/// All damage types, indexed by `defaultDamageType`
pub const DAMAGE_TYPES: &[DamageType] = &[
    DamageType { code: 0, name: "None" },
    DamageType { code: 1, name: "Kinetic" },
    DamageType { code: 2, name: "Arc" },
    DamageType { code: 3, name: "Solar" },
    DamageType { code: 4, name: "Void" },
    DamageType { code: 5, name: "Raid" },
    DamageType { code: 6, name: "Stasis" },
    DamageType { code: 7, name: "Strand" },
];

/// Get damage type name by `defaultDamageType` code
pub fn damage_type_name(code: i32) -> Option<&'static str> {
    DAMAGE_TYPES.iter().find(|d| d.code == code).map(|d| d.name)
}
