//! Weapon stat hash definitions

/// Named stat slot on a weapon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    Rpm,
    Impact,
    Range,
    Stability,
    Handling,
    ReloadSpeed,
    Magazine,
}

/// Weapon stat information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeaponStat {
    pub hash: u32,
    pub kind: StatKind,
}

/// Stat hashes surfaced on weapon records. Every other stat is ignored.
pub const WEAPON_STATS: &[WeaponStat] = &[
    WeaponStat {
        hash: 4284893193,
        kind: StatKind::Rpm,
    },
    WeaponStat {
        hash: 4043523819,
        kind: StatKind::Impact,
    },
    WeaponStat {
        hash: 1240592695,
        kind: StatKind::Range,
    },
    WeaponStat {
        hash: 155624089,
        kind: StatKind::Stability,
    },
    WeaponStat {
        hash: 943549884,
        kind: StatKind::Handling,
    },
    WeaponStat {
        hash: 4188031367,
        kind: StatKind::ReloadSpeed,
    },
    WeaponStat {
        hash: 3871231066,
        kind: StatKind::Magazine,
    },
];
