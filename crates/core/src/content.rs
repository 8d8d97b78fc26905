//! Static bestiary, spawn tables, and flavor text for the dive.

use crate::types::{CreatureKind, ItemKind};

pub struct CreatureStats {
    pub hp: i32,
    pub attack: i32,
}

/// Base stats before depth scaling.
fn base_stats(kind: CreatureKind) -> CreatureStats {
    match kind {
        CreatureKind::Jellyfish => CreatureStats { hp: 6, attack: 3 },
        CreatureKind::MorayEel => CreatureStats { hp: 10, attack: 4 },
        CreatureKind::AnglerFish => CreatureStats { hp: 14, attack: 5 },
        CreatureKind::ReefShark => CreatureStats { hp: 20, attack: 7 },
        CreatureKind::AbyssalHorror => CreatureStats { hp: 30, attack: 9 },
    }
}

/// Stats at a given depth: creatures toughen as the diver descends.
pub fn stats_for(kind: CreatureKind, depth: u32) -> CreatureStats {
    let base = base_stats(kind);
    let deeper = depth.saturating_sub(1) as i32;
    CreatureStats { hp: base.hp + 2 * deeper, attack: base.attack + deeper / 2 }
}

pub fn creature_name(kind: CreatureKind) -> &'static str {
    match kind {
        CreatureKind::Jellyfish => "jellyfish",
        CreatureKind::MorayEel => "moray eel",
        CreatureKind::AnglerFish => "angler fish",
        CreatureKind::ReefShark => "reef shark",
        CreatureKind::AbyssalHorror => "abyssal horror",
    }
}

pub fn creature_glyph(kind: CreatureKind) -> char {
    match kind {
        CreatureKind::Jellyfish => 'j',
        CreatureKind::MorayEel => 'e',
        CreatureKind::AnglerFish => 'a',
        CreatureKind::ReefShark => 's',
        CreatureKind::AbyssalHorror => 'H',
    }
}

pub fn item_name(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::OxygenTank => "Oxygen Tank",
        ItemKind::ResearchData => "Research Data",
        ItemKind::SignalFlare => "Signal Flare",
        ItemKind::HarpoonUpgrade => "Harpoon Upgrade",
    }
}

pub fn item_glyph(kind: ItemKind) -> char {
    match kind {
        ItemKind::OxygenTank => '+',
        ItemKind::ResearchData => '%',
        ItemKind::SignalFlare => '*',
        ItemKind::HarpoonUpgrade => '!',
    }
}

/// Weighted creature mix per depth. Shallow water stays tame; the horror
/// only appears from the abyssal zone down.
pub fn spawn_table(depth: u32) -> &'static [(CreatureKind, u32)] {
    match depth {
        1 => &[(CreatureKind::Jellyfish, 60), (CreatureKind::MorayEel, 40)],
        2 => &[
            (CreatureKind::Jellyfish, 40),
            (CreatureKind::MorayEel, 40),
            (CreatureKind::AnglerFish, 20),
        ],
        3 => &[
            (CreatureKind::MorayEel, 35),
            (CreatureKind::AnglerFish, 40),
            (CreatureKind::ReefShark, 25),
        ],
        _ => &[
            (CreatureKind::AnglerFish, 35),
            (CreatureKind::ReefShark, 40),
            (CreatureKind::AbyssalHorror, 25),
        ],
    }
}

/// Pick a creature kind from the depth table with a roll in `0..total_weight`.
pub fn creature_for_roll(depth: u32, roll: u32) -> CreatureKind {
    let table = spawn_table(depth);
    let mut remaining = roll;
    for (kind, weight) in table {
        if remaining < *weight {
            return *kind;
        }
        remaining -= weight;
    }
    table[table.len() - 1].0
}

pub fn spawn_weight_total(depth: u32) -> u32 {
    spawn_table(depth).iter().map(|(_, weight)| weight).sum()
}

/// Item distribution from the expedition manifest: 40% research data,
/// 30% oxygen tanks, 20% signal flares, 10% harpoon upgrades.
pub fn item_for_roll(roll: u32) -> ItemKind {
    match roll {
        0..40 => ItemKind::ResearchData,
        40..70 => ItemKind::OxygenTank,
        70..90 => ItemKind::SignalFlare,
        _ => ItemKind::HarpoonUpgrade,
    }
}

pub fn zone_name(depth: u32) -> String {
    match depth {
        1 => "Sunlight Zone".to_string(),
        2 => "Twilight Zone".to_string(),
        3 => "Midnight Zone".to_string(),
        4 => "Abyssal Zone".to_string(),
        5 => "Hadal Trench".to_string(),
        other => format!("Depth {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_tables_cover_every_roll() {
        for depth in 1..=8 {
            let total = spawn_weight_total(depth);
            assert!(total > 0);
            for roll in 0..total {
                // Must not panic and must return a kind from the table.
                let kind = creature_for_roll(depth, roll);
                assert!(spawn_table(depth).iter().any(|(k, _)| *k == kind));
            }
        }
    }

    #[test]
    fn item_distribution_matches_manifest_split() {
        let data = (0..100).filter(|r| item_for_roll(*r) == ItemKind::ResearchData).count();
        let tanks = (0..100).filter(|r| item_for_roll(*r) == ItemKind::OxygenTank).count();
        let flares = (0..100).filter(|r| item_for_roll(*r) == ItemKind::SignalFlare).count();
        let upgrades = (0..100).filter(|r| item_for_roll(*r) == ItemKind::HarpoonUpgrade).count();
        assert_eq!((data, tanks, flares, upgrades), (40, 30, 20, 10));
    }

    #[test]
    fn stats_scale_with_depth() {
        let shallow = stats_for(CreatureKind::MorayEel, 1);
        let deep = stats_for(CreatureKind::MorayEel, 5);
        assert!(deep.hp > shallow.hp);
        assert!(deep.attack >= shallow.attack);
    }
}
