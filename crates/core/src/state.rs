use std::collections::BTreeMap;

use slotmap::SlotMap;

use crate::content;
use crate::types::*;

#[derive(Clone)]
pub struct Map {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<TileKind>,
}

impl Map {
    /// A solid-wall grid; the generator carves floor into it.
    pub fn filled(width: usize, height: usize) -> Self {
        Self { width, height, tiles: vec![TileKind::Wall; width * height] }
    }

    /// A floor grid with a one-tile wall border, for tests and fixtures.
    pub fn open(width: usize, height: usize) -> Self {
        let mut map = Self::filled(width, height);
        for y in 1..height.saturating_sub(1) {
            for x in 1..width.saturating_sub(1) {
                map.tiles[y * width + x] = TileKind::Floor;
            }
        }
        map
    }

    /// Out-of-bounds reads are walls, so callers never bounds-check.
    pub fn tile_at(&self, pos: Pos) -> TileKind {
        if pos.x < 0 || pos.y < 0 {
            return TileKind::Wall;
        }
        let xu = pos.x as usize;
        let yu = pos.y as usize;
        if xu >= self.width || yu >= self.height {
            return TileKind::Wall;
        }
        self.tiles[yu * self.width + xu]
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    pub fn set_tile(&mut self, pos: Pos, tile: TileKind) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.tiles[idx] = tile;
    }

    pub fn is_walkable(&self, pos: Pos) -> bool {
        self.tile_at(pos) != TileKind::Wall
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}

/// Shared vitality surface for the diver and creatures. `take_damage`
/// clamps at zero and reports whether the hit was lethal.
pub trait CombatActor {
    fn hp(&self) -> i32;
    fn max_hp(&self) -> i32;
    fn attack_power(&self) -> i32;
    fn set_hp(&mut self, hp: i32);

    fn is_alive(&self) -> bool {
        self.hp() > 0
    }

    fn take_damage(&mut self, damage: i32) -> bool {
        self.set_hp((self.hp() - damage).max(0));
        !self.is_alive()
    }
}

#[derive(Clone, Debug)]
pub struct Player {
    pub pos: Pos,
    pub hp: i32,
    pub max_hp: i32,
    pub attack_power: i32,
    pub inventory: Inventory,
}

impl Player {
    pub fn new(pos: Pos) -> Self {
        Self { pos, hp: 100, max_hp: 100, attack_power: 10, inventory: Inventory::default() }
    }

    pub fn heal(&mut self, amount: i32) {
        self.hp = (self.hp + amount).min(self.max_hp);
    }
}

impl CombatActor for Player {
    fn hp(&self) -> i32 {
        self.hp
    }

    fn max_hp(&self) -> i32 {
        self.max_hp
    }

    fn attack_power(&self) -> i32 {
        self.attack_power
    }

    fn set_hp(&mut self, hp: i32) {
        self.hp = hp;
    }
}

#[derive(Clone, Debug)]
pub struct Creature {
    pub id: EntityId,
    pub kind: CreatureKind,
    pub pos: Pos,
    pub hp: i32,
    pub max_hp: i32,
    pub attack_power: i32,
}

impl Creature {
    pub fn name(&self) -> &'static str {
        content::creature_name(self.kind)
    }
}

impl CombatActor for Creature {
    fn hp(&self) -> i32 {
        self.hp
    }

    fn max_hp(&self) -> i32 {
        self.max_hp
    }

    fn attack_power(&self) -> i32 {
        self.attack_power
    }

    fn set_hp(&mut self, hp: i32) {
        self.hp = hp;
    }
}

#[derive(Clone, Debug)]
pub struct LooseItem {
    pub id: ItemId,
    pub pos: Pos,
    pub kind: ItemKind,
    /// Research data carries a point value; other kinds spawn with 1.
    pub value: u32,
}

/// Carried item stacks plus collected research data points.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inventory {
    counts: BTreeMap<ItemKind, u32>,
    pub data_points: u32,
}

impl Inventory {
    pub fn add(&mut self, kind: ItemKind, value: u32) {
        if kind == ItemKind::ResearchData {
            self.data_points += value;
        } else {
            *self.counts.entry(kind).or_insert(0) += value;
        }
    }

    pub fn count(&self, kind: ItemKind) -> u32 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Remove one of `kind`; false if none held.
    pub fn take_one(&mut self, kind: ItemKind) -> bool {
        match self.counts.get_mut(&kind) {
            Some(count) if *count > 0 => {
                *count -= 1;
                if *count == 0 {
                    self.counts.remove(&kind);
                }
                true
            }
            _ => false,
        }
    }

    pub fn stacks(&self) -> impl Iterator<Item = (ItemKind, u32)> + '_ {
        self.counts.iter().map(|(kind, count)| (*kind, *count))
    }
}

/// Everything owned by one depth level: the grid plus the entities on it.
/// Rebuilt wholesale on descend and restart.
pub struct DiveState {
    pub map: Map,
    pub creatures: SlotMap<EntityId, Creature>,
    pub items: SlotMap<ItemId, LooseItem>,
    pub player: Player,
}
