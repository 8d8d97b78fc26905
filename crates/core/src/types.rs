use slotmap::new_key_type;

use serde::{Deserialize, Serialize};

new_key_type! {
    pub struct EntityId;
    pub struct ItemId;
}

/// Sight range at depth 1; deeper zones shrink it (see `RunStatus::fov_radius`).
pub const BASE_FOV_RADIUS: i32 = 8;
pub const MIN_FOV_RADIUS: i32 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TileKind {
    Wall,
    Floor,
    Exit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CreatureKind {
    Jellyfish,
    MorayEel,
    AnglerFish,
    ReefShark,
    AbyssalHorror,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    OxygenTank,
    ResearchData,
    SignalFlare,
    HarpoonUpgrade,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    pub fn offset(self, from: Pos) -> Pos {
        match self {
            Self::North => Pos { y: from.y - 1, x: from.x },
            Self::South => Pos { y: from.y + 1, x: from.x },
            Self::West => Pos { y: from.y, x: from.x - 1 },
            Self::East => Pos { y: from.y, x: from.x + 1 },
        }
    }
}

/// A player input as the host records it. `Step` is decided into a
/// `DiveAction` (or rejected) by the engine; the other commands never
/// consume a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Step(Direction),
    UseItem(ItemKind),
    Restart,
}

/// An already-decided player action for one turn. Creature response only
/// ever runs after one of these, so an out-of-order creature turn is
/// unrepresentable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiveAction {
    Move { to: Pos },
    Attack { target: EntityId },
}

/// What one accepted command did. `turn_taken` is false for blocked moves
/// and item use; creature state only advances when it is true.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub turn_taken: bool,
    pub descended: bool,
    pub messages: Vec<String>,
}

impl TurnReport {
    pub(crate) fn no_turn() -> Self {
        Self { turn_taken: false, descended: false, messages: Vec::new() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameError {
    /// A command other than `Restart` arrived after the run ended.
    GameOver,
    /// `UseItem` for a kind the inventory does not hold.
    ItemNotHeld,
}

pub fn manhattan(a: Pos, b: Pos) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

/// 8-directional adjacency distance; creatures strike at chebyshev == 1.
pub fn chebyshev(a: Pos, b: Pos) -> u32 {
    a.x.abs_diff(b.x).max(a.y.abs_diff(b.y))
}
