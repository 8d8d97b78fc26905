//! Shared fixtures for engine tests: a cleared game on an open map, plus
//! helpers to drop creatures and items exactly where a test needs them.

use super::*;
use crate::state::{Creature, LooseItem};

/// A depth-1 game on a bordered 15x15 open map with no creatures or
/// items, the exit at (13, 13), and the diver centered.
pub(crate) fn open_game(seed: u64) -> Game {
    let mut game = Game::new(seed);
    game.state.creatures.clear();
    game.state.items.clear();

    let mut map = Map::open(15, 15);
    map.set_tile(Pos { y: 13, x: 13 }, TileKind::Exit);
    game.state.map = map;
    game.state.player.pos = Pos { y: 7, x: 7 };

    game.visibility.reset();
    game.refresh_fov();
    game
}

pub(crate) fn add_creature(game: &mut Game, pos: Pos, hp: i32, attack_power: i32) -> EntityId {
    let creature = Creature {
        id: EntityId::default(),
        kind: CreatureKind::MorayEel,
        pos,
        hp,
        max_hp: hp,
        attack_power,
    };
    let id = game.state.creatures.insert(creature);
    game.state.creatures[id].id = id;
    id
}

pub(crate) fn place_item(game: &mut Game, pos: Pos, kind: ItemKind, value: u32) -> ItemId {
    let item = LooseItem { id: ItemId::default(), pos, kind, value };
    let id = game.state.items.insert(item);
    game.state.items[id].id = id;
    id
}
