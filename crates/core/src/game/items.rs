//! Item effects, pickup, and placement. Effects mutate only the diver;
//! anything touching the wider turn flow stays in the engine.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

use crate::content;
use crate::mapgen;
use crate::state::{DiveState, LooseItem, Player};
use crate::types::{GameError, ItemId, ItemKind, Pos};

impl ItemKind {
    /// Apply this item's effect to the diver and narrate it.
    /// Only the signal flare consumes randomness.
    pub fn apply_to(self, player: &mut Player, rng: &mut ChaCha8Rng) -> String {
        match self {
            ItemKind::OxygenTank => {
                let healed = 25.min(player.max_hp - player.hp);
                player.heal(healed);
                format!("You use the oxygen tank and recover {healed} oxygen!")
            }
            ItemKind::SignalFlare => match rng.next_u64() % 3 {
                0 => {
                    let healed = 10 + (rng.next_u64() % 21) as i32;
                    player.heal(healed);
                    format!("The flare's glow revitalizes you! +{healed} oxygen.")
                }
                1 => {
                    player.attack_power += 2;
                    "The flare sharpens your senses! Harpoon Strength +2!".to_string()
                }
                _ => "The flare fizzles. Nothing happens.".to_string(),
            },
            ItemKind::HarpoonUpgrade => {
                player.attack_power += 5;
                "You upgrade your harpoon! Strength increased by 5!".to_string()
            }
            ItemKind::ResearchData => {
                format!("You can't use the {}.", content::item_name(self))
            }
        }
    }
}

/// Consume one held item of `kind` and apply it. Research data is banked
/// on pickup and never sits in a stack, so it always fails here.
pub(crate) fn use_item(
    player: &mut Player,
    kind: ItemKind,
    rng: &mut ChaCha8Rng,
) -> Result<String, GameError> {
    if !player.inventory.take_one(kind) {
        return Err(GameError::ItemNotHeld);
    }
    Ok(kind.apply_to(player, rng))
}

pub(crate) fn item_at(state: &DiveState, pos: Pos) -> Option<ItemId> {
    state.items.iter().find(|(_, item)| item.pos == pos).map(|(id, _)| id)
}

/// Collect whatever lies on `pos` into the inventory.
pub(crate) fn pickup_at(state: &mut DiveState, pos: Pos) -> Option<String> {
    let id = item_at(state, pos)?;
    let item = state.items.remove(id)?;
    state.player.inventory.add(item.kind, item.value);

    let message = if item.kind == ItemKind::ResearchData {
        format!("Collected {} research data!", item.value)
    } else {
        format!("Picked up {}!", content::item_name(item.kind))
    };
    Some(message)
}

/// Scatter `count` items at deterministic positions derived from the
/// level seed. Research data rolls its point value per drop.
pub(crate) fn spawn_items(
    state: &mut DiveState,
    level_seed: u64,
    count: usize,
    reserved: &[Pos],
) {
    let positions = mapgen::find_valid_positions(&state.map, level_seed, 6000, count, reserved);

    for (spawn_index, pos) in positions.into_iter().enumerate() {
        let roll = mapgen::random_usize(level_seed, 6100 + spawn_index as u64, 0, 99) as u32;
        let kind = content::item_for_roll(roll);
        let value = if kind == ItemKind::ResearchData {
            mapgen::random_usize(level_seed, 6200 + spawn_index as u64, 5, 20) as u32
        } else {
            1
        };

        let item = LooseItem { id: ItemId::default(), pos, kind, value };
        let id = state.items.insert(item);
        state.items[id].id = id;
    }
}
