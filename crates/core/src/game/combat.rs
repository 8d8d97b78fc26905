//! Turn combat: harpoon strikes, creature retaliation, and the bounded
//! dive log. Damage rolls draw from the run rng, so identical runs fight
//! identical battles.

use std::collections::VecDeque;

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

use super::creatures;
use crate::game::visibility::VisibilityTracker;
use crate::state::{CombatActor, Creature, DiveState, Player};
use crate::types::chebyshev;

/// The dive log keeps only the freshest entries; older ones scroll away.
pub const COMBAT_LOG_CAP: usize = 10;

pub struct AttackReport {
    pub died: bool,
    pub messages: Vec<String>,
}

pub struct CombatSystem {
    turn_count: u64,
    log: VecDeque<String>,
}

impl Default for CombatSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl CombatSystem {
    pub fn new() -> Self {
        Self { turn_count: 0, log: VecDeque::with_capacity(COMBAT_LOG_CAP) }
    }

    /// Uniform roll in `[max(1, power - 2), power + 3]`; even a feeble
    /// attacker always deals at least 1.
    fn roll_damage(rng: &mut ChaCha8Rng, power: i32) -> i32 {
        let low = (power - 2).max(1);
        let high = power + 3;
        let span = (high - low + 1) as u64;
        low + (rng.next_u64() % span) as i32
    }

    /// The player's harpoon strike. Attacking a corpse is a safe no-op
    /// that reports the fact; `died` tells the caller whether the target
    /// must be pruned from the roster.
    pub fn player_attack(
        &mut self,
        rng: &mut ChaCha8Rng,
        player_power: i32,
        creature: &mut Creature,
    ) -> AttackReport {
        if !creature.is_alive() {
            let messages = vec![format!("The {} is already dead.", creature.name())];
            self.append_messages(&messages);
            return AttackReport { died: false, messages };
        }

        let damage = Self::roll_damage(rng, player_power);
        let died = creature.take_damage(damage);

        let mut messages =
            vec![format!("You fire your harpoon at the {} for {damage} damage!", creature.name())];
        if died {
            messages.push(format!("The {} dissolves into the deep.", creature.name()));
        } else {
            messages.push(format!(
                "The {} has {}/{} health remaining.",
                creature.name(),
                creature.hp,
                creature.max_hp
            ));
        }

        self.append_messages(&messages);
        AttackReport { died, messages }
    }

    fn creature_strike(
        rng: &mut ChaCha8Rng,
        name: &str,
        power: i32,
        player: &mut Player,
    ) -> Vec<String> {
        let damage = Self::roll_damage(rng, power);
        player.take_damage(damage);

        let mut messages = vec![format!("The {name} strikes you for {damage} damage!")];
        if !player.is_alive() {
            messages.push("Oxygen depleted! Mission failed.".to_string());
        } else {
            messages.push(format!("You have {}/{} oxygen remaining.", player.hp, player.max_hp));
        }
        messages
    }

    /// One creature response phase: let the roster act, then every living
    /// creature that is 8-directionally adjacent *and* currently visible
    /// retaliates. A creature lurking in the dark next to the diver waits.
    /// Dead creatures are purged from the roster afterwards.
    pub fn resolve_creature_turn(
        &mut self,
        rng: &mut ChaCha8Rng,
        state: &mut DiveState,
        visibility: &VisibilityTracker,
        sense_radius: i32,
    ) -> Vec<String> {
        self.turn_count += 1;
        let mut all_messages = creatures::update_creatures(state, visibility, rng, sense_radius);

        for id in creatures::ids_in_stable_order(state) {
            let Some(creature) = state.creatures.get(id) else {
                continue;
            };
            let attacks = creature.is_alive()
                && chebyshev(creature.pos, state.player.pos) == 1
                && visibility.is_visible(creature.pos);
            if !attacks {
                continue;
            }

            let name = creature.name();
            let power = creature.attack_power;
            all_messages.extend(Self::creature_strike(rng, name, power, &mut state.player));
        }

        creatures::purge_dead(state);

        self.append_messages(&all_messages);
        all_messages
    }

    pub fn append_message(&mut self, message: String) {
        self.log.push_back(message);
        while self.log.len() > COMBAT_LOG_CAP {
            self.log.pop_front();
        }
    }

    pub fn append_messages(&mut self, messages: &[String]) {
        for message in messages {
            self.append_message(message.clone());
        }
    }

    /// Last `count` log entries, oldest first.
    pub fn recent_messages(&self, count: usize) -> Vec<String> {
        let skip = self.log.len().saturating_sub(count);
        self.log.iter().skip(skip).cloned().collect()
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    pub fn turn_count(&self) -> u64 {
        self.turn_count
    }

    pub fn log_len(&self) -> usize {
        self.log.len()
    }
}
