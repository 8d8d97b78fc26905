//! Command decision and single-turn resolution for the engine.

use super::*;

impl Game {
    /// Host entry point. Decides the command into an action (or into a
    /// no-turn outcome), resolves it, and counts the accepted input.
    pub fn apply_command(&mut self, command: Command) -> Result<TurnReport, GameError> {
        if self.status.game_over && command != Command::Restart {
            return Err(GameError::GameOver);
        }

        let report = match command {
            Command::Step(direction) => self.resolve_step(direction),
            Command::UseItem(kind) => self.resolve_use_item(kind)?,
            Command::Restart => self.resolve_restart(),
        };

        self.next_input_seq += 1;
        Ok(report)
    }

    /// A step into a living creature is an attack; onto floor, a move;
    /// into a wall, nothing at all.
    fn resolve_step(&mut self, direction: Direction) -> TurnReport {
        let to = direction.offset(self.state.player.pos);
        let action = if let Some(target) = creatures::living_creature_at(&self.state, to) {
            DiveAction::Attack { target }
        } else if self.state.map.is_walkable(to) {
            DiveAction::Move { to }
        } else {
            return TurnReport::no_turn();
        };
        self.resolve_turn(action)
    }

    /// Resolve one already-decided player action, then the creature
    /// response. Reaching the exit descends immediately; the new level's
    /// creatures do not get a free strike on arrival.
    ///
    /// The creature response reads the visibility computed at the end of
    /// the previous turn; the player's own view refreshes only after the
    /// whole turn resolves.
    pub fn resolve_turn(&mut self, action: DiveAction) -> TurnReport {
        let mut messages = Vec::new();

        match action {
            DiveAction::Attack { target } => {
                let Some(creature) = self.state.creatures.get_mut(target) else {
                    return TurnReport::no_turn();
                };
                let power = self.state.player.attack_power;
                let report = self.combat.player_attack(&mut self.rng, power, creature);
                messages.extend(report.messages);
            }
            DiveAction::Move { to } => {
                if !self.state.map.is_walkable(to) {
                    return TurnReport::no_turn();
                }
                self.state.player.pos = to;

                if let Some(message) = items::pickup_at(&mut self.state, to) {
                    self.combat.append_message(message.clone());
                    messages.push(message);
                }

                if self.status.check_victory(to, &self.state.map) {
                    self.turn += 1;
                    messages.extend(self.descend());
                    return TurnReport { turn_taken: true, descended: true, messages };
                }
            }
        }

        let radius = self.status.fov_radius();
        messages.extend(self.combat.resolve_creature_turn(
            &mut self.rng,
            &mut self.state,
            &self.visibility,
            radius,
        ));

        self.status.check_defeat(&self.state.player);

        self.turn += 1;
        self.refresh_fov();
        TurnReport { turn_taken: true, descended: false, messages }
    }

    /// Item use never consumes a turn; creatures do not react to it.
    fn resolve_use_item(&mut self, kind: ItemKind) -> Result<TurnReport, GameError> {
        let message = items::use_item(&mut self.state.player, kind, &mut self.rng)?;
        self.combat.append_message(message.clone());
        Ok(TurnReport { turn_taken: false, descended: false, messages: vec![message] })
    }

    /// Start the run over at depth 1 with full oxygen and zero score.
    /// The diver keeps inventory and harpoon upgrades.
    fn resolve_restart(&mut self) -> TurnReport {
        self.generation += 1;
        self.status = RunStatus::new();
        self.state.player.hp = self.state.player.max_hp;
        self.rebuild_level();

        self.combat.clear_log();
        let message = format!("Return to the {}.", content::zone_name(self.status.depth));
        self.combat.append_message(message.clone());
        TurnReport { turn_taken: false, descended: false, messages: vec![message] }
    }
}
