//! The exploration loop: describe, fight, check for victory, read a command.

use super::constants::DEFAULT_HERO_NAME;
use super::error::CommandError;
use crate::character::{use_item, Player};
use crate::combat::{run_combat, CombatState};
use crate::command::{parse_command, Command};
use crate::events::{GameEvent, StatBlock};
use crate::ui::{Frontend, Prompt};
use crate::world::{
    apply_unlock_rules, describe, sealed_passage, take_item, try_enter, victory_reached,
    victory_transition, EnterOutcome, RoomId, World,
};
use rand::Rng;
use tracing::{debug, info};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Victory,
    PlayerDied,
    /// `quit`, or input ended.
    Quit,
}

/// Asks for the hero's name, falling back to the default when the answer is
/// blank or input has ended.
pub fn ask_hero_name(frontend: &mut impl Frontend) -> String {
    frontend
        .prompt(Prompt::HeroName)
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_HERO_NAME.to_string())
}

pub struct GameSession<R: Rng> {
    world: World,
    player: Player,
    rng: R,
    turns: u32,
}

impl<R: Rng> GameSession<R> {
    pub fn new(world: World, hero_name: impl Into<String>, rng: R) -> Self {
        let player = Player::new_player(hero_name, world.player_stats, world.start);
        Self {
            world,
            player,
            rng,
            turns: 0,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Commands read so far.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Plays until victory, death, or quit.
    pub fn run(&mut self, frontend: &mut impl Frontend) -> SessionOutcome {
        info!(hero = %self.player.name, rooms = self.world.room_count(), "session started");
        frontend.emit(&GameEvent::Welcome);

        let outcome = loop {
            if let Some(outcome) = self.step(frontend) {
                break outcome;
            }
        };

        info!(?outcome, turns = self.turns, level = self.player.level(), "session ended");
        outcome
    }

    /// One pass of the main loop. Returns the outcome once the session is over.
    pub fn step(&mut self, frontend: &mut impl Frontend) -> Option<SessionOutcome> {
        let here = self.player.current_room();
        frontend.emit(&GameEvent::RoomDescribed(describe(self.world.room(here))));

        if self.world.room(here).live_enemy().is_some() {
            // Whatever happens, the room is described again before the
            // player acts.
            return self.fight(here, frontend);
        }

        if victory_reached(&self.world, here) {
            frontend.emit(&GameEvent::Victory);
            return Some(SessionOutcome::Victory);
        }

        let Some(line) = frontend.prompt(Prompt::Command) else {
            debug!("input closed");
            frontend.emit(&GameEvent::Farewell);
            return Some(SessionOutcome::Quit);
        };
        self.turns += 1;

        match parse_command(&line) {
            Ok(Some(command)) => self.execute(command, frontend),
            Ok(None) => None,
            Err(err) => {
                frontend.emit(&GameEvent::Failed(err));
                None
            }
        }
    }

    /// Applies one exploration command.
    pub fn execute(
        &mut self,
        command: Command,
        frontend: &mut impl Frontend,
    ) -> Option<SessionOutcome> {
        debug!(?command, "command");
        let here = self.player.current_room();

        match command {
            Command::Quit => {
                frontend.emit(&GameEvent::Farewell);
                return Some(SessionOutcome::Quit);
            }
            Command::Help => frontend.emit(&GameEvent::Help),
            // The loop describes the room on its next pass.
            Command::Look => {}
            Command::Stats => frontend.emit(&GameEvent::Stats(StatBlock::of_player(&self.player))),
            Command::Inventory => frontend.emit(&GameEvent::InventoryListed(
                self.player.inventory().to_vec(),
            )),
            Command::Use(item) => {
                let event = match use_item(&mut self.player, &item, &self.world.catalog) {
                    Ok(used) => GameEvent::ItemUsed {
                        item: used.item,
                        healed: used.healed,
                        stats: StatBlock::of_player(&self.player),
                    },
                    Err(err) => GameEvent::Failed(err),
                };
                frontend.emit(&event);
            }
            Command::Get(item) => {
                let room = self.world.room_mut(here);
                match take_item(room, &item, &mut self.player) {
                    Ok(()) => frontend.emit(&GameEvent::ItemAdded(item)),
                    Err(err) => frontend.emit(&GameEvent::Failed(err)),
                }
            }
            Command::Go(direction) => {
                if let Err(err) = self.go(here, &direction) {
                    frontend.emit(&GameEvent::Failed(err));
                }
            }
        }
        None
    }

    fn go(&mut self, here: RoomId, direction: &str) -> Result<(), CommandError> {
        match try_enter(&self.world, here, direction, &self.player) {
            EnterOutcome::Moved(next) => {
                let destination = victory_transition(&self.world, next).unwrap_or(next);
                debug!(
                    from = %self.world.room(here).name,
                    to = %self.world.room(destination).name,
                    "player moved"
                );
                self.player.move_to(destination);
                Ok(())
            }
            EnterOutcome::Blocked(item) => Err(CommandError::ActionBlocked { item }),
            EnterOutcome::NoSuchExit => match sealed_passage(&self.world, here, direction) {
                Some(rule) if self.player.has_item(&rule.key_item) => {
                    Err(CommandError::PassageSealed)
                }
                Some(rule) => Err(CommandError::ActionBlocked {
                    item: rule.key_item.clone(),
                }),
                None => Err(CommandError::NoSuchExit(direction.to_string())),
            },
        }
    }

    fn fight(&mut self, here: RoomId, frontend: &mut impl Frontend) -> Option<SessionOutcome> {
        // The enemy leaves the room for the duration so the catalog stays
        // borrowable alongside it.
        let mut enemy = self.world.room_mut(here).enemy.take()?;
        let state = run_combat(
            &mut self.player,
            &mut enemy,
            &self.world.catalog,
            &mut self.rng,
            frontend,
        );

        match state {
            None => {
                self.world.room_mut(here).enemy = Some(enemy);
                frontend.emit(&GameEvent::Farewell);
                Some(SessionOutcome::Quit)
            }
            Some(CombatState::PlayerDefeated) => {
                self.world.room_mut(here).enemy = Some(enemy);
                frontend.emit(&GameEvent::GameOver);
                Some(SessionOutcome::PlayerDied)
            }
            Some(CombatState::EnemyDefeated) => {
                debug!(enemy = %enemy.name, room = %self.world.room(here).name, "room cleared");
                for event in apply_unlock_rules(&mut self.world, here, &enemy.name, &self.player) {
                    frontend.emit(&event);
                }
                if let Some(terminal) = victory_transition(&self.world, here) {
                    debug!("boss defeated, moving to the terminal room");
                    self.player.move_to(terminal);
                }
                None
            }
            Some(CombatState::Fled) | Some(CombatState::Ongoing) => {
                self.world.room_mut(here).enemy = Some(enemy);
                None
            }
        }
    }
}
