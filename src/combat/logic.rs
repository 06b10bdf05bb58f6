//! Turn-based combat: one player action, then the enemy's answer.

use super::types::{parse_action_code, ActionCode, CombatAction, CombatRound, CombatState};
use crate::character::{attack, gain_xp, use_item, Enemy, Player};
use crate::core::constants::{CANCEL_ITEM_CHOICE, FLEE_CHANCE};
use crate::core::error::CommandError;
use crate::events::{GameEvent, StatBlock};
use crate::items::ItemCatalog;
use crate::ui::{Frontend, Prompt};
use rand::Rng;
use tracing::debug;

/// Events that open a fight.
pub fn begin_combat(player: &Player, enemy: &Enemy) -> Vec<GameEvent> {
    debug!(enemy = %enemy.name, "combat started");
    vec![GameEvent::CombatStarted {
        player: player.name.clone(),
        enemy: StatBlock::of(enemy),
    }]
}

/// Rolls a flee attempt.
pub fn roll_flee(rng: &mut impl Rng) -> bool {
    rng.gen::<f64>() < FLEE_CHANCE
}

/// Resolves one round.
///
/// The player always acts first. Unless the player fled, a surviving enemy
/// then attacks, including after a failed item use or invalid input.
/// Player death is checked before enemy death.
pub fn resolve_round(
    player: &mut Player,
    enemy: &mut Enemy,
    action: &CombatAction,
    catalog: &ItemCatalog,
    rng: &mut impl Rng,
) -> CombatRound {
    let mut events = Vec::new();

    match action {
        CombatAction::Attack => {
            events.push(GameEvent::Attack(attack(player, enemy)));
        }
        CombatAction::UseItem(Some(item)) => match use_item(player, item, catalog) {
            Ok(used) => events.push(GameEvent::ItemUsed {
                item: used.item,
                healed: used.healed,
                stats: StatBlock::of_player(player),
            }),
            Err(err) => events.push(GameEvent::Failed(err)),
        },
        CombatAction::UseItem(None) => {
            if player.inventory().is_empty() {
                events.push(GameEvent::Failed(CommandError::EmptyInventory));
            } else {
                events.push(GameEvent::ItemChoiceCancelled);
            }
        }
        CombatAction::Run => {
            if roll_flee(rng) {
                debug!(enemy = %enemy.name, "player fled");
                events.push(GameEvent::FleeSucceeded);
                return CombatRound {
                    state: CombatState::Fled,
                    events,
                };
            }
            events.push(GameEvent::FleeFailed);
        }
        CombatAction::Invalid(input) => {
            events.push(GameEvent::InvalidCombatAction(input.clone()));
        }
    }

    if enemy.is_alive() {
        events.push(GameEvent::Attack(attack(enemy, player)));
    }

    let state = if !player.is_alive() {
        events.push(GameEvent::PlayerDefeated);
        CombatState::PlayerDefeated
    } else if !enemy.is_alive() {
        events.extend(award_victory(player, enemy));
        CombatState::EnemyDefeated
    } else {
        CombatState::Ongoing
    };

    debug!(?action, ?state, player_hp = player.hp, enemy_hp = enemy.hp, "combat round");
    CombatRound { state, events }
}

/// Grants XP and every drop of a defeated enemy.
pub fn award_victory(player: &mut Player, enemy: &Enemy) -> Vec<GameEvent> {
    let mut events = vec![
        GameEvent::EnemyVanquished(enemy.name.clone()),
        GameEvent::XpGained(enemy.xp_reward()),
    ];

    if let Some(level_up) = gain_xp(player, enemy.xp_reward()) {
        events.push(GameEvent::LeveledUp(level_up));
    }

    for item in enemy.drops() {
        player.add_item(item.clone());
        events.push(GameEvent::ItemAdded(item.clone()));
    }

    events
}

/// Asks the frontend for this round's action.
///
/// Returns `None` if input ends.
pub fn choose_action(player: &Player, frontend: &mut impl Frontend) -> Option<CombatAction> {
    let input = frontend.prompt(Prompt::CombatAction)?;
    let action = match parse_action_code(&input) {
        ActionCode::Attack => CombatAction::Attack,
        ActionCode::Run => CombatAction::Run,
        ActionCode::Invalid(input) => CombatAction::Invalid(input),
        ActionCode::UseItem if player.inventory().is_empty() => CombatAction::UseItem(None),
        ActionCode::UseItem => {
            frontend.emit(&GameEvent::InventoryListed(player.inventory().to_vec()));
            let choice = frontend.prompt(Prompt::ItemChoice)?.trim().to_lowercase();
            if choice == CANCEL_ITEM_CHOICE {
                CombatAction::UseItem(None)
            } else {
                CombatAction::UseItem(Some(choice))
            }
        }
    };
    Some(action)
}

/// Runs a fight to a terminal state.
///
/// Returns `None` if input ends mid-fight.
pub fn run_combat(
    player: &mut Player,
    enemy: &mut Enemy,
    catalog: &ItemCatalog,
    rng: &mut impl Rng,
    frontend: &mut impl Frontend,
) -> Option<CombatState> {
    for event in begin_combat(player, enemy) {
        frontend.emit(&event);
    }
    frontend.emit(&GameEvent::Stats(StatBlock::of(enemy)));

    loop {
        frontend.emit(&GameEvent::Stats(StatBlock::of_player(player)));
        let action = choose_action(player, frontend)?;
        let round = resolve_round(player, enemy, &action, catalog, rng);
        for event in &round.events {
            frontend.emit(event);
        }
        if round.state.is_terminal() {
            return Some(round.state);
        }
    }
}
