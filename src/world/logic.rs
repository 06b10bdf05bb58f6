//! Navigation, item pickup, passage unlocking, and victory checks.

use super::types::{Exit, Room, RoomId, UnlockRule, World};
use crate::character::Player;
use crate::core::error::CommandError;
use crate::events::{GameEvent, RoomView};
use tracing::debug;

/// Result of trying to leave a room in some direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnterOutcome {
    Moved(RoomId),
    /// Entry needs this item, which the player is not carrying.
    Blocked(String),
    NoSuchExit,
}

/// Canonical form of a direction or passage phrase: lowercase words joined
/// by single spaces, matching how typed commands are rejoined.
pub fn normalize_direction(direction: &str) -> String {
    direction
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Adds or replaces the exit in `direction`. Directions are case-insensitive.
pub fn add_exit(room: &mut Room, direction: &str, target: RoomId) {
    insert_exit(room, direction, target, None);
}

/// Like [`add_exit`], but the exit can only be used while carrying `item`.
pub fn add_gated_exit(room: &mut Room, direction: &str, target: RoomId, item: &str) {
    insert_exit(room, direction, target, Some(item.to_string()));
}

fn insert_exit(room: &mut Room, direction: &str, target: RoomId, required_item: Option<String>) {
    let direction = normalize_direction(direction);
    match room.exits.iter_mut().find(|e| e.direction == direction) {
        Some(exit) => {
            exit.target = target;
            exit.required_item = required_item;
        }
        None => room.exits.push(Exit {
            direction,
            target,
            required_item,
        }),
    }
}

/// Builds the presentation payload for a room. Does not change the world.
pub fn describe(room: &Room) -> RoomView {
    RoomView {
        name: room.name.clone(),
        description: room.description.clone(),
        enemy: room.live_enemy().map(|e| e.name.clone()),
        item: room
            .findable_item
            .clone()
            .filter(|_| !room.item_found),
        exits: room.exits.iter().map(|e| e.direction.clone()).collect(),
    }
}

/// Resolves a move from `from` in `direction`.
///
/// The exit's own gate is checked first, then the destination's required
/// item. The origin room's requirement never matters.
pub fn try_enter(world: &World, from: RoomId, direction: &str, player: &Player) -> EnterOutcome {
    let direction = normalize_direction(direction);
    let Some(exit) = world.room(from).exit(&direction) else {
        return EnterOutcome::NoSuchExit;
    };

    if let Some(item) = &exit.required_item {
        if !player.has_item(item) {
            return EnterOutcome::Blocked(item.clone());
        }
    }

    let target = world.room(exit.target);
    if let Some(item) = &target.required_item {
        if !player.has_item(item) {
            return EnterOutcome::Blocked(item.clone());
        }
    }

    EnterOutcome::Moved(exit.target)
}

/// Whether `requested` can be picked up here.
pub fn find_item(room: &Room, requested: &str) -> bool {
    !room.item_found && room.findable_item.as_deref() == Some(requested)
}

/// Moves the room's findable item into the player's inventory.
///
/// A wrong name and an already-taken item fail the same way.
pub fn take_item(
    room: &mut Room,
    requested: &str,
    player: &mut Player,
) -> Result<(), CommandError> {
    if !find_item(room, requested) {
        return Err(CommandError::ItemNotFound(requested.to_string()));
    }
    room.item_found = true;
    room.findable_item = None;
    player.add_item(requested);
    Ok(())
}

/// The unlock rule whose passage leaves `room` by `direction`, if any.
pub fn sealed_passage<'a>(
    world: &'a World,
    room: RoomId,
    direction: &str,
) -> Option<&'a UnlockRule> {
    let direction = normalize_direction(direction);
    world
        .unlock_rules
        .iter()
        .find(|rule| rule.guard_room == room && rule.passage == direction)
}

/// Opens every passage guarded by `room` whose key the player now carries.
///
/// Call after the room's occupant is defeated. `guard` names the fallen
/// enemy for the announcement.
pub fn apply_unlock_rules(
    world: &mut World,
    room: RoomId,
    guard: &str,
    player: &Player,
) -> Vec<GameEvent> {
    let opened: Vec<UnlockRule> = world
        .unlock_rules
        .iter()
        .filter(|rule| rule.guard_room == room && player.has_item(&rule.key_item))
        .filter(|rule| world.room(room).exit(&rule.passage).is_none())
        .cloned()
        .collect();

    opened
        .into_iter()
        .map(|rule| {
            debug!(passage = %rule.passage, key = %rule.key_item, "passage unlocked");
            add_gated_exit(world.room_mut(room), &rule.passage, rule.target, &rule.key_item);
            GameEvent::PassageUnlocked {
                guard: guard.to_string(),
                item: rule.key_item,
                passage: rule.passage,
            }
        })
        .collect()
}

/// Where the player is carried after clearing `room`, if it is the boss lair.
pub fn victory_transition(world: &World, room: RoomId) -> Option<RoomId> {
    let rule = world.victory?;
    if rule.boss_lair == Some(room) && world.room(room).live_enemy().is_none() {
        Some(rule.terminal)
    } else {
        None
    }
}

/// True when the player stands in the terminal room and nothing alive is there.
pub fn victory_reached(world: &World, room: RoomId) -> bool {
    world
        .victory
        .is_some_and(|rule| rule.terminal == room && world.room(room).live_enemy().is_none())
}
