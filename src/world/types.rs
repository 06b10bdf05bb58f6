//! World data structures: a room arena with id-linked exits.
//!
//! The room graph is cyclic, so rooms live in one `Vec` owned by [`World`]
//! and everything else (exits, the player's position, rules) refers to them
//! by [`RoomId`].

use crate::character::{BaseStats, Enemy};
use crate::core::error::WorldError;
use crate::items::ItemCatalog;
use std::collections::HashMap;

/// Stable index of a room inside its [`World`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub usize);

/// A directed edge out of a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exit {
    /// Lowercase direction or passage phrase ("north", "enter chamber").
    pub direction: String,
    pub target: RoomId,
    /// Item that must be carried to use this exit.
    pub required_item: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// Unique within the world.
    pub name: String,
    pub description: String,
    /// At most one occupant. Cleared once defeated.
    pub enemy: Option<Enemy>,
    pub findable_item: Option<String>,
    pub item_found: bool,
    /// Exits in insertion order. Not necessarily symmetric.
    pub exits: Vec<Exit>,
    /// Item that must be carried to enter this room from anywhere.
    pub required_item: Option<String>,
}

impl Room {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            enemy: None,
            findable_item: None,
            item_found: false,
            exits: Vec::new(),
            required_item: None,
        }
    }

    pub fn with_enemy(mut self, enemy: Enemy) -> Self {
        self.enemy = Some(enemy);
        self
    }

    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.findable_item = Some(item.into());
        self
    }

    pub fn requiring(mut self, item: impl Into<String>) -> Self {
        self.required_item = Some(item.into());
        self
    }

    /// The occupant, only while it is still alive.
    pub fn live_enemy(&self) -> Option<&Enemy> {
        self.enemy.as_ref().filter(|e| e.is_alive())
    }

    pub fn live_enemy_mut(&mut self) -> Option<&mut Enemy> {
        self.enemy.as_mut().filter(|e| e.is_alive())
    }

    pub fn exit(&self, direction: &str) -> Option<&Exit> {
        self.exits.iter().find(|e| e.direction == direction)
    }
}

/// Opens a passage once a guard falls and its key is in hand.
///
/// When the occupant of `guard_room` is defeated and the player carries
/// `key_item`, an exit named `passage` is added from `guard_room` to
/// `target`, usable only while the key is still carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlockRule {
    pub guard_room: RoomId,
    pub key_item: String,
    pub passage: String,
    pub target: RoomId,
}

/// How the game is won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VictoryRule {
    /// Reaching this room with no live occupant wins.
    pub terminal: RoomId,
    /// Defeating this room's occupant moves the player straight to `terminal`.
    pub boss_lair: Option<RoomId>,
}

/// Owns every room and the rules that reshape the graph.
#[derive(Debug, Clone)]
pub struct World {
    rooms: Vec<Room>,
    by_name: HashMap<String, RoomId>,
    pub start: RoomId,
    pub player_stats: BaseStats,
    pub unlock_rules: Vec<UnlockRule>,
    pub victory: Option<VictoryRule>,
    pub catalog: ItemCatalog,
}

impl World {
    pub fn new(player_stats: BaseStats, catalog: ItemCatalog) -> Self {
        Self {
            rooms: Vec::new(),
            by_name: HashMap::new(),
            start: RoomId(0),
            player_stats,
            unlock_rules: Vec::new(),
            victory: None,
            catalog,
        }
    }

    /// Adds a room. The first room added is the default start.
    pub fn add_room(&mut self, room: Room) -> Result<RoomId, WorldError> {
        if self.by_name.contains_key(&room.name) {
            return Err(WorldError::DuplicateRoom(room.name));
        }
        let id = RoomId(self.rooms.len());
        self.by_name.insert(room.name.clone(), id);
        self.rooms.push(room);
        Ok(id)
    }

    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    pub fn room_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id.0]
    }

    pub fn find(&self, name: &str) -> Option<RoomId> {
        self.by_name.get(name).copied()
    }

    pub fn require(&self, name: &str) -> Result<RoomId, WorldError> {
        self.find(name)
            .ok_or_else(|| WorldError::UnknownRoom(name.to_string()))
    }

    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms.iter().enumerate().map(|(i, r)| (RoomId(i), r))
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
