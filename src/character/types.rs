//! Character data: shared stat fields plus a role payload.
//!
//! Players and enemies share every combat stat, so both are a
//! `Character<R>` and differ only in the role data they carry.

use crate::core::constants::STARTING_LEVEL;
use crate::world::RoomId;
use serde::{Deserialize, Serialize};

/// Base combat stats used when creating a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u32,
    pub attack: u32,
    #[serde(default)]
    pub defense: u32,
}

/// Any entity with hit points, attack, and defense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character<R> {
    pub name: String,
    pub max_hp: u32,
    /// Always within `0..=max_hp`.
    pub hp: u32,
    pub attack_power: u32,
    pub defense: u32,
    pub role: R,
}

impl<R> Character<R> {
    pub fn with_role(name: impl Into<String>, stats: BaseStats, role: R) -> Self {
        Self {
            name: name.into(),
            max_hp: stats.hp,
            hp: stats.hp,
            attack_power: stats.attack,
            defense: stats.defense,
            role,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }
}

/// Player-only state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRole {
    /// Item names in pickup order; duplicates allowed.
    pub inventory: Vec<String>,
    pub current_room: RoomId,
    pub xp: u32,
    pub level: u32,
}

/// Enemy-only state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnemyRole {
    pub xp_reward: u32,
    /// Items granted to the player on defeat, in order.
    pub drops: Vec<String>,
}

pub type Player = Character<PlayerRole>;
pub type Enemy = Character<EnemyRole>;

impl Character<PlayerRole> {
    pub fn new_player(name: impl Into<String>, stats: BaseStats, start: RoomId) -> Self {
        Self::with_role(
            name,
            stats,
            PlayerRole {
                inventory: Vec::new(),
                current_room: start,
                xp: 0,
                level: STARTING_LEVEL,
            },
        )
    }

    pub fn has_item(&self, item: &str) -> bool {
        self.role.inventory.iter().any(|i| i == item)
    }

    pub fn add_item(&mut self, item: impl Into<String>) {
        self.role.inventory.push(item.into());
    }

    /// Removes the first copy of `item`. Returns false if none was carried.
    pub fn remove_item(&mut self, item: &str) -> bool {
        match self.role.inventory.iter().position(|i| i == item) {
            Some(index) => {
                self.role.inventory.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn inventory(&self) -> &[String] {
        &self.role.inventory
    }

    pub fn current_room(&self) -> RoomId {
        self.role.current_room
    }

    pub fn move_to(&mut self, room: RoomId) {
        self.role.current_room = room;
    }

    pub fn level(&self) -> u32 {
        self.role.level
    }

    pub fn xp(&self) -> u32 {
        self.role.xp
    }
}

impl Character<EnemyRole> {
    pub fn new_enemy(
        name: impl Into<String>,
        stats: BaseStats,
        xp_reward: u32,
        drops: Vec<String>,
    ) -> Self {
        Self::with_role(name, stats, EnemyRole { xp_reward, drops })
    }

    pub fn xp_reward(&self) -> u32 {
        self.role.xp_reward
    }

    pub fn drops(&self) -> &[String] {
        &self.role.drops
    }
}
