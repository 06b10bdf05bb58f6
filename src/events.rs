//! Narrative events emitted by the game logic.
//!
//! Logic functions never print. They return or emit these events and the
//! presentation layer (see [`crate::ui`]) turns them into text.

use crate::character::{Character, Player};
use crate::core::error::CommandError;

/// Snapshot of a character's stats for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatBlock {
    pub name: String,
    pub hp: u32,
    pub max_hp: u32,
    pub attack_power: u32,
    pub defense: u32,
    /// Level and XP, present for the player only.
    pub progress: Option<(u32, u32)>,
}

impl StatBlock {
    pub fn of<R>(character: &Character<R>) -> Self {
        Self {
            name: character.name.clone(),
            hp: character.hp,
            max_hp: character.max_hp,
            attack_power: character.attack_power,
            defense: character.defense,
            progress: None,
        }
    }

    pub fn of_player(player: &Player) -> Self {
        Self {
            progress: Some((player.level(), player.xp())),
            ..Self::of(player)
        }
    }
}

/// Outcome of a single attack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackReport {
    pub attacker: String,
    pub target: String,
    pub damage: u32,
    pub target_defeated: bool,
}

/// Stats after a level-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelUp {
    pub level: u32,
    pub stats: StatBlock,
}

/// What the player sees on entering or looking at a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomView {
    pub name: String,
    pub description: String,
    /// Name of the live occupant, if any.
    pub enemy: Option<String>,
    /// Findable item not yet taken, if any.
    pub item: Option<String>,
    /// Exit directions in the order they were added.
    pub exits: Vec<String>,
}

impl RoomView {
    pub fn enemy_present(&self) -> bool {
        self.enemy.is_some()
    }

    pub fn item_visible(&self) -> bool {
        self.item.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    Welcome,
    RoomDescribed(RoomView),
    CombatStarted {
        player: String,
        enemy: StatBlock,
    },
    Stats(StatBlock),
    Attack(AttackReport),
    ItemUsed {
        item: String,
        healed: u32,
        stats: StatBlock,
    },
    ItemChoiceCancelled,
    InventoryListed(Vec<String>),
    FleeSucceeded,
    FleeFailed,
    InvalidCombatAction(String),
    EnemyVanquished(String),
    XpGained(u32),
    LeveledUp(LevelUp),
    ItemAdded(String),
    PassageUnlocked {
        guard: String,
        item: String,
        passage: String,
    },
    PlayerDefeated,
    Victory,
    GameOver,
    Help,
    Failed(CommandError),
    Farewell,
}
