//! Serializable world definitions.
//!
//! A [`WorldSpec`] names rooms by string and is validated into a [`World`]
//! arena by [`WorldSpec::build`]. Worlds can be written as JSON and loaded
//! with `--world`.

use super::logic::{add_exit, add_gated_exit, normalize_direction};
use super::types::{Room, UnlockRule, VictoryRule, World};
use crate::character::{BaseStats, Enemy};
use crate::core::error::WorldError;
use crate::items::{default_catalog, ItemCatalog, ItemEffect};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldSpec {
    /// Starting stats for the hero.
    pub player: BaseStats,
    /// Start room name. Defaults to the first room.
    #[serde(default)]
    pub start: Option<String>,
    pub rooms: Vec<RoomSpec>,
    #[serde(default)]
    pub exits: Vec<ExitSpec>,
    #[serde(default)]
    pub unlocks: Vec<UnlockSpec>,
    #[serde(default)]
    pub victory: Option<VictorySpec>,
    /// Usable items. Empty means the built-in catalog.
    #[serde(default)]
    pub items: Vec<ItemSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSpec {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub enemy: Option<EnemySpec>,
    #[serde(default)]
    pub item: Option<String>,
    #[serde(default)]
    pub requires_item: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemySpec {
    pub name: String,
    #[serde(flatten)]
    pub stats: BaseStats,
    #[serde(default)]
    pub xp_reward: u32,
    #[serde(default)]
    pub drops: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitSpec {
    pub from: String,
    pub direction: String,
    pub to: String,
    #[serde(default)]
    pub requires_item: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockSpec {
    pub guard_room: String,
    pub key_item: String,
    pub passage: String,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VictorySpec {
    pub terminal: String,
    #[serde(default)]
    pub boss_lair: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSpec {
    pub name: String,
    pub effect: ItemEffect,
}

/// Item names are matched against lowercased player input, whose words are
/// rejoined with single spaces.
fn item_name(name: &str) -> String {
    normalize_direction(name)
}

fn check_stats(name: &str, stats: &BaseStats) -> Result<(), WorldError> {
    if stats.hp == 0 {
        return Err(WorldError::InvalidStats {
            name: name.to_string(),
        });
    }
    Ok(())
}

impl WorldSpec {
    pub fn from_json(json: &str) -> Result<Self, WorldError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, WorldError> {
        let json = std::fs::read_to_string(path).map_err(|source| WorldError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Validates room references and builds the playable world.
    pub fn build(&self) -> Result<World, WorldError> {
        let catalog = if self.items.is_empty() {
            default_catalog()
        } else {
            self.items
                .iter()
                .fold(ItemCatalog::new(), |catalog, item| {
                    catalog.with_item(item_name(&item.name), item.effect)
                })
        };

        check_stats("player", &self.player)?;
        let mut world = World::new(self.player, catalog);

        for spec in &self.rooms {
            let mut room = Room::new(spec.name.clone(), spec.description.clone());
            if let Some(enemy) = &spec.enemy {
                check_stats(&enemy.name, &enemy.stats)?;
                room = room.with_enemy(Enemy::new_enemy(
                    enemy.name.clone(),
                    enemy.stats,
                    enemy.xp_reward,
                    enemy.drops.iter().map(|d| item_name(d)).collect(),
                ));
            }
            if let Some(item) = &spec.item {
                room = room.with_item(item_name(item));
            }
            if let Some(item) = &spec.requires_item {
                room = room.requiring(item_name(item));
            }
            world.add_room(room)?;
        }

        if world.is_empty() {
            return Err(WorldError::MissingStart);
        }

        for exit in &self.exits {
            let from = world.require(&exit.from)?;
            let to = world.require(&exit.to)?;
            match &exit.requires_item {
                Some(item) => {
                    add_gated_exit(world.room_mut(from), &exit.direction, to, &item_name(item))
                }
                None => add_exit(world.room_mut(from), &exit.direction, to),
            }
        }

        for unlock in &self.unlocks {
            let rule = UnlockRule {
                guard_room: world.require(&unlock.guard_room)?,
                key_item: item_name(&unlock.key_item),
                passage: normalize_direction(&unlock.passage),
                target: world.require(&unlock.target)?,
            };
            world.unlock_rules.push(rule);
        }

        if let Some(victory) = &self.victory {
            world.victory = Some(VictoryRule {
                terminal: world.require(&victory.terminal)?,
                boss_lair: victory
                    .boss_lair
                    .as_deref()
                    .map(|name| world.require(name))
                    .transpose()?,
            });
        }

        if let Some(start) = &self.start {
            world.start = world.require(start)?;
        }

        debug!(rooms = world.room_count(), "world built");
        Ok(world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::RoomId;

    const TINY_WORLD: &str = r#"{
        "player": { "hp": 30, "attack": 6 },
        "start": "Gate",
        "rooms": [
            { "name": "Gate", "description": "An iron gate." },
            {
                "name": "Yard",
                "description": "A muddy yard.",
                "enemy": { "name": "Hound", "hp": 10, "attack": 3, "xp_reward": 15, "drops": ["Bone Key"] },
                "item": "Lantern"
            }
        ],
        "exits": [
            { "from": "Gate", "direction": "North", "to": "Yard" },
            { "from": "Yard", "direction": "south", "to": "Gate" }
        ],
        "unlocks": [
            { "guard_room": "Yard", "key_item": "bone key", "passage": "enter kennel", "target": "Gate" }
        ],
        "victory": { "terminal": "Gate", "boss_lair": "Yard" },
        "items": [ { "name": "Lantern", "effect": { "heal": 5 } } ]
    }"#;

    #[test]
    fn test_parse_and_build_json_world() {
        let spec = WorldSpec::from_json(TINY_WORLD).unwrap();
        let world = spec.build().unwrap();

        assert_eq!(world.room_count(), 2);
        assert_eq!(world.start, RoomId(0));
        assert_eq!(world.player_stats.defense, 0);

        let yard = world.find("Yard").unwrap();
        let room = world.room(yard);
        assert_eq!(room.findable_item.as_deref(), Some("lantern"));
        let hound = room.enemy.as_ref().unwrap();
        assert_eq!(hound.defense, 0);
        assert_eq!(hound.drops(), ["bone key"]);

        let gate = world.find("Gate").unwrap();
        assert_eq!(world.room(gate).exits[0].direction, "north");
        assert_eq!(world.unlock_rules[0].guard_room, yard);
        assert_eq!(world.victory.unwrap().boss_lair, Some(yard));
        assert_eq!(world.catalog.effect_of("lantern"), Some(ItemEffect::Heal(5)));
        assert_eq!(world.catalog.effect_of("health potion"), None);
    }

    #[test]
    fn test_unknown_exit_target_rejected() {
        let mut spec = WorldSpec::from_json(TINY_WORLD).unwrap();
        spec.exits[0].to = "Moon".to_string();
        assert!(matches!(spec.build(), Err(WorldError::UnknownRoom(name)) if name == "Moon"));
    }

    #[test]
    fn test_empty_world_rejected() {
        let mut spec = WorldSpec::from_json(TINY_WORLD).unwrap();
        spec.rooms.clear();
        spec.exits.clear();
        assert!(matches!(spec.build(), Err(WorldError::MissingStart)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            WorldSpec::from_json("{ not json"),
            Err(WorldError::Parse(_))
        ));
    }

    #[test]
    fn test_zero_hp_enemy_rejected() {
        let mut spec = WorldSpec::from_json(TINY_WORLD).unwrap();
        if let Some(hound) = spec.rooms[1].enemy.as_mut() {
            hound.stats.hp = 0;
        }
        assert!(matches!(
            spec.build(),
            Err(WorldError::InvalidStats { name }) if name == "Hound"
        ));
    }

    #[test]
    fn test_zero_hp_player_rejected() {
        let mut spec = WorldSpec::from_json(TINY_WORLD).unwrap();
        spec.player.hp = 0;
        assert!(matches!(
            spec.build(),
            Err(WorldError::InvalidStats { name }) if name == "player"
        ));
    }

    #[test]
    fn test_passages_and_items_normalize_whitespace() {
        let mut spec = WorldSpec::from_json(TINY_WORLD).unwrap();
        spec.unlocks[0].passage = " Enter   Kennel ".to_string();
        spec.exits[0].direction = "  far   North".to_string();
        spec.rooms[1].item = Some("Brass  Lantern".to_string());
        let world = spec.build().unwrap();

        assert_eq!(world.unlock_rules[0].passage, "enter kennel");
        let gate = world.find("Gate").unwrap();
        assert_eq!(world.room(gate).exits[0].direction, "far north");
        let yard = world.find("Yard").unwrap();
        assert_eq!(world.room(yard).findable_item.as_deref(), Some("brass lantern"));
    }

    #[test]
    fn test_json_round_trip_preserves_spec() {
        let spec = WorldSpec::from_json(TINY_WORLD).unwrap();
        let again = WorldSpec::from_json(&spec.to_json()).unwrap();
        assert_eq!(spec, again);
    }
}
