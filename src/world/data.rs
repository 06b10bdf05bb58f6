//! The built-in world: village, forest, cave, and the dragon's hoard.

use super::spec::{EnemySpec, ExitSpec, RoomSpec, UnlockSpec, VictorySpec, WorldSpec};
use super::types::World;
use crate::character::BaseStats;
use crate::core::error::WorldError;

pub const VILLAGE: &str = "Quiet Village";
pub const FOREST_ENTRANCE: &str = "Forest Entrance";
pub const DEEP_FOREST: &str = "Deep Forest";
pub const CAVE_MOUTH: &str = "Cave Mouth";
pub const TREASURE_CHAMBER: &str = "Treasure Chamber";
pub const VICTORY_HALL: &str = "Victory Hall";

pub const RUSTY_KEY: &str = "rusty key";
pub const CHAMBER_PASSAGE: &str = "enter chamber";

fn stats(hp: u32, attack: u32, defense: u32) -> BaseStats {
    BaseStats {
        hp,
        attack,
        defense,
    }
}

fn enemy(name: &str, base: BaseStats, xp_reward: u32, drops: &[&str]) -> Option<EnemySpec> {
    Some(EnemySpec {
        name: name.to_string(),
        stats: base,
        xp_reward,
        drops: drops.iter().map(|d| d.to_string()).collect(),
    })
}

fn room(name: &str, description: &str) -> RoomSpec {
    RoomSpec {
        name: name.to_string(),
        description: description.to_string(),
        enemy: None,
        item: None,
        requires_item: None,
    }
}

fn exit(from: &str, direction: &str, to: &str) -> ExitSpec {
    ExitSpec {
        from: from.to_string(),
        direction: direction.to_string(),
        to: to.to_string(),
        requires_item: None,
    }
}

pub fn default_world_spec() -> WorldSpec {
    WorldSpec {
        player: stats(50, 10, 2),
        start: Some(VILLAGE.to_string()),
        rooms: vec![
            room(
                VILLAGE,
                "A peaceful village, though strangely quiet. The path north leads to the forest.",
            ),
            RoomSpec {
                enemy: enemy("Goblin", stats(20, 5, 1), 20, &["health potion"]),
                ..room(
                    FOREST_ENTRANCE,
                    "The trees loom ominously. You hear rustling deeper in.",
                )
            },
            RoomSpec {
                enemy: enemy("Orc Grunt", stats(40, 8, 3), 50, &[]),
                item: Some("health potion".to_string()),
                ..room(DEEP_FOREST, "It's dark and damp. An orc is patrolling here.")
            },
            RoomSpec {
                enemy: enemy("Troll Guard", stats(70, 12, 5), 80, &[RUSTY_KEY]),
                ..room(
                    CAVE_MOUTH,
                    "A dark cave entrance. A sturdy-looking Troll guards it.",
                )
            },
            RoomSpec {
                enemy: enemy("Red Dragon", stats(150, 20, 8), 200, &[]),
                ..room(
                    TREASURE_CHAMBER,
                    "A hoard of glittering gold... and a massive Red Dragon!",
                )
            },
            room(VICTORY_HALL, "The dragon is slain! You are a true hero!"),
        ],
        exits: vec![
            exit(VILLAGE, "north", FOREST_ENTRANCE),
            exit(FOREST_ENTRANCE, "south", VILLAGE),
            exit(FOREST_ENTRANCE, "east", DEEP_FOREST),
            exit(DEEP_FOREST, "west", FOREST_ENTRANCE),
            exit(DEEP_FOREST, "north", CAVE_MOUTH),
            exit(CAVE_MOUTH, "south", DEEP_FOREST),
        ],
        unlocks: vec![UnlockSpec {
            guard_room: CAVE_MOUTH.to_string(),
            key_item: RUSTY_KEY.to_string(),
            passage: CHAMBER_PASSAGE.to_string(),
            target: TREASURE_CHAMBER.to_string(),
        }],
        victory: Some(VictorySpec {
            terminal: VICTORY_HALL.to_string(),
            boss_lair: Some(TREASURE_CHAMBER.to_string()),
        }),
        items: Vec::new(),
    }
}

pub fn default_world() -> Result<World, WorldError> {
    default_world_spec().build()
}
