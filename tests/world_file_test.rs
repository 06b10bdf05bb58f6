//! Worlds loaded from JSON definitions on disk.

use adventure::core::error::{CommandError, WorldError};
use adventure::core::{GameSession, SessionOutcome};
use adventure::events::GameEvent;
use adventure::ui::ScriptedFrontend;
use adventure::world::{default_world_spec, WorldSpec};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs;
use tempfile::tempdir;

const KENNEL_WORLD: &str = r#"{
    "player": { "hp": 30, "attack": 6 },
    "start": "Gate",
    "rooms": [
        { "name": "Gate", "description": "An iron gate." },
        {
            "name": "Yard",
            "description": "A muddy yard.",
            "enemy": { "name": "Hound", "hp": 10, "attack": 3, "xp_reward": 15, "drops": ["Bone Key"] }
        },
        { "name": "Shed", "description": "A locked shed.", "requires_item": "lantern" },
        { "name": "Kennel", "description": "Quiet at last." }
    ],
    "exits": [
        { "from": "Gate", "direction": "north", "to": "Yard" },
        { "from": "Yard", "direction": "south", "to": "Gate" },
        { "from": "Yard", "direction": "east", "to": "Shed" }
    ],
    "unlocks": [
        { "guard_room": "Yard", "key_item": "bone key", "passage": "enter kennel", "target": "Kennel" }
    ],
    "victory": { "terminal": "Kennel" }
}"#;

fn session_from(spec: &WorldSpec) -> GameSession<ChaCha8Rng> {
    GameSession::new(spec.build().unwrap(), "Scout", ChaCha8Rng::seed_from_u64(1))
}

#[test]
fn test_loaded_world_plays_to_victory() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("kennel.json");
    fs::write(&path, KENNEL_WORLD).unwrap();

    let spec = WorldSpec::load(&path).unwrap();
    let mut session = session_from(&spec);
    let mut frontend =
        ScriptedFrontend::new(["go north", "a", "a", "go east", "enter kennel"]);

    assert_eq!(session.run(&mut frontend), SessionOutcome::Victory);
    assert_eq!(session.player().hp, 27);
    assert!(session.player().has_item("bone key"));
    assert!(frontend.saw(&GameEvent::Failed(CommandError::ActionBlocked {
        item: "lantern".to_string()
    })));
    assert!(frontend.saw(&GameEvent::PassageUnlocked {
        guard: "Hound".to_string(),
        item: "bone key".to_string(),
        passage: "enter kennel".to_string(),
    }));
}

#[test]
fn test_missing_world_file() {
    let dir = tempdir().unwrap();
    let result = WorldSpec::load(&dir.path().join("nowhere.json"));
    assert!(matches!(result, Err(WorldError::Io { .. })));
}

#[test]
fn test_malformed_world_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ \"rooms\": [").unwrap();
    assert!(matches!(WorldSpec::load(&path), Err(WorldError::Parse(_))));
}

#[test]
fn test_built_in_world_survives_export() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("default.json");
    fs::write(&path, default_world_spec().to_json()).unwrap();

    let world = WorldSpec::load(&path).unwrap().build().unwrap();
    assert_eq!(world.room_count(), 6);
    assert_eq!(world.unlock_rules.len(), 1);
    assert!(world.victory.is_some());
}
