//! End-to-end sessions against the built-in world, driven by scripted input.
//!
//! Scenarios covered:
//! - Goblin fight at the forest entrance (damage, XP, potion drop)
//! - Troll guard drops the key and opens the chamber passage
//! - Using an item with an empty inventory still costs the round
//! - Death ends the session
//! - Full playthrough to the victory hall
//! - Bad commands are reported without changing state

use adventure::core::error::CommandError;
use adventure::core::{GameSession, SessionOutcome};
use adventure::events::GameEvent;
use adventure::ui::ScriptedFrontend;
use adventure::world::{
    default_world, CAVE_MOUTH, FOREST_ENTRANCE, RUSTY_KEY, TREASURE_CHAMBER, VICTORY_HALL,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn new_session(seed: u64) -> GameSession<ChaCha8Rng> {
    GameSession::new(
        default_world().unwrap(),
        "Hero",
        ChaCha8Rng::seed_from_u64(seed),
    )
}

fn place(session: &mut GameSession<ChaCha8Rng>, room: &str) {
    let id = session.world().find(room).unwrap();
    session.player_mut().move_to(id);
}

fn room_named(session: &GameSession<ChaCha8Rng>, room: &str) -> adventure::world::RoomId {
    session.world().find(room).unwrap()
}

#[test]
fn test_goblin_fight_at_forest_entrance() {
    let mut session = new_session(1);
    let mut frontend = ScriptedFrontend::new(["go north", "a", "a", "a", "quit"]);

    assert_eq!(session.run(&mut frontend), SessionOutcome::Quit);

    let player = session.player();
    assert_eq!(player.current_room(), room_named(&session, FOREST_ENTRANCE));
    assert_eq!(player.hp, 44);
    assert_eq!(player.xp(), 20);
    assert_eq!(player.inventory(), ["health potion"]);

    assert!(frontend.saw(&GameEvent::EnemyVanquished("Goblin".to_string())));
    assert!(frontend.saw(&GameEvent::XpGained(20)));
    assert!(frontend.saw(&GameEvent::ItemAdded("health potion".to_string())));

    let transcript = frontend.transcript();
    assert!(transcript.contains(&"--- COMBAT START: Hero vs Goblin ---".to_string()));
    assert!(transcript.contains(&"Hero attacks Goblin for 9 damage!".to_string()));
    assert!(transcript.contains(&"Goblin attacks Hero for 3 damage!".to_string()));

    // The cleared room is described again without its occupant.
    let forest = room_named(&session, FOREST_ENTRANCE);
    assert!(session.world().room(forest).live_enemy().is_none());
}

#[test]
fn test_chamber_blocked_without_key() {
    let mut session = new_session(2);
    let cave = room_named(&session, CAVE_MOUTH);
    session.world_mut().room_mut(cave).enemy = None;
    place(&mut session, CAVE_MOUTH);

    let mut frontend = ScriptedFrontend::new(["enter chamber", "quit"]);
    assert_eq!(session.run(&mut frontend), SessionOutcome::Quit);

    assert!(frontend.saw(&GameEvent::Failed(CommandError::ActionBlocked {
        item: RUSTY_KEY.to_string()
    })));
    assert_eq!(session.player().current_room(), cave);
}

#[test]
fn test_troll_key_opens_chamber() {
    let mut session = new_session(3);
    place(&mut session, CAVE_MOUTH);
    session.player_mut().attack_power = 84;

    // One blow fells the troll; the passage opens; the dragon takes two.
    let mut frontend = ScriptedFrontend::new(["a", "enter chamber", "a", "a"]);
    assert_eq!(session.run(&mut frontend), SessionOutcome::Victory);

    assert!(frontend.saw(&GameEvent::PassageUnlocked {
        guard: "Troll Guard".to_string(),
        item: RUSTY_KEY.to_string(),
        passage: "enter chamber".to_string(),
    }));
    assert!(session.player().has_item(RUSTY_KEY));

    let cave = room_named(&session, CAVE_MOUTH);
    let lair = room_named(&session, TREASURE_CHAMBER);
    assert_eq!(session.world().room(cave).exit("enter chamber").unwrap().target, lair);
    assert_eq!(
        session.player().current_room(),
        room_named(&session, VICTORY_HALL)
    );

    let transcript = frontend.transcript();
    assert!(transcript.contains(
        &"The Troll Guard dropped a 'rusty key'! It might unlock something...".to_string()
    ));
}

#[test]
fn test_item_use_with_empty_inventory_costs_round() {
    let mut session = new_session(4);
    let mut frontend = ScriptedFrontend::new(["go north", "u", "a", "a", "a", "quit"]);

    assert_eq!(session.run(&mut frontend), SessionOutcome::Quit);

    assert!(frontend.saw(&GameEvent::Failed(CommandError::EmptyInventory)));
    // Three goblin attacks land, the wasted round included.
    assert_eq!(session.player().hp, 41);
    assert!(frontend
        .transcript()
        .contains(&"Your inventory is empty.".to_string()));
}

#[test]
fn test_death_ends_session() {
    let mut session = new_session(5);
    place(&mut session, CAVE_MOUTH);

    let mut frontend = ScriptedFrontend::new(["a", "a", "a", "a", "a", "look"]);
    assert_eq!(session.run(&mut frontend), SessionOutcome::PlayerDied);

    assert_eq!(session.player().hp, 0);
    assert!(!session.player().is_alive());
    assert_eq!(frontend.remaining_inputs(), 1);
    assert_eq!(frontend.events().last(), Some(&GameEvent::GameOver));

    let transcript = frontend.transcript();
    assert!(transcript.contains(&"You have been defeated... Game Over.".to_string()));
    assert_eq!(transcript.last().map(String::as_str), Some("--- GAME OVER ---"));
}

#[test]
fn test_full_playthrough_to_victory() {
    let mut session = new_session(6);
    session.player_mut().attack_power = 200;

    let mut frontend = ScriptedFrontend::new([
        "go north",
        "a",
        "go east",
        "a",
        "get health potion",
        "go north",
        "a",
        "enter chamber",
        "a",
    ]);
    assert_eq!(session.run(&mut frontend), SessionOutcome::Victory);
    assert_eq!(frontend.remaining_inputs(), 0);

    let player = session.player();
    assert_eq!(player.hp, player.max_hp);
    assert_eq!(player.level(), 3);
    assert_eq!(player.xp(), 0);
    assert_eq!(
        player.inventory(),
        ["health potion", "health potion", RUSTY_KEY]
    );

    for enemy in ["Goblin", "Orc Grunt", "Troll Guard", "Red Dragon"] {
        assert!(frontend.saw(&GameEvent::EnemyVanquished(enemy.to_string())));
    }
    assert_eq!(frontend.events().last(), Some(&GameEvent::Victory));
    assert!(frontend
        .transcript()
        .contains(&"--- Victory Hall ---".to_string()));
}

#[test]
fn test_bad_commands_change_nothing() {
    let mut session = new_session(7);
    let start = session.player().current_room();
    let mut frontend =
        ScriptedFrontend::new(["dance", "go", "get", "use", "", "go west", "get sword", "quit"]);

    assert_eq!(session.run(&mut frontend), SessionOutcome::Quit);
    assert_eq!(session.player().current_room(), start);
    assert!(session.player().inventory().is_empty());

    let transcript = frontend.transcript();
    for line in [
        "Unknown command 'dance'. Type 'help' for a list of commands.",
        "Go where?",
        "Get what?",
        "Use what?",
        "You can't go west from here.",
        "There is no sword here.",
        "Thanks for playing!",
    ] {
        assert!(transcript.contains(&line.to_string()), "missing: {}", line);
    }
}

#[test]
fn test_stats_inventory_and_help() {
    let mut session = new_session(8);
    let mut frontend = ScriptedFrontend::new(["stats", "inventory", "help", "quit"]);
    session.run(&mut frontend);

    let transcript = frontend.transcript();
    assert!(transcript.contains(&"HP: 50/50".to_string()));
    assert!(transcript.contains(&"Level: 1 (XP: 0)".to_string()));
    assert!(transcript.contains(&"Your inventory is empty.".to_string()));
    assert!(transcript.contains(&"--- Available Commands ---".to_string()));
}

#[test]
fn test_input_closed_mid_combat_quits() {
    let mut session = new_session(9);
    let mut frontend = ScriptedFrontend::new(["go north", "a"]);

    assert_eq!(session.run(&mut frontend), SessionOutcome::Quit);
    let forest = room_named(&session, FOREST_ENTRANCE);
    let goblin = session.world().room(forest).live_enemy().unwrap();
    assert_eq!(goblin.hp, 11);
}
