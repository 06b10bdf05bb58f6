//! Turns events into the lines the player reads.

use super::Prompt;
use crate::command::HELP_ENTRIES;
use crate::events::{GameEvent, RoomView, StatBlock};

pub fn prompt_text(prompt: Prompt) -> &'static str {
    match prompt {
        Prompt::HeroName => "Enter your hero's name: ",
        Prompt::Command => {
            "\nWhat do you do? (e.g., 'go north', 'look', 'get item', 'inventory', 'stats', 'help', 'quit'): "
        }
        Prompt::CombatAction => "Choose action: [A]ttack, [U]se item, [R]un: ",
        Prompt::ItemChoice => "Which item to use? (Type name or 'cancel'): ",
    }
}

pub fn render(event: &GameEvent) -> Vec<String> {
    match event {
        GameEvent::Welcome => vec![
            "Welcome to the Simple RPG Adventure!".to_string(),
            "Type 'help' for commands.".to_string(),
        ],
        GameEvent::RoomDescribed(view) => room_lines(view),
        GameEvent::CombatStarted { player, enemy } => vec![
            String::new(),
            format!("--- COMBAT START: {} vs {} ---", player, enemy.name),
        ],
        GameEvent::Stats(stats) => stat_lines(stats),
        GameEvent::Attack(report) => {
            let mut lines = vec![format!(
                "{} attacks {} for {} damage!",
                report.attacker, report.target, report.damage
            )];
            if report.target_defeated {
                lines.push(format!("{} has been defeated!", report.target));
            }
            lines
        }
        GameEvent::ItemUsed {
            item,
            healed,
            stats,
        } => {
            let mut lines = vec![format!("You used a {} and healed {} HP.", item, healed)];
            lines.extend(stat_lines(stats));
            lines
        }
        GameEvent::ItemChoiceCancelled => vec!["You put your things away.".to_string()],
        GameEvent::InventoryListed(items) if items.is_empty() => {
            vec!["Your inventory is empty.".to_string()]
        }
        GameEvent::InventoryListed(items) => {
            vec![format!("Your inventory: {}", items.join(", "))]
        }
        GameEvent::FleeSucceeded => vec!["You successfully fled!".to_string()],
        GameEvent::FleeFailed => vec!["You failed to escape!".to_string()],
        GameEvent::InvalidCombatAction(_) => vec!["Invalid action. Try again.".to_string()],
        GameEvent::EnemyVanquished(name) => vec![format!("{} was vanquished!", name)],
        GameEvent::XpGained(amount) => vec![format!("You gained {} XP!", amount)],
        GameEvent::LeveledUp(level_up) => {
            let mut lines = vec![
                format!("Congratulations! You reached Level {}!", level_up.level),
                "Your stats have increased!".to_string(),
            ];
            lines.extend(stat_lines(&level_up.stats));
            lines
        }
        GameEvent::ItemAdded(item) => vec![format!("{} added to inventory.", item)],
        GameEvent::PassageUnlocked {
            guard,
            item,
            passage,
        } => vec![
            format!("The {} dropped a '{}'! It might unlock something...", guard, item),
            format!("A new way opens here: '{}'.", passage),
        ],
        GameEvent::PlayerDefeated => vec!["You have been defeated... Game Over.".to_string()],
        GameEvent::Victory => vec![
            String::new(),
            "CONGRATULATIONS! You have completed the game!".to_string(),
        ],
        GameEvent::GameOver => vec![String::new(), "--- GAME OVER ---".to_string()],
        GameEvent::Help => {
            let mut lines = vec![String::new(), "--- Available Commands ---".to_string()];
            lines.extend(
                HELP_ENTRIES
                    .iter()
                    .map(|(usage, description)| format!("{:<16}- {}", usage, description)),
            );
            lines
        }
        GameEvent::Failed(err) => vec![err.to_string()],
        GameEvent::Farewell => vec!["Thanks for playing!".to_string()],
    }
}

fn room_lines(view: &RoomView) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        format!("--- {} ---", view.name),
        view.description.clone(),
    ];
    // An enemy draws the eye away from anything lying around.
    if let Some(enemy) = &view.enemy {
        lines.push(format!("A wild {} blocks your path!", enemy));
    } else if let Some(item) = &view.item {
        lines.push(format!("You see a {} here.", item));
    }
    lines.push(format!("Exits: {}", view.exits.join(", ")));
    lines
}

fn stat_lines(stats: &StatBlock) -> Vec<String> {
    let mut lines = vec![
        format!("--- {} ---", stats.name),
        format!("HP: {}/{}", stats.hp, stats.max_hp),
        format!("Attack: {}", stats.attack_power),
        format!("Defense: {}", stats.defense),
    ];
    if let Some((level, xp)) = stats.progress {
        lines.push(format!("Level: {} (XP: {})", level, xp));
    }
    lines.push("-----------------".to_string());
    lines
}
