//! Stat mutation: attacks, healing, XP, and leveling.
//!
//! All functions are deterministic. Randomness lives in the combat engine.

use super::types::{Character, Player};
use crate::core::constants::*;
use crate::core::error::{CommandError, Unusable};
use crate::events::{AttackReport, LevelUp, StatBlock};
use crate::items::{ItemCatalog, ItemEffect};
use tracing::debug;

/// Damage an attack deals after defense. Never negative.
pub fn damage_against(attack_power: u32, defense: u32) -> u32 {
    attack_power.saturating_sub(defense)
}

/// Resolves one attack, lowering the target's HP (floored at 0).
pub fn attack<A, T>(attacker: &Character<A>, target: &mut Character<T>) -> AttackReport {
    let damage = damage_against(attacker.attack_power, target.defense);
    target.hp = target.hp.saturating_sub(damage);

    AttackReport {
        attacker: attacker.name.clone(),
        target: target.name.clone(),
        damage,
        target_defeated: !target.is_alive(),
    }
}

pub fn is_alive<R>(character: &Character<R>) -> bool {
    character.is_alive()
}

/// Restores up to `amount` HP without exceeding max HP.
/// Returns the HP actually restored.
pub fn heal<R>(character: &mut Character<R>, amount: u32) -> u32 {
    let before = character.hp;
    character.hp = character.hp.saturating_add(amount).min(character.max_hp);
    character.hp - before
}

/// XP needed to level up from `level`.
pub fn xp_threshold(level: u32) -> u32 {
    XP_PER_LEVEL_STEP.saturating_mul(level)
}

/// Adds XP and levels up at most once per call.
///
/// Crossing several thresholds in one gain still yields a single level, and
/// the overflow is discarded by the reset in [`level_up`].
pub fn gain_xp(player: &mut Player, amount: u32) -> Option<LevelUp> {
    player.role.xp = player.role.xp.saturating_add(amount);
    if player.role.xp >= xp_threshold(player.role.level) {
        Some(level_up(player))
    } else {
        None
    }
}

/// Raises the player one level: XP resets, stats grow, HP is fully restored.
pub fn level_up(player: &mut Player) -> LevelUp {
    player.role.level = player.role.level.saturating_add(1);
    player.role.xp = 0;
    player.max_hp = player.max_hp.saturating_add(LEVEL_UP_MAX_HP_GAIN);
    player.hp = player.max_hp;
    player.attack_power = player.attack_power.saturating_add(LEVEL_UP_ATTACK_GAIN);
    player.defense = player.defense.saturating_add(LEVEL_UP_DEFENSE_GAIN);

    debug!(level = player.role.level, "player leveled up");

    LevelUp {
        level: player.role.level,
        stats: StatBlock::of_player(player),
    }
}

/// Result of using an item successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemUse {
    pub item: String,
    pub healed: u32,
}

/// Uses one carried item, consuming it.
///
/// Fails without touching the inventory when the item has no effect or
/// none is carried.
pub fn use_item(
    player: &mut Player,
    item: &str,
    catalog: &ItemCatalog,
) -> Result<ItemUse, CommandError> {
    let effect = catalog
        .effect_of(item)
        .ok_or_else(|| CommandError::UnusableItem {
            item: item.to_string(),
            reason: Unusable::NoEffect,
        })?;

    if !player.remove_item(item) {
        return Err(CommandError::UnusableItem {
            item: item.to_string(),
            reason: Unusable::NotCarried,
        });
    }

    let healed = match effect {
        ItemEffect::Heal(amount) => heal(player, amount),
    };

    Ok(ItemUse {
        item: item.to_string(),
        healed,
    })
}
