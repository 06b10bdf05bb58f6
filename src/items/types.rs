use crate::core::constants::{HEALTH_POTION, HEALTH_POTION_HEAL};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Effect applied when an item is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemEffect {
    /// Restores up to this many HP and consumes the item.
    Heal(u32),
}

/// Usable items by name. Items not listed (keys, trophies) can be carried
/// but not used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemCatalog {
    effects: HashMap<String, ItemEffect>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(mut self, name: impl Into<String>, effect: ItemEffect) -> Self {
        self.insert(name, effect);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, effect: ItemEffect) {
        self.effects.insert(name.into().to_lowercase(), effect);
    }

    pub fn effect_of(&self, name: &str) -> Option<ItemEffect> {
        self.effects.get(name).copied()
    }
}

/// The catalog every world starts with when it does not define its own.
pub fn default_catalog() -> ItemCatalog {
    ItemCatalog::new().with_item(HEALTH_POTION, ItemEffect::Heal(HEALTH_POTION_HEAL))
}
