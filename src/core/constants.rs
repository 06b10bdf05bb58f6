// Leveling
pub const XP_PER_LEVEL_STEP: u32 = 100;
pub const LEVEL_UP_MAX_HP_GAIN: u32 = 10;
pub const LEVEL_UP_ATTACK_GAIN: u32 = 2;
pub const LEVEL_UP_DEFENSE_GAIN: u32 = 1;
pub const STARTING_LEVEL: u32 = 1;

// Items
pub const HEALTH_POTION: &str = "health potion";
pub const HEALTH_POTION_HEAL: u32 = 20;

// Combat
pub const FLEE_CHANCE: f64 = 0.5;
pub const CANCEL_ITEM_CHOICE: &str = "cancel";

// Presentation pacing
pub const DEFAULT_TEXT_DELAY_MS: u64 = 30;
pub const BANNER_TEXT_DELAY_MS: u64 = 50;
pub const COMMAND_PAUSE_MS: u64 = 500;

// Session
pub const DEFAULT_HERO_NAME: &str = "Hero";
pub const DEFAULT_LOG_FILTER: &str = "warn";
pub const CONFIG_FILE_NAME: &str = "config.json";
