use crate::events::GameEvent;

/// Where a fight stands. Everything except `Ongoing` ends the fight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatState {
    Ongoing,
    PlayerDefeated,
    EnemyDefeated,
    Fled,
}

impl CombatState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, CombatState::Ongoing)
    }
}

/// The action code typed at the combat prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionCode {
    Attack,
    UseItem,
    Run,
    Invalid(String),
}

/// A fully resolved player action for one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatAction {
    Attack,
    /// `None` when nothing was chosen (empty inventory or "cancel").
    /// Either way the round is spent.
    UseItem(Option<String>),
    Run,
    /// Unrecognized input. The player does nothing and the enemy still attacks.
    Invalid(String),
}

/// Result of one combat round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombatRound {
    pub state: CombatState,
    pub events: Vec<GameEvent>,
}

/// Parses the combat prompt: `a`, `u`, or `r` in any case. Full words work too.
pub fn parse_action_code(input: &str) -> ActionCode {
    match input.trim().to_lowercase().as_str() {
        "a" | "attack" => ActionCode::Attack,
        "u" | "use" => ActionCode::UseItem,
        "r" | "run" => ActionCode::Run,
        other => ActionCode::Invalid(other.to_string()),
    }
}
