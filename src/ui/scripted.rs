use super::{render, Frontend, Prompt};
use crate::events::GameEvent;
use std::collections::VecDeque;

/// In-memory frontend that replays a fixed list of input lines and records
/// everything the game emits. Once the lines run out, every prompt reports
/// end of input.
#[derive(Debug, Default)]
pub struct ScriptedFrontend {
    inputs: VecDeque<String>,
    events: Vec<GameEvent>,
    prompts: Vec<Prompt>,
}

impl ScriptedFrontend {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            events: Vec::new(),
            prompts: Vec::new(),
        }
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Prompts asked so far, including the one that hit end of input.
    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Every emitted event rendered to text, in order.
    pub fn transcript(&self) -> Vec<String> {
        self.events.iter().flat_map(render).collect()
    }

    pub fn saw(&self, event: &GameEvent) -> bool {
        self.events.contains(event)
    }
}

impl Frontend for ScriptedFrontend {
    fn emit(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }

    fn prompt(&mut self, prompt: Prompt) -> Option<String> {
        self.prompts.push(prompt);
        self.inputs.pop_front()
    }
}
