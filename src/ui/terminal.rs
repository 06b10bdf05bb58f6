//! Line-oriented terminal frontend with a typewriter effect.

use super::{prompt_text, render, Frontend, Prompt};
use crate::core::config::GameConfig;
use crate::core::constants::{BANNER_TEXT_DELAY_MS, COMMAND_PAUSE_MS};
use crate::events::GameEvent;
use crossterm::cursor::MoveTo;
use crossterm::style::{Color, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::ExecutableCommand;
use std::io::{self, BufRead, IsTerminal, Stdin, StdinLock, Stdout, Write};
use std::thread;
use std::time::Duration;
use tracing::warn;

pub struct TerminalFrontend<R: BufRead, W: Write> {
    input: R,
    out: W,
    char_delay: Duration,
    clear_screen: bool,
    color: bool,
    rooms_shown: usize,
}

impl TerminalFrontend<StdinLock<'static>, Stdout> {
    /// Frontend bound to the process's stdin and stdout.
    pub fn stdio(config: &GameConfig) -> Self {
        let stdin: Stdin = io::stdin();
        let stdout = io::stdout();
        let color = stdout.is_terminal();
        let mut frontend = Self::new(stdin.lock(), stdout, config);
        frontend.color = color;
        frontend
    }
}

impl<R: BufRead, W: Write> TerminalFrontend<R, W> {
    pub fn new(input: R, out: W, config: &GameConfig) -> Self {
        Self {
            input,
            out,
            char_delay: Duration::from_millis(config.text_delay_ms),
            clear_screen: config.clear_screen,
            color: false,
            rooms_shown: 0,
        }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn type_line(&mut self, line: &str, delay: Duration) -> io::Result<()> {
        if delay.is_zero() {
            writeln!(self.out, "{}", line)?;
            return self.out.flush();
        }
        for ch in line.chars() {
            write!(self.out, "{}", ch)?;
            self.out.flush()?;
            thread::sleep(delay);
        }
        writeln!(self.out)?;
        self.out.flush()
    }

    fn write_event(&mut self, event: &GameEvent) -> io::Result<()> {
        let delay = match event {
            GameEvent::Welcome | GameEvent::Victory | GameEvent::GameOver
                if !self.char_delay.is_zero() =>
            {
                Duration::from_millis(BANNER_TEXT_DELAY_MS)
            }
            _ => self.char_delay,
        };

        if let GameEvent::RoomDescribed(_) = event {
            // Let the previous command's output sit before the room redraws.
            if self.rooms_shown > 0 && !self.char_delay.is_zero() {
                thread::sleep(Duration::from_millis(COMMAND_PAUSE_MS));
            }
            if self.clear_screen {
                self.out.execute(Clear(ClearType::All))?;
                self.out.execute(MoveTo(0, 0))?;
            }
            self.rooms_shown += 1;
        }

        let tone = if self.color { tone(event) } else { None };
        if let Some(color) = tone {
            self.out.execute(SetForegroundColor(color))?;
        }
        for line in render(event) {
            self.type_line(&line, delay)?;
        }
        if tone.is_some() {
            self.out.execute(ResetColor)?;
        }
        Ok(())
    }
}

fn tone(event: &GameEvent) -> Option<Color> {
    match event {
        GameEvent::Failed(_) | GameEvent::InvalidCombatAction(_) => Some(Color::Yellow),
        GameEvent::PlayerDefeated | GameEvent::GameOver => Some(Color::Red),
        GameEvent::Victory | GameEvent::LeveledUp(_) => Some(Color::Green),
        GameEvent::CombatStarted { .. } => Some(Color::Magenta),
        _ => None,
    }
}

impl<R: BufRead, W: Write> Frontend for TerminalFrontend<R, W> {
    fn emit(&mut self, event: &GameEvent) {
        if let Err(err) = self.write_event(event) {
            warn!(error = %err, "failed to write to terminal");
        }
    }

    fn prompt(&mut self, prompt: Prompt) -> Option<String> {
        if let Err(err) = write!(self.out, "{}", prompt_text(prompt)).and_then(|_| self.out.flush())
        {
            warn!(error = %err, "failed to write prompt");
        }
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(err) => {
                warn!(error = %err, "failed to read input");
                None
            }
        }
    }
}
