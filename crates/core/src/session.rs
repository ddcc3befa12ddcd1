//! Session module - the blocking loop that drives a [`Game`]
//!
//! The session owns the game, a [`CommandSource`], and a [`Frontend`]. It is
//! the only place that blocks: on the next command, or on a yes/no prompt.

use std::io;
use std::time::Duration;

use tracing::info;

use crate::game::{Effect, Game, PlayState};
use crate::snapshot::BoardSnapshot;
use crate::types::{Command, CommandSource, Outcome};

/// Questions the session can put to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    Quit,
    PlayAgain { outcome: Outcome, elapsed: Duration },
}

/// The rendering side of a session.
pub trait Frontend {
    fn draw(&mut self, snapshot: &BoardSnapshot) -> io::Result<()>;

    /// Bell for blocked or meaningless input.
    fn alert(&mut self) -> io::Result<()>;

    fn show_prompt(&mut self, prompt: &Prompt) -> io::Result<()>;

    fn clear_prompt(&mut self) -> io::Result<()>;
}

impl<F: Frontend + ?Sized> Frontend for &mut F {
    fn draw(&mut self, snapshot: &BoardSnapshot) -> io::Result<()> {
        (**self).draw(snapshot)
    }

    fn alert(&mut self) -> io::Result<()> {
        (**self).alert()
    }

    fn show_prompt(&mut self, prompt: &Prompt) -> io::Result<()> {
        (**self).show_prompt(prompt)
    }

    fn clear_prompt(&mut self) -> io::Result<()> {
        (**self).clear_prompt()
    }
}

/// Prompt answer for a command: `y` is yes, `n` or Enter is no, anything
/// else keeps the prompt waiting.
pub fn prompt_answer(command: Command) -> Option<bool> {
    match command {
        Command::Char(b'y') => Some(true),
        Command::Char(b'n' | b'\r' | b'\n') => Some(false),
        _ => None,
    }
}

pub struct Session<S, F> {
    game: Game,
    source: S,
    frontend: F,
}

impl<S: CommandSource, F: Frontend> Session<S, F> {
    pub fn new(game: Game, source: S, frontend: F) -> Self {
        Self {
            game,
            source,
            frontend,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn into_parts(self) -> (Game, S, F) {
        (self.game, self.source, self.frontend)
    }

    /// Play until the player quits or declines another round.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.frontend.draw(&self.game.snapshot())?;

            match self.game.state() {
                PlayState::Terminated => {
                    info!("session ended");
                    return Ok(());
                }
                PlayState::RoundEnd(outcome) => {
                    let elapsed = self.game.board().elapsed().unwrap_or_default();
                    let again = self.ask(Prompt::PlayAgain { outcome, elapsed })?;
                    self.game.finish_round(again);
                }
                PlayState::Playing => {
                    let command = self.source.next_command()?;
                    self.step(command)?;
                }
            }
        }
    }

    fn step(&mut self, command: Command) -> io::Result<()> {
        for effect in self.game.handle(command) {
            match effect {
                Effect::Alert => self.frontend.alert()?,
                Effect::ConfirmQuit => {
                    let quit = self.ask(Prompt::Quit)?;
                    self.game.confirm_quit(quit);
                    if quit {
                        break;
                    }
                }
                Effect::RoundOver(outcome) => info!(?outcome, "round over"),
            }
        }
        Ok(())
    }

    fn ask(&mut self, prompt: Prompt) -> io::Result<bool> {
        self.frontend.show_prompt(&prompt)?;
        let answer = loop {
            if let Some(answer) = prompt_answer(self.source.next_command()?) {
                break answer;
            }
        };
        self.frontend.clear_prompt()?;
        Ok(answer)
    }
}
