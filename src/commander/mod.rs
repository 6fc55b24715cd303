// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Command-line input logic and state management.
//!
//! This module implements a `:` command line. Typing is delegated to a text
//! input component; when a line is submitted it is parsed and the matching
//! application event is posted.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{actions::UserCommand, error::CommandError, events::AppEvent};

/// A parsed command line.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum CommandLine {
    Player(UserCommand),
    Quit,
}

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Offers a terminal event to the command line, returning `true` if it
    /// was consumed.
    pub(crate) fn handle_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> bool {
        let Event::Key(key_event) = event else {
            return false;
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return true;
            }
            return false;
        }

        match key_event.code {
            KeyCode::Esc => {
                self.input.reset();
                self.active = false;
            }

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                self.input.reset();
                self.active = false;

                if !buffer.is_empty() {
                    if let Err(e) = run_command(&buffer, event_tx) {
                        log::error!("Failed to post command '{}': {:#}", buffer, e);
                    }
                }
            }

            _ => {
                // Delegate all other key events to the managed input component.
                self.input.handle_event(&event);
            }
        }

        true
    }
}

fn run_command(buffer: &str, event_tx: &Sender<AppEvent>) -> Result<()> {
    let event = match parse_command(buffer) {
        Ok(CommandLine::Player(command)) => AppEvent::Command(command),
        Ok(CommandLine::Quit) => AppEvent::ExitApplication,
        Err(e) => AppEvent::Error(e.to_string()),
    };

    event_tx.send(event)?;
    Ok(())
}

/// Parses a submitted command line.
///
/// Slide numbers are 1-based, as shown in the menu.
pub(crate) fn parse_command(buffer: &str) -> Result<CommandLine, CommandError> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    let command = match parts.as_slice() {
        ["q"] | ["quit"] => return Ok(CommandLine::Quit),

        ["g" | "goto"] => return Err(CommandError::MissingSlide),
        ["g" | "goto", number] => UserCommand::GoTo(parse_slide_number(number)?),

        ["n" | "next"] => UserCommand::StepForward,
        ["p" | "prev"] => UserCommand::StepBack,
        ["play"] => UserCommand::Play,
        ["pause"] => UserCommand::Pause,
        ["t" | "toggle"] => UserCommand::TogglePlayback,
        ["c" | "captions"] => UserCommand::ToggleCaptions,

        _ => return Err(CommandError::Unknown(buffer.trim().to_string())),
    };

    Ok(CommandLine::Player(command))
}

fn parse_slide_number(text: &str) -> Result<usize, CommandError> {
    match text.parse::<usize>() {
        Ok(number) if number >= 1 => Ok(number - 1),
        _ => Err(CommandError::InvalidSlide(text.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_parse_player_commands() {
        assert_eq!(
            parse_command("g 3"),
            Ok(CommandLine::Player(UserCommand::GoTo(2)))
        );
        assert_eq!(
            parse_command("  goto   1 "),
            Ok(CommandLine::Player(UserCommand::GoTo(0)))
        );
        assert_eq!(
            parse_command("n"),
            Ok(CommandLine::Player(UserCommand::StepForward))
        );
        assert_eq!(
            parse_command("prev"),
            Ok(CommandLine::Player(UserCommand::StepBack))
        );
        assert_eq!(
            parse_command("toggle"),
            Ok(CommandLine::Player(UserCommand::TogglePlayback))
        );
        assert_eq!(
            parse_command("captions"),
            Ok(CommandLine::Player(UserCommand::ToggleCaptions))
        );
        assert_eq!(parse_command("quit"), Ok(CommandLine::Quit));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(parse_command("g"), Err(CommandError::MissingSlide));
        assert_eq!(
            parse_command("g 0"),
            Err(CommandError::InvalidSlide("0".to_string()))
        );
        assert_eq!(
            parse_command("g two"),
            Err(CommandError::InvalidSlide("two".to_string()))
        );
        assert_eq!(
            parse_command("shuffle"),
            Err(CommandError::Unknown("shuffle".to_string()))
        );
    }

    #[test]
    fn test_commander_posts_command_on_enter() {
        let (event_tx, event_rx) = mpsc::channel();
        let mut commander = Commander::new();

        assert!(!commander.handle_event(key(KeyCode::Char('n')), &event_tx));
        assert!(commander.handle_event(key(KeyCode::Char(':')), &event_tx));
        assert!(commander.active());

        for c in "g 2".chars() {
            assert!(commander.handle_event(key(KeyCode::Char(c)), &event_tx));
        }
        assert_eq!(commander.input.value(), "g 2");

        assert!(commander.handle_event(key(KeyCode::Enter), &event_tx));
        assert!(!commander.active());
        assert_eq!(commander.input.value(), "");

        match event_rx.try_recv() {
            Ok(AppEvent::Command(UserCommand::GoTo(1))) => {}
            other => panic!("Unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_commander_escape_discards_input() {
        let (event_tx, event_rx) = mpsc::channel();
        let mut commander = Commander::new();

        commander.handle_event(key(KeyCode::Char(':')), &event_tx);
        commander.handle_event(key(KeyCode::Char('q')), &event_tx);
        commander.handle_event(key(KeyCode::Esc), &event_tx);

        assert!(!commander.active());
        assert!(event_rx.try_recv().is_err());
    }
}
