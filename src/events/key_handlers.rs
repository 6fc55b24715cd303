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

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent};

use crate::{App, actions::UserCommand, events::AppEvent};

use super::handlers::handle_user_command;

/// Maps keyboard input to playback commands.
///
/// The command line gets the first chance to consume the key; anything it
/// does not want is treated as a global shortcut.
///
/// # Errors
///
/// Returns an error if an event cannot be posted to the event loop.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let handled = app.commander.handle_event(Event::Key(key), &app.event_tx);
    if handled {
        return Ok(());
    }

    process_global_key_event(app, key)
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let command = match key.code {
        KeyCode::Char('q') => {
            app.event_tx.send(AppEvent::ExitApplication)?;
            return Ok(());
        }

        KeyCode::Char('h') | KeyCode::Left => UserCommand::StepBack,
        KeyCode::Char('l') | KeyCode::Right => UserCommand::StepForward,
        KeyCode::Char(' ') => UserCommand::TogglePlayback,
        KeyCode::Char('c') => UserCommand::ToggleCaptions,

        // Menu shortcuts: 1-9 go to that slide, if the deck has it.
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            if index >= app.controller.state().deck_length() {
                return Ok(());
            }
            UserCommand::GoTo(index)
        }

        _ => return Ok(()),
    };

    handle_user_command(app, command);
    Ok(())
}
