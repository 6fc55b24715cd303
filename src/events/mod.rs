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

//! Application events and the main event loop.
//!
//! Everything that can change the application arrives here as an
//! [`AppEvent`]: key presses from the input thread, ticks from the autoplay
//! timer, decks from the task worker. The loop handles one event at a time
//! on the main thread, so playback commands never overlap.

mod handlers;
mod key_handlers;

use handlers::*;
use key_handlers::*;

use std::io::Stdout;

use anyhow::{Result, anyhow};
use crossterm::event::KeyEvent;
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{App, actions::UserCommand, deck::SlideDeck, player::timer::TimerId, render::draw};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Resize,

    Command(UserCommand),

    DeckLoaded(SlideDeck),
    AutoplayTick(TimerId),

    ExitApplication,

    Error(String),
    FatalError(String),
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until an exit event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        match event {
            AppEvent::ExitApplication => break,
            AppEvent::FatalError(message) => return Err(anyhow!(message)),

            AppEvent::Key(key) => process_key_event(app, key)?,
            AppEvent::Resize => {}
            AppEvent::Command(command) => handle_user_command(app, command),
            AppEvent::DeckLoaded(deck) => handle_deck_loaded(app, deck),
            AppEvent::AutoplayTick(id) => handle_autoplay_tick(app, id),
            AppEvent::Error(message) => handle_error(app, message),
        }

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}
