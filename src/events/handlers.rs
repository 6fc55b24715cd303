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

use crate::{
    App,
    actions::{self, UserCommand},
    deck::SlideDeck,
    player::timer::TimerId,
};

pub(super) fn handle_user_command(app: &mut App, command: UserCommand) {
    match actions::execute(&mut app.controller, command) {
        Ok(()) => app.status_view.borrow_mut().clear_error(),
        Err(e) => {
            log::error!("Command {:?} failed: {}", command, e);
            app.status_view.borrow_mut().set_error(e.to_string());
        }
    }
}

pub(super) fn handle_deck_loaded(app: &mut App, deck: SlideDeck) {
    let len = match app.deck_publisher.publish(deck) {
        Ok(len) => len,
        Err(e) => {
            log::warn!("Discarding loaded deck: {}", e);
            return;
        }
    };

    if let Err(e) = app.controller.on_deck_ready(len) {
        app.status_view.borrow_mut().set_error(e.to_string());
    }
}

pub(super) fn handle_autoplay_tick(app: &mut App, id: TimerId) {
    app.controller.on_autoplay_tick(id);
}

pub(super) fn handle_error(app: &mut App, message: String) {
    log::error!("{}", message);
    app.status_view.borrow_mut().set_error(message);
}
