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

//! Playback status line.
//!
//! Shows whether autoplay is running, offers the play control only while
//! paused, and displays the most recent error.

mod render;

use crate::player::{
    PlaybackState,
    observers::{Observer, PlayerEvent},
};

pub(crate) struct StatusView {
    ready: bool,
    running: bool,
    error: Option<String>,
}

impl StatusView {
    pub(crate) const EVENTS: [PlayerEvent; 2] = [PlayerEvent::DeckReady, PlayerEvent::StateChanged];

    pub(crate) fn new() -> Self {
        Self {
            ready: false,
            running: false,
            error: None,
        }
    }

    pub(crate) fn feedback(&self) -> &'static str {
        match (self.ready, self.running) {
            (false, _) => "loading...",
            (true, true) => "playing...",
            (true, false) => "paused...",
        }
    }

    pub(crate) fn running(&self) -> bool {
        self.running
    }

    pub(crate) fn show_play_control(&self) -> bool {
        !self.running
    }

    pub(crate) fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(crate) fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub(crate) fn clear_error(&mut self) {
        self.error = None;
    }
}

impl Observer for StatusView {
    fn notify(&mut self, _event: PlayerEvent, state: &PlaybackState) {
        self.ready = state.ready();
        self.running = state.running();
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::player::{PlaybackController, PlaybackOptions, timer::testing::ManualScheduler};

    #[test]
    fn test_status_feedback_follows_playback() {
        let status = Rc::new(RefCell::new(StatusView::new()));
        let mut controller =
            PlaybackController::new(ManualScheduler::default(), PlaybackOptions::default());
        controller.subscribe(&StatusView::EVENTS, Rc::clone(&status));

        assert_eq!(status.borrow().feedback(), "loading...");

        controller.on_deck_ready(2).expect("ready");
        assert_eq!(status.borrow().feedback(), "playing...");
        assert!(!status.borrow().show_play_control());

        controller.pause();
        assert_eq!(status.borrow().feedback(), "paused...");
        assert!(status.borrow().show_play_control());
    }

    #[test]
    fn test_status_error_message() {
        let mut status = StatusView::new();
        assert_eq!(status.error(), None);

        status.set_error("slide index 9 is out of range for a deck of 3 slides");
        assert!(status.error().is_some());

        status.clear_error();
        assert_eq!(status.error(), None);
    }
}
