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

//! Caption panel.
//!
//! Shows the title, client and caption of the current slide, and slides in
//! or out of view as captions are toggled.

mod render;

use crate::{
    deck::{DeckReader, Slide},
    player::{
        PlaybackState,
        observers::{Observer, PlayerEvent},
    },
};

const PANEL_WIDTH: u16 = 40;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Placement {
    Shown,
    Hidden,
}

pub(crate) struct CaptionPanel {
    deck: DeckReader,
    current: Option<usize>,
    placement: Placement,
}

impl CaptionPanel {
    pub(crate) const EVENTS: [PlayerEvent; 3] = [
        PlayerEvent::DeckReady,
        PlayerEvent::IndexChanged,
        PlayerEvent::CaptionsChanged,
    ];

    pub(crate) fn new(deck: DeckReader, captions_visible: bool) -> Self {
        Self {
            deck,
            current: None,
            placement: placement_for(captions_visible),
        }
    }

    /// Width the panel occupies in the layout.
    pub(crate) fn width(&self) -> u16 {
        match self.placement {
            Placement::Shown => PANEL_WIDTH,
            Placement::Hidden => 0,
        }
    }

    pub(crate) fn slide(&self) -> Option<&Slide> {
        self.current.and_then(|i| self.deck.at(i))
    }
}

fn placement_for(captions_visible: bool) -> Placement {
    if captions_visible {
        Placement::Shown
    } else {
        Placement::Hidden
    }
}

impl Observer for CaptionPanel {
    fn notify(&mut self, event: PlayerEvent, state: &PlaybackState) {
        match event {
            PlayerEvent::DeckReady | PlayerEvent::IndexChanged => {
                self.current = (state.deck_length() > 0).then_some(state.current_index());
                self.placement = placement_for(state.captions_visible());
            }
            PlayerEvent::CaptionsChanged => {
                self.placement = placement_for(state.captions_visible());
            }
            PlayerEvent::StateChanged => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::{
        deck::{self, test_deck},
        player::{PlaybackController, PlaybackOptions, timer::testing::ManualScheduler},
    };

    fn setup() -> (PlaybackController<ManualScheduler>, Rc<RefCell<CaptionPanel>>) {
        let (publisher, reader) = deck::shared();
        let panel = Rc::new(RefCell::new(CaptionPanel::new(reader, true)));
        let mut controller =
            PlaybackController::new(ManualScheduler::default(), PlaybackOptions::default());
        controller.subscribe(&CaptionPanel::EVENTS, Rc::clone(&panel));

        let len = publisher.publish(test_deck(4)).expect("publish");
        controller.on_deck_ready(len).expect("ready");

        (controller, panel)
    }

    #[test]
    fn test_panel_follows_current_slide() {
        let (mut controller, panel) = setup();
        assert_eq!(
            panel.borrow().slide().map(|s| s.caption.as_str()),
            Some("Caption 1")
        );

        controller.go_to(2).expect("valid index");

        assert_eq!(
            panel.borrow().slide().map(|s| s.title.as_str()),
            Some("Slide 3")
        );
    }

    #[test]
    fn test_panel_hides_and_shows_with_captions() {
        let (mut controller, panel) = setup();
        assert_eq!(panel.borrow().placement, Placement::Shown);

        controller.toggle_captions();
        assert_eq!(panel.borrow().placement, Placement::Hidden);
        assert_eq!(panel.borrow().width(), 0);

        controller.toggle_captions();
        assert_eq!(panel.borrow().placement, Placement::Shown);
        assert_eq!(panel.borrow().width(), PANEL_WIDTH);
    }
}
