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

//! Slide menu.
//!
//! One numbered item per slide, with the current slide highlighted.

mod render;

use crate::{
    deck::DeckReader,
    player::{
        PlaybackState,
        observers::{Observer, PlayerEvent},
    },
};

pub(crate) struct MenuView {
    deck: DeckReader,
    selected: Option<usize>,
}

impl MenuView {
    pub(crate) const EVENTS: [PlayerEvent; 2] = [PlayerEvent::DeckReady, PlayerEvent::IndexChanged];

    pub(crate) fn new(deck: DeckReader) -> Self {
        Self {
            deck,
            selected: None,
        }
    }

    /// Menu labels paired with whether the item is highlighted.
    pub(crate) fn items(&self) -> Vec<(u32, bool)> {
        self.deck
            .slides()
            .enumerate()
            .map(|(i, slide)| (slide.order, self.selected == Some(i)))
            .collect()
    }
}

impl Observer for MenuView {
    fn notify(&mut self, _event: PlayerEvent, state: &PlaybackState) {
        self.selected = (state.deck_length() > 0).then_some(state.current_index());
    }
}
