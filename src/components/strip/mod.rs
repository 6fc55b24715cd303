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

//! Slide strip.
//!
//! All slides sit side by side on a strip of equal-width frames; showing a
//! slide means moving the strip so that slide's frame is in view. The move
//! itself is left to the renderer, the strip only records where it should
//! end up.

mod render;

use crate::{
    deck::{DeckReader, Slide},
    player::{
        PlaybackState,
        observers::{Observer, PlayerEvent},
    },
};

pub(crate) struct SlideStrip {
    deck: DeckReader,
    index: usize,
    offset: i64,
}

impl SlideStrip {
    pub(crate) const EVENTS: [PlayerEvent; 2] = [PlayerEvent::DeckReady, PlayerEvent::IndexChanged];

    pub(crate) fn new(deck: DeckReader) -> Self {
        Self {
            deck,
            index: 0,
            offset: 0,
        }
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn len(&self) -> usize {
        self.deck.len()
    }

    pub(crate) fn slide(&self) -> Option<&Slide> {
        self.deck.at(self.index)
    }

    fn animate_to(&mut self, offset: i64) {
        if offset != self.offset {
            log::trace!("Moving slide strip from {} to {}", self.offset, offset);
            self.offset = offset;
        }
    }
}

impl Observer for SlideStrip {
    fn notify(&mut self, _event: PlayerEvent, state: &PlaybackState) {
        self.index = state.current_index();

        // Frames share the width of the first slide.
        let width = self.deck.at(0).map_or(0, |slide| i64::from(slide.image.width));
        self.animate_to(-(width * self.index as i64));
    }
}
