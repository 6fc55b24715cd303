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

//! Slide deck records and the shared, read-only deck capability.
//!
//! The deck is produced once by the loader (see [`load`]) and then handed to
//! the rest of the application through a pair of capabilities:
//!
//! * [`DeckPublisher`] may store the loaded deck exactly once.
//! * [`DeckReader`] may only query `len` and `at(index)`.
//!
//! Observers that render slides hold a [`DeckReader`]; nothing except the
//! application's load handler holds the publisher.

pub(crate) mod load;

use std::{cell::OnceCell, rc::Rc};

use serde::Deserialize;

use crate::error::DeckError;

fn default_client() -> String {
    "none".to_string()
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub(crate) struct SlideImage {
    pub(crate) url: String,
    #[serde(default)]
    pub(crate) width: u32,
    #[serde(default)]
    pub(crate) height: u32,
}

/// A single slide record.
///
/// `order` is the 1-based position shown in the menu.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub(crate) struct Slide {
    pub(crate) order: u32,
    #[serde(default)]
    pub(crate) title: String,
    #[serde(default = "default_client")]
    pub(crate) client: String,
    #[serde(default)]
    pub(crate) caption: String,
    pub(crate) image: SlideImage,
}

/// An ordered, immutable sequence of slides.
#[derive(Clone, Debug, Default)]
pub(crate) struct SlideDeck {
    slides: Vec<Slide>,
}

impl SlideDeck {
    pub(crate) fn new(slides: Vec<Slide>) -> Self {
        Self { slides }
    }

    pub(crate) fn len(&self) -> usize {
        self.slides.len()
    }

    pub(crate) fn at(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }
}

/// Creates the publish/read capability pair for a deck that has not loaded
/// yet.
pub(crate) fn shared() -> (DeckPublisher, DeckReader) {
    let cell = Rc::new(OnceCell::new());
    (
        DeckPublisher {
            cell: Rc::clone(&cell),
        },
        DeckReader { cell },
    )
}

/// One-shot write access to the shared deck.
pub(crate) struct DeckPublisher {
    cell: Rc<OnceCell<SlideDeck>>,
}

impl DeckPublisher {
    /// Stores the loaded deck, returning its length.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::AlreadyPublished`] if a deck was stored before;
    /// the original deck is kept.
    pub(crate) fn publish(&self, deck: SlideDeck) -> Result<usize, DeckError> {
        let len = deck.len();
        self.cell
            .set(deck)
            .map_err(|_| DeckError::AlreadyPublished)?;
        Ok(len)
    }
}

/// Read-only view of the shared deck.
///
/// Before the deck is published it behaves as an empty deck.
#[derive(Clone)]
pub(crate) struct DeckReader {
    cell: Rc<OnceCell<SlideDeck>>,
}

impl DeckReader {
    pub(crate) fn len(&self) -> usize {
        self.cell.get().map_or(0, SlideDeck::len)
    }

    pub(crate) fn at(&self, index: usize) -> Option<&Slide> {
        self.cell.get().and_then(|deck| deck.at(index))
    }

    pub(crate) fn slides(&self) -> impl Iterator<Item = &Slide> {
        self.cell.get().into_iter().flat_map(SlideDeck::iter)
    }
}

#[cfg(test)]
pub(crate) fn test_deck(len: usize) -> SlideDeck {
    let slides = (0..len)
        .map(|i| Slide {
            order: i as u32 + 1,
            title: format!("Slide {}", i + 1),
            client: default_client(),
            caption: format!("Caption {}", i + 1),
            image: SlideImage {
                url: format!("images/{}.jpg", i + 1),
                width: 640,
                height: 480,
            },
        })
        .collect();

    SlideDeck::new(slides)
}
