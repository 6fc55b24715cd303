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

//! Views that observe the playback controller.
//!
//! Each view keeps only what it needs to draw itself, refreshes that from
//! the [`PlaybackState`](crate::player::PlaybackState) it is notified with,
//! and reads slide records through a [`DeckReader`](crate::deck::DeckReader).
//! The events each view needs are listed next to it so that registration and
//! implementation stay together.

mod captions;
mod menu;
mod status;
mod strip;

pub(crate) use captions::CaptionPanel;
pub(crate) use menu::MenuView;
pub(crate) use status::StatusView;
pub(crate) use strip::SlideStrip;
