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

//! Error types shared by the playback controller, the deck loader and the
//! command line.

use std::path::PathBuf;

use thiserror::Error;

/// Failures raised by [`crate::player::PlaybackController`] commands.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum PlaybackError {
    #[error("slide index {index} is out of range for a deck of {len} slides")]
    OutOfRange { index: usize, len: usize },

    #[error("deck ready signal received more than once")]
    AlreadyReady,
}

/// Failures raised while loading or publishing a slide deck.
#[derive(Debug, Error)]
pub(crate) enum DeckError {
    #[error("deck source not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read deck source {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid deck manifest {path}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to scan deck directory")]
    Scan(#[from] walkdir::Error),

    #[error("deck has already been published")]
    AlreadyPublished,
}

/// Failures parsing a line typed into the command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("missing slide number")]
    MissingSlide,

    #[error("invalid slide number: {0}")]
    InvalidSlide(String),
}
