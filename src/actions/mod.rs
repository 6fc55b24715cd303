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

//! User commands and how they map onto the playback controller.
//!
//! Keys and the command line both produce a [`UserCommand`]. Navigating by
//! hand (going to a slide or stepping) also pauses autoplay, so the viewer
//! stays on the slide they picked.

use crate::{
    error::PlaybackError,
    player::{PlaybackController, timer::Scheduler},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum UserCommand {
    /// Go to a slide by zero-based index.
    GoTo(usize),
    StepBack,
    StepForward,
    Play,
    Pause,
    TogglePlayback,
    ToggleCaptions,
}

/// Runs a user command against the controller.
///
/// # Errors
///
/// Returns [`PlaybackError::OutOfRange`] for a [`UserCommand::GoTo`] past the
/// end of the deck, in which case nothing changes.
pub(crate) fn execute<S: Scheduler>(
    controller: &mut PlaybackController<S>,
    command: UserCommand,
) -> Result<(), PlaybackError> {
    match command {
        UserCommand::GoTo(index) => {
            controller.go_to(index)?;
            controller.pause();
        }
        UserCommand::StepBack => {
            controller.previous();
            controller.pause();
        }
        UserCommand::StepForward => {
            controller.next();
            controller.pause();
        }
        UserCommand::Play => controller.play(),
        UserCommand::Pause => controller.pause(),
        UserCommand::TogglePlayback => controller.toggle_playback(),
        UserCommand::ToggleCaptions => controller.toggle_captions(),
    }

    Ok(())
}
