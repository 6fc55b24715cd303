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

//! Slideshow playback control and state management.
//!
//! This module provides [`PlaybackController`], the owner of the playback
//! state: which slide is current, whether autoplay is running and whether
//! captions are shown. Every change to that state is published to the
//! registered observers (see [`observers`]).
//!
//! Autoplay is derived state. The controller holds at most one recurring
//! timer, and [`PlaybackController::reconcile_timer`] is the only place that
//! starts or stops it, keeping "running" and "a timer is ticking" in step.

pub(crate) mod observers;
pub(crate) mod timer;

use std::time::Duration;

use crate::{
    error::PlaybackError,
    player::{
        observers::{Observer, Observers, PlayerEvent},
        timer::{Scheduler, TimerId},
    },
};

/// Default period between automatic slide advances.
pub(crate) const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(7000);

/// A snapshot of the playback state, as seen by observers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PlaybackState {
    current_index: usize,
    running: bool,
    captions_visible: bool,
    deck_length: usize,
    ready: bool,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            current_index: 0,
            running: true,
            captions_visible: true,
            deck_length: 0,
            ready: false,
        }
    }
}

impl PlaybackState {
    pub(crate) fn current_index(&self) -> usize {
        self.current_index
    }

    pub(crate) fn running(&self) -> bool {
        self.running
    }

    pub(crate) fn captions_visible(&self) -> bool {
        self.captions_visible
    }

    pub(crate) fn deck_length(&self) -> usize {
        self.deck_length
    }

    pub(crate) fn ready(&self) -> bool {
        self.ready
    }
}

/// Options applied when a controller is created.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PlaybackOptions {
    pub(crate) interval: Duration,
    pub(crate) autoplay: bool,
    pub(crate) captions: bool,
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        Self {
            interval: AUTOPLAY_INTERVAL,
            autoplay: true,
            captions: true,
        }
    }
}

struct ActiveTimer<H> {
    id: TimerId,
    _handle: H,
}

/// The playback state machine.
///
/// All commands are synchronous. Each one applies its state change in full,
/// reconciles the autoplay timer if needed, and only then notifies observers.
pub(crate) struct PlaybackController<S: Scheduler> {
    state: PlaybackState,
    interval: Duration,
    scheduler: S,
    timer: Option<ActiveTimer<S::Handle>>,
    next_timer_id: u64,
    observers: Observers,
}

impl<S: Scheduler> PlaybackController<S> {
    pub(crate) fn new(scheduler: S, options: PlaybackOptions) -> Self {
        Self {
            state: PlaybackState {
                running: options.autoplay,
                captions_visible: options.captions,
                ..PlaybackState::default()
            },
            interval: options.interval,
            scheduler,
            timer: None,
            next_timer_id: 0,
            observers: Observers::default(),
        }
    }

    pub(crate) fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Identifier of the live autoplay timer, if any.
    pub(crate) fn active_timer(&self) -> Option<TimerId> {
        self.timer.as_ref().map(|t| t.id)
    }

    pub(crate) fn subscribe<O>(&mut self, events: &[PlayerEvent], observer: O)
    where
        O: Observer + 'static,
    {
        self.observers.subscribe(events, observer);
    }

    /// Makes `index` the current slide.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::OutOfRange`] if `index` is not a valid
    /// position in the deck, including any index before the deck is ready.
    pub(crate) fn go_to(&mut self, index: usize) -> Result<(), PlaybackError> {
        if index >= self.state.deck_length {
            return Err(PlaybackError::OutOfRange {
                index,
                len: self.state.deck_length,
            });
        }

        self.set_index(index);
        Ok(())
    }

    /// Steps back one slide, wrapping from the first slide to the last.
    pub(crate) fn previous(&mut self) {
        let len = self.state.deck_length;
        if len == 0 {
            return;
        }

        let index = match self.state.current_index {
            0 => len - 1,
            i => i - 1,
        };
        self.set_index(index);
    }

    /// Steps forward one slide, wrapping from the last slide to the first.
    pub(crate) fn next(&mut self) {
        let len = self.state.deck_length;
        if len == 0 {
            return;
        }

        let index = if self.state.current_index + 1 >= len {
            0
        } else {
            self.state.current_index + 1
        };
        self.set_index(index);
    }

    pub(crate) fn play(&mut self) {
        self.set_running(true);
    }

    pub(crate) fn pause(&mut self) {
        self.set_running(false);
    }

    pub(crate) fn toggle_playback(&mut self) {
        self.set_running(!self.state.running);
    }

    pub(crate) fn toggle_captions(&mut self) {
        self.state.captions_visible = !self.state.captions_visible;
        log::debug!("Captions visible: {}", self.state.captions_visible);

        self.emit(PlayerEvent::CaptionsChanged);
    }

    /// Accepts the deck's ready signal and starts the initial playback mode.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::AlreadyReady`] if the deck was already ready;
    /// the state is left untouched.
    pub(crate) fn on_deck_ready(&mut self, length: usize) -> Result<(), PlaybackError> {
        if self.state.ready {
            log::warn!(
                "Ignoring repeated deck ready signal (length {}, current {})",
                length,
                self.state.deck_length
            );
            return Err(PlaybackError::AlreadyReady);
        }

        self.state.deck_length = length;
        self.state.ready = true;
        if self.state.current_index >= length {
            self.state.current_index = 0;
        }
        log::info!("Deck ready with {} slides", length);

        self.reconcile_timer();
        self.emit(PlayerEvent::DeckReady);
        Ok(())
    }

    /// Handles a tick from the autoplay timer identified by `id`.
    ///
    /// Ticks from a timer that has since been cancelled are ignored.
    pub(crate) fn on_autoplay_tick(&mut self, id: TimerId) {
        if self.active_timer() != Some(id) {
            log::trace!("Dropping stale autoplay tick {:?}", id);
            return;
        }

        self.next();
    }

    /// Releases the autoplay timer and consumes the controller.
    pub(crate) fn dispose(mut self) {
        if let Some(timer) = self.timer.take() {
            log::debug!("Disposing controller, cancelling timer {:?}", timer.id);
        }
    }

    fn set_index(&mut self, index: usize) {
        if index == self.state.current_index {
            return;
        }

        self.state.current_index = index;
        log::debug!("Current slide: {}", index);

        self.emit(PlayerEvent::IndexChanged);
    }

    fn set_running(&mut self, running: bool) {
        if running == self.state.running {
            return;
        }

        self.state.running = running;
        log::debug!("Autoplay {}", if running { "started" } else { "paused" });

        self.reconcile_timer();
        self.emit(PlayerEvent::StateChanged);
    }

    /// Brings the timer in line with the state: a timer is held exactly
    /// when the deck is ready and playback is running.
    fn reconcile_timer(&mut self) {
        let wanted = self.state.ready && self.state.running;

        match (wanted, self.timer.is_some()) {
            (true, false) => {
                let id = TimerId(self.next_timer_id);
                self.next_timer_id += 1;

                let handle = self.scheduler.schedule_recurring(id, self.interval);
                log::debug!("Scheduled autoplay timer {:?} every {:?}", id, self.interval);

                self.timer = Some(ActiveTimer {
                    id,
                    _handle: handle,
                });
            }
            (false, true) => {
                if let Some(timer) = self.timer.take() {
                    log::debug!("Cancelled autoplay timer {:?}", timer.id);
                }
            }
            _ => {}
        }
    }

    fn emit(&mut self, event: PlayerEvent) {
        self.observers.emit(event, &self.state);
    }
}
