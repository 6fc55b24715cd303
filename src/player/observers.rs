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

//! Change notification for playback state.
//!
//! The controller owns an [`Observers`] registry. Each observer subscribes to
//! the [`PlayerEvent`]s it cares about and is notified synchronously, in
//! registration order, after the state change that caused the event has been
//! fully applied.
//!
//! Observers only ever receive a shared reference to [`PlaybackState`], so a
//! reaction is limited to reading state and updating the observer's own view.
//! Issuing a playback command from inside a notification is not possible.

use std::{cell::RefCell, rc::Rc};

use crate::player::PlaybackState;

/// Kinds of playback state change.
///
/// Events carry no payload; observers re-read the state they are given.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum PlayerEvent {
    IndexChanged,
    StateChanged,
    CaptionsChanged,
    DeckReady,
}

pub(crate) trait Observer {
    fn notify(&mut self, event: PlayerEvent, state: &PlaybackState);
}

// Views are shared between the registry and the renderer.
impl<T: Observer> Observer for Rc<RefCell<T>> {
    fn notify(&mut self, event: PlayerEvent, state: &PlaybackState) {
        self.borrow_mut().notify(event, state);
    }
}

struct Subscription {
    events: Vec<PlayerEvent>,
    observer: Box<dyn Observer>,
}

/// Ordered registry of event subscriptions.
#[derive(Default)]
pub(crate) struct Observers {
    subscriptions: Vec<Subscription>,
}

impl Observers {
    /// Registers `observer` for the given events.
    ///
    /// Duplicate entries in `events` are ignored, an observer is notified at
    /// most once per emission.
    pub(crate) fn subscribe<O>(&mut self, events: &[PlayerEvent], observer: O)
    where
        O: Observer + 'static,
    {
        let mut wanted = Vec::with_capacity(events.len());
        for event in events {
            if !wanted.contains(event) {
                wanted.push(*event);
            }
        }

        self.subscriptions.push(Subscription {
            events: wanted,
            observer: Box::new(observer),
        });
    }

    pub(crate) fn emit(&mut self, event: PlayerEvent, state: &PlaybackState) {
        for subscription in self
            .subscriptions
            .iter_mut()
            .filter(|s| s.events.contains(&event))
        {
            subscription.observer.notify(event, state);
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::{Observer, PlayerEvent};
    use crate::player::PlaybackState;

    /// Observer that records everything it is told.
    #[derive(Debug, Default)]
    pub(crate) struct Recorder {
        pub(crate) seen: Vec<(PlayerEvent, PlaybackState)>,
    }

    impl Recorder {
        pub(crate) fn count(&self, event: PlayerEvent) -> usize {
            self.seen.iter().filter(|(e, _)| *e == event).count()
        }

        pub(crate) fn events(&self) -> Vec<PlayerEvent> {
            self.seen.iter().map(|(e, _)| *e).collect()
        }

        pub(crate) fn indices(&self) -> Vec<usize> {
            self.seen
                .iter()
                .filter(|(e, _)| *e == PlayerEvent::IndexChanged)
                .map(|(_, s)| s.current_index())
                .collect()
        }
    }

    impl Observer for Recorder {
        fn notify(&mut self, event: PlayerEvent, state: &PlaybackState) {
            self.seen.push((event, state.clone()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{testing::Recorder, *};

    struct Tagger {
        tag: &'static str,
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Observer for Tagger {
        fn notify(&mut self, _event: PlayerEvent, _state: &PlaybackState) {
            self.log.borrow_mut().push(self.tag);
        }
    }

    #[test]
    fn test_emit_reaches_only_interested_observers() {
        let mut observers = Observers::default();
        let index = Rc::new(RefCell::new(Recorder::default()));
        let captions = Rc::new(RefCell::new(Recorder::default()));

        observers.subscribe(&[PlayerEvent::IndexChanged], Rc::clone(&index));
        observers.subscribe(&[PlayerEvent::CaptionsChanged], Rc::clone(&captions));

        let state = PlaybackState::default();
        observers.emit(PlayerEvent::IndexChanged, &state);
        observers.emit(PlayerEvent::StateChanged, &state);

        assert_eq!(index.borrow().events(), vec![PlayerEvent::IndexChanged]);
        assert!(captions.borrow().seen.is_empty());
    }

    #[test]
    fn test_emit_follows_registration_order() {
        let mut observers = Observers::default();
        let log = Rc::new(RefCell::new(Vec::new()));

        for tag in ["menu", "captions", "strip"] {
            observers.subscribe(
                &[PlayerEvent::IndexChanged],
                Tagger {
                    tag,
                    log: Rc::clone(&log),
                },
            );
        }

        observers.emit(PlayerEvent::IndexChanged, &PlaybackState::default());

        assert_eq!(*log.borrow(), vec!["menu", "captions", "strip"]);
    }

    #[test]
    fn test_duplicate_event_subscription_notifies_once() {
        let mut observers = Observers::default();
        let recorder = Rc::new(RefCell::new(Recorder::default()));

        observers.subscribe(
            &[PlayerEvent::DeckReady, PlayerEvent::DeckReady],
            Rc::clone(&recorder),
        );
        observers.emit(PlayerEvent::DeckReady, &PlaybackState::default());

        assert_eq!(recorder.borrow().count(PlayerEvent::DeckReady), 1);
    }
}
