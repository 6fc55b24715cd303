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

//! Autoplay timer scheduling.
//!
//! The controller never manipulates timers directly; it asks a [`Scheduler`]
//! for a recurring callback and holds the returned handle. Dropping the
//! handle cancels the callback.
//!
//! Every recurring callback carries the [`TimerId`] it was scheduled with.
//! A tick that was already queued when its timer was cancelled therefore no
//! longer matches the live timer and is discarded by the controller.

use std::{
    sync::mpsc::{self, RecvTimeoutError, Sender},
    thread,
    time::Duration,
};

use crate::events::AppEvent;

/// Identifies one scheduled recurring callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct TimerId(pub(crate) u64);

/// A host timer service able to schedule recurring callbacks.
pub(crate) trait Scheduler {
    /// Owning handle for a scheduled callback; dropping it cancels.
    type Handle;

    fn schedule_recurring(&mut self, id: TimerId, period: Duration) -> Self::Handle;
}

/// Schedules callbacks on background threads that post
/// [`AppEvent::AutoplayTick`] to the application event channel.
pub(crate) struct ThreadScheduler {
    event_tx: Sender<AppEvent>,
}

impl ThreadScheduler {
    pub(crate) fn new(event_tx: Sender<AppEvent>) -> Self {
        Self { event_tx }
    }
}

impl Scheduler for ThreadScheduler {
    type Handle = RecurringTimer;

    fn schedule_recurring(&mut self, id: TimerId, period: Duration) -> RecurringTimer {
        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();
        let event_tx = self.event_tx.clone();

        thread::spawn(move || {
            loop {
                match cancel_rx.recv_timeout(period) {
                    Err(RecvTimeoutError::Timeout) => {
                        if event_tx.send(AppEvent::AutoplayTick(id)).is_err() {
                            break;
                        }
                    }
                    // Handle dropped (disconnected) or explicit cancel.
                    _ => break,
                }
            }
        });

        RecurringTimer {
            id,
            _cancel_tx: cancel_tx,
        }
    }
}

/// Handle for a thread-backed recurring timer.
///
/// The timer thread exits as soon as this handle is dropped.
pub(crate) struct RecurringTimer {
    id: TimerId,
    _cancel_tx: Sender<()>,
}

impl Drop for RecurringTimer {
    fn drop(&mut self) {
        log::trace!("Cancelled autoplay timer {:?}", self.id);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::{cell::RefCell, rc::Rc, time::Duration};

    use super::{Scheduler, TimerId};

    #[derive(Debug, Default)]
    pub(crate) struct TimerLog {
        pub(crate) scheduled: Vec<(TimerId, Duration)>,
        pub(crate) cancelled: Vec<TimerId>,
        pub(crate) live: Vec<TimerId>,
    }

    /// Records scheduling activity instead of running real timers.
    #[derive(Clone, Default)]
    pub(crate) struct ManualScheduler {
        pub(crate) log: Rc<RefCell<TimerLog>>,
    }

    impl ManualScheduler {
        pub(crate) fn live(&self) -> Vec<TimerId> {
            self.log.borrow().live.clone()
        }

        pub(crate) fn scheduled_count(&self) -> usize {
            self.log.borrow().scheduled.len()
        }

        pub(crate) fn cancelled_count(&self) -> usize {
            self.log.borrow().cancelled.len()
        }
    }

    pub(crate) struct ManualTimer {
        id: TimerId,
        log: Rc<RefCell<TimerLog>>,
    }

    impl Drop for ManualTimer {
        fn drop(&mut self) {
            let mut log = self.log.borrow_mut();
            log.cancelled.push(self.id);
            log.live.retain(|id| *id != self.id);
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualTimer;

        fn schedule_recurring(&mut self, id: TimerId, period: Duration) -> ManualTimer {
            let mut log = self.log.borrow_mut();
            log.scheduled.push((id, period));
            log.live.push(id);

            ManualTimer {
                id,
                log: Rc::clone(&self.log),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_timer_posts_ticks_with_its_id() {
        let (event_tx, event_rx) = mpsc::channel();
        let mut scheduler = ThreadScheduler::new(event_tx);

        let timer = scheduler.schedule_recurring(TimerId(7), Duration::from_millis(5));

        match event_rx.recv_timeout(Duration::from_secs(2)) {
            Ok(AppEvent::AutoplayTick(id)) => assert_eq!(id, TimerId(7)),
            other => panic!("Unexpected event: {:?}", other),
        }

        drop(timer);
    }

    #[test]
    fn test_dropping_handle_stops_thread_timer() {
        let (event_tx, event_rx) = mpsc::channel();
        let mut scheduler = ThreadScheduler::new(event_tx);

        let timer = scheduler.schedule_recurring(TimerId(1), Duration::from_millis(5));
        drop(timer);
        drop(scheduler);

        // Once the timer thread exits every sender is gone, so the channel
        // drains any already queued ticks and then disconnects.
        let deadline = std::time::Instant::now() + Duration::from_secs(2);
        loop {
            match event_rx.recv_timeout(Duration::from_millis(100)) {
                Ok(_) => assert!(std::time::Instant::now() < deadline, "timer kept firing"),
                Err(RecvTimeoutError::Disconnected) => break,
                Err(RecvTimeoutError::Timeout) => panic!("timer thread did not exit"),
            }
        }
    }
}
