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

//! Asynchronous application task processing.
//!
//! This module offloads potentially blocking work, such as reading a deck
//! manifest or scanning an image directory, from the main UI thread. A
//! dedicated worker loop runs each [`AppTask`] and posts the result back to
//! the application as an [`AppEvent`].
//!
//! Only actions that may block should be implemented as tasks. Playback
//! commands are handled directly by the event loop.

mod handlers;

use anyhow::Result;
use std::{
    path::PathBuf,
    sync::mpsc::{Receiver, Sender},
    thread,
};

use crate::events::AppEvent;

#[derive(Debug)]
pub(crate) enum AppTask {
    LoadDeck(PathBuf),
}

/// Spawns a background thread to process application tasks.
///
/// # Arguments
///
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(task_rx: Receiver<AppTask>, event_tx: Sender<AppEvent>) {
    thread::spawn(move || {
        while let Ok(task) = task_rx.recv() {
            let ctx = TaskContext {
                event_tx: &event_tx,
            };

            if let Err(e) = handle_task(task, &ctx) {
                let _ = event_tx.send(AppEvent::Error(format!("{:#}", e)));
            }
        }
    });
}

/// Bundles shared resources required by task handlers.
struct TaskContext<'a> {
    event_tx: &'a Sender<AppEvent>,
}

fn handle_task(task: AppTask, ctx: &TaskContext) -> Result<()> {
    match task {
        AppTask::LoadDeck(path) => handlers::load_deck(ctx, &path),
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, sync::mpsc, time::Duration};

    use super::*;

    #[test]
    fn test_worker_posts_loaded_deck() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(dir.path().join("one.png"), b"").expect("write");
        fs::write(dir.path().join("two.png"), b"").expect("write");

        let (task_tx, task_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        spawn_task_worker(task_rx, event_tx);

        task_tx
            .send(AppTask::LoadDeck(dir.path().to_path_buf()))
            .expect("send task");

        match event_rx.recv_timeout(Duration::from_secs(5)) {
            Ok(AppEvent::DeckLoaded(deck)) => assert_eq!(deck.len(), 2),
            other => panic!("Unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_worker_reports_load_failure() {
        let dir = tempfile::tempdir().expect("temp dir");

        let (task_tx, task_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        spawn_task_worker(task_rx, event_tx);

        task_tx
            .send(AppTask::LoadDeck(dir.path().join("missing.json")))
            .expect("send task");

        match event_rx.recv_timeout(Duration::from_secs(5)) {
            Ok(AppEvent::Error(message)) => assert!(message.contains("missing.json")),
            other => panic!("Unexpected event: {:?}", other),
        }
    }
}
