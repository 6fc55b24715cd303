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

//! # Slideshow Player TUI.
//!
//! A terminal slideshow player with autoplay, captions and a slide menu.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** owns the playback controller, handles every event in
//!   turn and renders the UI.
//! * A **Task Worker** loads the slide deck without blocking the UI.
//! * An **Input Thread** forwards key presses, and the **Autoplay Timer**
//!   thread posts ticks while playback is running.
//!
//! ## Architecture
//!
//! Background threads never touch playback state; they only post
//! [`AppEvent`]s to the main thread over a `std::sync::mpsc` channel. The
//! controller notifies the views it was given at start-up, and the views are
//! then drawn. The application follows a strict setup-run-teardown pattern
//! so the terminal is restored even when the run fails.

mod actions;
mod commander;
mod components;
mod config;
mod deck;
mod error;
mod events;
mod player;
mod render;
mod tasks;
mod theme;
mod util;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    cell::RefCell,
    io::{self},
    path::PathBuf,
    rc::Rc,
    sync::mpsc::{self, Receiver, Sender},
    thread,
};

use crate::{
    commander::Commander,
    components::{CaptionPanel, MenuView, SlideStrip, StatusView},
    config::{AppConfig, args::Args},
    deck::DeckPublisher,
    events::{AppEvent, process_events},
    player::{PlaybackController, timer::ThreadScheduler},
    tasks::AppTask,
    theme::Theme,
};

/// Application state.
struct App {
    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: Sender<AppTask>,

    pub controller: PlaybackController<ThreadScheduler>,
    pub deck_publisher: DeckPublisher,

    pub menu_view: Rc<RefCell<MenuView>>,
    pub caption_panel: Rc<RefCell<CaptionPanel>>,
    pub slide_strip: Rc<RefCell<SlideStrip>>,
    pub status_view: Rc<RefCell<StatusView>>,

    pub commander: Commander,
}

impl App {
    /// Create a new instance of application state, with every view
    /// subscribed to the controller.
    pub fn new(config: &AppConfig, task_tx: Sender<AppTask>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let options = config.playback_options();
        let scheduler = ThreadScheduler::new(event_tx.clone());
        let mut controller = PlaybackController::new(scheduler, options);

        let (deck_publisher, deck_reader) = deck::shared();

        let menu_view = Rc::new(RefCell::new(MenuView::new(deck_reader.clone())));
        let caption_panel = Rc::new(RefCell::new(CaptionPanel::new(
            deck_reader.clone(),
            options.captions,
        )));
        let slide_strip = Rc::new(RefCell::new(SlideStrip::new(deck_reader)));
        let status_view = Rc::new(RefCell::new(StatusView::new()));

        // Registration order is notification order.
        controller.subscribe(&MenuView::EVENTS, Rc::clone(&menu_view));
        controller.subscribe(&CaptionPanel::EVENTS, Rc::clone(&caption_panel));
        controller.subscribe(&SlideStrip::EVENTS, Rc::clone(&slide_strip));
        controller.subscribe(&StatusView::EVENTS, Rc::clone(&status_view));

        Self {
            theme: Theme::default(),
            event_tx,
            event_rx,
            task_tx,
            controller,
            deck_publisher,
            menu_view,
            caption_panel,
            slide_strip,
            status_view,
            commander: Commander::new(),
        }
    }
}

/// The entry point of the application.
///
/// Loads configuration, starts logging, manages the terminal lifecycle, and
/// returns an error if any part of the execution fails.
fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = config::load_config();
    config.apply_args(&args);

    let deck_path = config
        .deck_path
        .clone()
        .context("No deck given: pass a manifest file or image directory, or set deck_path in the configuration")?;

    util::logging::init_logging(&config).context("Failed to initialise logging")?;

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(&config, task_tx);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, task_rx, deck_path);
    restore_terminal(&mut terminal);

    app.controller.dispose();
    log::info!("Exiting");

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&hex).context("Failed to set terminal background")?;
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`]. It is best-effort
/// and does not return a result, as it runs during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg().ok();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns:
/// * A task worker to load the deck.
/// * An input thread to forward terminal events.
///
/// and then asks the worker to load `deck_path` before handing control to
/// [`process_events`].
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    task_rx: Receiver<AppTask>,
    deck_path: PathBuf,
) -> Result<()> {
    let task_event_tx = app.event_tx.clone();
    tasks::spawn_task_worker(task_rx, task_event_tx);

    // Spawn a thread to translate raw terminal events to application events.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let app_event = match event::read() {
                Ok(event::Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    AppEvent::Key(key)
                }
                Ok(event::Event::Resize(_, _)) => AppEvent::Resize,
                Ok(_) => continue,
                Err(e) => {
                    let _ = tx_input.send(AppEvent::FatalError(format!(
                        "Terminal input failure: {}",
                        e
                    )));
                    break;
                }
            };

            if tx_input.send(app_event).is_err() {
                break;
            }
        }
    });

    app.task_tx
        .send(AppTask::LoadDeck(deck_path))
        .context("Failed to request deck load")?;

    process_events(terminal, app)
}
