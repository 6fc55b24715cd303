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

//! Application configuration.
//!
//! Settings are stored with `confy`; command-line arguments (see [`args`])
//! override them for a single run.

pub(crate) mod args;

use std::{path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{config::args::Args, player::PlaybackOptions};

const CONFIG_NAME: &str = "slideshow";
const LOG_FILE_NAME: &str = "slideshow.log";

const DEFAULT_INTERVAL_MS: u64 = 7000;
const MIN_INTERVAL_MS: u64 = 250;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub deck_path: Option<PathBuf>,
    pub autoplay_interval_ms: u64,
    pub autoplay: bool,
    pub captions: bool,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            deck_path: None,
            autoplay_interval_ms: DEFAULT_INTERVAL_MS,
            autoplay: true,
            captions: true,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Overrides stored settings with those given on the command line.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(deck) = &args.deck {
            self.deck_path = Some(deck.clone());
        }
        if let Some(interval) = args.interval_ms {
            self.autoplay_interval_ms = interval;
        }
        if args.paused {
            self.autoplay = false;
        }
        if args.no_captions {
            self.captions = false;
        }
        if let Some(log_file) = &args.log_file {
            self.log_file = Some(log_file.clone());
        }
    }

    pub(crate) fn playback_options(&self) -> PlaybackOptions {
        PlaybackOptions {
            interval: Duration::from_millis(self.autoplay_interval_ms.max(MIN_INTERVAL_MS)),
            autoplay: self.autoplay,
            captions: self.captions,
        }
    }

    /// Log file location; defaults to the configuration directory.
    pub fn log_path(&self) -> PathBuf {
        if let Some(path) = &self.log_file {
            return path.clone();
        }

        confy::get_configuration_file_path(CONFIG_NAME, None)
            .ok()
            .and_then(|path| path.parent().map(|dir| dir.join(LOG_FILE_NAME)))
            .unwrap_or_else(|| PathBuf::from(LOG_FILE_NAME))
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}
