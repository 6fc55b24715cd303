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

//! Logging setup.
//!
//! The terminal belongs to the TUI, so log records are written to a file
//! instead of stderr.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};

use crate::config::AppConfig;

/// Initialises `env_logger` writing to the configured log file.
///
/// `RUST_LOG` takes precedence over the configured level.
pub(crate) fn init_logging(config: &AppConfig) -> Result<PathBuf> {
    let path = config.log_path();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }

    let file = fs::File::create(&path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .format_timestamp_millis()
    .target(env_logger::Target::Pipe(Box::new(file)))
    .init();

    log::info!("Logging to {} (level: {})", path.display(), config.log_level);

    Ok(path)
}
