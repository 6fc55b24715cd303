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

use std::path::PathBuf;

use clap::Parser;

/// Terminal slideshow player.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Deck manifest (JSON) or directory of images
    pub deck: Option<PathBuf>,

    /// Milliseconds between automatic slide advances
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Start with autoplay paused
    #[arg(long)]
    pub paused: bool,

    /// Start with captions hidden
    #[arg(long)]
    pub no_captions: bool,

    /// Write the log to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
