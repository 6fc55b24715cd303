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

use std::path::Path;

use anyhow::{Context, Result};

use crate::{deck::load, events::AppEvent, tasks::TaskContext};

pub(super) fn load_deck(ctx: &TaskContext, path: &Path) -> Result<()> {
    log::info!("Loading deck from {}", path.display());

    let deck = load::load_deck(path)
        .with_context(|| format!("Failed to load deck from {}", path.display()))?;

    log::debug!("Loaded {} slides", deck.len());
    ctx.event_tx.send(AppEvent::DeckLoaded(deck))?;

    Ok(())
}
