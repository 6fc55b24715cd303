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

//! Terminal rendering.
//!
//! Each view draws itself into the area it is given; this module only lays
//! the views out. The caption panel decides its own width, so hiding
//! captions hands the space back to the slide strip.

mod commander;
pub(crate) mod icons;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
};

use crate::{App, render::commander::draw_commander, theme::Theme};

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

pub(crate) fn draw(f: &mut Frame, app: &App) {
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background_colour)),
        area,
    );

    // Outer layout: menu, main, status, command line
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let caption_width = app.caption_panel.borrow().width();

    // Main layout: slide strip, caption panel
    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(caption_width)])
        .split(outer[1]);

    app.menu_view.borrow_mut().draw(f, outer[0], &app.theme);
    app.slide_strip.borrow_mut().draw(f, main[0], &app.theme);
    app.caption_panel.borrow_mut().draw(f, main[1], &app.theme);
    app.status_view.borrow_mut().draw(f, outer[2], &app.theme);

    draw_commander(f, outer[3], app);
}
