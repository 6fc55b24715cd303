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

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    components::StatusView,
    render::{
        Render,
        icons::{ICON_NEXT, ICON_PAUSE, ICON_PLAY, ICON_PREV},
    },
    theme::Theme,
};

impl Render for StatusView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(30)])
            .horizontal_margin(1)
            .split(area);

        let left = match self.error() {
            Some(error) => Line::from(Span::styled(error, Style::default().fg(theme.error_fg))),
            None => Line::from(Span::styled(
                self.feedback(),
                Style::default().add_modifier(Modifier::ITALIC),
            ))
            .fg(theme.slide_detail_fg),
        };
        f.render_widget(Paragraph::new(left), chunks[0]);

        let toggle = if self.show_play_control() {
            format!("{} play", ICON_PLAY)
        } else {
            format!("{} pause", ICON_PAUSE)
        };

        let controls = Line::from(vec![
            Span::raw(format!("{} ", ICON_PREV)),
            Span::styled(
                toggle,
                Style::default()
                    .fg(theme.accent_colour)
                    .add_modifier(if self.running() {
                        Modifier::empty()
                    } else {
                        Modifier::BOLD
                    }),
            ),
            Span::raw(format!(" {}", ICON_NEXT)),
        ]);
        f.render_widget(
            Paragraph::new(controls).alignment(Alignment::Right),
            chunks[1],
        );
    }
}
