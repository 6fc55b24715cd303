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
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    components::SlideStrip,
    render::{
        Render,
        icons::{SLIDE_CURRENT, SLIDE_OTHER},
    },
    theme::Theme,
};

impl Render for SlideStrip {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::NONE)
            .padding(Padding::uniform(1));

        let inner_area = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(inner_area);

        if let Some(slide) = self.slide() {
            let title = Paragraph::new(Span::styled(
                slide.title.as_str(),
                Style::default()
                    .fg(theme.slide_title_fg)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center);
            f.render_widget(title, chunks[1]);

            let detail = if slide.image.width > 0 {
                format!(
                    "{}  {}\u{00D7}{}",
                    slide.image.url, slide.image.width, slide.image.height
                )
            } else {
                slide.image.url.clone()
            };

            let image = Paragraph::new(Span::styled(
                detail,
                Style::default().fg(theme.slide_detail_fg),
            ))
            .alignment(Alignment::Center);
            f.render_widget(image, chunks[3]);
        }

        let markers: Vec<Span> = (0..self.len())
            .map(|i| {
                if i == self.index() {
                    Span::styled(
                        format!("{} ", SLIDE_CURRENT),
                        Style::default().fg(theme.accent_colour),
                    )
                } else {
                    Span::styled(
                        format!("{} ", SLIDE_OTHER),
                        Style::default().fg(theme.border_colour),
                    )
                }
            })
            .collect();

        f.render_widget(
            Paragraph::new(Line::from(markers)).alignment(Alignment::Center),
            chunks[5],
        );
    }
}
