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
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::{components::CaptionPanel, render::Render, theme::Theme};

impl Render for CaptionPanel {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        if area.width == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::LEFT)
            .border_style(Style::default().fg(theme.border_colour))
            .style(Style::default().bg(theme.panel_colour))
            .padding(Padding::uniform(1));

        let lines = match self.slide() {
            Some(slide) => vec![
                Line::from(Span::styled(
                    slide.title.as_str(),
                    Style::default()
                        .fg(theme.slide_title_fg)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    slide.client.as_str(),
                    Style::default().fg(theme.client_fg),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    slide.caption.as_str(),
                    Style::default().fg(theme.caption_fg),
                )),
            ],
            None => vec![],
        };

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }
}
