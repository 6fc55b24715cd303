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

//! Colour theme for the slideshow TUI.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) panel_colour: Color,
    pub(crate) commander_colour: Color,

    pub(crate) menu_fg: Color,
    pub(crate) slide_title_fg: Color,
    pub(crate) slide_detail_fg: Color,
    pub(crate) caption_fg: Color,
    pub(crate) client_fg: Color,
    pub(crate) error_fg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(24, 24, 32),
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            panel_colour: Color::Rgb(36, 36, 48),
            commander_colour: Color::Rgb(255, 255, 255),

            menu_fg: Color::Rgb(162, 161, 166),
            slide_title_fg: Color::Rgb(255, 255, 255),
            slide_detail_fg: Color::Rgb(162, 161, 166),
            caption_fg: Color::Rgb(230, 230, 230),
            client_fg: Color::Rgb(179, 157, 219),
            error_fg: Color::Rgb(240, 98, 98),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string, used to set the terminal emulator's background colour via an
    /// escape sequence.
    ///
    /// Returns `None` for anything other than a [`Color::Rgb`] variant.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex() {
        assert_eq!(
            Theme::to_hex(Color::Rgb(24, 24, 32)),
            Some("#181820".to_string())
        );
        assert_eq!(Theme::to_hex(Color::Red), None);
    }
}
