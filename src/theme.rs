use ratatui::style::{Color, Style};

use crate::models::Background;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
    pub accent: Color,
}

impl Palette {
    pub fn for_state(dark: bool, background: Option<Background>) -> Palette {
        let bg = match (dark, background) {
            (false, None) => Color::Reset,
            (true, None) => Color::Rgb(0x12, 0x12, 0x12),
            (false, Some(Background::Blue)) => Color::Rgb(0xcf, 0xe8, 0xff),
            (true, Some(Background::Blue)) => Color::Rgb(0x0b, 0x24, 0x3b),
            (false, Some(Background::Yellow)) => Color::Rgb(0xff, 0xf4, 0xb8),
            (true, Some(Background::Yellow)) => Color::Rgb(0x3a, 0x32, 0x08),
            (false, Some(Background::Pink)) => Color::Rgb(0xff, 0xd6, 0xe7),
            (true, Some(Background::Pink)) => Color::Rgb(0x3d, 0x10, 0x24),
        };

        if dark {
            Palette {
                fg: Color::Rgb(0xe6, 0xe6, 0xe6),
                bg,
                accent: Color::Yellow,
            }
        } else {
            Palette {
                fg: if background.is_some() { Color::Black } else { Color::Reset },
                bg,
                accent: Color::Blue,
            }
        }
    }

    pub fn surface(&self) -> Style {
        Style::new().fg(self.fg).bg(self.bg)
    }

    pub fn border(&self) -> Style {
        self.surface().fg(self.accent)
    }
}

/// Label for the theme toggle: names the mode it switches to.
pub fn toggle_label(dark: bool) -> &'static str {
    if dark { "☀ Light mode" } else { "☾ Dark mode" }
}
