use ratatui::style::{Color, Modifier, Style};

// Accent palette shared by both color modes.
const PURPLE: Color = Color::Rgb(0x80, 0x62, 0xD6);
const TOMATO: Color = Color::Rgb(0xFF, 0x63, 0x47);
const ROYAL_BLUE: Color = Color::Rgb(0x41, 0x69, 0xE1);
const SAGE: Color = Color::Rgb(0x5C, 0x83, 0x74);
const SILVER: Color = Color::Rgb(0xD8, 0xD9, 0xDA);
const CHARCOAL: Color = Color::Rgb(0x27, 0x28, 0x29);
const GRAY: Color = Color::Rgb(0x80, 0x80, 0x80);

/// Style table for the current color mode.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    dark: bool,
}

impl Theme {
    pub fn new(dark: bool) -> Self {
        Self { dark }
    }

    fn fg(&self) -> Color {
        if self.dark {
            Color::White
        } else {
            Color::Black
        }
    }

    fn bg(&self) -> Color {
        if self.dark {
            Color::Black
        } else {
            Color::White
        }
    }

    fn surface(&self) -> Color {
        if self.dark {
            CHARCOAL
        } else {
            SILVER
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg()).bg(self.bg())
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.fg()).add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(GRAY)
    }

    pub fn border_focused(&self) -> Style {
        Style::default().fg(PURPLE)
    }

    pub fn input_text(&self) -> Style {
        Style::default().fg(if self.dark { SILVER } else { CHARCOAL })
    }

    pub fn placeholder(&self) -> Style {
        Style::default().fg(SAGE)
    }

    pub fn selector(&self) -> Style {
        Style::default().fg(self.fg())
    }

    pub fn total(&self) -> Style {
        Style::default().fg(self.fg()).add_modifier(Modifier::BOLD)
    }

    pub fn list_bg(&self) -> Style {
        Style::default().bg(self.surface())
    }

    pub fn item_title(&self) -> Style {
        Style::default().fg(self.fg())
    }

    pub fn item_date(&self) -> Style {
        Style::default().fg(GRAY)
    }

    pub fn item_selected(&self) -> Style {
        Style::default()
            .fg(self.bg())
            .bg(PURPLE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn empty_hint(&self) -> Style {
        Style::default().fg(self.fg()).add_modifier(Modifier::BOLD)
    }

    pub fn popup_bg(&self) -> Style {
        Style::default().fg(self.fg()).bg(self.surface())
    }

    pub fn picker_selected(&self) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(PURPLE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn confirm_delete(&self) -> Style {
        Style::default().fg(TOMATO).add_modifier(Modifier::BOLD)
    }

    pub fn confirm_keep(&self) -> Style {
        Style::default().fg(ROYAL_BLUE).add_modifier(Modifier::BOLD)
    }

    pub fn notice_text(&self) -> Style {
        Style::default().fg(TOMATO)
    }

    pub fn status_bar(&self) -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_key(&self) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    }
}
