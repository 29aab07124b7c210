use aqi_core::{AqiCategory, Pollutant};
use ratatui::style::{Color, Modifier, Style};

pub const ACCENT: Color = Color::Cyan;
pub const MUTED: Color = Color::Gray;
pub const HIGHLIGHT: Color = Color::Rgb(0, 0, 238);
pub const IMPORTANCE_BAR: Color = Color::Rgb(0x1a, 0xbc, 0x9c);

pub const fn rgb(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

pub const fn category_color(category: AqiCategory) -> Color {
    rgb(category.rgb())
}

pub const fn pollutant_color(pollutant: Pollutant) -> Color {
    rgb(pollutant.rgb())
}

pub fn title_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn border_style() -> Style {
    Style::default().fg(ACCENT)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}
