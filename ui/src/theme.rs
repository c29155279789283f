//! Colours used across the interface

use tuirealm::props::Color;

const AUTHOR_COLORS: [Color; 4] = [
    Color::LightCyan,
    Color::LightMagenta,
    Color::LightGreen,
    Color::LightBlue,
];

pub struct Palette;

impl Palette {
    pub fn primary_accent() -> Color {
        Color::Cyan
    }

    pub fn title_accent() -> Color {
        Color::Magenta
    }

    pub fn text_primary() -> Color {
        Color::White
    }

    pub fn text_muted() -> Color {
        Color::DarkGray
    }

    pub fn timestamp() -> Color {
        Color::Gray
    }

    pub fn status_loading() -> Color {
        Color::Yellow
    }

    pub fn status_info() -> Color {
        Color::Green
    }

    pub fn status_warning() -> Color {
        Color::LightYellow
    }

    pub fn status_error() -> Color {
        Color::Red
    }

    /// Stable colour per author name
    pub fn author(name: &str) -> Color {
        let hash = name.bytes().fold(0usize, |acc, b| acc.wrapping_add(b as usize));
        AUTHOR_COLORS[hash % AUTHOR_COLORS.len()]
    }
}
