//! Material Design 3 dark theme colors

use quicktip_core::Theme;
use ratatui::style::Color;

pub const BG: Color = Color::Rgb(0x14, 0x13, 0x13);
pub const SURFACE: Color = Color::Rgb(0x20, 0x1f, 0x20);
pub const SURFACE_HIGH: Color = Color::Rgb(0x2b, 0x2a, 0x2a);

pub const ON_SURFACE: Color = Color::Rgb(0xe6, 0xe1, 0xe1);
pub const SUBTEXT: Color = Color::Rgb(0xcb, 0xc5, 0xca);
pub const OUTLINE: Color = Color::Rgb(0x94, 0x8f, 0x94);

pub const ERROR: Color = Color::Rgb(0xff, 0xb4, 0xab);

pub const WARNING: Color = Color::Rgb(0xff, 0xd9, 0x66);

const ACCENT_RED: Color = Color::Rgb(0xff, 0x45, 0x3a);
const ACCENT_YELLOW: Color = Color::Rgb(0xff, 0xd6, 0x0a);
const ACCENT_BLUE: Color = Color::Rgb(0x0a, 0x84, 0xff);

/// Accent used for focus borders, the selected segment and the total
pub fn accent(theme: Theme) -> Color {
    match theme {
        Theme::Red => ACCENT_RED,
        Theme::Yellow => ACCENT_YELLOW,
        Theme::Blue => ACCENT_BLUE,
    }
}
