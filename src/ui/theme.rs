use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x5e, 0xa1, 0xd6);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const FOCUSED_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const PLACEHOLDER_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const SELECTED_MARK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const CURSOR_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
