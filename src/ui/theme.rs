use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const DIALOG_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const DIALOG_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const BACKDROP: Color = Color::Black;
pub const TIP_BORDER: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const TIP_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
