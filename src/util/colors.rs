use ratatui::style::Color;

pub const PRIMARY: Color = Color::from_u32(0x001db954);
pub const SECONDARY: Color = Color::from_u32(0x00146c34);
pub const NEUTRAL: Color = Color::from_u32(0x00535353);
pub const TEXT: Color = Color::from_u32(0x00e0e0e0);
pub const BACKGROUND: Color = Color::from_u32(0x00121212);
pub const ERROR: Color = Color::from_u32(0x00e05561);
