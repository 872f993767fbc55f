use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 112, g: 196, b: 255 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const MAC_ADDR: Color = Color::TrueColor { r: 189, g: 147, b: 249 };
pub const DECIMAL: Color = Color::BrightGreen;
pub const HEX: Color = Color::TrueColor { r: 139, g: 233, b: 253 };
pub const FRAME: Color = Color::TrueColor { r: 241, g: 250, b: 140 };
