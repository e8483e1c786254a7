use colored::Color;

pub const SEPARATOR: Color = Color::TrueColor { r: 117, g: 113, b: 94 };
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 248, g: 248, b: 242 };
pub const ASN: Color = Color::TrueColor { r: 174, g: 129, b: 255 };
pub const IP_RANGE: Color = Color::TrueColor { r: 166, g: 226, b: 46 };
