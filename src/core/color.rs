use std::fmt;

use serde::{Deserialize, Serialize};

/// Packed 0xRRGGBB display color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(u32);

impl Color {
    pub const RED: Color = Color(0xff0000);
    /// Dirt brown used for platforms.
    pub const PLATFORM: Color = Color(0x664200);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn packed(&self) -> u32 {
        self.0
    }

    /// Parse `#rgb` or `#rrggbb`.
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| format!("color '{}' must start with '#'", s))?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("color '{}' has non-hex digits", s));
        }
        let value = u32::from_str_radix(digits, 16).map_err(|e| e.to_string())?;
        match digits.len() {
            3 => {
                let r = (value >> 8) & 0xf;
                let g = (value >> 4) & 0xf;
                let b = value & 0xf;
                Ok(Color((r * 0x11) << 16 | (g * 0x11) << 8 | b * 0x11))
            }
            6 => Ok(Color(value)),
            n => Err(format!("color '{}' has {} digits, expected 3 or 6", s, n)),
        }
    }

    /// CSS fill style string, always `#rrggbb`.
    pub fn css(&self) -> String {
        format!("#{:06x}", self.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Color::from_hex(&s)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> String {
        c.css()
    }
}
