use derive_more::{From, Into};
use palette::Srgba;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Fill color of a slot or dot.
///
/// Parses `#rgb`, `#rrggbb`, `#aarrggbb` (alpha first, as in Android
/// resources) and CSS color names such as `tomato`.
#[derive(Debug, Clone, Copy, PartialEq, From, Into, SerializeDisplay, DeserializeFromStr)]
pub struct Color(Srgba<f64>);

impl Color {
    pub fn black() -> Self {
        Self(Srgba::new(0.0, 0.0, 0.0, 1.0))
    }

    pub fn from_argb(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self(Srgba::new(red, green, blue, alpha).into_format())
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("'{0}' is not a hex color or a known color name")]
    Unknown(String),
    #[error("hex color '{0}' must have 3, 6 or 8 digits")]
    InvalidLength(String),
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some(hex) = s.strip_prefix('#') else {
            return palette::named::from_str(&s.to_ascii_lowercase())
                .map(|named| {
                    let (r, g, b) = named.into_components();
                    Self::from_argb(0xff, r, g, b)
                })
                .ok_or_else(|| ColorParseError::Unknown(s.to_string()));
        };

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::Unknown(s.to_string()));
        }

        // all ascii past this point, so byte slicing is safe
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or_default();
        match hex.len() {
            3 => {
                let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).unwrap_or_default() * 17;
                Ok(Self::from_argb(0xff, nibble(0), nibble(1), nibble(2)))
            }
            6 => Ok(Self::from_argb(0xff, byte(0), byte(2), byte(4))),
            8 => Ok(Self::from_argb(byte(0), byte(2), byte(4), byte(6))),
            _ => Err(ColorParseError::InvalidLength(s.to_string())),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b, a) = self.0.into_format::<u8, u8>().into_components();
        write!(f, "#{a:02x}{r:02x}{g:02x}{b:02x}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_forms() {
        let cases = vec![
            ("#f00", Color::from_argb(0xff, 0xff, 0, 0)),
            ("#00ff00", Color::from_argb(0xff, 0, 0xff, 0)),
            ("#800000ff", Color::from_argb(0x80, 0, 0, 0xff)),
            ("  #FFFFFF ", Color::from_argb(0xff, 0xff, 0xff, 0xff)),
        ];

        for (input, expected) in cases {
            assert_eq!(input.parse::<Color>().unwrap(), expected, "{input}");
        }
    }

    #[test]
    fn test_named_color() {
        assert_eq!("Black".parse::<Color>().unwrap(), Color::black());
        assert_eq!(
            "tomato".parse::<Color>().unwrap(),
            Color::from_argb(0xff, 0xff, 0x63, 0x47)
        );
    }

    #[test]
    fn test_invalid_colors() {
        assert!(matches!(
            "#12345".parse::<Color>(),
            Err(ColorParseError::InvalidLength(_))
        ));
        assert!(matches!(
            "#zzzzzz".parse::<Color>(),
            Err(ColorParseError::Unknown(_))
        ));
        assert!(matches!(
            "not-a-color".parse::<Color>(),
            Err(ColorParseError::Unknown(_))
        ));
    }

    #[test]
    fn test_display_round_trips() {
        let color = Color::from_argb(0xcc, 0x12, 0x34, 0x56);
        assert_eq!(color.to_string(), "#cc123456");
        assert_eq!(color.to_string().parse::<Color>().unwrap(), color);
    }

    #[test]
    fn test_serde() {
        let color: Color = serde_json::from_str("\"#ff0000\"").unwrap();
        assert_eq!(color, Color::from_argb(0xff, 0xff, 0, 0));
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"#ffff0000\"");
    }
}
