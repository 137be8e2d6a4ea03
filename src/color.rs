//! Background colors
//!
//! Colors are kept at 16 bits per channel, the precision the gradient filler
//! interpolates in. Pixels are produced by dropping the low byte.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An RGB color with 16-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb16 {
    pub red: u16,
    pub green: u16,
    pub blue: u16,
}

/// Names accepted in addition to numeric forms, as 8-bit triples
const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("black", [0, 0, 0]),
    ("white", [255, 255, 255]),
    ("red", [255, 0, 0]),
    ("green", [0, 255, 0]),
    ("blue", [0, 0, 255]),
    ("yellow", [255, 255, 0]),
    ("cyan", [0, 255, 255]),
    ("magenta", [255, 0, 255]),
    ("gray", [190, 190, 190]),
    ("grey", [190, 190, 190]),
    ("darkgray", [169, 169, 169]),
    ("darkgrey", [169, 169, 169]),
    ("lightgray", [211, 211, 211]),
    ("lightgrey", [211, 211, 211]),
    ("navy", [0, 0, 128]),
    ("navyblue", [0, 0, 128]),
    ("steelblue", [70, 130, 180]),
    ("skyblue", [135, 206, 235]),
    ("midnightblue", [25, 25, 112]),
    ("darkslategray", [47, 79, 79]),
    ("darkslategrey", [47, 79, 79]),
    ("slategray", [112, 128, 144]),
    ("slategrey", [112, 128, 144]),
    ("forestgreen", [34, 139, 34]),
    ("darkgreen", [0, 100, 0]),
    ("orange", [255, 165, 0]),
    ("brown", [165, 42, 42]),
    ("purple", [160, 32, 240]),
];

impl Rgb16 {
    pub const fn new(red: u16, green: u16, blue: u16) -> Self {
        Self { red, green, blue }
    }

    /// Widen 8-bit channels by byte replication (`0xAB` -> `0xABAB`)
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            red: r as u16 * 0x101,
            green: g as u16 * 0x101,
            blue: b as u16 * 0x101,
        }
    }

    /// The 8-bit pixel value of this color (high byte of each channel)
    pub const fn to_rgb8(self) -> [u8; 3] {
        [
            (self.red >> 8) as u8,
            (self.green >> 8) as u8,
            (self.blue >> 8) as u8,
        ]
    }

    /// Parse a color specification.
    ///
    /// Accepted forms:
    /// - `#rgb`, `#rrggbb`, `#rrrgggbbb`, `#rrrrggggbbbb`: digits are
    ///   left-aligned into 16 bits, so `#f00` is red `0xf000`
    /// - `rgb:r/g/b` with 1 to 4 hex digits per channel, scaled to 16 bits
    /// - a color name such as `black` or `steelblue` (case and spaces ignored)
    pub fn parse(s: &str) -> Result<Self> {
        let spec = s.trim();
        let invalid = || Error::InvalidColor(s.to_string());

        if let Some(hex) = spec.strip_prefix('#') {
            return Self::parse_hash(hex).ok_or_else(invalid);
        }

        if let Some(body) = spec.strip_prefix("rgb:") {
            return Self::parse_rgb_slash(body).ok_or_else(invalid);
        }

        let name: String = spec
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        NAMED_COLORS
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, [r, g, b])| Self::from_rgb8(*r, *g, *b))
            .ok_or_else(invalid)
    }

    fn parse_hash(hex: &str) -> Option<Self> {
        if hex.is_empty() || hex.len() % 3 != 0 || hex.len() > 12 {
            return None;
        }
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let digits = hex.len() / 3;
        let shift = 16 - 4 * digits as u32;
        let channel = |i: usize| -> Option<u16> {
            let part = &hex[i * digits..(i + 1) * digits];
            let value = u32::from_str_radix(part, 16).ok()?;
            Some((value << shift) as u16)
        };

        Some(Self {
            red: channel(0)?,
            green: channel(1)?,
            blue: channel(2)?,
        })
    }

    fn parse_rgb_slash(body: &str) -> Option<Self> {
        let parts: Vec<&str> = body.split('/').collect();
        if parts.len() != 3 {
            return None;
        }

        let channel = |part: &str| -> Option<u16> {
            if part.is_empty() || part.len() > 4 || !part.chars().all(|c| c.is_ascii_hexdigit()) {
                return None;
            }
            let value = u32::from_str_radix(part, 16).ok()?;
            let max = (1u32 << (4 * part.len() as u32)) - 1;
            Some((value * 0xFFFF / max) as u16)
        };

        Some(Self {
            red: channel(parts[0])?,
            green: channel(parts[1])?,
            blue: channel(parts[2])?,
        })
    }
}

impl std::str::FromStr for Rgb16 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_six_digit_hex() {
        let color = Rgb16::parse("#356390").unwrap();
        assert_eq!(color, Rgb16::new(0x3500, 0x6300, 0x9000));
        assert_eq!(color.to_rgb8(), [0x35, 0x63, 0x90]);
    }

    #[test]
    fn test_parse_short_and_long_hex() {
        assert_eq!(Rgb16::parse("#f00").unwrap(), Rgb16::new(0xF000, 0, 0));
        assert_eq!(
            Rgb16::parse("#123456789abc").unwrap(),
            Rgb16::new(0x1234, 0x5678, 0x9ABC)
        );
        assert_eq!(
            Rgb16::parse("#fffeeeddd").unwrap(),
            Rgb16::new(0xFFF0, 0xEEE0, 0xDDD0)
        );
    }

    #[test]
    fn test_parse_rgb_slash_form() {
        assert_eq!(
            Rgb16::parse("rgb:ff/0/8").unwrap(),
            Rgb16::new(0xFFFF, 0, 0x8888)
        );
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(Rgb16::parse("White").unwrap(), Rgb16::new(0xFFFF, 0xFFFF, 0xFFFF));
        assert_eq!(
            Rgb16::parse("steel blue").unwrap().to_rgb8(),
            [70, 130, 180]
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Rgb16::parse("#12345").is_err());
        assert!(Rgb16::parse("#gggggg").is_err());
        assert!(Rgb16::parse("rgb:1/2").is_err());
        assert!(Rgb16::parse("not-a-color").is_err());
        assert!(Rgb16::parse("").is_err());
    }
}
