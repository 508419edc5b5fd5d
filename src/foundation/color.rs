use serde::{Deserialize, Serialize};

use crate::foundation::error::{CoverError, CoverResult};

/// 8-bit RGB color used throughout the cover model.
///
/// Serialized as a lowercase `#rrggbb` string. Alpha is never part of the
/// color itself; where opacity applies (text backgrounds, gradient bands) it
/// is a separate 0..1 knob on the owning struct.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Construct from raw channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Opaque black, the documented fallback for malformed color input.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Opaque white.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Parse a `RRGGBB` or `#RRGGBB` hex string (case-insensitive).
    pub fn from_hex(s: &str) -> CoverResult<Self> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(CoverError::invalid_color(format!(
                "expected RRGGBB or #RRGGBB, got \"{s}\""
            )));
        }

        let byte = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| {
                CoverError::invalid_color(format!("invalid hex byte in \"{s}\""))
            })
        };

        Ok(Self {
            r: byte(0..2)?,
            g: byte(2..4)?,
            b: byte(4..6)?,
        })
    }

    /// Parse a hex string, falling back to black on malformed input.
    ///
    /// This is the non-fatal path for live color controls: a half-typed value
    /// must never abort a render.
    pub fn from_hex_or_black(s: &str) -> Self {
        Self::from_hex(s).unwrap_or(Self::BLACK)
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Straight-alpha RGBA8 with the given 0..1 opacity.
    pub fn with_opacity(self, opacity: f64) -> [u8; 4] {
        let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        [self.r, self.g, self.b, a]
    }
}

impl Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
