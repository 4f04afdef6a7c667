//! RGB colors used by palettes and themes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// An opaque 24-bit sRGB color.
///
/// Colors display and serialize as `#RRGGBB` hex strings, which is also the
/// form accepted by [`Color::from_hex`] (the leading `#` is optional).
///
/// # Example
///
/// ```rust
/// use scistyle::Color;
///
/// let blue = Color::from_hex("#1965B0").unwrap();
/// assert_eq!(blue, Color::rgb(0x19, 0x65, 0xB0));
/// assert_eq!(blue.to_string(), "#1965B0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Error returned when a color string is not a valid `#RRGGBB` value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color \"{input}\": expected #RRGGBB")]
pub struct ColorParseError {
    pub input: String,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    /// Creates a color from its channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from a packed `0xRRGGBB` value.
    pub const fn from_u32(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// Parses `#RRGGBB` or `RRGGBB`, case-insensitive.
    pub fn from_hex(input: &str) -> Result<Self, ColorParseError> {
        let err = || ColorParseError {
            input: input.to_string(),
        };
        let digits = input.strip_prefix('#').unwrap_or(input);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }
        u32::from_str_radix(digits, 16)
            .map(Self::from_u32)
            .map_err(|_| err())
    }

    /// Squared Euclidean distance in RGB space.
    pub fn distance_sq(&self, other: &Color) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Converts to the nearest ANSI 256-color palette index.
    ///
    /// Picks whichever is closer: the nearest entry of the 6x6x6 color cube
    /// (16..=231) or of the grayscale ramp (232..=255). Used for terminal
    /// swatches on terminals without true-color support.
    ///
    /// ```rust
    /// use scistyle::Color;
    ///
    /// assert_eq!(Color::rgb(255, 0, 0).to_ansi256(), 196);
    /// assert_eq!(Color::rgb(0, 255, 0).to_ansi256(), 46);
    /// ```
    pub fn to_ansi256(&self) -> u8 {
        let (r, g, b) = (cube_step(self.r), cube_step(self.g), cube_step(self.b));
        let cube = Color::rgb(CUBE_LEVELS[r], CUBE_LEVELS[g], CUBE_LEVELS[b]);
        let cube_index = 16 + 36 * r as u8 + 6 * g as u8 + b as u8;

        let mean = (self.r as u16 + self.g as u16 + self.b as u16) / 3;
        let step = (mean.saturating_sub(3) / 10).min(23) as u8;
        let level = 8 + 10 * step;
        let gray = Color::rgb(level, level, level);

        if gray.distance_sq(self) < cube.distance_sq(self) {
            232 + step
        } else {
            cube_index
        }
    }

    /// Builds a color from HSV components, each in `0.0..=1.0`.
    pub(crate) fn from_hsv(h: f64, s: f64, v: f64) -> Self {
        let h = h.rem_euclid(1.0) * 6.0;
        let sector = h.floor();
        let f = h - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));
        let (r, g, b) = match sector as u8 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        let channel = |x: f64| (x.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::rgb(channel(r), channel(g), channel(b))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Channel values of the ANSI 6x6x6 color cube.
const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// Index of the cube level nearest to `channel`.
fn cube_step(channel: u8) -> usize {
    CUBE_LEVELS
        .iter()
        .enumerate()
        .min_by_key(|(_, level)| (channel as i16 - **level as i16).unsigned_abs())
        .map_or(0, |(i, _)| i)
}
