use std::str::FromStr;

use palette::{IntoColor, Lab, Srgb};

use crate::error::ColorError;

/// Core color type used throughout the crate.
/// Wraps sRGB u8 components; the `u8` channels keep every value in [0, 255].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a six-digit hex color like `ff8800` or `FF8800`.
    ///
    /// The whole string is validated before any channel is parsed, so a
    /// string with a bad digit in the last pair fails just like one with a
    /// bad digit in the first. A leading `#` is not accepted.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidFormat(hex.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| ColorError::InvalidFormat(hex.to_string()))
        };
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// Serialize to lowercase hex `rrggbb`.
    pub fn to_hex(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels as an `[r, g, b]` array.
    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// HSL lightness of the color, in [0, 1].
    ///
    /// Channels are normalized by 255 first, then `L = (min + max) / 2`.
    pub fn lightness(self) -> f64 {
        let [r, g, b] = self.channels().map(|c| c as f64 / 255.0);
        let min = r.min(g).min(b);
        let max = r.max(g).max(b);
        (min + max) / 2.0
    }

    /// Black or white, whichever reads better on top of `self`.
    ///
    /// Strictly lighter than half goes to black; exactly 0.5 stays white.
    pub fn contrasting(self) -> Color {
        if self.lightness() > 0.5 {
            Color::BLACK
        } else {
            Color::WHITE
        }
    }

    /// Convert to CIELAB (for nearest-palette-entry distance).
    pub fn to_lab(self) -> Lab {
        let srgb_f32: Srgb<f32> = Srgb::<u8>::from(self).into_format();
        srgb_f32.into_color()
    }
}

impl From<Color> for Srgb<u8> {
    fn from(color: Color) -> Self {
        Srgb::new(color.r, color.g, color.b)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Decode a six-digit hex string into a color.
pub fn decode(hex: &str) -> Result<Color, ColorError> {
    Color::from_hex(hex)
}

/// Encode a color as six lowercase hex digits.
pub fn encode(color: Color) -> String {
    color.to_hex()
}

/// Pick black or white text for an untyped channel tuple.
///
/// Anything other than exactly three channels is rejected with
/// [`ColorError::InvalidArity`].
pub fn select_contrast(channels: &[u8]) -> Result<Color, ColorError> {
    let [r, g, b]: [u8; 3] = channels
        .try_into()
        .map_err(|_| ColorError::InvalidArity(channels.len()))?;
    Ok(Color::new(r, g, b).contrasting())
}
