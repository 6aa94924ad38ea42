use md5::{Digest, Md5};

use crate::color::Color;
use crate::error::ColorError;

/// A background color and the black or white text color legible on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContrastPair {
    pub background: Color,
    pub foreground: Color,
}

impl ContrastPair {
    /// Pair a background with its contrasting text color.
    pub fn for_background(background: Color) -> Self {
        Self {
            background,
            foreground: background.contrasting(),
        }
    }

    /// Build a pair from a six-digit hex background, e.g. a digest prefix.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        Color::from_hex(hex).map(Self::for_background)
    }
}

/// Full lowercase MD5 hex digest of the seed's UTF-8 bytes.
pub fn seed_digest(seed: &str) -> String {
    hex::encode(Md5::digest(seed.as_bytes()))
}

/// Derive a stable color pair from an arbitrary string.
///
/// The background is the first six hex digits of the seed's MD5 digest,
/// i.e. its first three bytes. MD5 is used for spread only, and is fixed so
/// a given hostname keeps the same prompt colors across versions.
pub fn generate(seed: &str) -> ContrastPair {
    let digest = Md5::digest(seed.as_bytes());
    let background = Color::new(digest[0], digest[1], digest[2]);
    let pair = ContrastPair::for_background(background);
    tracing::debug!(
        seed,
        background = %pair.background,
        foreground = %pair.foreground,
        "derived seed colors"
    );
    pair
}
