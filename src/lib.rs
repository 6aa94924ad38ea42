//! Deterministic prompt colors: derive a stable, legible color pair from a
//! string such as a hostname, and map it onto the xterm-256 palette.

pub mod cli;
pub mod color;
pub mod error;
pub mod generate;
pub mod host;
pub mod quantize;
pub mod segment;
pub mod theme;

pub use color::{decode, encode, select_contrast, Color};
pub use error::ColorError;
pub use generate::{generate, seed_digest, ContrastPair};
pub use quantize::{PaletteMapper, Xterm256};
