use palette::Lab;

use crate::color::Color;

/// Maps a 24-bit color onto a terminal's fixed palette.
pub trait PaletteMapper {
    /// Index of the palette entry closest to `color`.
    fn nearest_palette_entry(&self, color: Color) -> u8;
}

/// The 16 system colors as xterm ships them. Terminals and themes remap
/// these freely, so they are never chosen as a nearest match.
const SYSTEM_COLORS: [Color; 16] = [
    Color::new(0, 0, 0),
    Color::new(205, 0, 0),
    Color::new(0, 205, 0),
    Color::new(205, 205, 0),
    Color::new(0, 0, 238),
    Color::new(205, 0, 205),
    Color::new(0, 205, 205),
    Color::new(229, 229, 229),
    Color::new(127, 127, 127),
    Color::new(255, 0, 0),
    Color::new(0, 255, 0),
    Color::new(255, 255, 0),
    Color::new(92, 92, 255),
    Color::new(255, 0, 255),
    Color::new(0, 255, 255),
    Color::new(255, 255, 255),
];

const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// First index searched by [`Xterm256`].
const FIRST_STABLE_INDEX: u8 = 16;

/// RGB value of an xterm-256 palette index.
pub fn xterm_to_rgb(index: u8) -> Color {
    match index {
        0..=15 => SYSTEM_COLORS[index as usize],
        // 6x6x6 color cube
        16..=231 => {
            let i = index - 16;
            Color::new(
                CUBE_LEVELS[(i / 36) as usize],
                CUBE_LEVELS[((i % 36) / 6) as usize],
                CUBE_LEVELS[(i % 6) as usize],
            )
        }
        // grayscale ramp
        232..=255 => {
            let v = 8 + 10 * (index - 232);
            Color::new(v, v, v)
        }
    }
}

/// Nearest-match quantizer for 256-color terminals.
///
/// Distance is squared Euclidean in CIELAB. Only the color cube and the
/// grayscale ramp (indices 16-255) are candidates; ties go to the lower index.
#[derive(Debug, Clone)]
pub struct Xterm256 {
    entries: Vec<(u8, Lab)>,
}

impl Xterm256 {
    pub fn new() -> Self {
        let entries = (FIRST_STABLE_INDEX..=255)
            .map(|index| (index, xterm_to_rgb(index).to_lab()))
            .collect();
        Self { entries }
    }
}

impl Default for Xterm256 {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteMapper for Xterm256 {
    fn nearest_palette_entry(&self, color: Color) -> u8 {
        let target = color.to_lab();
        let mut best = (FIRST_STABLE_INDEX, f32::MAX);
        for &(index, lab) in &self.entries {
            let dist = (target.l - lab.l).powi(2)
                + (target.a - lab.a).powi(2)
                + (target.b - lab.b).powi(2);
            if dist < best.1 {
                best = (index, dist);
            }
        }
        tracing::trace!(color = %color, index = best.0, "quantized to xterm-256");
        best.0
    }
}
