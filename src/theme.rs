/// Fixed palette indices used when a segment is not colorized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub hostname_fg: u8,
    pub hostname_bg: u8,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            hostname_fg: 250,
            hostname_bg: 238,
        }
    }
}
