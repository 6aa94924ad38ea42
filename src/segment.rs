use crate::generate::generate;
use crate::quantize::PaletteMapper;
use crate::theme::Theme;

/// Shell the prompt fragment is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Bare,
}

impl Shell {
    /// Mark a non-printing sequence so the prompt width is counted right.
    pub fn escape(self, sequence: &str) -> String {
        match self {
            Shell::Bash => format!("\\[{sequence}\\]"),
            Shell::Zsh => format!("%{{{sequence}%}}"),
            Shell::Bare => sequence.to_string(),
        }
    }
}

/// One rendered prompt fragment with palette-indexed colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub fg: u8,
    pub bg: u8,
}

impl Segment {
    /// Wrap the text in 256-color SGR sequences, resetting afterwards.
    pub fn to_ansi(&self) -> String {
        self.to_prompt(Shell::Bare)
    }

    /// Like [`Segment::to_ansi`], but with each escape sequence marked as
    /// zero-width for the shell's line editor.
    pub fn to_prompt(&self, shell: Shell) -> String {
        let fg = shell.escape(&format!("\x1b[38;5;{}m", self.fg));
        let bg = shell.escape(&format!("\x1b[48;5;{}m", self.bg));
        let reset = shell.escape("\x1b[0m");
        format!("{fg}{bg}{}{reset}", self.text)
    }
}

/// The hostname segment.
///
/// When colorized, the full hostname seeds the color pair so every host
/// keeps its own stable colors. Otherwise the theme's fixed colors are used
/// and bash/zsh expand their own hostname escape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostnameSegment {
    pub colorize: bool,
}

impl HostnameSegment {
    pub fn new(colorize: bool) -> Self {
        Self { colorize }
    }

    pub fn render(
        &self,
        hostname: &str,
        shell: Shell,
        theme: &Theme,
        mapper: &impl PaletteMapper,
    ) -> Segment {
        if self.colorize {
            let pair = generate(hostname);
            return Segment {
                text: format!(" {} ", short_hostname(hostname)),
                fg: mapper.nearest_palette_entry(pair.foreground),
                bg: mapper.nearest_palette_entry(pair.background),
            };
        }

        let text = match shell {
            Shell::Bash => r" \h ".to_string(),
            Shell::Zsh => " %m ".to_string(),
            Shell::Bare => format!(" {} ", short_hostname(hostname)),
        };
        Segment {
            text,
            fg: theme.hostname_fg,
            bg: theme.hostname_bg,
        }
    }
}

/// Hostname up to the first dot.
pub fn short_hostname(hostname: &str) -> &str {
    hostname.split('.').next().unwrap_or(hostname)
}
