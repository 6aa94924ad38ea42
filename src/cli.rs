use clap::Parser;

use crate::segment::Shell;

/// Render a hostname prompt segment whose colors are derived from the name.
#[derive(Parser, Debug)]
#[command(name = "promptline", version, about)]
pub struct Args {
    /// Seed string (defaults to this machine's hostname)
    pub seed: Option<String>,

    /// Shell the fragment is rendered for
    #[arg(short, long, value_enum, default_value_t = Shell::Bash)]
    pub shell: Shell,

    /// Use the theme's fixed hostname colors instead of derived ones
    #[arg(long)]
    pub no_colorize: bool,

    /// Print the derived colors and palette indices instead of the fragment
    #[arg(long)]
    pub info: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
