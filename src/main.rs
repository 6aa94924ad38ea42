use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use promptline::cli::Args;
use promptline::generate::{generate, seed_digest};
use promptline::host;
use promptline::quantize::{PaletteMapper, Xterm256};
use promptline::segment::HostnameSegment;
use promptline::theme::Theme;

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "promptline=debug"
    } else {
        "promptline=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let seed = match args.seed {
        Some(seed) => seed,
        None => host::hostname().context("failed to look up hostname")?,
    };
    let mapper = Xterm256::new();

    if args.info {
        let pair = generate(&seed);
        println!("seed = {seed}");
        println!("digest = {}", seed_digest(&seed));
        println!("background = {}", pair.background);
        println!("foreground = {}", pair.foreground);
        println!(
            "background-index = {}",
            mapper.nearest_palette_entry(pair.background)
        );
        println!(
            "foreground-index = {}",
            mapper.nearest_palette_entry(pair.foreground)
        );
        return Ok(());
    }

    let segment = HostnameSegment::new(!args.no_colorize).render(
        &seed,
        args.shell,
        &Theme::default(),
        &mapper,
    );
    print!("{}", segment.to_prompt(args.shell));
    Ok(())
}
