use std::ops::ControlFlow::{Break, Continue};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use mx::math::{degs, pt2};
use mx_front::{Frame, minifb::Window};
use morphx_demos::phyllotaxis::{
    DEFAULT_DIVERGENCE_DEGS, DEFAULT_SPACING, HueSource, Painter, Phyllotaxis,
};

/// Draws a phyllotaxis spiral, a few seeds at a time.
///
/// Resize the window to start over. Press Esc to quit.
#[derive(Debug, Parser)]
#[command(name = "phyllotaxis", version, about)]
struct Args {
    /// Initial window width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Spacing constant c; seed n is drawn at radius c·√n
    #[arg(long, default_value_t = DEFAULT_SPACING)]
    spacing: f64,

    /// Divergence angle between consecutive seeds, in degrees
    #[arg(long, default_value_t = DEFAULT_DIVERGENCE_DEGS)]
    divergence: f64,

    /// Number of seeds drawn per frame
    #[arg(long, default_value_t = 4)]
    per_frame: u32,

    /// Frame rate cap
    #[arg(long, default_value_t = 33)]
    fps: u32,

    /// Seed property that determines the hue
    #[arg(long, value_enum, default_value_t = HueSource::Angle)]
    hue_source: HueSource,

    /// Quit after this many seeds
    #[arg(long)]
    max_seeds: Option<u32>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    info!(?args, "starting");

    let mut win = Window::builder()
        .title("morphx//phyllotaxis")
        .dims((args.width, args.height))
        .target_fps(Some(args.fps))
        .resizable(true)
        .build()
        .context("failed to create window")?;

    let center = |(w, h): (usize, usize)| pt2((w / 2) as f64, (h / 2) as f64);

    let dims = (args.width as usize, args.height as usize);
    let mut spiral = Phyllotaxis::new(center(dims))
        .spacing(args.spacing)
        .divergence(degs(args.divergence));
    let mut painter = Painter::new(args.hue_source, args.spacing);

    win.run(|frame: &mut Frame<_>| {
        if frame.resized {
            spiral.reset(center(frame.dims()));
            debug!(dims = ?frame.dims(), "spiral restarted");
        }
        for seed in spiral.by_ref().take(args.per_frame as usize) {
            painter.draw(frame.bitmap, &seed);
        }
        match args.max_seeds {
            Some(max) if spiral.next_index() >= max => {
                info!(seeds = spiral.next_index(), "seed limit reached");
                Break(())
            }
            _ => Continue(()),
        }
    })
    .context("main loop failed")?;

    Ok(())
}
