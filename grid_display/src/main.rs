// main.rs - Desktop viewer for the conway universe

use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, ValueEnum};
use conway::patterns::PATTERNS;
use conway::{BitCells, ByteCells, Layout, Pattern, Seed, Universe};
use eframe::egui;
use log::info;

mod app;
mod cycle;
mod fps;

use app::{GridApp, Settings};

/// Conway's Game of Life on a wrapping grid
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Grid width in cells
    #[arg(short, long, default_value = "64")]
    width: u32,

    /// Grid height in cells
    #[arg(long, default_value = "64")]
    height: u32,

    /// Storage layout of the cell buffer
    #[arg(long, value_enum, default_value_t = LayoutArg::Bits)]
    layout: LayoutArg,

    /// Start from a random fill with this seed
    #[arg(long, conflicts_with_all = ["pattern", "alternating"])]
    seed: Option<u64>,

    /// Start from a named pattern (e.g. "Glider", "Pulsar")
    #[arg(long, conflicts_with = "alternating")]
    pattern: Option<String>,

    /// Start from the alternating i%2 / i%7 pattern
    #[arg(long)]
    alternating: bool,

    /// Side of one cell in points
    #[arg(long, default_value = "10.0")]
    cell_size: f32,

    /// Milliseconds between generations while running
    #[arg(long, default_value = "100")]
    interval_ms: u64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LayoutArg {
    /// One bit per cell
    Bits,
    /// One byte per cell
    Bytes,
}

impl Args {
    fn initial_seed(&self) -> Result<Seed> {
        if let Some(seed) = self.seed {
            return Ok(Seed::Random(seed));
        }
        if let Some(name) = &self.pattern {
            let Some(pattern) = Pattern::find(name) else {
                let known: Vec<&str> = PATTERNS.iter().map(|p| p.name).collect();
                bail!("unknown pattern {name:?}; known patterns: {}", known.join(", "));
            };
            return Ok(Seed::Pattern(pattern));
        }
        if self.alternating {
            return Ok(Seed::Alternating);
        }
        Ok(Seed::Dead)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let seed = args.initial_seed()?;

    match args.layout {
        LayoutArg::Bits => run::<BitCells>(&args, seed),
        LayoutArg::Bytes => run::<ByteCells>(&args, seed),
    }
}

fn run<L: Layout + 'static>(args: &Args, seed: Seed) -> Result<()> {
    let universe: Universe<L> = Universe::with_seed(args.width, args.height, seed)
        .with_context(|| format!("cannot create a {}x{} universe", args.width, args.height))?;

    info!(
        "starting {}x{} universe, {} layout, {} bytes of cell state",
        universe.width(),
        universe.height(),
        L::NAME,
        universe.cells().len()
    );

    let pitch = args.cell_size + 1.0;
    let inner_size = [
        (pitch * args.width as f32 + 40.0).clamp(640.0, 1600.0),
        (pitch * args.height as f32 + 220.0).clamp(480.0, 1200.0),
    ];
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(inner_size),
        ..Default::default()
    };

    let settings = Settings {
        cell_size: args.cell_size,
        update_interval: Duration::from_millis(args.interval_ms.max(1)),
        random_seed: args.seed.unwrap_or(0).wrapping_add(1),
    };
    let app = GridApp::new(universe, settings);

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|err| anyhow!("viewer exited with an error: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_from_flags() {
        let args = Args::parse_from(["grid_display", "--seed", "9"]);
        assert_eq!(args.initial_seed().unwrap(), Seed::Random(9));

        let args = Args::parse_from(["grid_display", "--pattern", "pulsar"]);
        assert_eq!(args.initial_seed().unwrap(), Seed::Pattern(&conway::patterns::PULSAR));

        let args = Args::parse_from(["grid_display", "--alternating", "--layout", "bytes"]);
        assert_eq!(args.initial_seed().unwrap(), Seed::Alternating);
        assert!(matches!(args.layout, LayoutArg::Bytes));

        let args = Args::parse_from(["grid_display"]);
        assert_eq!(args.initial_seed().unwrap(), Seed::Dead);
        assert_eq!((args.width, args.height), (64, 64));
    }

    #[test]
    fn unknown_pattern_is_an_error() {
        let args = Args::parse_from(["grid_display", "--pattern", "spaceship"]);
        let err = args.initial_seed().unwrap_err();
        assert!(err.to_string().contains("Glider"));
    }

    #[test]
    fn conflicting_seed_flags_are_rejected() {
        assert!(Args::try_parse_from(["grid_display", "--seed", "1", "--alternating"]).is_err());
    }
}
