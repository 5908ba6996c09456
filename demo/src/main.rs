//! Terminal A* visualiser.
//!
//! Run: cargo run --bin pathstep -- --rows 20 --cols 30 --walls 25

use std::time::Duration;

use clap::Parser;
use pathstep_core::app::{App, AppConfig};
use pathstep_crossterm::CrosstermDriver;
use pathstep_demo::{Config, Visualizer};

#[derive(Parser, Debug)]
#[command(name = "pathstep", version, about = "Watch A* search a grid one cell at a time")]
struct Args {
    /// Grid rows (at least 5).
    #[arg(long, default_value_t = 20)]
    rows: i32,

    /// Grid columns (at least 5).
    #[arg(long, default_value_t = 20)]
    cols: i32,

    /// Animation speed multiplier (1 to 16).
    #[arg(long, default_value_t = 1)]
    speed: u32,

    /// Delay between search steps at speed 1, in milliseconds.
    #[arg(
        long = "delay-ms",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    delay_ms: u64,

    /// Scatter walls over this percentage of cells at start-up.
    #[arg(long, value_name = "PERCENT")]
    walls: Option<u32>,

    /// Seed for wall scattering.
    #[arg(long)]
    seed: Option<u64>,

    /// Do not capture the mouse.
    #[arg(long = "no-mouse")]
    no_mouse: bool,
}

fn main() {
    let args = Args::parse();
    let vis = match Visualizer::new(Config {
        rows: args.rows,
        cols: args.cols,
        speed: args.speed,
        delay: Duration::from_millis(args.delay_ms),
        walls: args.walls,
        seed: args.seed,
    }) {
        Ok(vis) => vis,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    let (rows, cols) = CrosstermDriver::size().unwrap_or_else(|_| vis.screen_size());
    let driver = CrosstermDriver::new().with_mouse(!args.no_mouse);
    let mut app = App::new(AppConfig {
        model: vis,
        driver,
        rows,
        cols,
    });

    if let Err(e) = app.run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
