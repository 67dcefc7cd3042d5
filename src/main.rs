use std::path::PathBuf;

use anyhow::Error;
use clap::Parser;
use log::info;

use maze_level::gui;
use maze_level::level::description::LevelDescription;
use maze_level::level::Level;
use maze_level::standard_levels::StandardLevel;

const DEFAULT_TILE_SIZE: u32 = 32;

/// Shows a maze level in a window.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Level description to show; the default standard level is used when omitted.
    #[arg(value_name = "LEVEL.json")]
    level: Option<PathBuf>,
    /// Edge length of one tile, in pixels.
    #[arg(
        long,
        value_name = "PIXELS",
        default_value_t = DEFAULT_TILE_SIZE,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    tile_size: u32,
}

fn main() -> Result<(), Error> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = CliArgs::parse();

    let description = match &args.level {
        Some(path) => {
            info!("Loading level from {}", path.display());
            LevelDescription::load(path)?
        }
        None => {
            let standard = StandardLevel::default();
            info!("No level file given, using {standard:?}");
            standard.description()
        }
    };

    let level = Level::new(&description, args.tile_size)?;
    gui::run_gui(level)
}
