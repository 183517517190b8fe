mod border;
mod canvas;
mod config;
mod dice;
mod error;
mod garden;
mod help;
mod settings;
mod terminal;

use clap::Parser;
use config::{GardenConfig, MAX_TICK};
use error::GardenError;
use settings::Settings;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "flowerbox")]
#[command(author = "Terminal Art Generator")]
#[command(version)]
#[command(about = "Terminal flower box: click to drop seeds and watch them grow", long_about = None)]
struct Cli {
    /// Seconds per animation tick
    #[arg(short, long)]
    time: Option<f32>,

    /// Random seed for reproducibility
    #[arg(short, long)]
    seed: Option<u64>,

    /// Plant a row of seeds right away
    #[arg(short, long)]
    auto: bool,

    /// Show the live flower count
    #[arg(short, long)]
    debug: bool,

    /// Write logs to this file
    #[arg(short, long)]
    log: Option<PathBuf>,
}

fn main() {
    if let Err(e) = try_main() {
        eprintln!("flowerbox: {}", e);
        std::process::exit(1);
    }
}

fn try_main() -> Result<(), GardenError> {
    let cli = Cli::parse();
    let settings = Settings::load()?;
    let config = build_config(cli, settings);

    init_logging(&config)?;
    garden::run(config)
}

/// Merge command line flags over the settings file
fn build_config(cli: Cli, settings: Settings) -> GardenConfig {
    let defaults = GardenConfig::default();
    let tick = cli
        .time
        .or(settings.garden.tick)
        .and_then(|secs| Duration::try_from_secs_f32(secs).ok())
        .filter(|tick| !tick.is_zero() && *tick <= MAX_TICK)
        .unwrap_or(defaults.tick);

    GardenConfig {
        tick,
        seed: cli.seed,
        side_margin: settings.garden.side_margin.unwrap_or(defaults.side_margin),
        bottom_margin: settings.garden.bottom_margin.unwrap_or(defaults.bottom_margin),
        auto_plant: cli.auto,
        diagnostics: cli.debug,
        log_file: cli.log.or(settings.log.file),
        log_level: settings.log.level.unwrap_or(defaults.log_level),
    }
}

/// Send tracing output to the log file, if there is one; stdout belongs to the animation
fn init_logging(config: &GardenConfig) -> Result<(), GardenError> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(filter)
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("flowerbox").chain(args.iter().copied()))
    }

    #[test]
    fn flags_override_settings() {
        let settings: Settings = toml::from_str("[garden]\ntick = 0.5\nside_margin = 9\n").unwrap();
        let config = build_config(cli(&["-t", "0.05", "-a", "-s", "3"]), settings);
        assert_eq!(config.tick, Duration::from_secs_f32(0.05));
        assert_eq!(config.side_margin, 9);
        assert_eq!(config.bottom_margin, 3);
        assert_eq!(config.seed, Some(3));
        assert!(config.auto_plant);
        assert!(!config.diagnostics);
    }

    #[test]
    fn bad_tick_falls_back_to_default() {
        let config = build_config(cli(&["--time", "0"]), Settings::default());
        assert_eq!(config.tick, Duration::from_millis(100));
    }

    #[test]
    fn huge_tick_falls_back_to_default() {
        let config = build_config(cli(&["--time", "1e30"]), Settings::default());
        assert_eq!(config.tick, Duration::from_millis(100));

        let settings: Settings = toml::from_str("[garden]\ntick = 60.0\n").unwrap();
        assert_eq!(build_config(cli(&[]), settings).tick, Duration::from_millis(100));
    }

    #[test]
    fn negative_or_nan_tick_falls_back_to_default() {
        for arg in ["--time=-1", "--time=NaN", "--time=inf"] {
            let config = build_config(cli(&[arg]), Settings::default());
            assert_eq!(config.tick, Duration::from_millis(100), "{}", arg);
        }
    }

    #[test]
    fn longest_tick_is_kept() {
        let config = build_config(cli(&["--time", "10"]), Settings::default());
        assert_eq!(config.tick, MAX_TICK);
    }

    #[test]
    fn log_file_from_flag_wins() {
        let settings: Settings = toml::from_str("[log]\nfile = \"/tmp/a.log\"\n").unwrap();
        let config = build_config(cli(&["--log", "/tmp/b.log"]), settings);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/b.log")));
        assert_eq!(config.log_level, "info");
    }
}
