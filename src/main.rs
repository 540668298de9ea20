use clap::{ArgAction, CommandFactory, Parser};
use serial_sim::config::{Config, ConfigLoader};
use serial_sim::error::AppResult;
use serial_sim::{logging, tui};
use std::path::PathBuf;
use std::process::ExitCode;

// Command-line arguments
#[derive(Parser, Debug)]
#[command(
    name = "sim",
    about = "Full-screen serial-port monitor with a vim-like command line.",
    long_about = "Full-screen serial-port monitor. Press ':' to open the command line (set_port, set_baud, set_format, q), Escape to clear an error, q to quit.",
    disable_help_flag = true
)]
struct Args {
    /// Print this help and exit.
    #[arg(short, long, action = ArgAction::SetTrue)]
    help: bool,

    /// Block waiting for input instead of polling once per tick.
    #[arg(short, long)]
    blocking_input: bool,

    /// Load configuration from this file instead of the default locations.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            eprint!("{e}");
            return ExitCode::from(1);
        }
    };

    if args.help {
        print!("{}", Args::command().render_help());
        return ExitCode::from(1);
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("sim: {e}");
            ExitCode::from(1)
        }
    }
}

fn run(args: Args) -> AppResult<()> {
    let mut config = load_config(args.config)?;
    if args.blocking_input {
        config.console.blocking_input = true;
    }

    logging::init(&config.logging)?;
    tui::run(&config)
}

/// An explicit `--config` must load; otherwise fall back to defaults.
fn load_config(path: Option<PathBuf>) -> AppResult<Config> {
    if let Some(path) = path {
        return Ok(ConfigLoader::load_from(path)?.into_config());
    }

    let config = match ConfigLoader::load() {
        Ok(loader) => loader.into_config(),
        Err(e) => {
            eprintln!("Warning: Failed to load config, using defaults: {e}");
            ConfigLoader::with_defaults().into_config()
        }
    };
    Ok(config)
}
