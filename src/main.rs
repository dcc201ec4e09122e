mod core;
mod tui;

use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use crate::core::config::{self, LogLevel};

#[derive(Parser)]
#[command(name = "emodo", about = "Emoji todo list for the terminal")]
struct Args {
    /// Path to a config file (default: ~/.emodo/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log verbosity for emodo.log
    #[arg(short, long, value_enum)]
    log_level: Option<LogLevel>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let file_config = match config::load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            // Logging isn't up yet, so this goes to stderr too
            eprintln!("emodo: {e}, continuing with defaults");
            core::config::EmodoConfig::default()
        }
    };
    let resolved = config::resolve(&file_config, args.log_level);

    // Initialize file logger - writes to emodo.log in current directory.
    // The TUI owns the screen, so logs never go to stdout.
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if resolved.log_level != LogLevel::Off {
        match File::create("emodo.log") {
            Ok(log_file) => {
                let _ = WriteLogger::init(resolved.log_level.to_filter(), log_config, log_file);
            }
            Err(e) => eprintln!("emodo: could not create emodo.log: {e}"),
        }
    }

    log::info!("Emodo starting up ({} custom mappings)", resolved.mappings.len());

    tui::run(resolved)
}
