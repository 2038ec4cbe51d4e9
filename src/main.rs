//! dragbox - A draggable, formattable text box for the terminal.
//!
//! # Usage
//!
//! ```bash
//! dragbox
//! dragbox --text "Hello" --font-family Georgia --bold
//! dragbox --font-size 24 --save
//! ```

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{Level, debug, warn};
use tracing_subscriber::EnvFilter;

use dragbox::app::App;
use dragbox::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    save_config_flags,
};
use dragbox::history::FontFamily;

/// A draggable, formattable text box with undo/redo
#[derive(Parser, Debug)]
#[command(name = "dragbox", version, about, long_about = None)]
struct Cli {
    /// Initial text
    #[arg(long)]
    text: Option<String>,

    /// Initial font size in points (minimum 8)
    #[arg(long, value_name = "N")]
    font_size: Option<u32>,

    /// Initial font family
    #[arg(long, value_name = "NAME")]
    font_family: Option<FontFamily>,

    /// Start bold
    #[arg(long)]
    bold: bool,

    /// Start italic
    #[arg(long)]
    italic: bool,

    /// Start underlined
    #[arg(long)]
    underline: bool,

    /// Initial box column
    #[arg(long, allow_negative_numbers = true)]
    x: Option<i32>,

    /// Initial box row
    #[arg(long, allow_negative_numbers = true)]
    y: Option<i32>,

    /// Write debug logs to a file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

impl From<&Cli> for ConfigFlags {
    fn from(cli: &Cli) -> Self {
        Self {
            text: cli.text.clone(),
            font_size: cli.font_size,
            font_family: cli.font_family,
            bold: cli.bold,
            italic: cli.italic,
            underline: cli.underline,
            x: cli.x,
            y: cli.y,
            log_file: cli.log_file.clone(),
            warnings: Vec::new(),
        }
    }
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::builder()
                        .with_default_directive(Level::DEBUG.into())
                        .from_env_lossy(),
                )
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::builder()
                        .with_default_directive(Level::WARN.into())
                        .from_env_lossy(),
                )
                .init();
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = ConfigFlags::from(&cli);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    init_logging(effective.log_file.as_ref())?;
    for warning in &effective.warnings {
        warn!("{warning}");
    }
    debug!(?effective, "config.effective");

    let app = App::new(effective.seed_snapshot())
        .with_position(effective.initial_position())
        .with_config_paths(
            Some(global_path),
            local_path.exists().then_some(local_path),
        )
        .with_startup_warnings(effective.warnings);

    app.run().context("Application error")
}
