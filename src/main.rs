//! mailedit - a terminal editor for mail template documents.
//!
//! # Usage
//!
//! ```bash
//! mailedit
//! mailedit cover-letter.txt follow-up.txt
//! mailedit --no-preview --sidebar-width 30 --save
//! ```

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mailedit::app::App;
use mailedit::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_flag_tokens, save_config_flags,
};

/// A terminal editor for mail template documents
#[derive(Parser, Debug)]
#[command(name = "mailedit", version, about, long_about = None)]
struct Cli {
    /// Text files to upload as documents at startup
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Hide the preview pane
    #[arg(long)]
    no_preview: bool,

    /// Sidebar width as a percentage of the terminal
    #[arg(long, value_name = "PERCENT")]
    sidebar_width: Option<u16>,

    /// Write logs to this file (the terminal is busy with the editor)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        // Raw-mode terminal output would corrupt the screen.
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::sink)
            .init(),
    }
    Ok(())
}

fn main() -> Result<()> {
    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

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

    init_logging(effective.log_file.as_deref())?;
    tracing::debug!(?effective, "effective config");

    let mut app = App::new()
        .with_initial_files(cli.files)
        .with_preview_visible(!effective.no_preview);
    if let Some(width) = effective.sidebar_width {
        app = app.with_sidebar_width(width);
    }

    app.run().context("Application error")
}
