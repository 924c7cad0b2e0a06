//! Logging initialization for the `portfolio` binary.
//!
//! File output goes to `./portfolio.log` in the current working directory.
//! Terminal output uses stderr so page output on stdout stays clean.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

pub const LOG_FILE: &str = "./portfolio.log";

/// HTTP stack crates, silenced unless `--verbose`.
const QUIET_CRATES: [&str; 4] = ["hyper", "hyper_util", "reqwest", "rustls"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogDestination {
    File,
    #[default]
    Terminal,
    Both,
}

/// Installs the global logger. `verbose` lowers the terminal threshold to debug.
///
/// The log file always records debug.
pub fn initialize(destination: LogDestination, verbose: bool) {
    let terminal_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if matches!(destination, LogDestination::Terminal | LogDestination::Both) {
        loggers.push(TermLogger::new(
            terminal_level,
            config(verbose),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }
    if matches!(destination, LogDestination::File | LogDestination::Both) {
        if let Some(file) = open_log_file(Path::new(LOG_FILE)) {
            loggers.push(WriteLogger::new(LevelFilter::Debug, config(verbose), file));
        }
    }
    if loggers.is_empty() {
        return;
    }
    let _ = CombinedLogger::init(loggers);
}

fn config(verbose: bool) -> Config {
    let mut builder = ConfigBuilder::new();
    builder
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error);
    if !verbose {
        for name in QUIET_CRATES {
            builder.add_filter_ignore_str(name);
        }
    }
    builder.build()
}

fn open_log_file(path: &Path) -> Option<File> {
    match File::create(path) {
        Ok(file) => Some(file),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", path, err);
            None
        }
    }
}
