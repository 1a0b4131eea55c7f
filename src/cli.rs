//! Pieces shared by the binaries.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use log::{info, LevelFilter};

use crate::error::Result;

/// `-v` count to log level. Warnings and errors are always shown.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// `RUST_LOG`, when set, wins over the command line.
pub fn init_logging(verbosity: u8) {
    env_logger::Builder::new()
        .filter_level(level_for(verbosity))
        .parse_default_env()
        .init();
}

/// Reads `path`, or all of stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            info!("Reading input file: {}", path.display());
            Ok(fs::read_to_string(path)?)
        }
        None => {
            info!("Reading input from stdin");
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
