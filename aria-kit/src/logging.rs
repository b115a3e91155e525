//! Logger setup.
//!
//! The widgets only talk to the `log` facade. Terminal hosts can't log to
//! stdout without corrupting the screen, so this installs a file logger.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{Config, WriteLogger};

use crate::error::LoggerError;

/// Install a `simplelog` file logger at the given level.
pub fn init_file_logger(path: impl AsRef<Path>, level: LevelFilter) -> Result<(), LoggerError> {
    let log_file = File::create(path)?;
    WriteLogger::init(level, Config::default(), log_file)?;
    Ok(())
}
