//! Logging setup.
//!
//! The game owns the terminal (raw mode, alternate screen), so log records go
//! to a file instead of stderr. `RUST_LOG` works as usual; the default level
//! is `info`.

use std::fs::File;
use std::path::PathBuf;

use env_logger::{Env, Target};

/// Name of the log file created in the system temp directory.
pub const LOG_FILE_NAME: &str = "iso-rpg.log";

pub fn log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE_NAME)
}

/// Install the global logger. Returns the log file path on success.
///
/// Failure to create the file or a logger that is already installed leaves
/// logging disabled; the game runs either way.
pub fn init() -> Option<PathBuf> {
    let path = log_path();
    let file = File::create(&path).ok()?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .ok()?;
    Some(path)
}
