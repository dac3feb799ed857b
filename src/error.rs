//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Covers input validation (source existence, overview levels, output directory)
//! and external GDAL command failures.
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Source raster not found: {}", path.display())]
    MissingSource { path: PathBuf },

    #[error("Invalid overview level: {token:?}. Levels must be integers greater than 1")]
    InvalidOverviewLevel { token: String },

    #[error("Overview list is empty; provide at least one level greater than 1")]
    EmptyOverviewLevels,

    #[error("Cannot create output directory {}: {source}", dir.display())]
    CreateOutputDir {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to launch {tool}: {source}")]
    CommandLaunch {
        tool: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} exited with {status}")]
    CommandFailed {
        tool: &'static str,
        status: ExitStatus,
    },
}
