//! Validated run configuration, suitable for config files and presets.
//!
//! `RunConfig::resolve` is the single gate between raw user input and the
//! GDAL invocations: nothing downstream re-checks paths or levels, and no
//! downstream code consults ambient process state (the working directory is
//! captured once by the caller and passed in).
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::OutputFormat;

/// Default overview decimation factors when none are given.
pub const DEFAULT_OVERVIEWS: &str = "2 4 8 16 32";

/// Configuration for a single shrink run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Absolute path to an existing source raster.
    pub source: PathBuf,
    /// Absolute destination path; its parent directory exists after `resolve`.
    pub destination: PathBuf,
    pub format: OutputFormat,
    /// Decimation factors, each > 1, in the order they will be passed on.
    pub overview_levels: Vec<u32>,
}

impl RunConfig {
    /// Validate raw inputs into a normalized configuration.
    ///
    /// Fails fast, in order: source must be an existing regular file, the
    /// overview string must parse, and only then is the destination's parent
    /// directory created on disk. Any failure means no external command has
    /// run and no directory was created for the output.
    pub fn resolve(
        source: &Path,
        destination: &Path,
        format: OutputFormat,
        overviews: &str,
        cwd: &Path,
    ) -> Result<Self> {
        let source = absolutize(source, cwd);
        if !source.is_file() {
            return Err(Error::MissingSource { path: source });
        }

        let overview_levels = parse_overview_levels(overviews)?;

        let destination = absolutize(destination, cwd);
        if let Some(dir) = destination.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir).map_err(|e| Error::CreateOutputDir {
                    dir: dir.to_path_buf(),
                    source: e,
                })?;
            }
        }

        Ok(Self {
            source,
            destination,
            format,
            overview_levels,
        })
    }
}

fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Parse whitespace-separated decimation factors. Every token must be an
/// integer strictly greater than 1, and at least one level is required.
/// Ordering and duplicates are passed through untouched; gdaladdo owns
/// those semantics.
pub fn parse_overview_levels(s: &str) -> Result<Vec<u32>> {
    let levels: Vec<u32> = s
        .split_whitespace()
        .map(|token| match token.parse::<u32>() {
            Ok(level) if level > 1 => Ok(level),
            _ => Err(Error::InvalidOverviewLevel {
                token: token.to_string(),
            }),
        })
        .collect::<Result<_>>()?;
    if levels.is_empty() {
        return Err(Error::EmptyOverviewLevels);
    }
    Ok(levels)
}
