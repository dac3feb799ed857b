//! High-level library API: run the full shrink pipeline against a validated
//! [`RunConfig`]. Prefer this entrypoint over the low-level `gdal` module
//! when embedding rasterslim in another application.
use tracing::info;

use crate::config::RunConfig;
use crate::error::Result;
use crate::gdal::{run_overviews, run_translate};

/// Convert `config.source` into a tiled, 8-bit, compressed GeoTIFF at
/// `config.destination`, then embed averaged overview pyramids into it.
///
/// Stages run strictly in order; the overview step never starts unless the
/// conversion succeeded. The first failure aborts the run with no retry and
/// no cleanup of partially written output.
pub fn shrink_raster_to_path(config: &RunConfig) -> Result<()> {
    info!(
        "Converting {:?} -> {:?} ({} compression, 8-bit, tiled)",
        config.source,
        config.destination,
        config.format.compression()
    );
    run_translate(config)?;

    info!(
        "Building overviews {:?} with average resampling",
        config.overview_levels
    );
    run_overviews(config)?;

    Ok(())
}
