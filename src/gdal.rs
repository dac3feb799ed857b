//! Construction and invocation of the external GDAL commands.
//!
//! The conversion step is a `gdal_translate` call producing a tiled, 8-bit,
//! BigTIFF-capable GeoTIFF; the overview step is a `gdaladdo` call embedding
//! averaged pyramids in place. Arguments are always passed as an array to
//! the child process, never through a shell, so paths containing spaces or
//! quoting characters survive untouched.
use std::ffi::OsString;
use std::process::Command;

use tracing::debug;

use crate::config::RunConfig;
use crate::error::{Error, Result};

pub const TRANSLATE_TOOL: &str = "gdal_translate";
pub const OVERVIEW_TOOL: &str = "gdaladdo";

/// Argument vector for the conversion step. Both output kinds request an
/// 8-bit tiled BigTIFF container; only the compression codec differs.
pub fn translate_args(config: &RunConfig) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        "-ot".into(),
        "Byte".into(),
        "-of".into(),
        "GTiff".into(),
        "-co".into(),
        format!("COMPRESS={}", config.format.compression()).into(),
        "-co".into(),
        "TILED=YES".into(),
        "-co".into(),
        "BIGTIFF=YES".into(),
    ];
    args.push(config.source.clone().into_os_string());
    args.push(config.destination.clone().into_os_string());
    args
}

/// Argument vector for the overview step: averaging resampling, the target
/// file, then the decimation factors in the order they were given.
pub fn overview_args(config: &RunConfig) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["-r".into(), "average".into()];
    args.push(config.destination.clone().into_os_string());
    args.extend(
        config
            .overview_levels
            .iter()
            .map(|level| level.to_string().into()),
    );
    args
}

/// Convert the source raster into the compressed 8-bit destination file.
pub fn run_translate(config: &RunConfig) -> Result<()> {
    run_tool(TRANSLATE_TOOL, &translate_args(config))
}

/// Embed overview pyramids into the destination file produced by
/// [`run_translate`].
pub fn run_overviews(config: &RunConfig) -> Result<()> {
    run_tool(OVERVIEW_TOOL, &overview_args(config))
}

fn run_tool(tool: &'static str, args: &[OsString]) -> Result<()> {
    debug!("Running {} {:?}", tool, args);
    let status = Command::new(tool)
        .args(args)
        .status()
        .map_err(|e| Error::CommandLaunch { tool, source: e })?;
    if !status.success() {
        return Err(Error::CommandFailed { tool, status });
    }
    Ok(())
}
