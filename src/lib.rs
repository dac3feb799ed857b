#![doc = r#"
rasterslim — shrink large geospatial rasters with the GDAL command-line tools.

Large rasters (satellite scenes, aerial mosaics) are reduced to a fraction of
their size by downsampling to 8-bit depth, compressing with LZW (lossless) or
JPEG (lossy), and embedding multi-resolution overview pyramids for fast
rendering at reduced zoom. All raster work is delegated to the external GDAL
binaries: rasterslim validates inputs, builds a `gdal_translate` invocation
and a `gdaladdo` invocation with the correct options, and sequences them.

Requirements
------------
- `gdal_translate` and `gdaladdo` available on `PATH` at runtime.
- Rust 2024 edition toolchain.

Quick start
-----------
```rust,no_run
use std::env;
use std::path::Path;
use rasterslim::{shrink_raster_to_path, OutputFormat, RunConfig, DEFAULT_OVERVIEWS};

fn main() -> rasterslim::Result<()> {
    let cwd = env::current_dir()?;
    let config = RunConfig::resolve(
        Path::new("/data/big.tif"),
        Path::new("/out/small.tif"),
        OutputFormat::TIFF,
        DEFAULT_OVERVIEWS,
        &cwd,
    )?;
    shrink_raster_to_path(&config)
}
```

Error handling
--------------
All public functions return [`Result`]; match on [`Error`] to distinguish
validation failures from external-command failures. Every error is terminal:
there is no retry and no cleanup of partial output.

Useful modules
--------------
- [`api`] — high-level entrypoint.
- [`config`] — validated run configuration.
- [`gdal`] — external-command construction and invocation.
- [`types`] — shared enums ([`OutputFormat`]).
- [`error`] — crate-level [`Error`] and [`Result`].
"#]

pub mod api;
pub mod config;
pub mod error;
pub mod gdal;
pub mod types;

// Curated public API surface
pub use api::shrink_raster_to_path;
pub use config::{DEFAULT_OVERVIEWS, RunConfig};
pub use error::{Error, Result};
pub use types::OutputFormat;
