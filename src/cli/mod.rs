//! Command Line Interface (CLI) layer for rasterslim.
//!
//! This module defines argument parsing (`args`) and the orchestration
//! logic (`runner`) wiring user-provided options to the library pipeline.
//!
//! If you are embedding rasterslim into another application, prefer the
//! library API (`rasterslim::shrink_raster_to_path`) over the CLI code.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
