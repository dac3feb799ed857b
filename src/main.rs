//! rasterslim CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, run the
//! validate/convert/overview pipeline, and exit with appropriate status.
//! For programmatic use, prefer the library API
//! (`rasterslim::shrink_raster_to_path`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse_from(cli::args::normalize(std::env::args_os()));
    cli::run(args)
}
