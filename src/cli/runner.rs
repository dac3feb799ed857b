use std::env;

use tracing::info;

use rasterslim::config::RunConfig;
use rasterslim::shrink_raster_to_path;

use super::args::CliArgs;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    // Ambient process state is read once; everything after this point works
    // off the explicit configuration.
    let cwd = env::current_dir()?;
    let config = RunConfig::resolve(&args.file, &args.output, args.kind, &args.overviews, &cwd)?;

    shrink_raster_to_path(&config)?;

    info!(
        "Successfully shrunk: {:?} -> {:?}",
        config.source, config.destination
    );
    Ok(())
}
