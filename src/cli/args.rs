use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use rasterslim::DEFAULT_OVERVIEWS;
use rasterslim::types::OutputFormat;

#[derive(Parser)]
#[command(
    name = "rasterslim",
    version,
    about = "Shrink rasters into tiled 8-bit compressed GeoTIFFs with overview pyramids"
)]
pub struct CliArgs {
    /// Source raster path
    #[arg(short, long)]
    pub file: PathBuf,

    /// Destination raster path
    #[arg(short, long)]
    pub output: PathBuf,

    /// Output kind: TIFF (LZW, lossless) or JPEG (lossy)
    #[arg(short = 't', long = "type", value_enum, ignore_case = true, default_value_t = OutputFormat::TIFF)]
    pub kind: OutputFormat,

    /// Overview decimation factors, space-separated integers > 1
    #[arg(long, alias = "ov", default_value = DEFAULT_OVERVIEWS)]
    pub overviews: String,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

/// Rewrite the exact argv token `-ov` to `--overviews` before clap sees it.
///
/// clap short flags are single characters, so `-ov` would otherwise parse
/// as `-o` with the attached value `v` and hijack the output path.
pub fn normalize<I, T>(argv: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    argv.into_iter()
        .map(Into::into)
        .map(|arg| {
            if arg == "-ov" {
                OsString::from("--overviews")
            } else {
                arg
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_tiff_and_standard_overviews() {
        let args =
            CliArgs::try_parse_from(["rasterslim", "-f", "big.tif", "-o", "small.tif"]).unwrap();
        assert_eq!(args.kind, OutputFormat::TIFF);
        assert_eq!(args.overviews, "2 4 8 16 32");
        assert!(!args.log);
    }

    #[test]
    fn accepts_type_and_overview_overrides() {
        let args = CliArgs::try_parse_from([
            "rasterslim",
            "-f",
            "big.tif",
            "-t",
            "JPEG",
            "--ov",
            "2 4 8",
            "-o",
            "small.tif",
        ])
        .unwrap();
        assert_eq!(args.kind, OutputFormat::JPEG);
        assert_eq!(args.overviews, "2 4 8");
    }

    #[test]
    fn type_is_case_insensitive() {
        let args = CliArgs::try_parse_from([
            "rasterslim",
            "-f",
            "big.tif",
            "-o",
            "small.tif",
            "-t",
            "jpeg",
        ])
        .unwrap();
        assert_eq!(args.kind, OutputFormat::JPEG);
    }

    #[test]
    fn short_ov_flag_selects_overviews_not_output() {
        let args = CliArgs::try_parse_from(normalize([
            "rasterslim",
            "-f",
            "big.tif",
            "-t",
            "JPEG",
            "-ov",
            "2 4 8",
            "-o",
            "small.tif",
        ]))
        .unwrap();
        assert_eq!(args.kind, OutputFormat::JPEG);
        assert_eq!(args.overviews, "2 4 8");
        assert_eq!(args.output, PathBuf::from("small.tif"));
    }

    #[test]
    fn normalize_leaves_other_tokens_untouched() {
        let argv = normalize(["rasterslim", "-f", "big.tif", "-o", "small.tif"]);
        assert_eq!(
            argv,
            vec![
                OsString::from("rasterslim"),
                OsString::from("-f"),
                OsString::from("big.tif"),
                OsString::from("-o"),
                OsString::from("small.tif"),
            ]
        );
    }

    #[test]
    fn source_and_output_are_required() {
        assert!(CliArgs::try_parse_from(["rasterslim", "-o", "small.tif"]).is_err());
        assert!(CliArgs::try_parse_from(["rasterslim", "-f", "big.tif"]).is_err());
    }
}
