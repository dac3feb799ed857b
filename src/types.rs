//! Shared types and enums used across rasterslim.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
#[value(rename_all = "UPPER")]
pub enum OutputFormat {
    TIFF,
    JPEG, // Lossy
}

impl OutputFormat {
    /// GDAL `COMPRESS` creation-option value for this kind.
    pub fn compression(self) -> &'static str {
        match self {
            OutputFormat::TIFF => "LZW",
            OutputFormat::JPEG => "JPEG",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::TIFF => write!(f, "TIFF"),
            OutputFormat::JPEG => write!(f, "JPEG"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compression_matches_kind() {
        assert_eq!(OutputFormat::TIFF.compression(), "LZW");
        assert_eq!(OutputFormat::JPEG.compression(), "JPEG");
    }
}
