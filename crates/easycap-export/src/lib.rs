//! Export module for easycap
//!
//! Turns a rendered captcha into bytes a browser understands.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use easycap_core::{
    error::{ExportError, Result},
    traits::Exporter,
};
use image::RgbImage;

pub mod jpeg;
pub mod png;

pub use jpeg::{JpegExporter, DEFAULT_JPEG_QUALITY};
pub use png::{encode_png, PngExporter};

/// Output formats easycap can encode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExportFormat {
    #[default]
    Png,
    Jpeg,
}

impl ExportFormat {
    /// An exporter for this format with default settings
    pub fn exporter(self) -> Box<dyn Exporter> {
        match self {
            ExportFormat::Png => Box::new(PngExporter::new()),
            ExportFormat::Jpeg => Box::new(JpegExporter::new()),
        }
    }

    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpeg",
        })
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(ExportFormat::Png),
            "jpeg" | "jpg" => Ok(ExportFormat::Jpeg),
            other => Err(ExportError::FormatNotSupported(other.to_string())),
        }
    }
}

/// Encode `image` with `exporter` and write it to `path`
pub fn write_to_file(image: &RgbImage, exporter: &dyn Exporter, path: &Path) -> Result<()> {
    let bytes = exporter.export(image)?;
    std::fs::write(path, &bytes)?;
    log::debug!(
        "Wrote {} bytes of {} to {}",
        bytes.len(),
        exporter.mime_type(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!("PNG".parse::<ExportFormat>().unwrap(), ExportFormat::Png);
        assert_eq!("jpg".parse::<ExportFormat>().unwrap(), ExportFormat::Jpeg);
        assert!(matches!(
            "gif".parse::<ExportFormat>(),
            Err(ExportError::FormatNotSupported(_))
        ));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ExportFormat::from_path(Path::new("out/captcha.JPEG")),
            Some(ExportFormat::Jpeg)
        );
        assert_eq!(ExportFormat::from_path(Path::new("captcha")), None);
    }

    #[test]
    fn test_exporters_report_their_mime_types() {
        assert_eq!(ExportFormat::Png.exporter().mime_type(), "image/png");
        assert_eq!(ExportFormat::Jpeg.exporter().mime_type(), "image/jpeg");
    }

    #[test]
    fn test_write_to_file() {
        let path = std::env::temp_dir().join(format!("easycap_export_{}.png", std::process::id()));
        let image = RgbImage::new(4, 4);
        write_to_file(&image, &PngExporter::new(), &path).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert_eq!(&written[1..4], b"PNG");
        let _ = std::fs::remove_file(&path);
    }
}
