//! JPEG export format

use image::{ImageEncoder, RgbImage};
use easycap_core::{
    error::{ExportError, Result},
    traits::Exporter,
};

/// Quality used when none is given
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Lossy JPEG exporter; smaller files for HTTP responses
#[derive(Debug, Clone, Copy)]
pub struct JpegExporter {
    quality: u8,
}

impl JpegExporter {
    pub fn new() -> Self {
        Self::with_quality(DEFAULT_JPEG_QUALITY)
    }

    /// `quality` is clamped to 1..=100
    pub fn with_quality(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100),
        }
    }

    pub fn quality(&self) -> u8 {
        self.quality
    }
}

impl Default for JpegExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for JpegExporter {
    fn name(&self) -> &'static str {
        "jpeg"
    }

    fn export(&self, image: &RgbImage) -> Result<Vec<u8>> {
        let mut jpeg_data = Vec::new();
        image::codecs::jpeg::JpegEncoder::new_with_quality(&mut jpeg_data, self.quality)
            .write_image(
                image.as_raw(),
                image.width(),
                image.height(),
                image::ExtendedColorType::Rgb8,
            )
            .map_err(|e| ExportError::EncodingFailed(format!("JPEG encoding failed: {}", e)))?;

        Ok(jpeg_data)
    }

    fn extension(&self) -> &'static str {
        "jpg"
    }

    fn mime_type(&self) -> &'static str {
        "image/jpeg"
    }
}
