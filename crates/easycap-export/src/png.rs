//! PNG export format
//!
//! Encodes rendered captchas to PNG using the `image` crate.

use image::{ImageEncoder, RgbImage};
use easycap_core::{
    error::{ExportError, Result},
    traits::Exporter,
};

/// Encode an RGB canvas to PNG
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>> {
    let mut png_data = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new_with_quality(
        &mut png_data,
        image::codecs::png::CompressionType::Default,
        image::codecs::png::FilterType::Sub,
    );

    encoder
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| ExportError::EncodingFailed(format!("PNG encoding failed: {}", e)))?;

    Ok(png_data)
}

/// PNG exporter for rendered captchas
///
/// # Examples
///
/// ```
/// use easycap_export::PngExporter;
/// let exporter = PngExporter::new();
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PngExporter;

impl PngExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for PngExporter {
    fn name(&self) -> &'static str {
        "png"
    }

    fn export(&self, image: &RgbImage) -> Result<Vec<u8>> {
        encode_png(image)
    }

    fn extension(&self) -> &'static str {
        "png"
    }

    fn mime_type(&self) -> &'static str {
        "image/png"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_png_exporter_creation() {
        let exporter = PngExporter::new();
        assert_eq!(exporter.name(), "png");
        assert_eq!(exporter.extension(), "png");
        assert_eq!(exporter.mime_type(), "image/png");
    }

    #[test]
    fn test_png_export_decodes_back() {
        let mut image = RgbImage::from_pixel(3, 2, Rgb([255, 255, 255]));
        image.put_pixel(1, 1, Rgb([10, 20, 30]));

        let png_data = PngExporter::new().export(&image).unwrap();

        // PNG should start with PNG magic bytes
        assert_eq!(&png_data[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);

        let decoded = image::load_from_memory(&png_data).unwrap().to_rgb8();
        assert_eq!(decoded, image);
    }
}
