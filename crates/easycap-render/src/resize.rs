//! Resampling the composed canvas

use image::imageops::{self, FilterType};
use image::RgbImage;
use rand::Rng;

use easycap_core::{
    error::{RenderError, Result},
    ImageSize,
};

/// Lanczos windowed sinc: antialiased, never nearest-neighbour
pub const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

/// Resample `image` to exactly `size`
pub fn resize(image: &RgbImage, size: ImageSize) -> Result<RgbImage> {
    if size.width == 0 || size.height == 0 {
        return Err(RenderError::InvalidDimensions {
            width: size.width,
            height: size.height,
        }
        .into());
    }
    if image.dimensions() == (size.width, size.height) {
        return Ok(image.clone());
    }

    log::debug!(
        "Resizing {}x{} canvas to {}",
        image.width(),
        image.height(),
        size
    );
    Ok(imageops::resize(image, size.width, size.height, RESAMPLE_FILTER))
}

/// Scale both sides by one ratio drawn from [0.5, 1.5)
pub fn random_resize<R: Rng + ?Sized>(image: &RgbImage, rng: &mut R) -> Result<RgbImage> {
    let ratio: f64 = rng.random_range(0.5..1.5);
    let width = ((image.width() as f64 * ratio).floor() as u32).max(1);
    let height = ((image.height() as f64 * ratio).floor() as u32).max(1);
    resize(image, ImageSize::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_resize_hits_exact_size() {
        let image = RgbImage::from_pixel(317, 61, Rgb([10, 20, 30]));
        let out = resize(&image, ImageSize::default()).expect("resize");
        assert_eq!(out.dimensions(), (100, 50));
    }

    #[test]
    fn test_resize_keeps_flat_color() {
        let image = RgbImage::from_pixel(40, 40, Rgb([200, 100, 50]));
        let out = resize(&image, ImageSize::new(13, 9)).expect("resize");
        assert!(out.pixels().all(|p| p.0 == [200, 100, 50]));
    }

    #[test]
    fn test_resize_rejects_empty_target() {
        let image = RgbImage::new(4, 4);
        assert!(resize(&image, ImageSize::new(0, 10)).is_err());
    }

    #[test]
    fn test_random_resize_ratio_bounds() {
        let image = RgbImage::new(100, 40);
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..20 {
            let out = random_resize(&image, &mut rng).expect("resize");
            assert!((50..150).contains(&out.width()));
            assert!((20..60).contains(&out.height()));
        }
    }
}
