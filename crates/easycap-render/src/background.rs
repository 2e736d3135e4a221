//! Solid opaque canvases for glyphs to land on

use image::RgbImage;
use rand::Rng;

use easycap_core::Color;

/// A `width` x `height` canvas filled with `color`, or a random color
pub fn make_background<R: Rng + ?Sized>(
    width: u32,
    height: u32,
    color: Option<Color>,
    rng: &mut R,
) -> RgbImage {
    let color = Color::or_random(color, rng);
    RgbImage::from_pixel(width, height, color.to_rgb())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_explicit_color_fills_every_pixel() {
        let mut rng = StdRng::seed_from_u64(1);
        let canvas = make_background(12, 7, Some(Color::rgb(1, 2, 3)), &mut rng);
        assert_eq!(canvas.dimensions(), (12, 7));
        assert!(canvas.pixels().all(|p| p.0 == [1, 2, 3]));
    }

    #[test]
    fn test_random_color_is_uniform_across_canvas() {
        let mut rng = StdRng::seed_from_u64(2);
        let canvas = make_background(5, 5, None, &mut rng);
        let first = *canvas.get_pixel(0, 0);
        assert!(canvas.pixels().all(|p| *p == first));
    }
}
