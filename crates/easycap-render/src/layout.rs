//! Left-to-right glyph layout on a solid background
//!
//! Padding is drawn once per captcha and reused for every gap, so the
//! canvas is exactly `sum(widths) + padding * (n - 1)` wide and as tall
//! as the tallest glyph. Glyphs are top aligned.

use std::ops::Range;

use image::{RgbImage, RgbaImage};
use rand::Rng;

use easycap_core::{
    error::{RenderError, Result},
    Color,
};

use crate::background::make_background;

/// Gap between neighbouring glyphs, in pixels
pub const PADDING_RANGE: Range<u32> = 10..15;

/// One uniform draw from [`PADDING_RANGE`]
pub fn random_padding<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.random_range(PADDING_RANGE)
}

/// Canvas dimensions for `glyphs` separated by `padding`
pub fn canvas_size(glyphs: &[RgbaImage], padding: u32) -> Result<(u32, u32)> {
    if glyphs.is_empty() {
        return Err(RenderError::EmptyLayout.into());
    }

    let gaps = glyphs.len() as u32 - 1;
    let width = glyphs
        .iter()
        .map(RgbaImage::width)
        .sum::<u32>()
        .saturating_add(padding.saturating_mul(gaps));
    let height = glyphs.iter().map(RgbaImage::height).max().unwrap_or(0);

    Ok((width, height))
}

/// Lay out `glyphs` with a freshly drawn padding
pub fn compose<R: Rng + ?Sized>(
    glyphs: &[RgbaImage],
    background: Option<Color>,
    rng: &mut R,
) -> Result<RgbImage> {
    let padding = random_padding(rng);
    compose_with_padding(glyphs, padding, background, rng)
}

/// Lay out `glyphs` with a known padding
pub fn compose_with_padding<R: Rng + ?Sized>(
    glyphs: &[RgbaImage],
    padding: u32,
    background: Option<Color>,
    rng: &mut R,
) -> Result<RgbImage> {
    let (width, height) = canvas_size(glyphs, padding)?;
    log::debug!(
        "Composing {} glyphs with padding {} into {}x{}",
        glyphs.len(),
        padding,
        width,
        height
    );

    let mut canvas = make_background(width, height, background, rng);
    let mut offset = 0u32;
    for glyph in glyphs {
        paste_with_alpha(&mut canvas, glyph, offset, 0);
        offset = offset.saturating_add(glyph.width()).saturating_add(padding);
    }

    Ok(canvas)
}

/// Paste `glyph` at (`x`, `y`) using its own alpha as the mask
///
/// Fully transparent pixels leave the canvas untouched; partial alpha
/// blends. Anything hanging off the canvas is dropped.
pub fn paste_with_alpha(canvas: &mut RgbImage, glyph: &RgbaImage, x: u32, y: u32) {
    for (gx, gy, src) in glyph.enumerate_pixels() {
        let alpha = src[3] as u32;
        if alpha == 0 {
            continue;
        }
        let (cx, cy) = (x.saturating_add(gx), y.saturating_add(gy));
        if cx >= canvas.width() || cy >= canvas.height() {
            continue;
        }

        let dst = canvas.get_pixel_mut(cx, cy);
        for channel in 0..3 {
            let fg = src[channel] as u32;
            let bg = dst[channel] as u32;
            dst[channel] = ((fg * alpha + bg * (255 - alpha) + 127) / 255) as u8;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, Rgba};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn solid(width: u32, height: u32, pixel: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba(pixel))
    }

    #[test]
    fn test_width_is_glyphs_plus_gaps() {
        let glyphs = vec![
            solid(20, 30, [0, 0, 0, 255]),
            solid(15, 40, [0, 0, 0, 255]),
            solid(25, 10, [0, 0, 0, 255]),
        ];
        assert_eq!(canvas_size(&glyphs, 12).expect("size"), (20 + 15 + 25 + 24, 40));
    }

    #[test]
    fn test_single_glyph_has_no_gap() {
        let glyphs = vec![solid(9, 11, [0, 0, 0, 255])];
        assert_eq!(canvas_size(&glyphs, 14).expect("size"), (9, 11));
    }

    #[test]
    fn test_empty_layout_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = compose(&[], Some(Color::white()), &mut rng).unwrap_err();
        assert!(err.to_string().contains("empty glyph sequence"));
    }

    #[test]
    fn test_random_padding_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            assert!(PADDING_RANGE.contains(&random_padding(&mut rng)));
        }
    }

    #[test]
    fn test_glyphs_land_at_cumulative_offsets() {
        let glyphs = vec![solid(3, 2, [255, 0, 0, 255]), solid(4, 2, [0, 0, 255, 255])];
        let mut rng = StdRng::seed_from_u64(0);
        let canvas =
            compose_with_padding(&glyphs, 10, Some(Color::white()), &mut rng).expect("compose");

        assert_eq!(canvas.dimensions(), (17, 2));
        assert_eq!(*canvas.get_pixel(0, 0), Rgb([255, 0, 0]));
        assert_eq!(*canvas.get_pixel(2, 1), Rgb([255, 0, 0]));
        assert_eq!(*canvas.get_pixel(3, 0), Rgb([255, 255, 255]));
        assert_eq!(*canvas.get_pixel(12, 0), Rgb([255, 255, 255]));
        assert_eq!(*canvas.get_pixel(13, 0), Rgb([0, 0, 255]));
        assert_eq!(*canvas.get_pixel(16, 1), Rgb([0, 0, 255]));
    }

    #[test]
    fn test_shorter_glyph_leaves_background_below() {
        let glyphs = vec![solid(2, 4, [0, 0, 0, 255]), solid(2, 1, [0, 0, 0, 255])];
        let mut rng = StdRng::seed_from_u64(0);
        let canvas =
            compose_with_padding(&glyphs, 10, Some(Color::white()), &mut rng).expect("compose");
        assert_eq!(*canvas.get_pixel(12, 0), Rgb([0, 0, 0]));
        assert_eq!(*canvas.get_pixel(12, 3), Rgb([255, 255, 255]));
    }

    #[test]
    fn test_alpha_mask_controls_paste() {
        let mut canvas = RgbImage::from_pixel(3, 1, Rgb([255, 255, 255]));
        let mut glyph = RgbaImage::new(3, 1);
        glyph.put_pixel(0, 0, Rgba([0, 0, 0, 0]));
        glyph.put_pixel(1, 0, Rgba([0, 0, 0, 128]));
        glyph.put_pixel(2, 0, Rgba([0, 0, 0, 255]));

        paste_with_alpha(&mut canvas, &glyph, 0, 0);

        assert_eq!(*canvas.get_pixel(0, 0), Rgb([255, 255, 255]));
        assert_eq!(*canvas.get_pixel(1, 0), Rgb([127, 127, 127]));
        assert_eq!(*canvas.get_pixel(2, 0), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_paste_clips_at_canvas_edge() {
        let mut canvas = RgbImage::from_pixel(2, 2, Rgb([255, 255, 255]));
        paste_with_alpha(&mut canvas, &solid(4, 4, [0, 0, 0, 255]), 1, 1);
        assert_eq!(*canvas.get_pixel(0, 0), Rgb([255, 255, 255]));
        assert_eq!(*canvas.get_pixel(1, 1), Rgb([0, 0, 0]));
    }
}
