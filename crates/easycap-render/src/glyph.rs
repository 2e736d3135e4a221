//! One character in, one rotated and cropped RGBA glyph out
//!
//! Each character gets a transparent canvas twice its natural size so a
//! rotation has room to swing, is drawn in the middle of it, turned, and
//! then trimmed back to the pixels that actually carry ink.

use image::{imageops, Rgba, RgbaImage};
use kurbo::BezPath;
use rand::Rng;
use skrifa::instance::{LocationRef, Size};
use skrifa::outline::DrawSettings;
use skrifa::MetadataProvider;
use tiny_skia::{FillRule, FilterQuality, Paint, Pixmap, PixmapPaint, Transform};

use easycap_core::{
    error::{RenderError, Result},
    Color,
};
use easycap_fontdb::Font;

use crate::pen::{to_skia_path, PathPen};

/// Rasterizes single characters into standalone glyph images
#[derive(Debug, Clone)]
pub struct GlyphRenderer {
    /// Maximum canvas dimension to prevent memory exhaustion
    max_size: u32,
}

impl Default for GlyphRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl GlyphRenderer {
    pub fn new() -> Self {
        Self { max_size: 8192 }
    }

    /// Caps the doubled canvas at `max_size` pixels per side
    pub fn with_max_size(max_size: u32) -> Self {
        Self { max_size }
    }

    /// Draw, rotate and crop one character
    ///
    /// `color` and `rotation` fall back to a random fill and a random
    /// angle in [0, 360) drawn from `rng`.
    pub fn render<R: Rng + ?Sized>(
        &self,
        font: &Font,
        ch: char,
        color: Option<Color>,
        rotation: Option<f32>,
        rng: &mut R,
    ) -> Result<RgbaImage> {
        let color = Color::or_random(color, rng);
        let angle = rotation.unwrap_or_else(|| rng.random_range(0.0..360.0));

        let canvas = self.draw_char(font, ch, color)?;
        let rotated = rotate(&canvas, angle)?;
        let glyph = crop_to_content(pixmap_to_image(&rotated));

        log::debug!(
            "Glyph {:?}: canvas {}x{}, angle {:.1}, cropped {}x{}",
            ch,
            canvas.width(),
            canvas.height(),
            angle,
            glyph.width(),
            glyph.height()
        );

        Ok(glyph)
    }

    /// Draws `ch` centered on a transparent canvas exactly twice its
    /// natural width and height
    pub fn draw_char(&self, font: &Font, ch: char, color: Color) -> Result<Pixmap> {
        let metrics = font.measure(ch)?;
        let (width, height) = (metrics.width(), metrics.height());
        let canvas_width = width.saturating_mul(2);
        let canvas_height = height.saturating_mul(2);

        if canvas_width > self.max_size || canvas_height > self.max_size {
            return Err(RenderError::InvalidDimensions {
                width: canvas_width,
                height: canvas_height,
            }
            .into());
        }

        let mut pixmap =
            Pixmap::new(canvas_width, canvas_height).ok_or(RenderError::PixmapCreationFailed {
                width: canvas_width,
                height: canvas_height,
            })?;

        let Some(path) = glyph_path(font, metrics.glyph_id)? else {
            log::debug!("Glyph {:?} has no outline, leaving canvas blank", ch);
            return Ok(pixmap);
        };

        let mut paint = Paint::default();
        paint.set_color_rgba8(color.r, color.g, color.b, 255);
        paint.anti_alias = true;

        // Half the padding on each side; fonts are y-up, pixmaps y-down
        let offset_x = (canvas_width - width) as f32 / 2.0;
        let offset_y = (canvas_height - height) as f32 / 2.0;
        let baseline = offset_y + metrics.ascent;
        let transform = Transform::from_scale(1.0, -1.0).post_translate(offset_x, baseline);

        pixmap.fill_path(&path, &paint, FillRule::Winding, transform, None);
        Ok(pixmap)
    }
}

/// Extracts a glyph outline at the font's pixel size
fn glyph_path(font: &Font, glyph_id: u32) -> Result<Option<tiny_skia::Path>> {
    let font_ref = font.font_ref()?;
    let outlines = font_ref.outline_glyphs();
    let Some(glyph) = outlines.get(skrifa::GlyphId::new(glyph_id)) else {
        return Ok(None);
    };

    let mut path = BezPath::new();
    let settings = DrawSettings::unhinted(Size::new(font.size()), LocationRef::default());
    glyph
        .draw(settings, &mut PathPen { path: &mut path })
        .map_err(|_| RenderError::OutlineExtractionFailed(glyph_id))?;

    Ok(to_skia_path(&path))
}

/// Rounds a rotated extent up, ignoring float noise from sin/cos
fn span(extent: f32) -> u32 {
    ((extent - 1e-3).ceil() as u32).max(1)
}

/// Turns `src` counter-clockwise by `degrees` about its center
///
/// The result grows to the rotated bounding box, so nothing is clipped;
/// uncovered pixels stay transparent.
pub fn rotate(src: &Pixmap, degrees: f32) -> Result<Pixmap> {
    if !degrees.is_finite() {
        return Err(RenderError::InvalidDimensions {
            width: src.width(),
            height: src.height(),
        }
        .into());
    }
    if degrees.rem_euclid(360.0) == 0.0 {
        return Ok(src.clone());
    }

    let (sin, cos) = degrees.to_radians().sin_cos();
    let (sin, cos) = (sin.abs(), cos.abs());
    let (width, height) = (src.width() as f32, src.height() as f32);
    let out_width = span(width * cos + height * sin);
    let out_height = span(width * sin + height * cos);

    let mut out = Pixmap::new(out_width, out_height).ok_or(RenderError::PixmapCreationFailed {
        width: out_width,
        height: out_height,
    })?;

    // Screen space is y-down, so a negative angle turns counter-clockwise
    let transform = Transform::from_translate(-width / 2.0, -height / 2.0)
        .post_concat(Transform::from_rotate(-degrees))
        .post_translate(out_width as f32 / 2.0, out_height as f32 / 2.0);

    let paint = PixmapPaint {
        quality: FilterQuality::Bilinear,
        ..PixmapPaint::default()
    };
    out.draw_pixmap(0, 0, src.as_ref(), &paint, transform, None);

    Ok(out)
}

/// Converts tiny-skia's premultiplied pixels into straight RGBA
pub fn pixmap_to_image(pixmap: &Pixmap) -> RgbaImage {
    let mut image = RgbaImage::new(pixmap.width(), pixmap.height());
    for (dst, src) in image.pixels_mut().zip(pixmap.pixels()) {
        let color = src.demultiply();
        *dst = Rgba([color.red(), color.green(), color.blue(), color.alpha()]);
    }
    image
}

/// Smallest rectangle holding every pixel with non-zero alpha, as
/// `(x, y, width, height)`
pub fn content_bounds(image: &RgbaImage) -> Option<(u32, u32, u32, u32)> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel[3] == 0 {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }
    bounds.map(|(x0, y0, x1, y1)| (x0, y0, x1 - x0 + 1, y1 - y0 + 1))
}

/// Trims to [`content_bounds`]; a fully transparent image is kept whole
pub fn crop_to_content(image: RgbaImage) -> RgbaImage {
    match content_bounds(&image) {
        Some((x, y, width, height)) => imageops::crop_imm(&image, x, y, width, height).to_image(),
        None => image,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiny_skia::Rect;

    fn filled(width: u32, height: u32, rect: Rect) -> Pixmap {
        let mut pixmap = Pixmap::new(width, height).expect("pixmap");
        let mut paint = Paint::default();
        paint.set_color_rgba8(200, 10, 10, 255);
        pixmap.fill_rect(rect, &paint, Transform::identity(), None);
        pixmap
    }

    #[test]
    fn test_rotate_multiple_of_full_turn_is_identity() {
        let src = filled(10, 4, Rect::from_xywh(0.0, 0.0, 10.0, 4.0).expect("rect"));
        for angle in [0.0, 360.0, -720.0] {
            let out = rotate(&src, angle).expect("rotate");
            assert_eq!(out.width(), 10);
            assert_eq!(out.height(), 4);
            assert_eq!(out.data(), src.data());
        }
    }

    #[test]
    fn test_rotate_quarter_turn_swaps_dimensions() {
        let src = filled(10, 4, Rect::from_xywh(0.0, 0.0, 10.0, 4.0).expect("rect"));
        let out = rotate(&src, 90.0).expect("rotate");
        assert_eq!((out.width(), out.height()), (4, 10));
    }

    #[test]
    fn test_rotate_expands_instead_of_clipping() {
        let src = filled(20, 20, Rect::from_xywh(0.0, 0.0, 20.0, 20.0).expect("rect"));
        let out = rotate(&src, 45.0).expect("rotate");
        assert!(out.width() >= 28 && out.width() <= 29);
        assert_eq!(out.width(), out.height());

        // Corners of the expanded canvas stay transparent
        let image = pixmap_to_image(&out);
        assert_eq!(image.get_pixel(0, 0)[3], 0);
        assert_eq!(image.get_pixel(out.width() - 1, out.height() - 1)[3], 0);
    }

    #[test]
    fn test_rotate_rejects_non_finite_angle() {
        let src = filled(4, 4, Rect::from_xywh(0.0, 0.0, 4.0, 4.0).expect("rect"));
        assert!(rotate(&src, f32::NAN).is_err());
    }

    #[test]
    fn test_crop_to_content_is_tight() {
        let src = filled(20, 20, Rect::from_xywh(5.0, 3.0, 4.0, 6.0).expect("rect"));
        let image = pixmap_to_image(&src);
        assert_eq!(content_bounds(&image), Some((5, 3, 4, 6)));

        let cropped = crop_to_content(image);
        assert_eq!(cropped.dimensions(), (4, 6));
        assert_eq!(*cropped.get_pixel(0, 0), Rgba([200, 10, 10, 255]));
    }

    #[test]
    fn test_crop_keeps_blank_image() {
        let blank = RgbaImage::new(7, 5);
        assert_eq!(content_bounds(&blank), None);
        assert_eq!(crop_to_content(blank).dimensions(), (7, 5));
    }
}
